//! delete command - Remove objects from the bucket

use bucket_core::{ObjectRef, ObjectStore, Result, Session};
use clap::Args;

/// Delete objects
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Object key(s) to delete
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,
}

/// Execute the delete command
pub async fn execute(args: &DeleteArgs, store: &dyn ObjectStore, session: &Session) -> Result<()> {
    for key in &args.files {
        let object = ObjectRef::new(&session.bucket, key);
        store.delete_object(&object).await?;
        tracing::info!(%object, "Deleted");
    }
    Ok(())
}
