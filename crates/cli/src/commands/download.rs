//! download command - Fetch objects into local files
//!
//! The argument is used both as the object key and as the local path.

use std::path::PathBuf;

use bucket_core::{Error, ObjectRef, ObjectStore, Result, Session};
use clap::Args;
use tokio::fs::File;

/// Download objects
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Object key(s) to download; each is written to the same local path
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,
}

/// Execute the download command
pub async fn execute(
    args: &DownloadArgs,
    store: &dyn ObjectStore,
    session: &Session,
) -> Result<()> {
    for name in &args.files {
        download_file(store, &session.bucket, name).await?;
    }
    Ok(())
}

/// Download the object keyed `name` into the local file `name`.
///
/// The local file is created before the object is requested and is left in
/// place if the request fails.
pub async fn download_file(store: &dyn ObjectStore, bucket: &str, name: &str) -> Result<u64> {
    let object = ObjectRef::new(bucket, name);
    let mut file = File::create(name).await.map_err(|source| Error::FileCreate {
        path: PathBuf::from(name),
        source,
    })?;

    let written = store.get_object(&object, &mut file).await?;

    tracing::info!(%object, bytes = written, "Downloaded");
    Ok(written)
}
