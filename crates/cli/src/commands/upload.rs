//! upload command - Store local files in the bucket
//!
//! Each file is stored under its base name; directories in the argument are
//! not part of the key.

use std::path::{Path, PathBuf};

use bucket_core::{Error, ObjectRef, ObjectStore, Result, Session};
use clap::Args;
use tokio::fs::File;

/// Upload local files
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Local file(s) to upload
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Execute the upload command
pub async fn execute(args: &UploadArgs, store: &dyn ObjectStore, session: &Session) -> Result<()> {
    for path in &args.files {
        upload_file(store, &session.bucket, path).await?;
    }
    Ok(())
}

/// Upload one file, returning the object it was stored as
pub async fn upload_file(store: &dyn ObjectStore, bucket: &str, path: &Path) -> Result<ObjectRef> {
    let open_error = |source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).await.map_err(open_error)?;
    if file.metadata().await.map_err(open_error)?.is_dir() {
        return Err(open_error(std::io::ErrorKind::IsADirectory.into()));
    }

    let object = ObjectRef::for_upload(bucket, path)?;
    let content_type = content_type_for(path);

    store
        .put_object(&object, file, content_type.as_deref())
        .await?;

    tracing::info!(path = %path.display(), %object, "Uploaded");
    Ok(object)
}

/// Guess the Content-Type from the file extension
fn content_type_for(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
}
