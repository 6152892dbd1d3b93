//! Error types for bucket-core
//!
//! Provides a unified error type for every failure the CLI can report, plus
//! the classification of storage service error codes.

use std::path::PathBuf;

use thiserror::Error;

use crate::path::ObjectRef;

/// Result type alias for bucket-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bucket-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required environment variable is unset or empty
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),

    /// Local file could not be opened for reading
    #[error("open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Local file could not be created for writing
    #[error("create {}: {source}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path has no final component to use as an object key
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured bucket does not exist
    #[error("bucket not found")]
    BucketNotFound,

    /// The bucket exists but holds no object under the key
    #[error("{op} {bucket}/{key}: no such file")]
    KeyNotFound {
        op: &'static str,
        bucket: String,
        key: String,
    },

    /// Any other storage service failure, with the client's original text
    #[error("{0}")]
    Remote(String),
}

/// Category of a failed object lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    BucketNotFound,
    KeyNotFound,
    Other,
}

impl RemoteErrorKind {
    /// Error code S3 returns for a missing bucket
    pub const NO_SUCH_BUCKET: &'static str = "NoSuchBucket";

    /// Error code S3 returns for a missing key
    pub const NO_SUCH_KEY: &'static str = "NoSuchKey";

    /// Map a structured service error code onto a category.
    ///
    /// `None` means the failure carried no code (transport errors, timeouts).
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(Self::NO_SUCH_BUCKET) => Self::BucketNotFound,
            Some(Self::NO_SUCH_KEY) => Self::KeyNotFound,
            _ => Self::Other,
        }
    }
}

/// Build the error for a failed `op` ("download" or "delete") of `object`.
///
/// `message` is the storage client's own description and is kept verbatim
/// when the code is not one of the recognized lookup failures.
pub fn classify(
    op: &'static str,
    code: Option<&str>,
    object: &ObjectRef,
    message: impl Into<String>,
) -> Error {
    match RemoteErrorKind::from_code(code) {
        RemoteErrorKind::BucketNotFound => Error::BucketNotFound,
        RemoteErrorKind::KeyNotFound => Error::KeyNotFound {
            op,
            bucket: object.bucket.clone(),
            key: object.key.clone(),
        },
        RemoteErrorKind::Other => Error::Remote(message.into()),
    }
}
