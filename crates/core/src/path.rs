//! Remote object references
//!
//! An object is addressed by bucket and key. Uploads derive the key from the
//! local file's base name; downloads and deletes use the argument verbatim.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// A bucket + key pair identifying a stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    /// Bucket name
    pub bucket: String,
    /// Object key
    pub key: String,
}

impl ObjectRef {
    /// Create a new ObjectRef
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Reference for uploading `path`: the key is the file's base name.
    ///
    /// `./sub/dir/report.txt` becomes `report.txt`. A base name that is not
    /// valid UTF-8 is rejected rather than stored under a lossy key.
    pub fn for_upload(bucket: impl Into<String>, path: &Path) -> Result<Self> {
        let key = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?;
        Ok(Self::new(bucket, key))
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}
