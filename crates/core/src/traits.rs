//! ObjectStore trait definition
//!
//! This trait defines the storage operations the CLI needs. It keeps the
//! commands decoupled from the S3 SDK so they can run against a fake in tests.

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncWrite;

use crate::error::Result;
use crate::path::ObjectRef;

/// Trait for S3-compatible storage operations
///
/// Implementations classify lookup failures of `get_object` and
/// `delete_object` with [`crate::error::classify`]; failures of `put_object`
/// and `list_keys` are reported as [`crate::Error::Remote`] with the client's
/// text.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store the full contents of `body` under `object`, replacing any
    /// existing object.
    async fn put_object(
        &self,
        object: &ObjectRef,
        body: File,
        content_type: Option<&str>,
    ) -> Result<()>;

    /// Stream the contents of `object` into `dest`, returning the number of
    /// bytes written.
    async fn get_object(
        &self,
        object: &ObjectRef,
        dest: &mut (dyn AsyncWrite + Send + Unpin),
    ) -> Result<u64>;

    /// Remove `object`
    async fn delete_object(&self, object: &ObjectRef) -> Result<()>;

    /// Every key in `bucket`, in the order the service returns them
    async fn list_keys(&self, bucket: &str) -> Result<Vec<String>>;
}
