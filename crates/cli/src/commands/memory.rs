//! In-memory ObjectStore used by the command tests
//!
//! Reports missing buckets and keys with the same error codes S3 uses, so the
//! commands see the same classified errors they would in production.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bucket_core::error::RemoteErrorKind;
use bucket_core::{Error, ObjectRef, ObjectStore, Result, classify};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Default)]
pub struct MemoryStore {
    buckets: Mutex<HashMap<String, Vec<(String, Vec<u8>)>>>,
    calls: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn with_bucket(bucket: &str) -> Self {
        let store = Self::default();
        store
            .buckets
            .lock()
            .unwrap()
            .insert(bucket.to_string(), Vec::new());
        store
    }

    pub fn insert(&self, bucket: &str, key: &str, data: &[u8]) {
        let mut buckets = self.buckets.lock().unwrap();
        let objects = buckets.entry(bucket.to_string()).or_default();
        objects.retain(|(k, _)| k != key);
        objects.push((key.to_string(), data.to_vec()));
    }

    pub fn object(&self, object: &ObjectRef) -> Option<Vec<u8>> {
        let buckets = self.buckets.lock().unwrap();
        buckets
            .get(&object.bucket)?
            .iter()
            .find(|(k, _)| *k == object.key)
            .map(|(_, data)| data.clone())
    }

    /// Operations performed so far, as "<op> <bucket>/<key>"
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &str, object: &ObjectRef) {
        self.calls.lock().unwrap().push(format!("{op} {object}"));
    }

    fn lookup(&self, object: &ObjectRef) -> Result<Vec<u8>> {
        let buckets = self.buckets.lock().unwrap();
        let objects = buckets.get(&object.bucket).ok_or_else(|| {
            classify(
                "download",
                Some(RemoteErrorKind::NO_SUCH_BUCKET),
                object,
                "NoSuchBucket: The specified bucket does not exist",
            )
        })?;
        objects
            .iter()
            .find(|(k, _)| *k == object.key)
            .map(|(_, data)| data.clone())
            .ok_or_else(|| {
                classify(
                    "download",
                    Some(RemoteErrorKind::NO_SUCH_KEY),
                    object,
                    "NoSuchKey: The specified key does not exist.",
                )
            })
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put_object(
        &self,
        object: &ObjectRef,
        mut body: File,
        _content_type: Option<&str>,
    ) -> Result<()> {
        self.record("put", object);
        let mut data = Vec::new();
        body.read_to_end(&mut data).await?;

        if !self.buckets.lock().unwrap().contains_key(&object.bucket) {
            return Err(Error::Remote(
                "put object: NoSuchBucket: The specified bucket does not exist".to_string(),
            ));
        }
        self.insert(&object.bucket, &object.key, &data);
        Ok(())
    }

    async fn get_object(
        &self,
        object: &ObjectRef,
        dest: &mut (dyn AsyncWrite + Send + Unpin),
    ) -> Result<u64> {
        self.record("get", object);
        let data = self.lookup(object)?;
        dest.write_all(&data).await?;
        dest.flush().await?;
        Ok(data.len() as u64)
    }

    async fn delete_object(&self, object: &ObjectRef) -> Result<()> {
        self.record("delete", object);
        let mut buckets = self.buckets.lock().unwrap();
        let objects = buckets.get_mut(&object.bucket).ok_or_else(|| {
            classify(
                "delete",
                Some(RemoteErrorKind::NO_SUCH_BUCKET),
                object,
                "NoSuchBucket: The specified bucket does not exist",
            )
        })?;
        // Deleting an absent key succeeds, as it does on S3.
        objects.retain(|(k, _)| *k != object.key);
        Ok(())
    }

    async fn list_keys(&self, bucket: &str) -> Result<Vec<String>> {
        let buckets = self.buckets.lock().unwrap();
        let objects = buckets.get(bucket).ok_or_else(|| {
            Error::Remote("list objects: NoSuchBucket: The specified bucket does not exist".into())
        })?;
        Ok(objects.iter().map(|(k, _)| k.clone()).collect())
    }
}
