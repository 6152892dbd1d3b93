//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from bucket-core.

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use bucket_core::{Error, ObjectRef, ObjectStore, Result, classify};

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client for `region`.
    ///
    /// Credentials are resolved lazily by the SDK's default provider chain.
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        Self {
            inner: aws_sdk_s3::Client::new(&config),
        }
    }
}

/// Classify a failed download or delete by its service error code
fn lookup_error<E, R>(err: SdkError<E, R>, op: &'static str, object: &ObjectRef) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err.as_service_error().and_then(|e| e.code());
    classify(op, code, object, DisplayErrorContext(&err).to_string())
}

/// Pass a failure through with a fixed prefix
fn passthrough_error<E>(prefix: &str, err: E) -> Error
where
    E: std::error::Error,
{
    Error::Remote(format!("{prefix}: {}", DisplayErrorContext(err)))
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn put_object(
        &self,
        object: &ObjectRef,
        body: File,
        content_type: Option<&str>,
    ) -> Result<()> {
        let body = ByteStream::read_from()
            .file(body)
            .build()
            .await
            .map_err(|e| passthrough_error("put object", e))?;

        let mut request = self
            .inner
            .put_object()
            .bucket(&object.bucket)
            .key(&object.key)
            .body(body);

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }

        tracing::debug!(%object, "PutObject");
        let response = request
            .send()
            .await
            .map_err(|e| passthrough_error("put object", e))?;

        if let Some(etag) = response.e_tag() {
            tracing::debug!(%object, etag = etag.trim_matches('"'), "Stored object");
        }

        Ok(())
    }

    async fn get_object(
        &self,
        object: &ObjectRef,
        dest: &mut (dyn AsyncWrite + Send + Unpin),
    ) -> Result<u64> {
        tracing::debug!(%object, "GetObject");
        let response = self
            .inner
            .get_object()
            .bucket(&object.bucket)
            .key(&object.key)
            .send()
            .await
            .map_err(|e| lookup_error(e, "download", object))?;

        let mut body = response.body;
        let mut written = 0u64;
        while let Some(chunk) = body
            .try_next()
            .await
            .map_err(|e| passthrough_error("read object body", e))?
        {
            dest.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        dest.flush().await?;

        Ok(written)
    }

    async fn delete_object(&self, object: &ObjectRef) -> Result<()> {
        tracing::debug!(%object, "DeleteObject");
        self.inner
            .delete_object()
            .bucket(&object.bucket)
            .key(&object.key)
            .send()
            .await
            .map_err(|e| lookup_error(e, "delete", object))?;

        Ok(())
    }

    async fn list_keys(&self, bucket: &str) -> Result<Vec<String>> {
        let mut pages = self
            .inner
            .list_objects_v2()
            .bucket(bucket)
            .into_paginator()
            .send();

        let mut keys = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| passthrough_error("list objects", e))?;
            tracing::debug!(bucket, count = page.contents().len(), "ListObjectsV2 page");
            keys.extend(
                page.contents()
                    .iter()
                    .filter_map(|object| object.key().map(str::to_owned)),
            );
        }

        Ok(keys)
    }
}
