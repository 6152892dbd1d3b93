//! list command - Print every key in the bucket
//!
//! Keys are printed one per line in the order the service returns them.

use std::io::Write;

use bucket_core::{ObjectStore, Result, Session};
use clap::Args;

/// List objects (takes no arguments)
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Execute the list command
pub async fn execute<W: Write>(store: &dyn ObjectStore, session: &Session, out: &mut W) -> Result<()> {
    let keys = store.list_keys(&session.bucket).await?;
    tracing::info!(bucket = %session.bucket, count = keys.len(), "Listed");

    for key in &keys {
        writeln!(out, "{key}")?;
    }
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::memory::MemoryStore;
    use super::*;

    fn session() -> Session {
        Session {
            region: "eu-west-1".to_string(),
            bucket: "b".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_empty_bucket_prints_nothing() {
        let store = MemoryStore::with_bucket("b");
        let mut out = Vec::new();

        execute(&store, &session(), &mut out).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_list_keeps_service_order() {
        let store = MemoryStore::with_bucket("b");
        store.insert("b", "zebra.txt", b"z");
        store.insert("b", "alpha.txt", b"a");
        store.insert("b", "photos/cat.png", b"c");

        let mut out = Vec::new();
        execute(&store, &session(), &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "zebra.txt\nalpha.txt\nphotos/cat.png\n"
        );
    }

    #[tokio::test]
    async fn test_list_failure_passes_through() {
        let store = MemoryStore::default();
        let mut out = Vec::new();

        let err = execute(&store, &session(), &mut out).await.unwrap_err();
        assert!(err.to_string().starts_with("list objects: "));
        assert!(out.is_empty());
    }
}
