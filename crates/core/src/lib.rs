//! bucket-core: Core library for the s3 bucket CLI
//!
//! This crate provides:
//! - The error type and classification of storage error codes
//! - Session configuration loaded from the environment
//! - Object references and upload key derivation
//! - ObjectStore trait for storage operations
//!
//! This crate is independent of any specific S3 SDK.

pub mod config;
pub mod error;
pub mod path;
pub mod traits;

pub use config::{BUCKET_VAR, REGION_VAR, Session};
pub use error::{Error, RemoteErrorKind, Result, classify};
pub use path::ObjectRef;
pub use traits::ObjectStore;
