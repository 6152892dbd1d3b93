//! Session configuration
//!
//! The region and bucket come from the environment, once, at startup. The
//! resulting [`Session`] is immutable and handed to every operation.

use crate::error::{Error, Result};

/// Environment variable holding the storage region
pub const REGION_VAR: &str = "AWS_REGION";

/// Environment variable holding the target bucket
pub const BUCKET_VAR: &str = "AWS_BUCKET";

/// Region and bucket for one run of the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub region: String,
    pub bucket: String,
}

impl Session {
    /// Load the session from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the session through an arbitrary variable lookup.
    ///
    /// Variables are checked region first, then bucket. An empty value
    /// counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(Error::MissingEnv(name))
        };

        let region = required(REGION_VAR)?;
        let bucket = required(BUCKET_VAR)?;
        tracing::debug!(%region, %bucket, "Loaded session from environment");

        Ok(Self { region, bucket })
    }
}
