//! s3 - single-bucket object storage CLI
//!
//! Uploads, downloads, deletes and lists objects in the bucket named by
//! AWS_BUCKET, in the region named by AWS_REGION.

use bucket_cli::commands::{self, Cli};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => std::process::exit(commands::usage_error(&err).as_i32()),
    };

    init_tracing(cli.debug);

    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}

/// Logs go to stderr; stdout carries `list` output only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
