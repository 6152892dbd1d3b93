//! CLI command definitions and execution
//!
//! Each subcommand lives in its own module and exposes an `execute` function
//! taking its parsed arguments, the storage backend and the session.

use std::io::Write;

use bucket_core::{ObjectStore, Result, Session};
use bucket_s3::S3Client;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::exit_code::ExitCode;

pub mod delete;
pub mod download;
pub mod list;
pub mod upload;

#[cfg(test)]
mod memory;

/// Printed to standard error for any malformed invocation
pub const USAGE: &str = "usage: s3 [upload|download|delete] <file> [file ...] | s3 list";

/// s3 - upload, download, delete and list objects in one bucket
///
/// The bucket and its region are read from AWS_BUCKET and AWS_REGION.
/// Credentials come from the standard AWS provider chain.
#[derive(Parser, Debug)]
#[command(name = "s3")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload local files, keyed by their base name
    Upload(upload::UploadArgs),

    /// Download objects into local files of the same name
    Download(download::DownloadArgs),

    /// Delete objects
    Delete(delete::DeleteArgs),

    /// List every key in the bucket
    List(list::ListArgs),
}

impl Commands {
    /// Subcommand name, used to prefix failure messages
    pub const fn name(&self) -> &'static str {
        match self {
            Commands::Upload(_) => "upload",
            Commands::Download(_) => "download",
            Commands::Delete(_) => "delete",
            Commands::List(_) => "list",
        }
    }
}

/// Report an argument parsing failure and pick the exit code.
///
/// Help and version requests are printed as clap renders them. Anything
/// else prints the fixed usage line.
pub fn usage_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::Success
        }
        _ => {
            eprintln!("{USAGE}");
            ExitCode::GeneralError
        }
    }
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let session = match Session::from_env() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", failure_message(&cli.command, &e));
            return ExitCode::GeneralError;
        }
    };

    let client = S3Client::new(&session.region).await;
    let mut stdout = std::io::stdout();

    match run(&cli.command, &client, &session, &mut stdout).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{}", failure_message(&cli.command, &e));
            ExitCode::GeneralError
        }
    }
}

/// Dispatch `command` against `store`, stopping at the first failure
pub async fn run<W: Write>(
    command: &Commands,
    store: &dyn ObjectStore,
    session: &Session,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Upload(args) => upload::execute(args, store, session).await,
        Commands::Download(args) => download::execute(args, store, session).await,
        Commands::Delete(args) => delete::execute(args, store, session).await,
        Commands::List(_) => list::execute(store, session, out).await,
    }
}

/// Message printed for a failed command
pub fn failure_message(command: &Commands, err: &bucket_core::Error) -> String {
    format!("{}: {err}", command.name())
}
