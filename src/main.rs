//! Binary entry point for conpipe-rs.
//!
//! Relays standard input to standard output through pipeline objects.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use conpipe_rs::cli::output::{OutputFormat, format_error};
use conpipe_rs::cli::{Cli, execute};
use conpipe_rs::{Error, WriteError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.format);

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // A closed output pipe (e.g. piped to `head`) is normal termination.
        Err(Error::Write(WriteError::BrokenPipe)) => ExitCode::SUCCESS,
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    println!("{error_output}");
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing on standard error, keeping standard output clean
/// for relayed data.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to init tracing: {e}"))
}
