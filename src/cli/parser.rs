//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::reader::DEFAULT_READ_COUNT;
use clap::Parser;

/// conpipe-rs: relay the process standard streams through pipeline objects.
///
/// Reads standard input as text lines (default) or fixed-capacity byte
/// chunks and writes them back to standard output, preserving byte-stream
/// fidelity and keeping diagnostics on standard error.
#[derive(Parser, Debug)]
#[command(name = "conpipe-rs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Treat input as a raw byte stream.
    #[arg(short = 'b', long)]
    pub byte_stream: bool,

    /// Buffer capacity in bytes for byte-stream reads.
    #[arg(long, default_value_t = DEFAULT_READ_COUNT, value_name = "BYTES")]
    pub read_count: usize,

    /// Do not append the platform newline after text output.
    #[arg(short = 'n', long)]
    pub no_newline: bool,

    /// Output format for error reporting (text, json).
    #[arg(long, default_value = "text", env = "CONPIPE_FORMAT")]
    pub format: String,

    /// Enable verbose logging on standard error.
    #[arg(short, long)]
    pub verbose: bool,
}
