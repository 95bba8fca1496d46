//! CLI layer for conpipe-rs.
//!
//! Provides the command-line interface using clap: argument parsing, the
//! relay driver, and error output formatting for the binary.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, relay};
pub use output::OutputFormat;
pub use parser::Cli;
