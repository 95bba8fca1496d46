//! # conpipe-rs
//!
//! Pipeline console I/O primitives.
//!
//! conpipe-rs surfaces the process standard input as a lazy sequence of
//! pipeline objects (text lines or fixed-capacity byte chunks) and renders
//! pipeline objects back to the standard output/error streams, preserving
//! byte-stream fidelity and keeping diagnostics separate from data.
//!
//! ## Features
//!
//! - **Reader**: line-oriented text mode and fixed-capacity binary mode,
//!   with cooperative cancellation at read-loop boundaries
//! - **Writer**: raw-binary and formatted write paths with a guaranteed
//!   handover between them, diagnostics routed to the error stream
//! - **Tagged objects**: a closed sum type matched exhaustively at the
//!   writer boundary
//! - **Relay binary**: the smallest useful host, wiring reader into writer

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cancel;
pub mod cli;
pub mod error;
pub mod newline;
pub mod pipeline;
pub mod reader;
pub mod writer;

// Re-export commonly used types at crate root
pub use error::{Error, ReadError, Result, WriteError};

// Re-export core domain types
pub use pipeline::{DiagnosticKind, DiagnosticRecord, PipelineObject, TextValue};

// Re-export reader types
pub use reader::{
    ChunkSession, ConsoleReader, DEFAULT_READ_COUNT, LineSession, MAX_READ_COUNT, ReadSession,
};

// Re-export writer types
pub use writer::{Console, ConsoleWriter, ProcessConsole};

// Re-export cancellation and CLI types
pub use cancel::CancelFlag;
pub use cli::{Cli, OutputFormat};
