//! Error types for console pipeline operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! reader and writer operations. Console stream faults are never retried;
//! they surface to the host as fatal errors for the current invocation.

use thiserror::Error;

/// Result type alias for console pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for console pipeline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Reader-side errors (standard input).
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// Writer-side errors (standard output/error).
    #[error("write error: {0}")]
    Write(#[from] WriteError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

impl Error {
    /// Short machine-readable tag for the error family.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Read(_) => "read",
            Self::Write(_) => "write",
            Self::Config { .. } => "config",
        }
    }
}

/// Errors raised while reading the standard input stream.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The underlying input stream failed.
    #[error("reading standard input failed: {reason}")]
    Input {
        /// Reason for failure.
        reason: String,
    },

    /// Invalid reader configuration.
    #[error("invalid reader configuration: {reason}")]
    InvalidConfig {
        /// Reason the configuration is invalid.
        reason: String,
    },

    /// Requested buffer capacity exceeds the maximum.
    #[error("read count {count} exceeds maximum {max}")]
    ReadCountTooLarge {
        /// Requested buffer capacity.
        count: usize,
        /// Maximum allowed capacity.
        max: usize,
    },
}

/// Errors raised while writing to the standard output/error streams.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The raw output byte stream failed.
    #[error("writing to the output stream failed: {reason}")]
    Output {
        /// Reason for failure.
        reason: String,
    },

    /// The formatted console path failed.
    #[error("writing to the console failed: {reason}")]
    Console {
        /// Reason for failure.
        reason: String,
    },

    /// The error stream rejected a diagnostic record.
    #[error("writing a diagnostic record failed: {reason}")]
    Diagnostic {
        /// Reason for failure.
        reason: String,
    },

    /// The destination pipe was closed by the downstream consumer.
    ///
    /// Hosts normally treat this as early termination rather than a fault.
    #[error("output pipe closed")]
    BrokenPipe,
}

impl WriteError {
    /// Maps a raw-stream I/O fault, recognizing closed pipes.
    #[must_use]
    pub fn output(err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            Self::BrokenPipe
        } else {
            Self::Output {
                reason: err.to_string(),
            }
        }
    }

    /// Maps a formatted-path I/O fault, recognizing closed pipes.
    #[must_use]
    pub fn console(err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            Self::BrokenPipe
        } else {
            Self::Console {
                reason: err.to_string(),
            }
        }
    }

    /// Maps an error-stream I/O fault, recognizing closed pipes.
    #[must_use]
    pub fn diagnostic(err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            Self::BrokenPipe
        } else {
            Self::Diagnostic {
                reason: err.to_string(),
            }
        }
    }
}
