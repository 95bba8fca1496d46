//! Structured diagnostic records.
//!
//! Diagnostics are data, not logging: they flow through the pipeline like
//! any other object and are rendered to the error stream by the writer,
//! keeping the output stream clean for data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity channel of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// A terminating or non-terminating error report.
    Error,
    /// A warning for the operator.
    Warning,
    /// Verbose progress detail.
    Verbose,
    /// Debug-level detail.
    Debug,
    /// An informational message.
    Information,
}

impl DiagnosticKind {
    /// Lowercase channel name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Information => "information",
        }
    }
}

/// A structured error/warning/verbose/debug/informational payload.
///
/// The `Display` impl is the canonical human-readable rendering and the
/// fallback for any record a consumer does not otherwise understand.
/// Warning, verbose, and debug records carry their conventional console
/// tag; error and informational records render as their bare message.
///
/// # Examples
///
/// ```
/// use conpipe_rs::pipeline::DiagnosticRecord;
///
/// let record = DiagnosticRecord::warning("low disk space");
/// assert_eq!(record.to_string(), "WARNING: low disk space");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Severity channel.
    pub kind: DiagnosticKind,

    /// Human-readable message.
    pub message: String,

    /// Optional origin tag (stage or component name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl DiagnosticRecord {
    /// Creates a record with the given channel and message.
    #[must_use]
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error record.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, message)
    }

    /// Creates a warning record.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, message)
    }

    /// Creates a verbose record.
    #[must_use]
    pub fn verbose(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Verbose, message)
    }

    /// Creates a debug record.
    #[must_use]
    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Debug, message)
    }

    /// Creates an informational record.
    #[must_use]
    pub fn information(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Information, message)
    }

    /// Sets the origin tag.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Error | DiagnosticKind::Information => write!(f, "{}", self.message),
            DiagnosticKind::Warning => write!(f, "WARNING: {}", self.message),
            DiagnosticKind::Verbose => write!(f, "VERBOSE: {}", self.message),
            DiagnosticKind::Debug => write!(f, "DEBUG: {}", self.message),
        }
    }
}
