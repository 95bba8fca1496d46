//! The tagged pipeline value type.
//!
//! One discrete value flows through the host pipeline per object. Exactly
//! one tag is active per instance, and objects are immutable once produced:
//! they are moved to the consumer, never shared or mutated.

use crate::pipeline::record::DiagnosticRecord;
use serde::{Deserialize, Serialize};

/// One discrete value flowing through the host pipeline.
///
/// The reader produces [`Line`](Self::Line) and [`Chunk`](Self::Chunk)
/// objects; the writer additionally accepts explicit [`Bytes`](Self::Bytes)
/// and [`Text`](Self::Text) payloads from upstream stages, plus
/// [`Diagnostic`](Self::Diagnostic) records routed to the error stream.
/// The writer matches exhaustively over all tags, so a reader session piped
/// straight into a writer round-trips without adaptation.
///
/// # Examples
///
/// ```
/// use conpipe_rs::pipeline::PipelineObject;
///
/// let object = PipelineObject::text("hello");
/// assert_eq!(object.tag(), "text");
/// assert!(!object.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineObject {
    /// A single input line, trailing terminator stripped.
    Line(String),

    /// A fixed-capacity (or shorter, final) slice of the raw input stream.
    Chunk(Vec<u8>),

    /// An explicit binary payload produced upstream.
    Bytes(Vec<u8>),

    /// A text value destined for the formatted console path.
    Text(TextValue),

    /// A structured diagnostic payload destined for the error stream.
    Diagnostic(DiagnosticRecord),
}

impl PipelineObject {
    /// Creates a text object from anything string-like.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(TextValue::Str(value.into()))
    }

    /// Creates a text object from an explicit character sequence.
    #[must_use]
    pub fn chars(value: Vec<char>) -> Self {
        Self::Text(TextValue::Chars(value))
    }

    /// Creates a raw byte payload object.
    #[must_use]
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(value.into())
    }

    /// Short tag name for the active variant.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Chunk(_) => "chunk",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
            Self::Diagnostic(_) => "diagnostic",
        }
    }

    /// Returns whether the payload carries no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Line(s) => s.is_empty(),
            Self::Chunk(b) | Self::Bytes(b) => b.is_empty(),
            Self::Text(t) => t.is_empty(),
            Self::Diagnostic(r) => r.message.is_empty(),
        }
    }
}

/// Text payload: either a string or an explicit character sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextValue {
    /// An owned string.
    Str(String),

    /// A character sequence, collected into a string at write time.
    Chars(Vec<char>),
}

impl TextValue {
    /// Collapses the value into an owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Chars(chars) => chars.into_iter().collect(),
        }
    }

    /// Returns whether the value holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Chars(chars) => chars.is_empty(),
        }
    }
}

impl From<String> for TextValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Vec<char>> for TextValue {
    fn from(value: Vec<char>) -> Self {
        Self::Chars(value)
    }
}
