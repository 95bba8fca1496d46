//! Console input as a lazy sequence of pipeline objects.
//!
//! [`ConsoleReader`] holds the invocation parameters and opens one
//! [`ReadSession`] per invocation. A session is an iterator that pulls one
//! pipeline object at a time from the input stream:
//!
//! - **Text mode** (default): one [`PipelineObject::Line`] per input line,
//!   trailing terminator stripped. Line-buffered and blocking.
//! - **Binary mode**: one [`PipelineObject::Chunk`] per blocking read of a
//!   fixed-capacity buffer.
//!
//! Sessions end at end-of-input or once cancellation is observed, and the
//! input handle is released when the session drops, on every exit path.

pub mod chunks;
pub mod lines;

pub use chunks::ChunkSession;
pub use lines::LineSession;

use crate::cancel::CancelFlag;
use crate::error::{ReadError, Result};
use crate::pipeline::PipelineObject;
use std::io::{self, BufRead, StdinLock};

/// Default buffer capacity for binary-mode reads.
pub const DEFAULT_READ_COUNT: usize = 4096;

/// Maximum accepted buffer capacity for binary-mode reads (16 MiB).
pub const MAX_READ_COUNT: usize = 16 * 1024 * 1024;

/// Reads the process standard input and surfaces it as pipeline objects.
///
/// # Examples
///
/// ```
/// use conpipe_rs::reader::ConsoleReader;
/// use std::io::Cursor;
///
/// let reader = ConsoleReader::new();
/// let session = reader.open(Cursor::new("a\nb")).unwrap();
/// let lines: Vec<_> = session.map(Result::unwrap).collect();
/// assert_eq!(lines.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleReader {
    /// Buffer capacity for binary-mode reads.
    read_count: usize,
    /// Whether to treat input as a raw byte stream.
    byte_stream: bool,
    /// Cooperative cancellation flag shared with the host's stop hook.
    cancel: CancelFlag,
}

impl Default for ConsoleReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReader {
    /// Creates a reader with default settings: text mode, 4096-byte buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            read_count: DEFAULT_READ_COUNT,
            byte_stream: false,
            cancel: CancelFlag::new(),
        }
    }

    /// Sets the buffer capacity for binary-mode reads.
    ///
    /// Validated when a session is opened; ignored in text mode.
    #[must_use]
    pub fn read_count(mut self, count: usize) -> Self {
        self.read_count = count;
        self
    }

    /// Switches between text mode (default) and binary mode.
    #[must_use]
    pub fn byte_stream(mut self, enabled: bool) -> Self {
        self.byte_stream = enabled;
        self
    }

    /// Returns a handle for the host's stop hook.
    ///
    /// Setting the flag stops the session before its next read; a blocking
    /// read already in flight is not interrupted.
    #[must_use]
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Opens a read session over the process standard input.
    ///
    /// The stdin lock is held for the lifetime of the session and released
    /// when it drops.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid binary-mode configuration.
    pub fn open_stdin(&self) -> Result<ReadSession<StdinLock<'static>>> {
        self.open(io::stdin().lock())
    }

    /// Opens a read session over an arbitrary buffered source.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid binary-mode configuration.
    pub fn open<B: BufRead>(&self, source: B) -> Result<ReadSession<B>> {
        self.validate()?;
        if self.byte_stream {
            Ok(ReadSession::Chunks(ChunkSession::new(
                source,
                self.read_count,
                self.cancel.clone(),
            )))
        } else {
            Ok(ReadSession::Lines(LineSession::new(
                source,
                self.cancel.clone(),
            )))
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.byte_stream {
            return Ok(());
        }
        if self.read_count == 0 {
            return Err(ReadError::InvalidConfig {
                reason: "read count must be > 0".to_string(),
            }
            .into());
        }
        if self.read_count > MAX_READ_COUNT {
            return Err(ReadError::ReadCountTooLarge {
                count: self.read_count,
                max: MAX_READ_COUNT,
            }
            .into());
        }
        Ok(())
    }
}

/// A live read session in either mode.
///
/// Yields `Ok(object)` per pull and terminates at end-of-input, after a
/// fatal read error, or once cancellation is observed. Fused: never yields
/// again after terminating.
#[derive(Debug)]
pub enum ReadSession<B> {
    /// Text mode: one line object per pull.
    Lines(LineSession<B>),
    /// Binary mode: one chunk object per pull.
    Chunks(ChunkSession<B>),
}

impl<B: BufRead> Iterator for ReadSession<B> {
    type Item = Result<PipelineObject>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Lines(session) => session.next(),
            Self::Chunks(session) => session.next(),
        }
    }
}
