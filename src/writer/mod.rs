//! Pipeline objects to console streams.
//!
//! [`ConsoleWriter`] consumes pipeline objects one at a time and renders
//! each to the correct process stream. Two write paths exist per
//! invocation:
//!
//! - **Raw binary**: byte payloads written verbatim through a lazily
//!   opened raw output handle, reused across consecutive raw writes.
//! - **Formatted**: text written through the host's line-oriented console
//!   primitive, with the platform newline unless the no-newline option is
//!   set.
//!
//! The raw handle is always flushed and released before a formatted write
//! touches the same destination, so the two I/O paths never interleave on
//! one open handle. Diagnostic records go to the error destination and
//! leave the data-path state alone.

pub mod console;

pub use console::{Console, ProcessConsole};

use crate::error::{Result, WriteError};
use crate::pipeline::PipelineObject;
use std::io::Write;
use tracing::{debug, trace};

/// Consumes pipeline objects and renders each to the correct stream.
///
/// Lifecycle: [`begin`](Self::begin) once before any object,
/// [`process`](Self::process) per object, [`end`](Self::end) once after the
/// last object. The driver must call `end` on every exit path, including
/// early termination, so the raw output handle is always released.
///
/// # Examples
///
/// ```
/// use conpipe_rs::pipeline::PipelineObject;
/// use conpipe_rs::writer::ConsoleWriter;
///
/// let mut writer = ConsoleWriter::new();
/// writer.begin()?;
/// writer.process(PipelineObject::text("hello"))?;
/// writer.end()?;
/// # Ok::<(), conpipe_rs::Error>(())
/// ```
pub struct ConsoleWriter<C: Console = ProcessConsole> {
    console: C,
    no_newline: bool,
    raw: Option<C::Raw>,
}

impl<C: Console> std::fmt::Debug for ConsoleWriter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleWriter")
            .field("no_newline", &self.no_newline)
            .field("raw_open", &self.raw.is_some())
            .finish_non_exhaustive()
    }
}

impl ConsoleWriter<ProcessConsole> {
    /// Creates a writer over the real process streams.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(ProcessConsole::new())
    }
}

impl Default for ConsoleWriter<ProcessConsole> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> ConsoleWriter<C> {
    /// Creates a writer over an arbitrary console surface.
    #[must_use]
    pub fn with_console(console: C) -> Self {
        Self {
            console,
            no_newline: false,
            raw: None,
        }
    }

    /// Suppresses the trailing newline after text writes.
    ///
    /// With the option set, an empty text value produces no output at all.
    #[must_use]
    pub fn no_newline(mut self, enabled: bool) -> Self {
        self.no_newline = enabled;
        self
    }

    /// Borrows the underlying console surface.
    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Lifecycle hook: called once before the first object.
    ///
    /// # Errors
    ///
    /// Reserved for console surfaces that fail on session start.
    pub fn begin(&mut self) -> Result<()> {
        debug!(no_newline = self.no_newline, "write session begins");
        Ok(())
    }

    /// Renders one pipeline object.
    ///
    /// Byte payloads take the raw path, text the formatted path, and
    /// diagnostic records the error destination. Matching is exhaustive:
    /// reader-produced lines and chunks render like text and bytes, so a
    /// read session pipes straight into a writer.
    ///
    /// # Errors
    ///
    /// Any stream fault is fatal for the invocation; nothing is retried.
    pub fn process(&mut self, object: PipelineObject) -> Result<()> {
        match object {
            PipelineObject::Bytes(bytes) | PipelineObject::Chunk(bytes) => self.write_raw(&bytes),
            PipelineObject::Text(value) => {
                let text = value.into_string();
                self.write_formatted(&text)
            }
            PipelineObject::Line(line) => self.write_formatted(&line),
            PipelineObject::Diagnostic(record) => self.console.write_error(&record.to_string()),
        }
    }

    /// Lifecycle hook: called once after the last object, on every exit
    /// path.
    ///
    /// # Errors
    ///
    /// Returns an error if releasing the raw output handle fails.
    pub fn end(&mut self) -> Result<()> {
        debug!("write session ends");
        self.release_raw()
    }

    /// Raw-binary path: verbatim bytes through the lazily opened handle.
    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            // Never issue a zero-length write.
            return Ok(());
        }
        if self.raw.is_none() {
            trace!("opening raw output stream");
            self.raw = Some(self.console.open_raw()?);
        }
        if let Some(raw) = self.raw.as_mut() {
            raw.write_all(bytes).map_err(|e| WriteError::output(&e))?;
        }
        Ok(())
    }

    /// Formatted path: releases any open raw handle first.
    fn write_formatted(&mut self, text: &str) -> Result<()> {
        self.release_raw()?;
        if self.no_newline {
            if text.is_empty() {
                return Ok(());
            }
            self.console.write_text(text)
        } else {
            self.console.write_line(text)
        }
    }

    fn release_raw(&mut self) -> Result<()> {
        if let Some(mut raw) = self.raw.take() {
            trace!("releasing raw output stream");
            raw.flush().map_err(|e| WriteError::output(&e))?;
        }
        Ok(())
    }
}
