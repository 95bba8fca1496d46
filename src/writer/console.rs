//! Host console surface.
//!
//! The writer renders through this trait rather than touching the process
//! streams directly, so the same state machine drives the real console and
//! in-memory test doubles alike.

use crate::error::{Result, WriteError};
use crate::newline;
use std::io::{self, Write};

/// Host console surface the writer renders into.
///
/// The raw byte stream and the formatted primitives must point at the same
/// logical output destination; the writer guarantees the raw handle is
/// released before any formatted write so the two paths never interleave
/// on one open handle. Diagnostics go to a separate error destination.
pub trait Console {
    /// Raw byte stream type for the binary write path.
    type Raw: Write;

    /// Opens the raw output byte stream.
    ///
    /// Called lazily, at most once per stretch of raw writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be opened.
    fn open_raw(&mut self) -> Result<Self::Raw>;

    /// Writes text through the formatted path with no terminator.
    ///
    /// # Errors
    ///
    /// Returns an error if the console write fails.
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Writes text through the formatted path, followed by the platform
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the console write fails.
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Writes one rendered diagnostic line to the error destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the error-stream write fails.
    fn write_error(&mut self, text: &str) -> Result<()>;

    /// Platform line terminator used by [`write_line`](Self::write_line).
    fn newline(&self) -> &'static str {
        newline::PLATFORM
    }
}

/// Console implementation over the real process streams.
///
/// Data goes to standard output, diagnostics to standard error. Formatted
/// writes flush immediately so output ordering survives the handover
/// between the raw and formatted paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessConsole;

impl ProcessConsole {
    /// Creates the process console.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for ProcessConsole {
    type Raw = io::Stdout;

    fn open_raw(&mut self) -> Result<io::Stdout> {
        Ok(io::stdout())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut out = io::stdout();
        out.write_all(text.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| WriteError::console(&e).into())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut out = io::stdout();
        out.write_all(text.as_bytes())
            .and_then(|()| out.write_all(self.newline().as_bytes()))
            .and_then(|()| out.flush())
            .map_err(|e| WriteError::console(&e).into())
    }

    fn write_error(&mut self, text: &str) -> Result<()> {
        let mut err = io::stderr();
        err.write_all(text.as_bytes())
            .and_then(|()| err.write_all(newline::PLATFORM.as_bytes()))
            .and_then(|()| err.flush())
            .map_err(|e| WriteError::diagnostic(&e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_newline_is_platform() {
        struct Dummy;

        impl Console for Dummy {
            type Raw = Vec<u8>;

            fn open_raw(&mut self) -> Result<Vec<u8>> {
                Ok(Vec::new())
            }

            fn write_text(&mut self, _text: &str) -> Result<()> {
                Ok(())
            }

            fn write_line(&mut self, _text: &str) -> Result<()> {
                Ok(())
            }

            fn write_error(&mut self, _text: &str) -> Result<()> {
                Ok(())
            }
        }

        assert_eq!(Dummy.newline(), newline::PLATFORM);
    }

    #[test]
    fn test_process_console_opens_raw() {
        let mut console = ProcessConsole::new();
        assert!(console.open_raw().is_ok());
    }
}
