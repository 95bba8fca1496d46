//! Text-mode read sessions.
//!
//! One line per pull, read through the source's line buffering. A pull
//! blocks until a full line, end-of-input, or an error arrives.

use crate::cancel::CancelFlag;
use crate::error::{ReadError, Result};
use crate::newline;
use crate::pipeline::PipelineObject;
use std::io::{BufRead, ErrorKind};
use tracing::trace;

/// Line-oriented read session over a buffered input stream.
///
/// Emits one [`PipelineObject::Line`] per input line with the trailing
/// terminator stripped. A final line without a terminator is still emitted;
/// the sequence ends when a read returns no bytes.
#[derive(Debug)]
pub struct LineSession<B> {
    source: B,
    cancel: CancelFlag,
    done: bool,
}

impl<B: BufRead> LineSession<B> {
    /// Creates a session over `source`, observing `cancel` before each read.
    #[must_use]
    pub fn new(source: B, cancel: CancelFlag) -> Self {
        Self {
            source,
            cancel,
            done: false,
        }
    }
}

impl<B: BufRead> Iterator for LineSession<B> {
    type Item = Result<PipelineObject>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if self.cancel.is_cancelled() {
                trace!("cancellation observed before line read");
                self.done = true;
                return None;
            }
            let mut line = String::new();
            match self.source.read_line(&mut line) {
                Ok(0) => {
                    trace!("end of input stream");
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    newline::strip_terminator(&mut line);
                    return Some(Ok(PipelineObject::Line(line)));
                }
                // An interrupted read is retried, re-passing the
                // cancellation checkpoint first.
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(ReadError::Input {
                        reason: e.to_string(),
                    }
                    .into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn lines_of(input: &str) -> Vec<String> {
        LineSession::new(Cursor::new(input.to_string()), CancelFlag::new())
            .map(|object| match object.unwrap() {
                PipelineObject::Line(line) => line,
                other => panic!("unexpected object: {}", other.tag()),
            })
            .collect()
    }

    #[test]
    fn test_lines_without_trailing_newline() {
        assert_eq!(lines_of("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_lines_with_trailing_newline_no_phantom_line() {
        assert_eq!(lines_of("a\nb\nc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_crlf_terminators_stripped() {
        assert_eq!(lines_of("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        assert!(lines_of("").is_empty());
    }

    #[test]
    fn test_blank_lines_are_emitted() {
        assert_eq!(lines_of("\n\n"), vec!["", ""]);
    }

    #[test]
    fn test_cancellation_before_first_read() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let mut session = LineSession::new(Cursor::new("a\nb\n"), cancel);
        assert!(session.next().is_none());
    }

    #[test]
    fn test_cancellation_between_reads() {
        let cancel = CancelFlag::new();
        let mut session = LineSession::new(Cursor::new("a\nb\n"), cancel.clone());
        assert!(session.next().is_some());
        cancel.cancel();
        assert!(session.next().is_none());
    }

    #[test]
    fn test_session_is_fused() {
        let mut session = LineSession::new(Cursor::new("a"), CancelFlag::new());
        assert!(session.next().is_some());
        assert!(session.next().is_none());
        assert!(session.next().is_none());
    }

    /// Source that fails every read with the given kind.
    struct FailingSource(io::ErrorKind);

    impl io::Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "synthetic fault"))
        }
    }

    impl BufRead for FailingSource {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(self.0, "synthetic fault"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn test_read_fault_is_fatal() {
        let mut session = LineSession::new(
            FailingSource(io::ErrorKind::PermissionDenied),
            CancelFlag::new(),
        );
        assert!(session.next().unwrap().is_err());
        assert!(session.next().is_none());
    }

    /// Source that reports one interrupt, then yields data.
    struct InterruptOnce {
        interrupted: bool,
        inner: Cursor<&'static str>,
    }

    impl io::Read for InterruptOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupted {
                self.inner.read(buf)
            } else {
                self.interrupted = true;
                Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
            }
        }
    }

    impl BufRead for InterruptOnce {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.interrupted {
                self.inner.fill_buf()
            } else {
                self.interrupted = true;
                Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
            }
        }

        fn consume(&mut self, amt: usize) {
            self.inner.consume(amt);
        }
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let source = InterruptOnce {
            interrupted: false,
            inner: Cursor::new("hello\n"),
        };
        let mut session = LineSession::new(source, CancelFlag::new());
        let object = session.next().unwrap().unwrap();
        assert_eq!(object, PipelineObject::Line("hello".to_string()));
    }
}
