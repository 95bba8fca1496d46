//! Binary-mode read sessions.
//!
//! One blocking read of a fixed-capacity buffer per pull. The session owns
//! the buffer: a full read hands it to the consumer and replaces it with a
//! fresh allocation, so an emitted chunk is never mutated afterwards; a
//! short read emits a right-sized copy and keeps the buffer for the next
//! read.

use crate::cancel::CancelFlag;
use crate::error::{ReadError, Result};
use crate::pipeline::PipelineObject;
use std::io::{ErrorKind, Read};
use std::mem;
use tracing::trace;

/// Chunk-oriented read session over a raw input stream.
///
/// Emits one [`PipelineObject::Chunk`] per read. Chunks are at most the
/// configured capacity; a short chunk carries exactly the bytes read and
/// does not terminate the sequence. A zero-length read is end-of-input,
/// never an emitted chunk.
#[derive(Debug)]
pub struct ChunkSession<R> {
    source: R,
    buffer: Vec<u8>,
    cancel: CancelFlag,
    done: bool,
}

impl<R: Read> ChunkSession<R> {
    /// Creates a session over `source` with the given buffer capacity.
    ///
    /// Capacity validation happens in [`ConsoleReader::open`]; constructing
    /// a session directly trusts the caller.
    ///
    /// [`ConsoleReader::open`]: crate::reader::ConsoleReader::open
    #[must_use]
    pub fn new(source: R, read_count: usize, cancel: CancelFlag) -> Self {
        Self {
            source,
            buffer: vec![0; read_count],
            cancel,
            done: false,
        }
    }

    /// Buffer capacity of this session.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.buffer.len()
    }
}

impl<R: Read> Iterator for ChunkSession<R> {
    type Item = Result<PipelineObject>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if self.cancel.is_cancelled() {
                trace!("cancellation observed before chunk read");
                self.done = true;
                return None;
            }
            match self.source.read(&mut self.buffer) {
                Ok(0) => {
                    trace!("end of input stream");
                    self.done = true;
                    return None;
                }
                Ok(n) if n == self.buffer.len() => {
                    // Ownership of the full buffer transfers to the consumer.
                    let chunk = mem::replace(&mut self.buffer, vec![0; n]);
                    return Some(Ok(PipelineObject::Chunk(chunk)));
                }
                Ok(n) => {
                    return Some(Ok(PipelineObject::Chunk(self.buffer[..n].to_vec())));
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
    use test_case::test_case;

    fn chunks_of(input: &[u8], read_count: usize) -> Vec<Vec<u8>> {
        ChunkSession::new(Cursor::new(input.to_vec()), read_count, CancelFlag::new())
            .map(|object| match object.unwrap() {
                PipelineObject::Chunk(chunk) => chunk,
                other => panic!("unexpected object: {}", other.tag()),
            })
            .collect()
    }

    #[test]
    fn test_short_final_chunk() {
        let chunks = chunks_of(b"0123456789", 4);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], b"0123");
        assert_eq!(chunks[1], b"4567");
        assert_eq!(chunks[2], b"89");
    }

    #[test_case(10, 4 => 3; "short final chunk")]
    #[test_case(8, 4 => 2; "exact multiple")]
    #[test_case(3, 4 => 1; "single short chunk")]
    #[test_case(0, 4 => 0; "empty input")]
    #[test_case(1, 1 => 1; "capacity one")]
    fn test_chunk_count(len: usize, read_count: usize) -> usize {
        chunks_of(&vec![0xab; len], read_count).len()
    }

    #[test]
    fn test_concatenation_reconstructs_input() {
        let input: Vec<u8> = (0..=255).collect();
        let chunks = chunks_of(&input, 7);
        let rebuilt: Vec<u8> = chunks.concat();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_chunks_never_exceed_capacity() {
        for chunk in chunks_of(&[0u8; 100], 8) {
            assert!(chunk.len() <= 8);
        }
    }

    #[test]
    fn test_no_empty_terminal_chunk() {
        // An exact-multiple input ends with end-of-input, not a 0-byte chunk.
        let chunks = chunks_of(&[1u8; 12], 4);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|chunk| !chunk.is_empty()));
    }

    #[test]
    fn test_binary_payload_survives() {
        let input = vec![0x00, 0xff, 0x7f, 0x00, 0x01];
        assert_eq!(chunks_of(&input, 2).concat(), input);
    }

    #[test]
    fn test_cancellation_before_first_read() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let mut session = ChunkSession::new(Cursor::new(vec![1u8; 16]), 4, cancel);
        assert!(session.next().is_none());
    }

    #[test]
    fn test_cancellation_between_reads() {
        let cancel = CancelFlag::new();
        let mut session = ChunkSession::new(Cursor::new(vec![1u8; 16]), 4, cancel.clone());
        assert!(session.next().is_some());
        cancel.cancel();
        assert!(session.next().is_none());
    }

    #[test]
    fn test_session_is_fused() {
        let mut session = ChunkSession::new(Cursor::new(vec![1u8; 4]), 4, CancelFlag::new());
        assert!(session.next().is_some());
        assert!(session.next().is_none());
        assert!(session.next().is_none());
    }

    #[test]
    fn test_read_count_accessor() {
        let session = ChunkSession::new(Cursor::new(Vec::new()), 64, CancelFlag::new());
        assert_eq!(session.read_count(), 64);
    }

    /// Source yielding fixed-size partial reads, as a pipe would.
    struct Trickle {
        data: Vec<u8>,
        step: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(self.data.len()).min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data.drain(..n);
            Ok(n)
        }
    }

    #[test]
    fn test_short_reads_do_not_terminate() {
        let source = Trickle {
            data: vec![9u8; 10],
            step: 3,
        };
        let chunks: Vec<_> = ChunkSession::new(source, 8, CancelFlag::new())
            .map(Result::unwrap)
            .collect();
        // 3 + 3 + 3 + 1: every short read emitted, none treated as the end.
        assert_eq!(chunks.len(), 4);
    }

    /// Source that reports one interrupt, then yields data. Optionally
    /// requests cancellation while the interrupted read is "in flight".
    struct InterruptOnce {
        interrupted: bool,
        cancel_on_interrupt: Option<CancelFlag>,
        inner: Cursor<Vec<u8>>,
    }

    impl Read for InterruptOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupted {
                self.inner.read(buf)
            } else {
                self.interrupted = true;
                if let Some(cancel) = &self.cancel_on_interrupt {
                    cancel.cancel();
                }
                Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
            }
        }
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let source = InterruptOnce {
            interrupted: false,
            cancel_on_interrupt: None,
            inner: Cursor::new(vec![5u8; 4]),
        };
        let mut session = ChunkSession::new(source, 4, CancelFlag::new());
        let object = session.next().unwrap().unwrap();
        assert_eq!(object, PipelineObject::Chunk(vec![5u8; 4]));
    }

    #[test]
    fn test_interrupt_rechecks_cancellation() {
        // A stop request arriving during an interrupted read is observed
        // at the retry checkpoint, before the next read starts.
        let cancel = CancelFlag::new();
        let source = InterruptOnce {
            interrupted: false,
            cancel_on_interrupt: Some(cancel.clone()),
            inner: Cursor::new(vec![5u8; 4]),
        };
        let mut session = ChunkSession::new(source, 4, cancel);
        assert!(session.next().is_none());
    }

    struct FailingSource;

    impl Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_read_fault_is_fatal() {
        let mut session = ChunkSession::new(FailingSource, 4, CancelFlag::new());
        assert!(session.next().unwrap().is_err());
        assert!(session.next().is_none());
    }
}
