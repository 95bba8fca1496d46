//! Cooperative cancellation for blocking read loops.
//!
//! The host's stop hook sets a shared flag from outside the normal call
//! sequence; the read loop checks it before every blocking read. A read
//! already in flight is not interrupted, so one more object may be emitted
//! before cancellation is observed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag.
///
/// Cloning yields another handle to the same flag, so the handle handed to
/// the host's stop hook and the one owned by the read session always agree.
///
/// # Examples
///
/// ```
/// use conpipe_rs::cancel::CancelFlag;
///
/// let flag = CancelFlag::new();
/// let hook = flag.clone();
/// assert!(!flag.is_cancelled());
/// hook.cancel();
/// assert!(flag.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a new, unset flag.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested.
    ///
    /// Relaxed ordering is sufficient: the flag is the only state shared
    /// with the control path.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
