//! Drop guards that bracket an exchange.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use hearth_common::Status;

use super::manager::SessionInner;

/// Shows the typing indicator for as long as it lives.
///
/// Dropping it hides the indicator and resets the status to online, whether
/// the exchange delivered, failed, or was dropped mid-flight.
pub(super) struct TypingGuard {
    inner: Arc<SessionInner>,
}

impl TypingGuard {
    pub(super) fn engage(inner: Arc<SessionInner>) -> Self {
        inner.set_typing(true);
        inner.set_status(Status::Typing);
        Self { inner }
    }
}

impl Drop for TypingGuard {
    fn drop(&mut self) {
        self.inner.set_typing(false);
        self.inner.set_status(Status::Online);
    }
}

/// Clears the session's `busy` flag on drop.
pub(super) struct BusyGuard {
    inner: Arc<SessionInner>,
}

impl BusyGuard {
    /// Attempt to take the busy flag. Returns `None` if already held.
    pub(super) fn acquire(inner: &Arc<SessionInner>) -> Option<Self> {
        inner
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self {
                inner: Arc::clone(inner),
            })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.inner.busy.store(false, Ordering::Release);
    }
}
