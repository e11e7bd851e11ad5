//! # Stop Signal
//!
//! A write-once flag shared between threads. Whoever raises it first
//! decides the exit reason; later raises are ignored. Readers either check
//! it (`reason`) or sleep on it (`wait_timeout`), waking as soon as it is
//! raised.
//!
//! The mutex gives every reader a happens-before edge to the writer.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use log::debug;

use crate::core::navigation::ExitReason;

#[derive(Debug, Default)]
pub struct StopSignal {
    reason: Mutex<Option<ExitReason>>,
    raised: Condvar,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this call was the one that raised the signal.
    pub fn raise(&self, reason: ExitReason) -> bool {
        let mut slot = self.lock();
        if slot.is_some() {
            return false;
        }
        *slot = Some(reason);
        self.raised.notify_all();
        debug!("Stop signal raised: {:?}", reason);
        true
    }

    pub fn reason(&self) -> Option<ExitReason> {
        *self.lock()
    }

    pub fn is_raised(&self) -> bool {
        self.reason().is_some()
    }

    /// Sleeps up to `timeout`, returning early with the reason if the
    /// signal is (or becomes) raised.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<ExitReason> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.lock();
        // Loop guards against spurious wakeups
        while slot.is_none() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            slot = self
                .raised
                .wait_timeout(slot, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
        *slot
    }

    fn lock(&self) -> MutexGuard<'_, Option<ExitReason>> {
        self.reason.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
