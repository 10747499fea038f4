//! One-shot timers with explicit cancellation.
//!
//! Timer callbacks run on detached worker threads - they are fire-and-forget
//! scheduled tasks, not blocking waits, so the single-threaded reactive core
//! stays responsive while they are pending.
//!
//! Because callbacks run off-thread they must be `Send` and may only touch
//! `Arc` shared cells; reactive thread-local state is synced from those
//! cells on read (see [`crate::state::reveal`] for the pattern in use).
//!
//! Cancellation is a flag checked immediately before the callback fires:
//! a cancelled timer never runs, a fired timer cannot be un-fired.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use spark_folio::state::timer::{set_timeout, TimerSet};
//!
//! let mut tasks = TimerSet::new();
//! tasks.adopt(set_timeout(Duration::from_millis(500), || {
//!     // flip an Arc<AtomicBool> here
//! }));
//!
//! // Component teardown: abandon everything still pending
//! tasks.cancel_all();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

// =============================================================================
// TimerHandle
// =============================================================================

/// Handle to a pending one-shot timer.
///
/// Cloning the handle shares the cancellation flag; cancelling any clone
/// cancels the timer.
#[derive(Clone)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    /// Abandon the timer. The callback will not run if it has not run yet.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether the timer has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// =============================================================================
// set_timeout
// =============================================================================

/// Schedule `f` to run once after `delay`.
///
/// The worker thread re-checks the cancellation flag after sleeping, so a
/// cancel that lands during the delay wins over the callback.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + Send + 'static) -> TimerHandle {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();

    thread::spawn(move || {
        thread::sleep(delay);
        if !flag.load(Ordering::SeqCst) {
            f();
        }
    });

    TimerHandle { cancelled }
}

// =============================================================================
// TimerSet - arena-style ownership
// =============================================================================

/// Owns every timer a component arms so they can be released together.
///
/// Dropping the set cancels all pending timers - nothing fires against a
/// torn-down owner.
#[derive(Default)]
pub struct TimerSet {
    handles: Vec<TimerHandle>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a handle.
    pub fn adopt(&mut self, handle: TimerHandle) {
        self.handles.push(handle);
    }

    /// Schedule through the set in one step.
    pub fn set_timeout(&mut self, delay: Duration, f: impl FnOnce() + Send + 'static) {
        self.adopt(set_timeout(delay, f));
    }

    /// Cancel every adopted timer. Idempotent.
    pub fn cancel_all(&self) {
        for handle in &self.handles {
            handle.cancel();
        }
    }

    /// Number of adopted handles (fired or not).
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_fires() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let _handle = set_timeout(Duration::from_millis(5), move || {
            flag.store(true, Ordering::SeqCst);
        });

        thread::sleep(Duration::from_millis(60));
        assert!(fired.load(Ordering::SeqCst));
    }

    #[test]
    fn test_cancel_before_fire() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let handle = set_timeout(Duration::from_millis(50), move || {
            flag.store(true, Ordering::SeqCst);
        });
        handle.cancel();

        thread::sleep(Duration::from_millis(100));
        assert!(!fired.load(Ordering::SeqCst));
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_timer_set_cancels_on_drop() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        {
            let mut tasks = TimerSet::new();
            tasks.set_timeout(Duration::from_millis(50), move || {
                flag.store(true, Ordering::SeqCst);
            });
            assert_eq!(tasks.len(), 1);
        } // dropped here

        thread::sleep(Duration::from_millis(100));
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[test]
    fn test_cancel_all_is_idempotent() {
        let mut tasks = TimerSet::new();
        tasks.set_timeout(Duration::from_millis(50), || {});
        tasks.cancel_all();
        tasks.cancel_all();
    }
}
