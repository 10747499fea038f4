//! Navigation chrome state - scroll position, scroll requests, hero timing.
//!
//! The navigation bar swaps its backdrop once the page scrolls past a
//! threshold, nav links request smooth scrolls to named sections, and the
//! hero headline flips from "typing" to settled after a fixed duration.
//!
//! Scrolling itself belongs to the host: it feeds [`set_scroll_position`]
//! and drains [`take_scroll_request`]; the core only holds the state.

use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use spark_signals::{Signal, signal};

use super::timer::{TimerHandle, set_timeout};

// =============================================================================
// Constants
// =============================================================================

/// Scroll offset (px) past which the nav switches to its scrolled styling.
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;

/// How long the hero headline's typing animation runs before settling.
pub const TYPING_DURATION_MS: u64 = 3500;

// =============================================================================
// Sections
// =============================================================================

/// The page's named scroll targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// The section's anchor name in the rendered page.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Translation key for the nav link label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Projects => "nav.projects",
            Self::Skills => "nav.skills",
            Self::Contact => "nav.contact",
        }
    }

    /// Sections in nav order.
    pub fn all() -> [SectionId; 4] {
        [Self::Home, Self::Projects, Self::Skills, Self::Contact]
    }
}

// =============================================================================
// Scroll state
// =============================================================================

thread_local! {
    static SCROLL_Y: Signal<f64> = signal(0.0);

    /// Last unconsumed scroll-to-section request.
    static SCROLL_REQUEST: RefCell<Option<SectionId>> = const { RefCell::new(None) };

    /// Hero typing latch: flipped off-thread by the timer, synced on read.
    static TYPING_COMPLETE: Signal<bool> = signal(false);
    static TYPING_FIRED: RefCell<Option<Arc<AtomicBool>>> = const { RefCell::new(None) };
}

/// Feed the current window scroll offset.
pub fn set_scroll_position(y: f64) {
    SCROLL_Y.with(|sig| sig.set(y.max(0.0)));
}

/// Current scroll offset.
pub fn scroll_position() -> f64 {
    SCROLL_Y.with(|sig| sig.get())
}

/// Whether the nav should show its scrolled styling.
///
/// Creates a reactive dependency on the scroll signal.
pub fn is_scrolled() -> bool {
    scroll_position() > NAV_SCROLL_THRESHOLD
}

// =============================================================================
// Scroll-to-section requests
// =============================================================================

/// Request a smooth scroll to a section. A newer request replaces an
/// unconsumed older one - only the latest target matters.
pub fn scroll_to_section(section: SectionId) {
    SCROLL_REQUEST.with(|slot| {
        *slot.borrow_mut() = Some(section);
    });
}

/// Hand the pending scroll request to the scrolling collaborator, if any.
pub fn take_scroll_request() -> Option<SectionId> {
    SCROLL_REQUEST.with(|slot| slot.borrow_mut().take())
}

// =============================================================================
// Hero typing latch
// =============================================================================

/// Arm the hero typing timer. After [`TYPING_DURATION_MS`] the typing
/// animation is considered settled and [`typing_complete`] reads true.
///
/// Re-arming while already armed returns a fresh handle for the new timer;
/// the latch itself is one-way. Cancel the handle on teardown.
pub fn start_typing_timer() -> TimerHandle {
    let fired = Arc::new(AtomicBool::new(false));
    TYPING_FIRED.with(|slot| {
        *slot.borrow_mut() = Some(fired.clone());
    });

    set_timeout(Duration::from_millis(TYPING_DURATION_MS), move || {
        fired.store(true, Ordering::SeqCst);
    })
}

/// Whether the typing animation has settled. Syncs the off-thread flag
/// into the latch signal, then reads it reactively.
pub fn typing_complete() -> bool {
    let fired = TYPING_FIRED.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|flag| flag.load(Ordering::SeqCst))
            .unwrap_or(false)
    });
    TYPING_COMPLETE.with(|sig| {
        if fired && !sig.get() {
            sig.set(true);
        }
        sig.get()
    })
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset scroll, request, and typing state (for testing).
pub fn reset_nav_state() {
    SCROLL_Y.with(|sig| sig.set(0.0));
    SCROLL_REQUEST.with(|slot| *slot.borrow_mut() = None);
    TYPING_COMPLETE.with(|sig| sig.set(false));
    TYPING_FIRED.with(|slot| *slot.borrow_mut() = None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn setup() {
        reset_nav_state();
    }

    #[test]
    fn test_scrolled_threshold() {
        setup();

        assert!(!is_scrolled());
        set_scroll_position(100.0);
        assert!(!is_scrolled()); // strictly greater
        set_scroll_position(101.0);
        assert!(is_scrolled());
        set_scroll_position(-5.0);
        assert_eq!(scroll_position(), 0.0);
    }

    #[test]
    fn test_latest_scroll_request_wins() {
        setup();

        scroll_to_section(SectionId::Projects);
        scroll_to_section(SectionId::Contact);

        assert_eq!(take_scroll_request(), Some(SectionId::Contact));
        assert_eq!(take_scroll_request(), None);
    }

    #[test]
    fn test_section_anchors() {
        for section in SectionId::all() {
            assert!(!section.anchor().is_empty());
            assert!(section.label_key().starts_with("nav."));
        }
    }

    #[test]
    fn test_typing_timer_cancelled_never_settles() {
        setup();

        let handle = start_typing_timer();
        handle.cancel();
        assert!(!typing_complete());
    }

    #[test]
    fn test_typing_latch_syncs_from_timer() {
        setup();

        // Flip the flag directly rather than waiting out the real duration.
        let fired = Arc::new(AtomicBool::new(false));
        TYPING_FIRED.with(|slot| *slot.borrow_mut() = Some(fired.clone()));

        assert!(!typing_complete());
        fired.store(true, Ordering::SeqCst);
        assert!(typing_complete());

        thread::sleep(Duration::from_millis(1));
        assert!(typing_complete());
    }
}
