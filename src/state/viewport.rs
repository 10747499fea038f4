//! Visibility Detector - one-shot "has entered viewport" latches.
//!
//! Each observed region owns a `Signal<bool>` that starts false and latches
//! to true the first time the external intersection source reports any
//! nonzero visible ratio. The latch never reverts on scroll-out; reveal
//! animations are a one-way door.
//!
//! The actual intersection machinery (IntersectionObserver, scroll math,
//! whatever the host provides) is an external collaborator: it calls
//! [`report_intersection`] and the core does the rest.
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::state::viewport;
//!
//! let unobserve = viewport::observe("skills");
//! let off = viewport::on_enter("skills", || {
//!     // dispatch reveal animations - fires exactly once
//! });
//!
//! viewport::report_intersection("skills", 0.25);
//! assert!(viewport::is_visible("skills"));
//!
//! off();
//! unobserve();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{Signal, signal};

// =============================================================================
// Registry state
// =============================================================================

thread_local! {
    /// Visibility latch per observed region.
    static VISIBILITY: RefCell<HashMap<String, Signal<bool>>> = RefCell::new(HashMap::new());

    /// Enter callbacks per region. Slots are `None` after unregistration so
    /// callback ids stay stable.
    static ENTER_CALLBACKS: RefCell<HashMap<String, Vec<Option<Box<dyn Fn()>>>>> =
        RefCell::new(HashMap::new());
}

// =============================================================================
// Observation lifecycle
// =============================================================================

/// Start observing a region. Returns a cleanup that releases the
/// registration, its latch, and its callbacks.
///
/// Observing an already-observed region is a no-op (the existing latch is
/// kept, entered state included) and the cleanup still releases it.
pub fn observe(region: &str) -> impl FnOnce() {
    VISIBILITY.with(|map| {
        map.borrow_mut()
            .entry(region.to_string())
            .or_insert_with(|| signal(false));
    });

    let region = region.to_string();
    move || {
        VISIBILITY.with(|map| {
            map.borrow_mut().remove(&region);
        });
        ENTER_CALLBACKS.with(|map| {
            map.borrow_mut().remove(&region);
        });
    }
}

/// Check whether a region is currently observed.
pub fn is_observed(region: &str) -> bool {
    VISIBILITY.with(|map| map.borrow().contains_key(region))
}

// =============================================================================
// Intersection reports
// =============================================================================

/// Feed one intersection observation for a region.
///
/// Any nonzero visible ratio latches the region visible; the false-to-true
/// transition fires the region's enter callbacks exactly once. Later
/// reports - larger ratios, zero ratios, anything - change nothing.
/// Reports for unobserved regions are ignored.
pub fn report_intersection(region: &str, ratio: f64) {
    if ratio <= 0.0 {
        return;
    }

    // Clone the latch out before setting it: an effect reacting to the
    // transition may itself observe or report.
    let latch = VISIBILITY.with(|map| map.borrow().get(region).cloned());
    let entered = match latch {
        Some(sig) if !sig.get() => {
            sig.set(true);
            true
        }
        _ => false,
    };

    if entered {
        fire_enter_callbacks(region);
    }
}

/// Read the visibility latch. Unobserved regions read as false.
///
/// Creates a reactive dependency on the region's latch when called from a
/// derived or effect.
pub fn is_visible(region: &str) -> bool {
    VISIBILITY.with(|map| map.borrow().get(region).map(|sig| sig.get()).unwrap_or(false))
}

/// Get the region's latch signal for direct reactive tracking.
pub fn visibility_signal(region: &str) -> Option<Signal<bool>> {
    VISIBILITY.with(|map| map.borrow().get(region).cloned())
}

// =============================================================================
// Enter callbacks
// =============================================================================

/// Register a callback for the region's enter event.
///
/// Fires once, on the false-to-true latch transition. If the region is
/// already visible at registration time the callback fires immediately
/// (still once). Returns a cleanup that unregisters it.
pub fn on_enter(region: &str, callback: impl Fn() + 'static) -> impl FnOnce() {
    if is_visible(region) {
        callback();
        // Already entered: nothing left to fire, nothing to unregister.
        return Box::new(|| {}) as Box<dyn FnOnce()>;
    }

    let callback_id = ENTER_CALLBACKS.with(|map| {
        let mut map = map.borrow_mut();
        let list = map.entry(region.to_string()).or_default();
        list.push(Some(Box::new(callback)));
        list.len() - 1
    });

    let region = region.to_string();
    Box::new(move || {
        ENTER_CALLBACKS.with(|map| {
            if let Some(list) = map.borrow_mut().get_mut(&region) {
                if let Some(slot) = list.get_mut(callback_id) {
                    *slot = None;
                }
            }
        });
    }) as Box<dyn FnOnce()>
}

/// Run and consume the region's enter callbacks.
fn fire_enter_callbacks(region: &str) {
    // Take the list out before calling: a callback may register new
    // observers or report further intersections.
    let callbacks = ENTER_CALLBACKS.with(|map| map.borrow_mut().remove(region));
    if let Some(callbacks) = callbacks {
        for callback in callbacks.into_iter().flatten() {
            callback();
        }
    }
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Drop every observation and callback (for testing).
pub fn reset_viewport_state() {
    VISIBILITY.with(|map| map.borrow_mut().clear());
    ENTER_CALLBACKS.with(|map| map.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_viewport_state();
    }

    #[test]
    fn test_unreported_region_stays_invisible() {
        setup();

        let _cleanup = observe("skills");
        assert!(!is_visible("skills"));

        // Zero ratio does not latch
        report_intersection("skills", 0.0);
        assert!(!is_visible("skills"));
    }

    #[test]
    fn test_nonzero_ratio_latches() {
        setup();

        let _cleanup = observe("skills");
        report_intersection("skills", 0.01);
        assert!(is_visible("skills"));

        // Latch never reverts
        report_intersection("skills", 0.0);
        assert!(is_visible("skills"));
    }

    #[test]
    fn test_enter_callback_fires_once() {
        setup();

        let count = Rc::new(Cell::new(0));
        let counter = count.clone();

        let _cleanup = observe("projects");
        let _off = on_enter("projects", move || {
            counter.set(counter.get() + 1);
        });

        report_intersection("projects", 0.5);
        report_intersection("projects", 0.9);
        report_intersection("projects", 1.0);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_on_enter_after_visible_fires_immediately() {
        setup();

        let _cleanup = observe("contact");
        report_intersection("contact", 1.0);

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let _off = on_enter("contact", move || flag.set(true));

        assert!(fired.get());
    }

    #[test]
    fn test_unregistered_callback_does_not_fire() {
        setup();

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let _cleanup = observe("skills");
        let off = on_enter("skills", move || flag.set(true));
        off();

        report_intersection("skills", 1.0);
        assert!(!fired.get());
    }

    #[test]
    fn test_report_for_unknown_region_ignored() {
        setup();

        report_intersection("nope", 1.0);
        assert!(!is_visible("nope"));
    }

    #[test]
    fn test_unobserve_releases_latch() {
        setup();

        let cleanup = observe("skills");
        report_intersection("skills", 1.0);
        cleanup();

        assert!(!is_observed("skills"));
        assert!(!is_visible("skills"));
    }
}
