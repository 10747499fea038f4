//! Staged Animation Scheduler - ordered, delayed, once-only activation.
//!
//! When a region enters the viewport, its animatable items (skill bars,
//! grid cells, tech badges) activate one by one on a staggered schedule.
//! The schedule is computed up front as an explicit ordered list of
//! `(delay, id)` pairs - no closures capturing loop indices - and then
//! dispatched to a single worker thread that walks the deadlines in order.
//!
//! Activated ids accumulate in a `ReactiveSet<String>` that only grows
//! within a mount lifecycle. Activation is idempotent: an id already
//! activated or already pending is never scheduled again, so a second
//! trigger cannot restart an animation or double-arm timers.
//!
//! Worker threads never touch thread-local reactive state. They append
//! fired ids to a shared inbox; readers drain the inbox into the reactive
//! set on access (the same sync-on-read scheme as the blink clocks this
//! module grew out of).
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::content::skill_activation_groups;
//! use spark_folio::state::reveal::{plan_staged, dispatch, is_activated};
//!
//! let plan = plan_staged(&skill_activation_groups());
//! let handle = dispatch(plan);
//!
//! // ... later, from the render path ...
//! if is_activated("frontend-React") {
//!     // bar is at its target width
//! }
//!
//! // Component teardown
//! handle.cancel();
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use spark_signals::ReactiveSet;

use super::viewport;

// =============================================================================
// Stagger constants
// =============================================================================

/// Delay added per group index in a staged plan.
pub const GROUP_STEP_MS: u64 = 200;

/// Delay added per item index within a group (and per cell in a grid plan).
pub const ITEM_STEP_MS: u64 = 100;

// =============================================================================
// Activation plans
// =============================================================================

/// One planned activation: which id fires, and when, relative to the
/// reveal trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub id: String,
    pub delay: Duration,
}

/// Plan a grouped stagger: `delay = group_index * GROUP_STEP + item_index * ITEM_STEP`.
///
/// Items keep (group, item) order in the plan. Delays are non-decreasing
/// within a group; across groups they may interleave (a deep group's tail
/// can land after the next group's head).
pub fn plan_staged(groups: &[Vec<String>]) -> Vec<Activation> {
    let mut plan = Vec::new();
    for (group_index, group) in groups.iter().enumerate() {
        for (item_index, id) in group.iter().enumerate() {
            plan.push(Activation {
                id: id.clone(),
                delay: Duration::from_millis(
                    group_index as u64 * GROUP_STEP_MS + item_index as u64 * ITEM_STEP_MS,
                ),
            });
        }
    }
    plan
}

/// Plan a flat grid stagger: `delay = index * ITEM_STEP`, no group term.
pub fn plan_grid(ids: &[String]) -> Vec<Activation> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| Activation {
            id: id.clone(),
            delay: Duration::from_millis(index as u64 * ITEM_STEP_MS),
        })
        .collect()
}

// =============================================================================
// Activated set + inboxes
// =============================================================================

thread_local! {
    /// Ids that have reached their target state. Grows monotonically per
    /// mount lifecycle; deriveds that read membership react to additions.
    static ACTIVATED: RefCell<ReactiveSet<String>> = RefCell::new(ReactiveSet::new());

    /// Activation order as observed by this thread (fire order).
    static ACTIVATION_LOG: RefCell<Vec<String>> = RefCell::new(Vec::new());

    /// Ids handed to a worker but not yet synced as activated.
    static PENDING: RefCell<HashSet<String>> = RefCell::new(HashSet::new());

    /// Fired-id inboxes, one per live dispatch. Drained on every sync.
    static INBOXES: RefCell<Vec<Arc<Mutex<Vec<String>>>>> = RefCell::new(Vec::new());
}

/// Drain worker inboxes into the reactive activated set.
///
/// Called from every read path so reactive consumers always observe the
/// latest fired state without workers touching thread locals.
pub fn sync_activations() {
    let fired: Vec<String> = INBOXES.with(|inboxes| {
        let mut inboxes = inboxes.borrow_mut();
        let mut fired = Vec::new();
        for inbox in inboxes.iter() {
            if let Ok(mut queue) = inbox.lock() {
                fired.append(&mut queue);
            }
        }
        // An inbox whose worker has exited holds no other Arc clone and,
        // once empty, will never produce again. The emptiness re-check
        // catches a fire that landed between the drain and the prune.
        inboxes.retain(|inbox| {
            Arc::strong_count(inbox) > 1
                || inbox.lock().map(|queue| !queue.is_empty()).unwrap_or(false)
        });
        fired
    });

    for id in fired {
        PENDING.with(|pending| {
            pending.borrow_mut().remove(&id);
        });
        let inserted = ACTIVATED.with(|set| {
            let mut set = set.borrow_mut();
            if set.contains(&id) {
                false
            } else {
                set.insert(id.clone());
                true
            }
        });
        if inserted {
            ACTIVATION_LOG.with(|log| log.borrow_mut().push(id));
        }
    }
}

/// Check whether an item has activated. Syncs first; creates a reactive
/// dependency on the activated set.
pub fn is_activated(id: &str) -> bool {
    sync_activations();
    ACTIVATED.with(|set| set.borrow().contains(&id.to_string()))
}

/// Number of activated items.
pub fn activated_count() -> usize {
    sync_activations();
    ACTIVATED.with(|set| set.borrow().len())
}

/// Ids in the order they activated.
pub fn activation_order() -> Vec<String> {
    sync_activations();
    ACTIVATION_LOG.with(|log| log.borrow().clone())
}

/// Check whether an id is scheduled but not yet fired.
pub fn is_pending(id: &str) -> bool {
    sync_activations();
    PENDING.with(|pending| pending.borrow().contains(id))
}

// =============================================================================
// Dispatch
// =============================================================================

/// Handle to one dispatched schedule.
pub struct RevealHandle {
    cancelled: Arc<AtomicBool>,
    ids: Vec<String>,
}

impl RevealHandle {
    /// Abandon every not-yet-fired activation in this dispatch.
    ///
    /// Already-fired ids stay activated; the rest are un-pended and may be
    /// rescheduled by a later dispatch.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        // Pick up anything that fired before the flag landed, then release
        // the remainder.
        sync_activations();
        PENDING.with(|pending| {
            let mut pending = pending.borrow_mut();
            for id in &self.ids {
                pending.remove(id);
            }
        });
    }

    /// Number of activations this dispatch actually scheduled (after
    /// deduplication against activated and pending ids).
    pub fn scheduled_count(&self) -> usize {
        self.ids.len()
    }
}

/// Dispatch a plan: dedupe, order, and walk it on a worker thread.
///
/// Ids already activated or pending are dropped (idempotence). The plan is
/// stably sorted by delay, so equal-delay items keep plan order and the
/// fired order is the plan order.
pub fn dispatch(plan: Vec<Activation>) -> RevealHandle {
    sync_activations();

    let mut plan = plan;
    plan.sort_by_key(|activation| activation.delay);

    // Drop duplicates within the plan as well as against existing state.
    let mut seen: HashSet<String> = HashSet::new();
    let plan: Vec<Activation> = plan
        .into_iter()
        .filter(|activation| {
            if seen.contains(&activation.id) {
                return false;
            }
            let fresh = !ACTIVATED.with(|set| set.borrow().contains(&activation.id))
                && !PENDING.with(|pending| pending.borrow().contains(&activation.id));
            if fresh {
                seen.insert(activation.id.clone());
            }
            fresh
        })
        .collect();

    let ids: Vec<String> = plan.iter().map(|activation| activation.id.clone()).collect();
    PENDING.with(|pending| {
        let mut pending = pending.borrow_mut();
        for id in &ids {
            pending.insert(id.clone());
        }
    });

    let cancelled = Arc::new(AtomicBool::new(false));

    if !plan.is_empty() {
        let inbox: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        INBOXES.with(|inboxes| inboxes.borrow_mut().push(inbox.clone()));

        let flag = cancelled.clone();
        thread::spawn(move || {
            let start = Instant::now();
            for activation in plan {
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                let elapsed = start.elapsed();
                if activation.delay > elapsed {
                    thread::sleep(activation.delay - elapsed);
                }
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                if let Ok(mut queue) = inbox.lock() {
                    queue.push(activation.id);
                }
            }
        });
    }

    RevealHandle { cancelled, ids }
}

/// Dispatch `plan` when `region` first enters the viewport.
///
/// Returns a cleanup that unregisters the trigger and cancels anything the
/// dispatch still has pending - for the component teardown path.
pub fn activate_when_visible(region: &str, plan: Vec<Activation>) -> impl FnOnce() {
    let handle: Rc<RefCell<Option<RevealHandle>>> = Rc::new(RefCell::new(None));

    let slot = handle.clone();
    let off = viewport::on_enter(region, move || {
        let dispatched = dispatch(plan.clone());
        *slot.borrow_mut() = Some(dispatched);
    });

    move || {
        off();
        if let Some(dispatched) = handle.borrow_mut().take() {
            dispatched.cancel();
        }
    }
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Clear the activated set, log, pending ids, and inboxes (for testing).
///
/// Stranded workers from before the reset may still fire into their old
/// inboxes, but those inboxes are no longer registered and never sync.
pub fn reset_reveal_state() {
    ACTIVATED.with(|set| set.borrow_mut().clear());
    ACTIVATION_LOG.with(|log| log.borrow_mut().clear());
    PENDING.with(|pending| pending.borrow_mut().clear());
    INBOXES.with(|inboxes| inboxes.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================
