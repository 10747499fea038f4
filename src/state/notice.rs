//! Transient user-facing notices (the toast queue).
//!
//! Validation failures, submission results, and similar advisory messages
//! land here; presentation drains the queue and renders toasts however it
//! likes. Notices are never errors - pushing one cannot fail and nothing
//! depends on them being consumed.

use std::cell::RefCell;
use std::collections::VecDeque;

/// Oldest notices are dropped beyond this depth; an undrained queue must
/// not grow without bound.
const MAX_QUEUED: usize = 16;

/// Visual flavor of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One queued notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, title: title.into(), body: body.into() }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.into(), body: body.into() }
    }
}

thread_local! {
    static NOTICES: RefCell<VecDeque<Notice>> = RefCell::new(VecDeque::new());
}

/// Queue a notice, dropping the oldest when full.
pub fn push_notice(notice: Notice) {
    NOTICES.with(|queue| {
        let mut queue = queue.borrow_mut();
        if queue.len() == MAX_QUEUED {
            queue.pop_front();
        }
        queue.push_back(notice);
    });
}

/// Drain every queued notice, oldest first.
pub fn take_notices() -> Vec<Notice> {
    NOTICES.with(|queue| queue.borrow_mut().drain(..).collect())
}

/// Number of queued notices.
pub fn notice_count() -> usize {
    NOTICES.with(|queue| queue.borrow().len())
}

/// Clear the queue (for testing).
pub fn reset_notice_state() {
    NOTICES.with(|queue| queue.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_notice_state();
    }

    #[test]
    fn test_drain_in_order() {
        setup();

        push_notice(Notice::info("first", "a"));
        push_notice(Notice::error("second", "b"));

        let drained = take_notices();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "first");
        assert_eq!(drained[1].kind, NoticeKind::Error);
        assert_eq!(notice_count(), 0);
    }

    #[test]
    fn test_overflow_drops_oldest() {
        setup();

        for i in 0..MAX_QUEUED + 3 {
            push_notice(Notice::info(format!("n{i}"), ""));
        }

        let drained = take_notices();
        assert_eq!(drained.len(), MAX_QUEUED);
        assert_eq!(drained[0].title, "n3");
    }
}
