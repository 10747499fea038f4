//! Contact form - field state, fail-fast validation, submission lifecycle.
//!
//! The form record lives in one signal, edited field by field. Submission
//! validates in a fixed order and stops at the first failing field, then
//! drives `Idle -> Submitting -> Succeeded | Failed`. Delivery runs on a
//! worker thread behind the [`SubmissionBackend`] seam; its outcome lands
//! in a shared cell and is folded into the status signal on read.
//!
//! The in-flight flag is guaranteed to release: the worker wraps delivery
//! in `catch_unwind`, so even a panicking backend resolves to `Failed`
//! and the form is ready for the next user-initiated retry. There is no
//! automatic retry.
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::state::contact::{self, Field, SimulatedBackend};
//!
//! contact::set_field(Field::Name, "Alex Chen");
//! contact::set_field(Field::Email, "alex@example.com");
//! contact::set_field(Field::Subject, "Hello");
//! contact::set_field(Field::Message, "Nice site!");
//!
//! contact::submit(SimulatedBackend::default())?;
//! // ... poll contact::submission_status() from the render path ...
//! ```

use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use regex_lite::Regex;
use spark_signals::{Signal, signal};
use thiserror::Error;

use super::notice::{Notice, push_notice};

// =============================================================================
// Form record
// =============================================================================

/// The contact form's field values. Reset to empty on successful delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Form fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// A user-correctable validation failure on one field. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

/// Delivery failed. Surfaced as a transient status; retryable by
/// resubmitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("the message could not be delivered")]
    Delivery,
}

// =============================================================================
// Validation
// =============================================================================

thread_local! {
    static EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

fn email_is_valid(email: &str) -> bool {
    EMAIL_PATTERN.with(|pattern| pattern.is_match(email))
}

/// Validate the record field by field, stopping at the first failure.
///
/// Order: name non-empty, email non-empty, email well-formed, subject
/// non-empty, message non-empty. Whitespace-only counts as empty.
pub fn validate(form: &ContactForm) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError {
            field: Field::Name,
            message: "Please enter your name.".to_string(),
        });
    }
    if form.email.trim().is_empty() {
        return Err(ValidationError {
            field: Field::Email,
            message: "Please enter your email address.".to_string(),
        });
    }
    if !email_is_valid(form.email.trim()) {
        return Err(ValidationError {
            field: Field::Email,
            message: "Please enter a valid email address.".to_string(),
        });
    }
    if form.subject.trim().is_empty() {
        return Err(ValidationError {
            field: Field::Subject,
            message: "Please enter a subject.".to_string(),
        });
    }
    if form.message.trim().is_empty() {
        return Err(ValidationError {
            field: Field::Message,
            message: "Please enter your message.".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Submission lifecycle
// =============================================================================

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Delivery seam. The real transport is out of scope; the core only needs
/// an eventual success-or-failure for one record.
pub trait SubmissionBackend: Send + 'static {
    fn deliver(&self, form: &ContactForm) -> Result<(), SubmissionError>;
}

/// The original's stand-in backend: sleep a fixed latency, then resolve.
pub struct SimulatedBackend {
    pub latency: Duration,
    pub fail: bool,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self { latency: Duration::from_millis(1000), fail: false }
    }
}

impl SubmissionBackend for SimulatedBackend {
    fn deliver(&self, _form: &ContactForm) -> Result<(), SubmissionError> {
        thread::sleep(self.latency);
        if self.fail { Err(SubmissionError::Delivery) } else { Ok(()) }
    }
}

thread_local! {
    static FORM: Signal<ContactForm> = signal(ContactForm::default());
    static STATUS: Signal<SubmissionStatus> = signal(SubmissionStatus::Idle);

    /// Outcome cell shared with the delivery worker, present while a
    /// submission is in flight.
    static OUTCOME: RefCell<Option<Arc<Mutex<Option<Result<(), SubmissionError>>>>>> =
        const { RefCell::new(None) };
}

/// Current field values.
pub fn form() -> ContactForm {
    FORM.with(|sig| sig.get())
}

/// Update one field from an input event.
pub fn set_field(field: Field, value: impl Into<String>) {
    let value = value.into();
    FORM.with(|sig| {
        let mut form = sig.get();
        match field {
            Field::Name => form.name = value,
            Field::Email => form.email = value,
            Field::Subject => form.subject = value,
            Field::Message => form.message = value,
        }
        sig.set(form);
    });
}

/// Current status, with the worker's outcome folded in.
///
/// On a settled outcome: success clears the record and queues the success
/// notice; failure queues the error notice. Either way the in-flight flag
/// is released and the form accepts the next submit.
pub fn submission_status() -> SubmissionStatus {
    let settled = OUTCOME.with(|cell| {
        let mut cell = cell.borrow_mut();
        let outcome = cell
            .as_ref()
            .and_then(|shared| shared.lock().ok().and_then(|mut slot| slot.take()));
        if outcome.is_some() {
            *cell = None;
        }
        outcome
    });

    if let Some(outcome) = settled {
        match outcome {
            Ok(()) => {
                FORM.with(|sig| sig.set(ContactForm::default()));
                STATUS.with(|sig| sig.set(SubmissionStatus::Succeeded));
                push_notice(Notice::info(
                    "Message Sent!",
                    "Thank you for your message. I'll get back to you soon!",
                ));
            }
            Err(_) => {
                STATUS.with(|sig| sig.set(SubmissionStatus::Failed));
                push_notice(Notice::error(
                    "Error",
                    "There was an error sending your message. Please try again.",
                ));
            }
        }
    }

    STATUS.with(|sig| sig.get())
}

/// Whether a submission is in flight.
pub fn is_submitting() -> bool {
    submission_status() == SubmissionStatus::Submitting
}

/// Validate and, if valid, hand the record to the backend.
///
/// On a validation failure the error is returned and queued as a notice;
/// the status does not move to `Submitting`. A submit while one is already
/// in flight is ignored (the original disables the button). `Succeeded`
/// and `Failed` are ready states: submitting from them starts a new
/// attempt.
pub fn submit(backend: impl SubmissionBackend) -> Result<(), ValidationError> {
    let form = form();
    if let Err(err) = validate(&form) {
        push_notice(Notice::error("Validation Error", err.message.clone()));
        return Err(err);
    }

    if submission_status() == SubmissionStatus::Submitting {
        return Ok(());
    }

    STATUS.with(|sig| sig.set(SubmissionStatus::Submitting));

    let shared: Arc<Mutex<Option<Result<(), SubmissionError>>>> = Arc::new(Mutex::new(None));
    OUTCOME.with(|cell| {
        *cell.borrow_mut() = Some(shared.clone());
    });

    thread::spawn(move || {
        // A panicking backend still settles the outcome - the in-flight
        // flag must come down no matter what delivery does.
        let result = catch_unwind(AssertUnwindSafe(|| backend.deliver(&form)))
            .unwrap_or(Err(SubmissionError::Delivery));
        if let Ok(mut slot) = shared.lock() {
            *slot = Some(result);
        }
    });

    Ok(())
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset the form, status, and any in-flight outcome cell (for testing).
///
/// A worker from before the reset may still settle its old cell, but the
/// cell is no longer registered and never folds into the status.
pub fn reset_contact_state() {
    FORM.with(|sig| sig.set(ContactForm::default()));
    STATUS.with(|sig| sig.set(SubmissionStatus::Idle));
    OUTCOME.with(|cell| *cell.borrow_mut() = None);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::notice::{self, NoticeKind};

    fn setup() {
        reset_contact_state();
        notice::reset_notice_state();
    }

    fn valid_form() {
        set_field(Field::Name, "Alex Chen");
        set_field(Field::Email, "alex@example.com");
        set_field(Field::Subject, "Hello");
        set_field(Field::Message, "Nice site!");
    }

    fn wait_for_settled() -> SubmissionStatus {
        for _ in 0..100 {
            let status = submission_status();
            if status != SubmissionStatus::Submitting {
                return status;
            }
            thread::sleep(Duration::from_millis(5));
        }
        submission_status()
    }

    struct PanickingBackend;
    impl SubmissionBackend for PanickingBackend {
        fn deliver(&self, _form: &ContactForm) -> Result<(), SubmissionError> {
            panic!("backend blew up");
        }
    }

    #[test]
    fn test_validation_fails_on_name_first() {
        let form = ContactForm {
            name: String::new(),
            email: "a@b.com".to_string(),
            subject: "s".to_string(),
            message: "m".to_string(),
        };
        let err = validate(&form).unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert_eq!(err.message, "Please enter your name.");
    }

    #[test]
    fn test_malformed_email_reports_pattern_reason() {
        let form = ContactForm {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            subject: "s".to_string(),
            message: "m".to_string(),
        };
        let err = validate(&form).unwrap_err();
        assert_eq!(err.field, Field::Email);
        assert_eq!(err.message, "Please enter a valid email address.");
    }

    #[test]
    fn test_email_needs_a_domain_dot() {
        let mut form = ContactForm {
            name: "A".to_string(),
            email: "a@b".to_string(),
            subject: "s".to_string(),
            message: "m".to_string(),
        };
        assert!(validate(&form).is_err());

        form.email = "a@b.co".to_string();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: "a@b.com".to_string(),
            subject: "s".to_string(),
            message: "m".to_string(),
        };
        assert_eq!(validate(&form).unwrap_err().field, Field::Name);
    }

    #[test]
    fn test_invalid_submit_leaves_status_idle() {
        setup();

        set_field(Field::Email, "someone@example.com");
        let err = submit(SimulatedBackend::default()).unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert_eq!(submission_status(), SubmissionStatus::Idle);

        let notices = notice::take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }

    #[test]
    fn test_successful_submit_lifecycle() {
        setup();
        valid_form();

        submit(SimulatedBackend { latency: Duration::from_millis(10), fail: false }).unwrap();
        assert_eq!(submission_status(), SubmissionStatus::Submitting);
        assert!(is_submitting());

        assert_eq!(wait_for_settled(), SubmissionStatus::Succeeded);
        assert!(!is_submitting());
        assert_eq!(form(), ContactForm::default());

        let notices = notice::take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Info);
    }

    #[test]
    fn test_failed_submit_keeps_record_and_allows_retry() {
        setup();
        valid_form();

        submit(SimulatedBackend { latency: Duration::from_millis(10), fail: true }).unwrap();
        assert_eq!(wait_for_settled(), SubmissionStatus::Failed);

        // Record preserved for the retry
        assert_eq!(form().name, "Alex Chen");

        // Retry succeeds
        submit(SimulatedBackend { latency: Duration::from_millis(10), fail: false }).unwrap();
        assert_eq!(wait_for_settled(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_panicking_backend_releases_inflight_flag() {
        setup();
        valid_form();

        submit(PanickingBackend).unwrap();
        assert_eq!(wait_for_settled(), SubmissionStatus::Failed);
        assert!(!is_submitting());
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        setup();
        valid_form();

        submit(SimulatedBackend { latency: Duration::from_millis(50), fail: false }).unwrap();
        // Second submit neither errors nor replaces the outcome cell.
        submit(SimulatedBackend { latency: Duration::from_millis(1), fail: true }).unwrap();

        assert_eq!(wait_for_settled(), SubmissionStatus::Succeeded);
    }
}
