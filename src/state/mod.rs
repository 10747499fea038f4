//! State Module - the reactive systems behind the page.
//!
//! - **Viewport** - one-shot "entered viewport" latches per region
//! - **Reveal** - staged, once-only activation of animatable items
//! - **Filter** - active project category and the derived visible list
//! - **Nav** - scroll position, scroll-to-section requests, hero timing
//! - **Contact** - form record, validation, submission lifecycle
//! - **Notice** - drainable toast queue
//! - **Timer** - one-shot timers with arena-style cancellation

pub mod contact;
pub mod filter;
pub mod nav;
pub mod notice;
pub mod reveal;
pub mod timer;
pub mod viewport;
