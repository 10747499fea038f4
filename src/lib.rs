//! # spark-folio
//!
//! Reactive state core for a single-page portfolio site.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity. The crate renders nothing: it holds the page's
//! behavioral state - reveal animations, project filtering, form lifecycle,
//! locale and theme preferences - as signals and derived values for a
//! presentation layer to read.
//!
//! ## Architecture
//!
//! Everything is single-threaded and callback-driven. Timer work (staged
//! reveal delays, simulated submission latency) runs on detached worker
//! threads that write into `Arc` shared cells; reactive state is synced
//! from those cells on read, so workers never touch thread-local signals.
//!
//! ```text
//! host scroll/intersection feed → viewport latch → reveal dispatch → activated set
//! user input → contact form signal → validate → submission worker → status
//! ```
//!
//! ## Modules
//!
//! - [`content`] - the static catalog (skills, projects, badges, channels)
//! - [`state`] - viewport, reveal, filter, nav, contact, notices, timers
//! - [`i18n`] - language preference and translation lookup
//! - [`theme`] - light/dark mode and the resolved palette
//! - [`prefs`] - preference persistence behind an injected store

pub mod content;
pub mod i18n;
pub mod prefs;
pub mod state;
pub mod theme;

// Re-export commonly used items

pub use content::{
    CONTACT_CHANNELS, ContactChannel, PROJECTS, Project, ProjectCategory, SKILL_GROUPS, Skill,
    SkillGroup, TECH_BADGES, TechBadge, skill_activation_groups, skill_activation_id,
    tech_badge_activation_ids,
};

pub use state::viewport::{
    is_visible, observe, on_enter, report_intersection, reset_viewport_state, visibility_signal,
};

pub use state::reveal::{
    Activation, GROUP_STEP_MS, ITEM_STEP_MS, RevealHandle, activate_when_visible,
    activated_count, activation_order, dispatch, is_activated, plan_grid, plan_staged,
    reset_reveal_state, sync_activations,
};

pub use state::filter::{
    ProjectFilter, active_filter, create_visible_projects_derived, filter_signal,
    reset_filter_state, set_filter, visible_projects,
};

pub use state::nav::{
    NAV_SCROLL_THRESHOLD, SectionId, TYPING_DURATION_MS, is_scrolled, reset_nav_state,
    scroll_position, scroll_to_section, set_scroll_position, start_typing_timer,
    take_scroll_request, typing_complete,
};

pub use state::contact::{
    ContactForm, Field, SimulatedBackend, SubmissionBackend, SubmissionError, SubmissionStatus,
    ValidationError, form, is_submitting, reset_contact_state, set_field, submission_status,
    submit, validate,
};

pub use state::notice::{Notice, NoticeKind, push_notice, reset_notice_state, take_notices};

pub use state::timer::{TimerHandle, TimerSet, set_timeout};

pub use i18n::{Language, language, language_signal, reset_i18n_state, set_language, t};

pub use theme::{
    Palette, ThemeMode, active_palette, reset_theme_state, set_theme_mode, theme_mode,
    theme_mode_signal, toggle_theme,
};

pub use prefs::{LANGUAGE_KEY, MemoryStore, PreferenceStore, THEME_KEY};
