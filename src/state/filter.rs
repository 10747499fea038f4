//! Filter/Selection State - the active project category filter.
//!
//! Exactly one filter value is active at a time, held in a signal. The
//! visible project list is derived in place from the static catalog -
//! exact category match, or everything under the `All` sentinel - always
//! preserving catalog order.
//!
//! Filtering is presentation-only state: it never resets or replays the
//! reveal module's activated set, so a card that was animated in stays in
//! its settled state when it reappears under a different filter.

use spark_signals::{Derived, Signal, derived, signal};

use crate::content::{PROJECTS, Project, ProjectCategory};

// =============================================================================
// Filter values
// =============================================================================

/// The closed set of filter values. `All` is the default sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    React,
    JavaScript,
    Css,
}

impl ProjectFilter {
    /// Translation key for the filter button label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::All => "projects.filter.all",
            Self::React => "projects.filter.react",
            Self::JavaScript => "projects.filter.javascript",
            Self::Css => "projects.filter.css",
        }
    }

    /// All filter values in display order.
    pub fn all_values() -> [ProjectFilter; 4] {
        [Self::All, Self::React, Self::JavaScript, Self::Css]
    }

    fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::React => category == ProjectCategory::React,
            Self::JavaScript => category == ProjectCategory::JavaScript,
            Self::Css => category == ProjectCategory::Css,
        }
    }
}

// =============================================================================
// Active filter signal
// =============================================================================

thread_local! {
    static ACTIVE_FILTER: Signal<ProjectFilter> = signal(ProjectFilter::All);
}

/// Get the active filter.
pub fn active_filter() -> ProjectFilter {
    ACTIVE_FILTER.with(|sig| sig.get())
}

/// Set the active filter. No other side effects.
pub fn set_filter(filter: ProjectFilter) {
    ACTIVE_FILTER.with(|sig| sig.set(filter));
}

/// Get the filter signal for direct reactive tracking.
pub fn filter_signal() -> Signal<ProjectFilter> {
    ACTIVE_FILTER.with(|sig| sig.clone())
}

// =============================================================================
// Derived visibility
// =============================================================================

/// The projects visible under the active filter, in catalog order.
///
/// Creates a reactive dependency on the filter signal when called from a
/// derived or effect.
pub fn visible_projects() -> Vec<&'static Project> {
    let filter = active_filter();
    PROJECTS
        .iter()
        .filter(|project| filter.matches(project.category))
        .collect()
}

/// Create a derived over the visible project list.
///
/// Re-runs whenever the active filter changes.
pub fn create_visible_projects_derived()
-> Derived<Vec<&'static Project>> {
    let filter_sig = filter_signal();
    derived(move || {
        let filter = filter_sig.get();
        PROJECTS
            .iter()
            .filter(|project| filter.matches(project.category))
            .collect()
    })
}

/// Reset the filter to the default sentinel (for testing).
pub fn reset_filter_state() {
    set_filter(ProjectFilter::All);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_filter_state();
    }

    #[test]
    fn test_default_filter_shows_everything() {
        setup();

        assert_eq!(active_filter(), ProjectFilter::All);
        let visible = visible_projects();
        assert_eq!(visible.len(), PROJECTS.len());
        // Catalog order preserved
        for (shown, project) in visible.iter().zip(PROJECTS.iter()) {
            assert_eq!(shown.id, project.id);
        }
    }

    #[test]
    fn test_category_filter_exact_subset() {
        setup();

        set_filter(ProjectFilter::React);
        let visible = visible_projects();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == ProjectCategory::React));
        // Relative order preserved
        assert!(visible[0].id < visible[1].id);
    }

    #[test]
    fn test_one_active_value_at_a_time() {
        setup();

        set_filter(ProjectFilter::Css);
        set_filter(ProjectFilter::JavaScript);
        assert_eq!(active_filter(), ProjectFilter::JavaScript);
    }

    #[test]
    fn test_filtering_does_not_touch_activations() {
        use crate::state::reveal;

        setup();
        reveal::reset_reveal_state();

        let handle = reveal::dispatch(vec![reveal::Activation {
            id: "project-1".to_string(),
            delay: std::time::Duration::ZERO,
        }]);
        for _ in 0..100 {
            if reveal::activated_count() == 1 {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert!(reveal::is_activated("project-1"));

        set_filter(ProjectFilter::Css);
        set_filter(ProjectFilter::All);
        assert!(reveal::is_activated("project-1"));

        handle.cancel();
    }

    #[test]
    fn test_derived_reacts_to_filter() {
        setup();

        let visible = create_visible_projects_derived();
        assert_eq!(visible.get().len(), PROJECTS.len());

        set_filter(ProjectFilter::Css);
        assert_eq!(visible.get().len(), 2);
    }
}
