//! Locale state and translation lookup.
//!
//! One process-wide language signal; [`t`] resolves keys against the
//! static catalog for whichever language is active at read time, so a
//! language switch is observed by every subsequent lookup with no string
//! caching in between.
//!
//! Missing keys degrade to the key itself - a hole in the catalog shows
//! up as a literal `"skills.title"` on the page, never as an error.
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::i18n::{t, set_language, Language};
//!
//! assert_eq!(t("nav.home"), "Home");
//! set_language(Language::Fr);
//! assert_eq!(t("nav.home"), "Accueil");
//! ```

use spark_signals::{Signal, signal};

mod catalog;

// =============================================================================
// Languages
// =============================================================================

/// Supported display languages. Closed set; `En` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    /// BCP 47-ish code used for persistence.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Parse a persisted code. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Flag shown in the language switcher.
    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "\u{1F1FA}\u{1F1F8}",
            Self::Es => "\u{1F1EA}\u{1F1F8}",
            Self::Fr => "\u{1F1EB}\u{1F1F7}",
        }
    }

    /// Native display name shown in the language switcher.
    pub fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }

    /// All languages in switcher order.
    pub fn all() -> [Language; 3] {
        [Self::En, Self::Es, Self::Fr]
    }
}

// =============================================================================
// Active language signal
// =============================================================================

thread_local! {
    static LANGUAGE: Signal<Language> = signal(Language::En);
}

/// The active language.
pub fn language() -> Language {
    LANGUAGE.with(|sig| sig.get())
}

/// Switch the active language. Every later [`t`] call observes it.
pub fn set_language(language: Language) {
    LANGUAGE.with(|sig| sig.set(language));
}

/// Get the language signal for direct reactive tracking.
pub fn language_signal() -> Signal<Language> {
    LANGUAGE.with(|sig| sig.clone())
}

// =============================================================================
// Lookup
// =============================================================================

/// Resolve a translation key in the active language.
///
/// Creates a reactive dependency on the language signal. A key missing
/// from the active catalog comes back verbatim.
pub fn t(key: &str) -> String {
    let language = language();
    catalog::lookup(language, key).unwrap_or(key).to_string()
}

/// Reset the language to the default (for testing).
pub fn reset_i18n_state() {
    set_language(Language::En);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_i18n_state();
    }

    #[test]
    fn test_lookup_follows_active_language() {
        setup();

        assert_eq!(t("nav.home"), "Home");
        set_language(Language::Es);
        assert_eq!(t("nav.home"), "Inicio");
        set_language(Language::Fr);
        assert_eq!(t("nav.home"), "Accueil");
    }

    #[test]
    fn test_missing_key_degrades_to_key() {
        setup();

        assert_eq!(t("missing.key"), "missing.key");
        set_language(Language::Fr);
        assert_eq!(t("missing.key"), "missing.key");
    }

    #[test]
    fn test_code_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn test_every_language_covers_the_page_keys() {
        // The keys the static catalog modules reference must resolve in
        // every language - a hole here would ship a literal key string.
        let mut keys: Vec<&str> = vec![
            "hero.name",
            "skills.title",
            "skills.techStack",
            "projects.title",
            "contact.title",
            "contact.form.send",
            "footer.copyright",
        ];
        for section in crate::state::nav::SectionId::all() {
            keys.push(section.label_key());
        }
        for filter in crate::state::filter::ProjectFilter::all_values() {
            keys.push(filter.label_key());
        }
        for group in &crate::content::SKILL_GROUPS {
            keys.push(group.title_key);
        }
        for project in &crate::content::PROJECTS {
            keys.push(project.title_key);
            keys.push(project.description_key);
        }
        for channel in &crate::content::CONTACT_CHANNELS {
            keys.push(channel.title_key);
        }

        for language in Language::all() {
            set_language(language);
            for key in &keys {
                assert_ne!(t(key), *key, "{key} missing for {language:?}");
            }
        }
        reset_i18n_state();
    }
}
