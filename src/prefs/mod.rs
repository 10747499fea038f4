//! Preference persistence - language and theme across sessions.
//!
//! The storage medium is the host's business (local storage, a file,
//! whatever); the core speaks to it through the [`PreferenceStore`] trait
//! and the store is always passed in explicitly - there is no ambient
//! global store.
//!
//! [`init`] runs once at startup: stored preferences win, otherwise the
//! language falls back to English and the theme to the system hint.
//! Unparseable stored values fall back the same way.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::i18n::{self, Language};
use crate::theme::{self, ThemeMode};

/// Preference key for the persisted language code.
pub const LANGUAGE_KEY: &str = "portfolio-language";

/// Preference key for the persisted theme mode.
pub const THEME_KEY: &str = "portfolio-theme";

// =============================================================================
// Store trait
// =============================================================================

/// String key-value persistence. Implementations decide the medium.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store - the default when the host offers no persistence, and
/// the test double.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

// =============================================================================
// Init / persist
// =============================================================================

/// Apply stored preferences, falling back to defaults.
///
/// Language default is [`Language::En`]; theme default follows the host's
/// system hint. Call once at startup, before the first render.
pub fn init(store: &dyn PreferenceStore, system_prefers_dark: bool) {
    let language = store
        .get(LANGUAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default();
    i18n::set_language(language);

    let mode = store
        .get(THEME_KEY)
        .and_then(|code| ThemeMode::from_code(&code))
        .unwrap_or(if system_prefers_dark { ThemeMode::Dark } else { ThemeMode::Light });
    theme::set_theme_mode(mode);
}

/// Write the current language and theme to the store.
pub fn persist(store: &dyn PreferenceStore) {
    store.set(LANGUAGE_KEY, i18n::language().code());
    store.set(THEME_KEY, theme::theme_mode().code());
}

/// Switch language and persist it in one step (the language menu path).
pub fn remember_language(store: &dyn PreferenceStore, language: Language) {
    i18n::set_language(language);
    store.set(LANGUAGE_KEY, language.code());
}

/// Toggle the theme and persist it in one step (the theme button path).
pub fn remember_theme_toggle(store: &dyn PreferenceStore) {
    theme::toggle_theme();
    store.set(THEME_KEY, theme::theme_mode().code());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        i18n::reset_i18n_state();
        theme::reset_theme_state();
    }

    #[test]
    fn test_init_with_empty_store_uses_defaults() {
        setup();

        let store = MemoryStore::new();
        init(&store, false);

        assert_eq!(i18n::language(), Language::En);
        assert_eq!(theme::theme_mode(), ThemeMode::Light);

        init(&store, true);
        assert_eq!(theme::theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_stored_preferences_win_over_system_hint() {
        setup();

        let store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "fr");
        store.set(THEME_KEY, "light");

        init(&store, true);
        assert_eq!(i18n::language(), Language::Fr);
        assert_eq!(theme::theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        setup();

        let store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "klingon");
        store.set(THEME_KEY, "sepia");

        init(&store, true);
        assert_eq!(i18n::language(), Language::En);
        assert_eq!(theme::theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_remember_round_trip() {
        setup();

        let store = MemoryStore::new();
        remember_language(&store, Language::Es);
        remember_theme_toggle(&store); // dark -> light

        // A fresh session restores both.
        i18n::reset_i18n_state();
        theme::reset_theme_state();
        init(&store, true);

        assert_eq!(i18n::language(), Language::Es);
        assert_eq!(theme::theme_mode(), ThemeMode::Light);
    }
}
