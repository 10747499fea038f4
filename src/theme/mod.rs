//! Theme state - light/dark mode preference and the resolved palette.
//!
//! One process-wide mode signal. Theme-conditional styling reads
//! [`active_palette`], which resolves the current mode to its preset on
//! every read - switching modes is observed immediately, nothing caches
//! a resolved color.

use spark_signals::{Signal, signal};

pub mod presets;

pub use presets::{dark, light};

// =============================================================================
// Theme mode
// =============================================================================

/// Color scheme preference. Closed set; the default is dark (the
/// portfolio's native look) unless the system says otherwise at init.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Code used for persistence.
    pub fn code(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted code. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<ThemeMode> {
        match code {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// A resolved color palette. All values are CSS hex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    // Accents
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    // Surfaces
    pub background: &'static str,
    pub surface: &'static str,
    pub overlay: &'static str,
    // Text
    pub text: &'static str,
    pub text_muted: &'static str,
    // Lines
    pub border: &'static str,
}

// =============================================================================
// Mode signal
// =============================================================================

thread_local! {
    static MODE: Signal<ThemeMode> = signal(ThemeMode::Dark);
}

/// The active theme mode.
pub fn theme_mode() -> ThemeMode {
    MODE.with(|sig| sig.get())
}

/// Set the theme mode directly.
pub fn set_theme_mode(mode: ThemeMode) {
    MODE.with(|sig| sig.set(mode));
}

/// Flip between light and dark.
pub fn toggle_theme() {
    MODE.with(|sig| sig.set(sig.get().toggled()));
}

/// Get the mode signal for direct reactive tracking.
pub fn theme_mode_signal() -> Signal<ThemeMode> {
    MODE.with(|sig| sig.clone())
}

/// Resolve the active mode to its palette.
///
/// Creates a reactive dependency on the mode signal.
pub fn active_palette() -> Palette {
    match theme_mode() {
        ThemeMode::Light => presets::light(),
        ThemeMode::Dark => presets::dark(),
    }
}

/// Reset the mode to the default (for testing).
pub fn reset_theme_state() {
    set_theme_mode(ThemeMode::Dark);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_theme_state();
    }

    #[test]
    fn test_toggle_flips_mode() {
        setup();

        assert_eq!(theme_mode(), ThemeMode::Dark);
        toggle_theme();
        assert_eq!(theme_mode(), ThemeMode::Light);
        toggle_theme();
        assert_eq!(theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_palette_follows_mode() {
        setup();

        assert_eq!(active_palette().name, "dark");
        set_theme_mode(ThemeMode::Light);
        assert_eq!(active_palette().name, "light");
    }

    #[test]
    fn test_accents_shared_across_modes() {
        let light = presets::light();
        let dark = presets::dark();
        assert_eq!(light.primary, dark.primary);
        assert_eq!(light.secondary, dark.secondary);
        assert_eq!(light.tertiary, dark.tertiary);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn test_code_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(ThemeMode::from_code("solarized"), None);
    }
}
