//! Palette presets - one per theme mode.
//!
//! The accent trio (electric blue, purple glow, soft cyan) is shared by
//! both modes; surfaces and text flip.

use super::Palette;

/// Light mode palette.
pub fn light() -> Palette {
    Palette {
        name: "light",
        // Accents
        primary: "#00D9FF",   // electric blue
        secondary: "#B366FF", // purple glow
        tertiary: "#66F0FF",  // soft cyan
        // Surfaces
        background: "#FAFAFC",
        surface: "#FFFFFF",
        overlay: "#F1F3F7",
        // Text
        text: "#111827",
        text_muted: "#4B5563",
        // Lines
        border: "#E5E7EB",
    }
}

/// Dark mode palette.
pub fn dark() -> Palette {
    Palette {
        name: "dark",
        // Accents
        primary: "#00D9FF",
        secondary: "#B366FF",
        tertiary: "#66F0FF",
        // Surfaces
        background: "#0B0F1A",
        surface: "#111827",
        overlay: "#1F2937",
        // Text
        text: "#F9FAFB",
        text_muted: "#D1D5DB",
        // Lines
        border: "#374151",
    }
}
