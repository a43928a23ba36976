//! Core types for Design Garden
//!
//! Colors are stored the way the global stylesheet consumes them: a
//! space-separated HSL triple such as `"262 83% 74%"`, wrapped in `hsl(...)`
//! only at the point of use.

use serde::{Deserialize, Serialize};

/// Name given to a palette whose primary color was overridden by the user.
pub const CUSTOM_PALETTE_NAME: &str = "Custom";

/// A named set of color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Display name, unique within the catalog
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
}

impl ColorPalette {
    /// Build a palette from string slices (used by the static catalog).
    pub fn new(
        name: &str,
        primary: &str,
        secondary: &str,
        accent: &str,
        background: &str,
        foreground: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            foreground: foreground.to_string(),
        }
    }

    /// Copy of this palette with only `primary` replaced, renamed to "Custom".
    ///
    /// The color string is taken as-is; no format check is performed.
    pub fn with_custom_primary(&self, primary: impl Into<String>) -> Self {
        Self {
            name: CUSTOM_PALETTE_NAME.to_string(),
            primary: primary.into(),
            ..self.clone()
        }
    }

    /// Whether this palette is a user override rather than a catalog entry.
    pub fn is_custom(&self) -> bool {
        self.name == CUSTOM_PALETTE_NAME
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        crate::catalog::default_palette()
    }
}

/// A display/body font-family pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPairing {
    pub name: String,
    /// Font-family list for headings (`.font-display`)
    pub display: String,
    /// Font-family list for running text (`body`)
    pub body: String,
}

impl FontPairing {
    pub fn new(name: &str, display: &str, body: &str) -> Self {
        Self {
            name: name.to_string(),
            display: display.to_string(),
            body: body.to_string(),
        }
    }
}

impl Default for FontPairing {
    fn default() -> Self {
        crate::catalog::default_font_pairing()
    }
}

/// A layout template annotated with whether it suits the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSuggestion {
    pub name: &'static str,
    pub description: &'static str,
    /// Derived from the selection, never stored
    pub suitable: bool,
    /// Structural template identifier (utility classes), shown as a preview
    pub preview_class: &'static str,
}

/// The complete theme selection owned by [`crate::ThemeStore`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub theme: ColorPalette,
    pub font_pairing: FontPairing,
    pub dark_mode: bool,
}

impl ThemeState {
    pub fn new(theme: ColorPalette, font_pairing: FontPairing, dark_mode: bool) -> Self {
        Self {
            theme,
            font_pairing,
            dark_mode,
        }
    }
}

/// Render a stored HSL triple as a CSS color value.
pub fn hsl_css(value: &str) -> String {
    format!("hsl({})", value)
}

/// Loose check that a string has the `H S% L%` shape.
///
/// Only used to warn about suspicious input; custom colors are never rejected.
pub fn looks_like_hsl(value: &str) -> bool {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 3 {
        return false;
    }
    let hue_ok = parts[0].parse::<f32>().is_ok();
    let pct_ok = |s: &str| {
        s.strip_suffix('%')
            .map(|n| n.parse::<f32>().is_ok())
            .unwrap_or(false)
    };
    hue_ok && pct_ok(parts[1]) && pct_ok(parts[2])
}
