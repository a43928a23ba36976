//! Theme store events and the user-facing notices they map to.

use std::fmt;

/// Something the theme store did, delivered to subscribed listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEvent {
    /// A catalog palette was selected
    PaletteChanged { name: String },
    /// A font pairing was selected
    FontPairingChanged { name: String },
    /// The primary color was overridden by the user
    CustomColorApplied { primary: String },
    /// Dark mode was switched on or off
    DarkModeToggled { enabled: bool },
    /// The current state was pushed to the style surface and storage
    Applied,
}

/// Short title/description pair for a toast or status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl ThemeEvent {
    pub fn notice(&self) -> Notice {
        let (title, description) = match self {
            ThemeEvent::PaletteChanged { name } => (
                "Color palette updated",
                format!("'{}' palette applied to design system.", name),
            ),
            ThemeEvent::FontPairingChanged { name } => (
                "Typography updated",
                format!("'{}' font pairing applied to design system.", name),
            ),
            ThemeEvent::CustomColorApplied { .. } => (
                "Custom color applied",
                "Your custom primary color has been applied.".to_string(),
            ),
            ThemeEvent::DarkModeToggled { enabled: true } => (
                "Dark mode enabled",
                "Background and foreground now follow the dark stylesheet.".to_string(),
            ),
            ThemeEvent::DarkModeToggled { enabled: false } => (
                "Dark mode disabled",
                "Background and foreground now follow the active palette.".to_string(),
            ),
            ThemeEvent::Applied => (
                "Theme applied",
                "Your theme changes have been saved.".to_string(),
            ),
        };

        Notice {
            title: title.to_string(),
            description,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
