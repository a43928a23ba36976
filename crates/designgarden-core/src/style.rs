//! Global style surface and the theme applier.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ThemeState ──apply_to_sink──▶ StyleSink                      │
//! │    theme.primary/secondary/accent  → --primary ...  (always) │
//! │    theme.background/foreground     → --background ... (light)│
//! │    font_pairing                    → #custom-font-style block│
//! │    dark_mode                       → root class "dark"       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! In dark mode the background/foreground variables are left alone: the
//! global stylesheet provides them under the `dark` root class.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{ColorPalette, FontPairing, ThemeState};

pub const VAR_PRIMARY: &str = "--primary";
pub const VAR_SECONDARY: &str = "--secondary";
pub const VAR_ACCENT: &str = "--accent";
pub const VAR_BACKGROUND: &str = "--background";
pub const VAR_FOREGROUND: &str = "--foreground";

/// Identifier of the single generated font rule block.
pub const FONT_STYLE_BLOCK_ID: &str = "custom-font-style";

/// Root class the global stylesheet keys its dark theme on.
pub const DARK_CLASS: &str = "dark";

/// Destination for style mutations (a document, a test double, a file).
pub trait StyleSink {
    /// Set a global custom property, e.g. `--primary`.
    fn set_variable(&mut self, name: &str, value: &str);

    /// Create the rule block `id` if missing, otherwise replace its contents.
    fn set_rule_block(&mut self, id: &str, css_text: &str);

    /// Add or remove a class on the document root.
    fn set_root_class(&mut self, class: &str, enabled: bool);
}

impl<T: StyleSink + ?Sized> StyleSink for &mut T {
    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value)
    }

    fn set_rule_block(&mut self, id: &str, css_text: &str) {
        (**self).set_rule_block(id, css_text)
    }

    fn set_root_class(&mut self, class: &str, enabled: bool) {
        (**self).set_root_class(class, enabled)
    }
}

/// CSS text of the generated font block.
pub fn font_rules_css(font_pairing: &FontPairing) -> String {
    format!(
        "body {{\n  font-family: {};\n}}\n.font-display {{\n  font-family: {};\n}}\n",
        font_pairing.body, font_pairing.display
    )
}

/// Push a theme state onto a style sink. Idempotent.
pub fn apply_to_sink<S: StyleSink + ?Sized>(sink: &mut S, state: &ThemeState) {
    let theme = &state.theme;

    sink.set_variable(VAR_PRIMARY, &theme.primary);
    sink.set_variable(VAR_SECONDARY, &theme.secondary);
    sink.set_variable(VAR_ACCENT, &theme.accent);

    if !state.dark_mode {
        sink.set_variable(VAR_BACKGROUND, &theme.background);
        sink.set_variable(VAR_FOREGROUND, &theme.foreground);
    }

    sink.set_rule_block(FONT_STYLE_BLOCK_ID, &font_rules_css(&state.font_pairing));
    sink.set_root_class(DARK_CLASS, state.dark_mode);
}

/// In-memory style surface.
///
/// Records what a browser document would hold and can render it back out
/// as a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessDocument {
    variables: BTreeMap<String, String>,
    /// Rule blocks in creation order
    blocks: Vec<(String, String)>,
    root_classes: BTreeSet<String>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document whose base stylesheet already defines all five color tokens.
    pub fn seeded(base: &ColorPalette) -> Self {
        let mut doc = Self::new();
        doc.set_variable(VAR_PRIMARY, &base.primary);
        doc.set_variable(VAR_SECONDARY, &base.secondary);
        doc.set_variable(VAR_ACCENT, &base.accent);
        doc.set_variable(VAR_BACKGROUND, &base.background);
        doc.set_variable(VAR_FOREGROUND, &base.foreground);
        doc
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn rule_block(&self, id: &str) -> Option<&str> {
        self.blocks
            .iter()
            .find(|(block_id, _)| block_id == id)
            .map(|(_, css)| css.as_str())
    }

    pub fn rule_block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    /// Render `:root` variables followed by every rule block.
    pub fn to_stylesheet(&self) -> String {
        let mut css = String::new();

        if !self.variables.is_empty() {
            css.push_str(":root {\n");
            for (name, value) in &self.variables {
                css.push_str(&format!("  {}: {};\n", name, value));
            }
            css.push_str("}\n");
        }

        for (id, text) in &self.blocks {
            css.push_str(&format!("\n/* #{} */\n", id));
            css.push_str(text);
        }

        css
    }
}

impl StyleSink for HeadlessDocument {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn set_rule_block(&mut self, id: &str, css_text: &str) {
        match self.blocks.iter_mut().find(|(block_id, _)| block_id == id) {
            Some((_, existing)) => *existing = css_text.to_string(),
            None => self.blocks.push((id.to_string(), css_text.to_string())),
        }
    }

    fn set_root_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.root_classes.insert(class.to_string());
        } else {
            self.root_classes.remove(class);
        }
    }
}
