//! The theme store: owner of the single [`ThemeState`].
//!
//! Setters only touch in-memory state (and the cached layout suggestions).
//! Nothing reaches the style surface or storage until [`ThemeStore::apply_theme`].
//!
//! ```ignore
//! let mut doc = HeadlessDocument::new();
//! let mut store = ThemeStore::restore(RedbStore::open(path)?, &mut doc);
//!
//! store.set_palette(catalog::find_palette("Ocean Blue")?.clone());
//! store.set_font_pairing(catalog::find_font_pairing("Technical")?.clone());
//! store.apply_theme(&mut doc);
//! ```

use crate::events::ThemeEvent;
use crate::layout::suggest_layouts;
use crate::persistence::{load_state, save_state};
use crate::storage::KvStore;
use crate::style::{apply_to_sink, StyleSink};
use crate::types::{looks_like_hsl, ColorPalette, FontPairing, LayoutSuggestion, ThemeState};

/// Callback invoked for every [`ThemeEvent`].
pub type Listener = Box<dyn FnMut(&ThemeEvent)>;

/// Push a theme state to the style surface, then persist it.
///
/// Storage failures are logged and dropped; the style surface keeps the new
/// values either way.
pub fn apply_theme_to_dom<S, K>(sink: &mut S, kv: &K, state: &ThemeState)
where
    S: StyleSink + ?Sized,
    K: KvStore + ?Sized,
{
    apply_to_sink(sink, state);

    if let Err(e) = save_state(kv, state) {
        tracing::warn!(error = %e, "failed to persist theme, keeping previous stored value");
    }
}

/// Holds the current theme selection and the storage it is persisted to.
pub struct ThemeStore<K: KvStore> {
    state: ThemeState,
    suggestions: Vec<LayoutSuggestion>,
    kv: K,
    listeners: Vec<Listener>,
}

impl<K: KvStore> ThemeStore<K> {
    /// Store with the built-in defaults, ignoring anything in storage.
    pub fn new(kv: K) -> Self {
        Self::with_state(kv, ThemeState::default())
    }

    /// Store hydrated from storage. Each field falls back independently.
    pub fn hydrate(kv: K) -> Self {
        let state = load_state(&kv);
        tracing::debug!(
            theme = %state.theme.name,
            font_pairing = %state.font_pairing.name,
            dark_mode = state.dark_mode,
            "hydrated theme state"
        );
        Self::with_state(kv, state)
    }

    /// Startup path: hydrate, then apply once so the style surface matches
    /// what was stored.
    pub fn restore<S: StyleSink + ?Sized>(kv: K, sink: &mut S) -> Self {
        let store = Self::hydrate(kv);
        apply_theme_to_dom(sink, &store.kv, &store.state);
        store
    }

    fn with_state(kv: K, state: ThemeState) -> Self {
        let suggestions = suggest_layouts(&state.theme, &state.font_pairing);
        Self {
            state,
            suggestions,
            kv,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Layout suggestions for the current palette and font pairing.
    pub fn suggestions(&self) -> &[LayoutSuggestion] {
        &self.suggestions
    }

    pub fn storage(&self) -> &K {
        &self.kv
    }

    /// Register a listener for store events.
    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_palette(&mut self, palette: ColorPalette) {
        tracing::debug!(palette = %palette.name, "palette selected");
        let name = palette.name.clone();
        self.state.theme = palette;
        self.refresh_suggestions();
        self.emit(ThemeEvent::PaletteChanged { name });
    }

    pub fn set_font_pairing(&mut self, font_pairing: FontPairing) {
        tracing::debug!(font_pairing = %font_pairing.name, "font pairing selected");
        let name = font_pairing.name.clone();
        self.state.font_pairing = font_pairing;
        self.refresh_suggestions();
        self.emit(ThemeEvent::FontPairingChanged { name });
    }

    /// Override the primary color of the current palette.
    ///
    /// The value is stored verbatim. A malformed color only shows up later as
    /// an invalid style value.
    pub fn set_custom_primary_color(&mut self, primary: impl Into<String>) {
        let primary = primary.into();
        if !looks_like_hsl(&primary) {
            tracing::warn!(value = %primary, "custom primary color is not an HSL triple");
        }

        self.state.theme = self.state.theme.with_custom_primary(primary.clone());
        self.refresh_suggestions();
        self.emit(ThemeEvent::CustomColorApplied { primary });
    }

    /// Flip dark mode and return the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.state.dark_mode = !self.state.dark_mode;
        let enabled = self.state.dark_mode;
        tracing::debug!(enabled, "dark mode toggled");
        self.emit(ThemeEvent::DarkModeToggled { enabled });
        enabled
    }

    /// Push the current state to `sink` and persist it.
    pub fn apply_theme<S: StyleSink + ?Sized>(&mut self, sink: &mut S) {
        tracing::info!(
            theme = %self.state.theme.name,
            font_pairing = %self.state.font_pairing.name,
            dark_mode = self.state.dark_mode,
            "applying theme"
        );
        apply_theme_to_dom(sink, &self.kv, &self.state);
        self.emit(ThemeEvent::Applied);
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = suggest_layouts(&self.state.theme, &self.state.font_pairing);
    }

    fn emit(&mut self, event: ThemeEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
