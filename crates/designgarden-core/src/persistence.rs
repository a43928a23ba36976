//! Theme state persistence
//!
//! The state is stored as three independent keys so that a bad value under
//! one key never costs the others:
//!
//! | key                 | value                     |
//! |---------------------|---------------------------|
//! | `freetoTheme`       | JSON [`ColorPalette`]     |
//! | `freetoFontPairing` | JSON [`FontPairing`]      |
//! | `freetoDarkMode`    | `"true"` or `"false"`     |
//!
//! Values are not versioned. Anything that no longer parses is treated as
//! absent and replaced by the default on the next save.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{GardenError, GardenResult};
use crate::storage::KvStore;
use crate::types::{ColorPalette, FontPairing, ThemeState};

pub const THEME_KEY: &str = "freetoTheme";
pub const FONT_PAIRING_KEY: &str = "freetoFontPairing";
pub const DARK_MODE_KEY: &str = "freetoDarkMode";

/// Restore a [`ThemeState`] from storage, field by field.
///
/// Absent keys, unreadable keys and unparsable values each fall back to that
/// field's default. Never fails.
pub fn load_state<K: KvStore + ?Sized>(kv: &K) -> ThemeState {
    let theme = load_json::<ColorPalette, K>(kv, THEME_KEY).unwrap_or_default();
    let font_pairing = load_json::<FontPairing, K>(kv, FONT_PAIRING_KEY).unwrap_or_default();
    let dark_mode = load_dark_mode(kv).unwrap_or(false);

    ThemeState::new(theme, font_pairing, dark_mode)
}

/// Write all three keys, overwriting previous values.
///
/// Every key is attempted even if an earlier one fails; the first failure is
/// returned.
pub fn save_state<K: KvStore + ?Sized>(kv: &K, state: &ThemeState) -> GardenResult<()> {
    let results = [
        save_json(kv, THEME_KEY, &state.theme),
        save_json(kv, FONT_PAIRING_KEY, &state.font_pairing),
        kv.set(DARK_MODE_KEY, if state.dark_mode { "true" } else { "false" }),
    ];

    results.into_iter().collect::<GardenResult<Vec<()>>>()?;
    Ok(())
}

fn read_key<K: KvStore + ?Sized>(kv: &K, key: &str) -> Option<String> {
    match kv.get(key) {
        Ok(value) => {
            if value.is_none() {
                tracing::debug!(key, "no stored value, using default");
            }
            value
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value, using default");
            None
        }
    }
}

fn load_json<T: DeserializeOwned, K: KvStore + ?Sized>(kv: &K, key: &str) -> Option<T> {
    let raw = read_key(kv, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored value does not parse, using default");
            None
        }
    }
}

fn load_dark_mode<K: KvStore + ?Sized>(kv: &K) -> Option<bool> {
    let raw = read_key(kv, DARK_MODE_KEY)?;
    match raw.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        other => {
            tracing::warn!(key = DARK_MODE_KEY, value = other, "unexpected dark mode value, using default");
            None
        }
    }
}

fn save_json<T: Serialize, K: KvStore + ?Sized>(kv: &K, key: &str, value: &T) -> GardenResult<()> {
    let json =
        serde_json::to_string(value).map_err(|e| GardenError::Serialization(e.to_string()))?;
    kv.set(key, &json)
}
