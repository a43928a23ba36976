//! End-to-end tests for the select → apply → restore cycle
//!
//! These run the theme store against both storage backends and check the
//! observable style surface and the restored state.

use designgarden_core::catalog::{font_pairing_by_name, palette_by_name};
use designgarden_core::persistence::{FONT_PAIRING_KEY, THEME_KEY};
use designgarden_core::style::{
    DARK_CLASS, FONT_STYLE_BLOCK_ID, VAR_ACCENT, VAR_BACKGROUND, VAR_FOREGROUND, VAR_PRIMARY,
    VAR_SECONDARY,
};
use designgarden_core::{
    apply_theme_to_dom, ColorPalette, FontPairing, HeadlessDocument, KvStore, MemoryStore,
    RedbStore, ThemeState, ThemeStore,
};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn ocean_technical(dark_mode: bool) -> ThemeState {
    ThemeState::new(
        palette_by_name("Ocean Blue").unwrap().clone(),
        font_pairing_by_name("Technical").unwrap().clone(),
        dark_mode,
    )
}

// ============================================================================
// Round-trip Tests
// ============================================================================

#[test]
fn test_apply_then_hydrate_round_trip_memory() {
    let kv = MemoryStore::new();
    let mut doc = HeadlessDocument::new();

    let mut store = ThemeStore::new(kv.clone());
    store.set_palette(palette_by_name("Sunset Orange").unwrap().clone());
    store.set_font_pairing(font_pairing_by_name("Elegant").unwrap().clone());
    store.toggle_dark_mode();
    store.apply_theme(&mut doc);
    let applied = store.state().clone();

    let restored = ThemeStore::hydrate(kv);
    assert_eq!(restored.state(), &applied);
}

#[test]
fn test_apply_then_hydrate_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.redb");

    let applied = {
        let mut store = ThemeStore::new(RedbStore::open(&path).unwrap());
        store.set_palette(palette_by_name("Forest Green").unwrap().clone());
        store.set_custom_primary_color("300 70% 40%");
        store.set_font_pairing(font_pairing_by_name("Modern").unwrap().clone());
        store.apply_theme(&mut HeadlessDocument::new());
        store.state().clone()
    };

    let restored = ThemeStore::hydrate(RedbStore::open(&path).unwrap());
    assert_eq!(restored.state(), &applied);
    assert_eq!(restored.state().theme.name, "Custom");
    assert_eq!(restored.state().theme.secondary, "143 64% 24%");
}

#[test]
fn test_unapplied_changes_are_not_restored() {
    let kv = MemoryStore::new();

    let mut store = ThemeStore::new(kv.clone());
    store.set_palette(palette_by_name("Ocean Blue").unwrap().clone());
    store.apply_theme(&mut HeadlessDocument::new());
    store.set_palette(palette_by_name("Forest Green").unwrap().clone());

    let restored = ThemeStore::hydrate(kv);
    assert_eq!(restored.state().theme.name, "Ocean Blue");
}

// ============================================================================
// Style Surface Tests
// ============================================================================

#[test]
fn test_apply_twice_leaves_identical_surface() {
    let kv = MemoryStore::new();
    let state = ocean_technical(false);
    let mut doc = HeadlessDocument::new();

    apply_theme_to_dom(&mut doc, &kv, &state);
    let once = doc.clone();
    let stored_once = kv.get(THEME_KEY).unwrap();

    apply_theme_to_dom(&mut doc, &kv, &state);

    assert_eq!(doc, once);
    assert_eq!(doc.rule_block_count(), 1);
    assert_eq!(kv.get(THEME_KEY).unwrap(), stored_once);
}

#[test]
fn test_dark_mode_isolation() {
    let base = ColorPalette::default();
    let mut doc = HeadlessDocument::seeded(&base);
    let mut state = ocean_technical(true);
    state.theme.background = "0 100% 50%".to_string();
    state.theme.foreground = "120 100% 50%".to_string();

    apply_theme_to_dom(&mut doc, &MemoryStore::new(), &state);

    assert_eq!(doc.variable(VAR_BACKGROUND), Some(base.background.as_str()));
    assert_eq!(doc.variable(VAR_FOREGROUND), Some(base.foreground.as_str()));
    assert_eq!(doc.variable(VAR_PRIMARY), Some("201 96% 32%"));
    assert_eq!(doc.variable(VAR_SECONDARY), Some("200 98% 39%"));
    assert_eq!(doc.variable(VAR_ACCENT), Some("199 89% 48%"));
    assert!(doc.has_root_class(DARK_CLASS));
}

#[test]
fn test_font_block_binds_body_and_display() {
    let mut doc = HeadlessDocument::new();
    apply_theme_to_dom(&mut doc, &MemoryStore::new(), &ocean_technical(false));

    let css = doc.rule_block(FONT_STYLE_BLOCK_ID).unwrap();
    assert!(css.contains("body {\n  font-family: Roboto, sans-serif;\n}"));
    assert!(css.contains(".font-display {\n  font-family: Roboto Mono, monospace;\n}"));
}

#[test]
fn test_malformed_custom_color_reaches_surface_verbatim() {
    let mut store = ThemeStore::new(MemoryStore::new());
    let mut doc = HeadlessDocument::new();

    store.set_custom_primary_color("not-a-color");
    assert_eq!(store.state().theme.primary, "not-a-color");

    store.apply_theme(&mut doc);
    assert_eq!(doc.variable(VAR_PRIMARY), Some("not-a-color"));
}

// ============================================================================
// Hydration Tests
// ============================================================================

#[test]
fn test_partial_hydration_with_corrupted_font_key() {
    let dir = TempDir::new().unwrap();
    let kv = RedbStore::open(dir.path().join("preferences.redb")).unwrap();
    let ocean = palette_by_name("Ocean Blue").unwrap().clone();
    kv.set(THEME_KEY, &serde_json::to_string(&ocean).unwrap())
        .unwrap();
    kv.set(FONT_PAIRING_KEY, "{\"name\": \"Elegant\",").unwrap();

    let store = ThemeStore::hydrate(kv);

    assert_eq!(store.state().theme, ocean);
    assert_eq!(store.state().font_pairing, FontPairing::default());
}

#[test]
fn test_restore_rewrites_corrupted_keys_with_defaults() {
    let kv = MemoryStore::new();
    kv.set(FONT_PAIRING_KEY, "garbage").unwrap();

    let mut doc = HeadlessDocument::new();
    ThemeStore::restore(kv.clone(), &mut doc);

    let stored: FontPairing =
        serde_json::from_str(&kv.get(FONT_PAIRING_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored, FontPairing::default());
    assert_eq!(doc.rule_block_count(), 1);
}

#[test]
fn test_restore_sets_dark_class_from_storage() {
    let kv = MemoryStore::new();
    apply_theme_to_dom(&mut HeadlessDocument::new(), &kv, &ocean_technical(true));

    let mut doc = HeadlessDocument::new();
    let store = ThemeStore::restore(kv, &mut doc);

    assert!(store.state().dark_mode);
    assert!(doc.has_root_class(DARK_CLASS));
    assert_eq!(doc.variable(VAR_BACKGROUND), None);
}
