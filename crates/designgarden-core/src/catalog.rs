//! Built-in color palettes and font pairings.
//!
//! Both lists are fixed and ordered; the order is the order the customizer
//! presents them in. The first entry of each is the default selection.

use std::sync::OnceLock;

use crate::error::{GardenError, GardenResult};
use crate::types::{ColorPalette, FontPairing};

/// All predefined color palettes, in display order.
pub fn palettes() -> &'static [ColorPalette] {
    static PALETTES: OnceLock<Vec<ColorPalette>> = OnceLock::new();
    PALETTES.get_or_init(|| {
        vec![
            ColorPalette::new(
                "Default Purple",
                "262 83% 74%",
                "240 5.9% 10%",
                "240 4.8% 95.9%",
                "0 0% 100%",
                "240 10% 3.9%",
            ),
            ColorPalette::new(
                "Ocean Blue",
                "201 96% 32%",
                "200 98% 39%",
                "199 89% 48%",
                "0 0% 100%",
                "224 71% 4%",
            ),
            ColorPalette::new(
                "Forest Green",
                "142 76% 36%",
                "143 64% 24%",
                "120 100% 93%",
                "0 0% 100%",
                "120 100% 9%",
            ),
            ColorPalette::new(
                "Sunset Orange",
                "12 83% 55%",
                "22 100% 51%",
                "35 100% 91%",
                "0 0% 100%",
                "24 9% 10%",
            ),
            ColorPalette::new(
                "Dark Mode",
                "262 83% 74%",
                "240 3.7% 15.9%",
                "240 3.7% 15.9%",
                "240 10% 3.9%",
                "0 0% 98%",
            ),
        ]
    })
}

/// All predefined font pairings, in display order.
pub fn font_pairings() -> &'static [FontPairing] {
    static FONT_PAIRINGS: OnceLock<Vec<FontPairing>> = OnceLock::new();
    FONT_PAIRINGS.get_or_init(|| {
        vec![
            FontPairing::new(
                "Default",
                "SF Pro Display, Inter, sans-serif",
                "Inter, sans-serif",
            ),
            FontPairing::new("Classic", "Georgia, serif", "Arial, sans-serif"),
            FontPairing::new("Modern", "Montserrat, sans-serif", "Open Sans, sans-serif"),
            FontPairing::new("Elegant", "Playfair Display, serif", "Lato, sans-serif"),
            FontPairing::new("Technical", "Roboto Mono, monospace", "Roboto, sans-serif"),
        ]
    })
}

/// Palette used before anything is selected or restored ("Default Purple").
pub fn default_palette() -> ColorPalette {
    palettes()[0].clone()
}

/// Font pairing used before anything is selected or restored ("Default").
pub fn default_font_pairing() -> FontPairing {
    font_pairings()[0].clone()
}

/// Look up a palette by its exact name.
pub fn palette_by_name(name: &str) -> Option<&'static ColorPalette> {
    palettes().iter().find(|p| p.name == name)
}

/// Look up a font pairing by its exact name.
pub fn font_pairing_by_name(name: &str) -> Option<&'static FontPairing> {
    font_pairings().iter().find(|f| f.name == name)
}

/// Resolve a user-typed palette name, ignoring ASCII case.
pub fn find_palette(name: &str) -> GardenResult<&'static ColorPalette> {
    let name = name.trim();
    palettes()
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| GardenError::UnknownPalette(name.to_string()))
}

/// Resolve a user-typed font pairing name, ignoring ASCII case.
pub fn find_font_pairing(name: &str) -> GardenResult<&'static FontPairing> {
    let name = name.trim();
    font_pairings()
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| GardenError::UnknownFontPairing(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes_and_order() {
        let names: Vec<&str> = palettes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Default Purple", "Ocean Blue", "Forest Green", "Sunset Orange", "Dark Mode"]
        );

        let names: Vec<&str> = font_pairings().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Default", "Classic", "Modern", "Elegant", "Technical"]);
    }

    #[test]
    fn test_names_are_unique() {
        let palette_names: HashSet<_> = palettes().iter().map(|p| &p.name).collect();
        assert_eq!(palette_names.len(), palettes().len());

        let font_names: HashSet<_> = font_pairings().iter().map(|f| &f.name).collect();
        assert_eq!(font_names.len(), font_pairings().len());
    }

    #[test]
    fn test_lookup_by_name() {
        let ocean = palette_by_name("Ocean Blue").unwrap();
        assert_eq!(ocean.primary, "201 96% 32%");
        assert!(palette_by_name("ocean blue").is_none());
        assert!(palette_by_name("Custom").is_none());

        let technical = font_pairing_by_name("Technical").unwrap();
        assert_eq!(technical.display, "Roboto Mono, monospace");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find_palette(" sunset orange ").unwrap().name, "Sunset Orange");
        assert_eq!(find_font_pairing("ELEGANT").unwrap().name, "Elegant");
    }

    #[test]
    fn test_find_unknown_name() {
        let err = find_palette("Neon").unwrap_err();
        assert!(matches!(err, GardenError::UnknownPalette(ref n) if n == "Neon"));

        let err = find_font_pairing("Comic").unwrap_err();
        assert!(matches!(err, GardenError::UnknownFontPairing(_)));
    }

    #[test]
    fn test_defaults_are_first_entries() {
        assert_eq!(default_palette().name, "Default Purple");
        assert_eq!(default_font_pairing().name, "Default");
    }
}
