//! Layout suggestions derived from the current palette and font pairing.

use crate::types::{ColorPalette, FontPairing, LayoutSuggestion};

/// Suggest layout templates for a palette/font pairing combination.
///
/// Always returns the same five templates in the same order; only the
/// `suitable` flags depend on the inputs. Names outside the catalog (including
/// "Custom") are fine and simply fail the conditional rules.
pub fn suggest_layouts(palette: &ColorPalette, font_pairing: &FontPairing) -> Vec<LayoutSuggestion> {
    let font = font_pairing.name.as_str();
    let palette = palette.name.as_str();

    vec![
        LayoutSuggestion {
            name: "Minimalist",
            description: "Clean, spacious layout with focus on content",
            suitable: true,
            preview_class: "grid grid-cols-1 gap-8 max-w-4xl mx-auto",
        },
        LayoutSuggestion {
            name: "Magazine",
            description: "Multi-column layout with varied content blocks",
            suitable: matches!(font, "Elegant" | "Classic"),
            preview_class: "grid grid-cols-12 gap-4",
        },
        LayoutSuggestion {
            name: "Dashboard",
            description: "Data-focused layout with cards and widgets",
            suitable: matches!(font, "Technical" | "Modern"),
            preview_class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
        },
        LayoutSuggestion {
            name: "Portfolio",
            description: "Showcase-style layout with large visuals",
            suitable: matches!(palette, "Ocean Blue" | "Sunset Orange"),
            preview_class: "grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8",
        },
        LayoutSuggestion {
            name: "Blog",
            description: "Content-first layout optimized for reading",
            suitable: true,
            preview_class: "max-w-3xl mx-auto space-y-8",
        },
    ]
}

/// The suitable subset of a suggestion list, order preserved.
pub fn recommended(suggestions: &[LayoutSuggestion]) -> Vec<&LayoutSuggestion> {
    suggestions.iter().filter(|s| s.suitable).collect()
}
