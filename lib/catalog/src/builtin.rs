//! Built-in style table
//!
//! The default taxonomy of fifteen design styles shipped with the engine.
//! Curated recommendation sentences live here as catalog data, so layout
//! generation is a pure lookup with no per-style branching. A deployment can
//! replace all of this with [`StyleCatalog::load_from_file`].

use crate::catalog::StyleCatalog;
use crate::style::{ExplanationHighlight, Style};
use std::collections::HashMap;

fn style(
    name: &str,
    palette: &[&str],
    sofa: &[&str],
    table: &[&str],
    recommendations: &[&str],
    highlight_furniture: &str,
    highlight_color: &str,
) -> Style {
    let mut furniture_guidelines = HashMap::new();
    furniture_guidelines.insert(
        "sofa".to_string(),
        sofa.iter().map(|s| s.to_string()).collect(),
    );
    furniture_guidelines.insert(
        "table".to_string(),
        table.iter().map(|s| s.to_string()).collect(),
    );

    Style {
        name: name.to_string(),
        color_palette: palette.iter().map(|s| s.to_string()).collect(),
        furniture_guidelines,
        recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
        explanation_highlight: Some(ExplanationHighlight {
            furniture: highlight_furniture.to_string(),
            color: highlight_color.to_string(),
        }),
    }
}

/// The built-in styles, in catalog (and hence ranking tie-break) order.
pub fn builtin_styles() -> Vec<Style> {
    vec![
        style(
            "Modern Minimalist",
            &["white", "gray", "black"],
            &["low-profile", "clean-lines"],
            &["geometric", "minimal-decor"],
            &[
                "Consider adding a sleek, low-profile sofa to match the minimal decor.",
                "Use geometric table designs to enhance the modern feel.",
            ],
            "clean-lined sofa",
            "neutral tones",
        ),
        style(
            "Scandinavian",
            &["white", "light-wood", "soft-blue"],
            &["simple", "light-fabric"],
            &["natural-wood", "functional"],
            &[
                "Opt for functional and simple furniture with light-wood finishes.",
                "Add soft, cozy blankets and light fabric sofa covers.",
            ],
            "light wood dining table",
            "white",
        ),
        style(
            "Industrial Loft",
            &["charcoal", "exposed-brick", "steel-gray"],
            &["leather", "industrial"],
            &["metal", "reclaimed-wood"],
            &[
                "Incorporate metal elements and exposed brick features.",
                "Use leather sofas and industrial-style light fixtures.",
            ],
            "metal coffee table",
            "gray",
        ),
        style(
            "Bohemian",
            &["terracotta", "mustard", "sage-green"],
            &["textured", "plush"],
            &["wooden", "organic-shapes"],
            &[
                "Layer textured fabrics and colorful throw pillows for a bohemian touch.",
                "Include rustic, wooden tables and chairs for an organic look.",
            ],
            "textured armchair",
            "warm earth tones",
        ),
        style(
            "Mid-Century Modern",
            &["teal", "orange", "wood-brown"],
            &["angular", "retro-fabric"],
            &["round", "teak-wood"],
            &[
                "Choose angular sofas with retro patterns.",
                "Add teak wood tables for a mid-century vibe.",
            ],
            "teak dining chairs",
            "teal",
        ),
        style(
            "Japandi",
            &["neutral-tones", "black", "wood"],
            &["low-profile", "minimal"],
            &["simple", "light-wood"],
            &[
                "Select minimalistic furniture with light wood and neutral tones.",
                "Keep decoration simple, using natural materials like bamboo or linen.",
            ],
            "simple wooden table",
            "white",
        ),
        style(
            "Coastal",
            &["white", "blue", "sand"],
            &["light-fabric", "casual"],
            &["weathered-wood", "nautical"],
            &[
                "Use light, airy fabrics and incorporate nautical elements.",
                "Add weathered-wood furniture and whitewashed decor.",
            ],
            "white wicker chairs",
            "blue",
        ),
        style(
            "Art Deco",
            &["gold", "black", "rich-emerald"],
            &["luxurious", "velvet"],
            &["glossy", "metal"],
            &[
                "Incorporate bold geometric shapes and luxury materials.",
                "Use gold accents and mirrored surfaces to add elegance.",
            ],
            "glossy side table",
            "gold",
        ),
        style(
            "Rustic",
            &["earthy-brown", "green", "beige"],
            &["plush", "wooden-frame"],
            &["rough-wood", "handcrafted"],
            &[
                "Add earthy tones and handcrafted wooden furniture.",
                "Use textured fabric cushions and woven items for added warmth.",
            ],
            "wooden bench",
            "earthy brown",
        ),
        style(
            "Contemporary",
            &["neutral-tones", "black", "blue"],
            &["bold-lines", "multi-color"],
            &["glass-top", "sleek"],
            &[
                "Include bold, clean lines and unique shapes.",
                "Use a mix of materials like glass, metal, and wood for contrast.",
            ],
            "sleek sofa",
            "neutral shades",
        ),
        style(
            "Traditional",
            &["cream", "dark-wood", "burgundy"],
            &["classic", "structured"],
            &["mahogany", "detailed-carvings"],
            &[
                "Use rich, deep colors and classic furniture.",
                "Incorporate detailed woodwork and ornate patterns.",
            ],
            "carved wooden cabinet",
            "deep red",
        ),
        style(
            "Transitional",
            &["beige", "gray", "white"],
            &["neutral", "blended-styles"],
            &["simple", "multi-material"],
            &[
                "Blend traditional and contemporary pieces for a balanced look.",
                "Use neutral tones and simple designs for a versatile decor.",
            ],
            "mix of modern and traditional pieces",
            "gray",
        ),
        style(
            "Eclectic",
            &["varied-bright", "earth-tones"],
            &["mix-and-match", "colorful"],
            &["vintage", "quirky"],
            &[
                "Mix vintage and modern furniture for an unexpected look.",
                "Add unique, one-of-a-kind decorative pieces.",
            ],
            "mismatched chairs",
            "vibrant colors",
        ),
        style(
            "Mediterranean",
            &["blue", "white", "terracotta"],
            &["woven", "comfortable"],
            &["stone", "rustic"],
            &[
                "Incorporate terra-cotta tiles and stone surfaces.",
                "Use woven materials and rustic wooden furniture.",
            ],
            "terracotta planter",
            "white",
        ),
        style(
            "Farmhouse",
            &["white", "gray", "light-wood"],
            &["simple", "comfortable"],
            &["wooden", "distressed"],
            &[
                "Add cozy, simple furniture with a weathered finish.",
                "Use whitewashed wood and soft, natural fabrics.",
            ],
            "wooden dining table",
            "white",
        ),
    ]
}

/// Build the default catalog.
pub fn builtin_catalog() -> StyleCatalog {
    // The built-in table has no duplicate names.
    StyleCatalog::new(builtin_styles()).expect("built-in style table is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_fifteen_styles() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn test_builtin_order_starts_with_modern_minimalist() {
        let names = builtin_catalog().style_names();
        assert_eq!(names[0], "Modern Minimalist");
        assert_eq!(names[1], "Scandinavian");
        assert_eq!(names.last().map(String::as_str), Some("Farmhouse"));
    }

    #[test]
    fn test_every_builtin_style_is_complete() {
        for style in builtin_catalog().iter() {
            assert!(!style.color_palette.is_empty(), "{}", style.name);
            assert_eq!(style.recommendations.len(), 2, "{}", style.name);
            assert!(style.furniture_guidelines.contains_key("sofa"));
            assert!(style.furniture_guidelines.contains_key("table"));
            assert!(style.explanation_highlight.is_some(), "{}", style.name);
        }
    }

    #[test]
    fn test_modern_minimalist_guidelines() {
        let catalog = builtin_catalog();
        let style = catalog.lookup("Modern Minimalist").unwrap();
        assert_eq!(style.guidelines_for("sofa"), ["low-profile", "clean-lines"]);
        assert_eq!(style.guidelines_for("table"), ["geometric", "minimal-decor"]);
    }
}
