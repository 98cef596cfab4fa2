//! Layout generation
//!
//! Turns a chosen style plus the detected-object counts into a structured
//! layout suggestion. Catalog misses degrade to empty palettes, guidelines,
//! and recommendations; they never fail the call.

use decora_catalog::StyleCatalog;
use decora_core::DetectedObjectSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Placement guidance for one detected furniture class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FurniturePlacement {
    /// How many of this class were detected.
    pub count: usize,
    /// Style guideline tags for this class; empty when the catalog has none.
    pub recommended_style: Vec<String>,
}

/// A generated layout suggestion for one image and one style.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutSuggestion {
    pub style: String,
    pub color_palette: Vec<String>,
    pub furniture_placement: HashMap<String, FurniturePlacement>,
    pub design_recommendations: Vec<String>,
}

/// Generates layout suggestions from catalog data.
#[derive(Debug, Clone)]
pub struct LayoutGenerator<'a> {
    catalog: &'a StyleCatalog,
    warn_on_miss: bool,
}

impl<'a> LayoutGenerator<'a> {
    pub fn new(catalog: &'a StyleCatalog) -> Self {
        Self {
            catalog,
            warn_on_miss: false,
        }
    }

    /// Emit a `tracing` warning when a style or object class is missing from
    /// the catalog. Off by default.
    pub fn with_miss_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_miss = enabled;
        self
    }

    /// Generate a layout suggestion for `style` over the detected objects.
    ///
    /// An unknown style yields empty palette, guidelines, and
    /// recommendations. Unknown object classes get empty guideline lists.
    pub fn generate(&self, style: &str, detected: &DetectedObjectSet) -> LayoutSuggestion {
        let entry = self.catalog.lookup(style);
        if entry.is_none() && self.warn_on_miss {
            warn!(style, "style not in catalog, generating empty layout");
        }

        let mut furniture_placement = HashMap::with_capacity(detected.count.len());
        for (object_class, &count) in &detected.count {
            let recommended_style = match entry {
                Some(s) => {
                    let tags = s.guidelines_for(object_class);
                    if tags.is_empty() && self.warn_on_miss {
                        warn!(style, object_class = %object_class, "no guidelines for object class");
                    }
                    tags.to_vec()
                }
                None => Vec::new(),
            };
            furniture_placement.insert(
                object_class.clone(),
                FurniturePlacement {
                    count,
                    recommended_style,
                },
            );
        }

        LayoutSuggestion {
            style: style.to_string(),
            color_palette: entry.map(|s| s.color_palette.clone()).unwrap_or_default(),
            furniture_placement,
            design_recommendations: entry.map(|s| s.recommendations.clone()).unwrap_or_default(),
        }
    }
}
