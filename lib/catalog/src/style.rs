//! Style definitions
//!
//! A [`Style`] is a named decorating aesthetic: a color palette, per
//! furniture-type guideline tags, curated recommendation sentences, and an
//! optional highlight used when explaining why the style was recommended.
//! Styles are immutable once the catalog is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named design style and its associated decorating rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Style {
    /// Unique style name, e.g. "Modern Minimalist".
    pub name: String,

    /// Color tags in palette order.
    #[serde(default)]
    pub color_palette: Vec<String>,

    /// Guideline tags keyed by furniture type ("sofa", "table", ...).
    #[serde(default)]
    pub furniture_guidelines: HashMap<String, Vec<String>>,

    /// Curated advisory sentences for this style.
    #[serde(default)]
    pub recommendations: Vec<String>,

    /// Highlight used by explanation generation; styles without one get a
    /// stub explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation_highlight: Option<ExplanationHighlight>,
}

/// The single furniture piece and color a style's explanation leads with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExplanationHighlight {
    /// Primary furniture suggestion, e.g. "clean-lined sofa".
    pub furniture: String,
    /// Primary palette color, e.g. "neutral tones".
    pub color: String,
}

impl Style {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_palette: Vec::new(),
            furniture_guidelines: HashMap::new(),
            recommendations: Vec::new(),
            explanation_highlight: None,
        }
    }

    /// Guideline tags for a furniture type; empty for unknown types.
    pub fn guidelines_for(&self, furniture_type: &str) -> &[String] {
        self.furniture_guidelines
            .get(furniture_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
