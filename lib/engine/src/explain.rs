//! Explanation generation
//!
//! Produces one human-readable justification string per recommended style,
//! keyed by style name. A style without highlight data gets a stub
//! explanation instead of aborting the batch.

use decora_catalog::StyleCatalog;
use decora_core::DetectedObjectSet;
use std::collections::HashMap;

/// Explanations keyed by style name; one entry per distinct input style.
pub type StyleExplanation = HashMap<String, String>;

/// Generates per-style explanation strings from catalog highlights.
#[derive(Debug, Clone)]
pub struct ExplanationGenerator<'a> {
    catalog: &'a StyleCatalog,
}

impl<'a> ExplanationGenerator<'a> {
    pub fn new(catalog: &'a StyleCatalog) -> Self {
        Self { catalog }
    }

    /// Explain each recommended style.
    ///
    /// Duplicate input styles collapse into a single map entry. The detected
    /// objects are accepted for interface parity with the ranker but do not
    /// change the explanation text.
    pub fn explain(
        &self,
        recommended_styles: &[String],
        _detected: &DetectedObjectSet,
    ) -> StyleExplanation {
        let mut explanations = HashMap::with_capacity(recommended_styles.len());

        for style in recommended_styles {
            let text = match self
                .catalog
                .lookup(style)
                .and_then(|s| s.explanation_highlight.as_ref())
            {
                Some(highlight) => format!(
                    "Based on the {} style, we recommend: {} with {} palette.",
                    style, highlight.furniture, highlight.color
                ),
                None => format!(
                    "Based on the {} style, we recommend: (no data available).",
                    style
                ),
            };
            explanations.insert(style.clone(), text);
        }

        explanations
    }
}
