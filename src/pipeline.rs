//! Recommendation pipeline
//!
//! [`DesignEngine`] wires the catalog, the ranker, and the two generators
//! into the full flow: object description, top-k style ranking, a layout for
//! the best style, and explanations for every ranked style.

use decora_catalog::StyleCatalog;
use decora_core::{ColorFeatures, DetectedObjectSet, Result, RoomClassification};
use decora_engine::{
    Embedder, ExplanationGenerator, LayoutGenerator, LayoutSuggestion, RankedStyle,
    StyleExplanation, StyleRanker,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default number of recommended styles.
pub const DEFAULT_TOP_K: usize = 3;

/// The complete recommendation output for one image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationBundle {
    /// Canonical description of the detected objects, e.g. "2 sofa, 1 table".
    pub object_description: String,
    /// Recommended styles, best first.
    pub ranked_styles: Vec<RankedStyle>,
    /// Layout suggestion for the top-ranked style; `None` when nothing was
    /// detected.
    pub layout: Option<LayoutSuggestion>,
    /// Per-style justification strings.
    pub explanations: StyleExplanation,
    /// Room classification from the upstream classifier, if the caller has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomClassification>,
    /// Dominant-color features from the upstream extractor, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorFeatures>,
}

impl RecommendationBundle {
    fn empty() -> Self {
        Self {
            object_description: String::new(),
            ranked_styles: Vec::new(),
            layout: None,
            explanations: StyleExplanation::new(),
            room: None,
            colors: None,
        }
    }
}

/// The assembled recommendation engine.
///
/// Holds the immutable catalog and the embedding capability; every call to
/// [`recommend`](DesignEngine::recommend) is stateless.
#[derive(Debug, Clone)]
pub struct DesignEngine<E> {
    catalog: StyleCatalog,
    ranker: StyleRanker<E>,
    top_k: usize,
}

impl<E: Embedder> DesignEngine<E> {
    pub fn new(catalog: StyleCatalog, embedder: E) -> Self {
        Self {
            catalog,
            ranker: StyleRanker::new(embedder),
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// Produce the full recommendation bundle for one image's detections.
    ///
    /// Zero detected objects yield a well-formed empty bundle. An embedding
    /// failure propagates; layout and explanation generation cannot fail.
    pub fn recommend(&self, detected: &DetectedObjectSet) -> Result<RecommendationBundle> {
        if detected.is_empty() {
            debug!("no objects detected, returning empty bundle");
            return Ok(RecommendationBundle::empty());
        }

        let description = detected.object_description();
        let ranked = self
            .ranker
            .rank(&description, &self.catalog.style_names(), self.top_k)?;
        info!(
            description = %description,
            styles = ranked.len(),
            "ranked candidate styles"
        );

        let layout = ranked
            .first()
            .map(|best| LayoutGenerator::new(&self.catalog).generate(&best.name, detected));

        let names: Vec<String> = ranked.iter().map(|r| r.name.clone()).collect();
        let explanations = ExplanationGenerator::new(&self.catalog).explain(&names, detected);

        Ok(RecommendationBundle {
            object_description: description,
            ranked_styles: ranked,
            layout,
            explanations,
            room: None,
            colors: None,
        })
    }

    /// Like [`recommend`](DesignEngine::recommend), attaching auxiliary
    /// classifier and color-feature outputs for the final response.
    pub fn recommend_with_context(
        &self,
        detected: &DetectedObjectSet,
        room: Option<RoomClassification>,
        colors: Option<ColorFeatures>,
    ) -> Result<RecommendationBundle> {
        let mut bundle = self.recommend(detected)?;
        bundle.room = room;
        bundle.colors = colors;
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decora_catalog::builtin_catalog;
    use decora_core::{BoundingBox, DetectedObject};
    use decora_engine::HashEmbedder;

    fn engine() -> DesignEngine<HashEmbedder> {
        DesignEngine::new(builtin_catalog(), HashEmbedder::default())
    }

    fn detections(classes: &[&str]) -> DetectedObjectSet {
        DetectedObjectSet::from_objects(
            classes
                .iter()
                .map(|c| DetectedObject::new(*c, 0.9, BoundingBox::new(0.0, 0.0, 1.0, 1.0)))
                .collect(),
        )
    }

    #[test]
    fn test_recommend_produces_full_bundle() {
        let bundle = engine().recommend(&detections(&["sofa", "sofa", "table"])).unwrap();

        assert_eq!(bundle.object_description, "2 sofa, 1 table");
        assert_eq!(bundle.ranked_styles.len(), DEFAULT_TOP_K);

        let layout = bundle.layout.as_ref().unwrap();
        assert_eq!(layout.style, bundle.ranked_styles[0].name);
        assert_eq!(layout.furniture_placement["sofa"].count, 2);

        assert_eq!(bundle.explanations.len(), DEFAULT_TOP_K);
        for ranked in &bundle.ranked_styles {
            assert!(bundle.explanations.contains_key(&ranked.name));
        }
    }

    #[test]
    fn test_recommend_empty_detections() {
        let bundle = engine().recommend(&DetectedObjectSet::default()).unwrap();

        assert!(bundle.object_description.is_empty());
        assert!(bundle.ranked_styles.is_empty());
        assert!(bundle.layout.is_none());
        assert!(bundle.explanations.is_empty());
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let detected = detections(&["bed", "lamp", "lamp"]);
        let a = engine().recommend(&detected).unwrap();
        let b = engine().recommend(&detected).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_recommend_with_context_attaches_auxiliary_data() {
        let bundle = engine()
            .recommend_with_context(
                &detections(&["sofa"]),
                Some(RoomClassification::new("living", 0.88)),
                Some(ColorFeatures::new(vec!["white".to_string(), "gray".to_string()])),
            )
            .unwrap();

        assert_eq!(bundle.room.as_ref().unwrap().label, "living");
        assert_eq!(bundle.colors.as_ref().unwrap().dominant_colors.len(), 2);
    }

    #[test]
    fn test_top_k_override() {
        let bundle = engine()
            .with_top_k(5)
            .recommend(&detections(&["chair"]))
            .unwrap();
        assert_eq!(bundle.ranked_styles.len(), 5);
    }
}
