//! End-to-end tests for the recommendation pipeline.

use decora::prelude::*;

fn detections(classes: &[&str]) -> DetectedObjectSet {
    DetectedObjectSet::from_objects(
        classes
            .iter()
            .map(|c| DetectedObject::new(*c, 0.9, BoundingBox::new(0.0, 0.0, 100.0, 100.0)))
            .collect(),
    )
}

#[test]
fn full_pipeline_over_builtin_catalog() {
    let engine = DesignEngine::new(builtin_catalog(), HashEmbedder::default());
    let detected = detections(&["sofa", "sofa", "table", "lamp"]);

    let bundle = engine.recommend(&detected).unwrap();

    assert_eq!(bundle.object_description, "2 sofa, 1 lamp, 1 table");
    assert_eq!(bundle.ranked_styles.len(), 3);

    // Scores are descending and every ranked style exists in the catalog.
    for window in bundle.ranked_styles.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
    for ranked in &bundle.ranked_styles {
        assert!(engine.catalog().contains(&ranked.name));
    }

    // The layout covers every detected class with its count.
    let layout = bundle.layout.as_ref().unwrap();
    assert_eq!(layout.style, bundle.ranked_styles[0].name);
    assert_eq!(layout.furniture_placement["sofa"].count, 2);
    assert_eq!(layout.furniture_placement["table"].count, 1);
    assert_eq!(layout.furniture_placement["lamp"].count, 1);
    // sofa and table have guidelines in every built-in style; lamp has none.
    assert!(!layout.furniture_placement["sofa"].recommended_style.is_empty());
    assert!(layout.furniture_placement["lamp"].recommended_style.is_empty());

    // One explanation per ranked style, each mentioning its style name.
    assert_eq!(bundle.explanations.len(), 3);
    for ranked in &bundle.ranked_styles {
        let text = &bundle.explanations[&ranked.name];
        assert!(text.starts_with(&format!("Based on the {} style", ranked.name)));
    }
}

#[test]
fn bundle_serializes_and_reloads() {
    let engine = DesignEngine::new(builtin_catalog(), HashEmbedder::default());
    let bundle = engine.recommend(&detections(&["bed", "chair"])).unwrap();

    let json = serde_json::to_string_pretty(&bundle).unwrap();
    let reloaded: RecommendationBundle = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, bundle);
}

#[test]
fn empty_detections_yield_empty_bundle() {
    let engine = DesignEngine::new(builtin_catalog(), HashEmbedder::default());
    let bundle = engine.recommend(&DetectedObjectSet::default()).unwrap();

    assert!(bundle.ranked_styles.is_empty());
    assert!(bundle.layout.is_none());
    assert!(bundle.explanations.is_empty());
}

#[test]
fn engine_works_with_catalog_loaded_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("styles.json");
    builtin_catalog().save_to_file(&path).unwrap();

    let catalog = StyleCatalog::load_from_file(&path).unwrap();
    assert_eq!(catalog, builtin_catalog());

    let engine = DesignEngine::new(catalog, HashEmbedder::default());
    let bundle = engine.recommend(&detections(&["sofa"])).unwrap();
    assert_eq!(bundle.ranked_styles.len(), 3);
}

#[test]
fn detector_json_shape_is_accepted() {
    // The shape the upstream detector emits for each object.
    let json = r#"[
        {"class": "sofa", "confidence": 0.93,
         "bbox": {"x1": 10.0, "y1": 20.0, "x2": 210.0, "y2": 120.0}},
        {"class": "table", "confidence": 0.87,
         "bbox": {"x1": 230.0, "y1": 40.0, "x2": 330.0, "y2": 110.0}}
    ]"#;

    let objects: Vec<DetectedObject> = serde_json::from_str(json).unwrap();
    let detected = DetectedObjectSet::from_objects(objects);
    assert!(detected.is_consistent());
    assert_eq!(detected.object_description(), "1 sofa, 1 table");

    let engine = DesignEngine::new(builtin_catalog(), HashEmbedder::default());
    let bundle = engine.recommend(&detected).unwrap();
    assert!(bundle.layout.is_some());
}
