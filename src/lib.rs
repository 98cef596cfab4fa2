//! # decora
//!
//! A rule engine for interior design recommendations.
//!
//! decora turns the output of an upstream object detector into user-facing
//! decorating advice: it ranks a fixed taxonomy of design styles against the
//! detected furniture by embedding similarity, then generates a structured
//! layout suggestion and per-style explanations from catalog data.
//!
//! ## Quick Start
//!
//! ```rust
//! use decora::prelude::*;
//!
//! let detected = DetectedObjectSet::from_objects(vec![
//!     DetectedObject::new("sofa", 0.93, BoundingBox::new(0.0, 0.0, 120.0, 80.0)),
//!     DetectedObject::new("sofa", 0.88, BoundingBox::new(140.0, 0.0, 260.0, 80.0)),
//!     DetectedObject::new("table", 0.91, BoundingBox::new(60.0, 90.0, 120.0, 140.0)),
//! ]);
//!
//! let engine = DesignEngine::new(builtin_catalog(), HashEmbedder::default());
//! let bundle = engine.recommend(&detected).unwrap();
//!
//! assert_eq!(bundle.object_description, "2 sofa, 1 table");
//! assert_eq!(bundle.ranked_styles.len(), 3);
//! assert!(bundle.layout.is_some());
//! ```
//!
//! ## Crate Structure
//!
//! decora is composed of several crates:
//!
//! - [`decora-core`](https://docs.rs/decora-core) - Vectors, detections, shared errors
//! - [`decora-catalog`](https://docs.rs/decora-catalog) - The style catalog and config files
//! - [`decora-engine`](https://docs.rs/decora-engine) - Ranking, layout, and explanation generation

pub mod pipeline;

// Re-export core types
pub use decora_core::{
    BoundingBox, ColorFeatures, DetectedObject, DetectedObjectSet, Error, Result,
    RoomClassification, Vector,
};

// Re-export catalog
pub use decora_catalog::{
    builtin_catalog, builtin_styles, ExplanationHighlight, Style, StyleCatalog,
};

// Re-export engine
pub use decora_engine::{
    Embedder, ExplanationGenerator, FurniturePlacement, HashEmbedder, LayoutGenerator,
    LayoutSuggestion, RankedStyle, StyleExplanation, StyleRanker, DEFAULT_EMBEDDING_DIM,
};

pub use pipeline::{DesignEngine, RecommendationBundle, DEFAULT_TOP_K};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        builtin_catalog, BoundingBox, ColorFeatures, DesignEngine, DetectedObject,
        DetectedObjectSet, Embedder, Error, ExplanationGenerator, HashEmbedder, LayoutGenerator,
        LayoutSuggestion, RankedStyle, RecommendationBundle, Result, RoomClassification, Style,
        StyleCatalog, StyleRanker, Vector,
    };
}
