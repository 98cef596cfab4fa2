//! # decora Engine
//!
//! The rule engine of the decora design recommendation system.
//!
//! Four pure, synchronous components over an immutable [`StyleCatalog`]:
//!
//! - [`Embedder`] / [`HashEmbedder`] - the embedding capability seam and its
//!   deterministic in-process default
//! - [`StyleRanker`] - top-k cosine ranking of candidate styles against an
//!   object description
//! - [`LayoutGenerator`] - style + detections into a [`LayoutSuggestion`]
//! - [`ExplanationGenerator`] - per-style justification strings
//!
//! ## Example
//!
//! ```rust
//! use decora_catalog::builtin_catalog;
//! use decora_core::{BoundingBox, DetectedObject, DetectedObjectSet};
//! use decora_engine::{HashEmbedder, LayoutGenerator, StyleRanker};
//!
//! let catalog = builtin_catalog();
//! let detected = DetectedObjectSet::from_objects(vec![
//!     DetectedObject::new("sofa", 0.9, BoundingBox::new(0.0, 0.0, 1.0, 1.0)),
//! ]);
//!
//! let ranker = StyleRanker::new(HashEmbedder::default());
//! let ranked = ranker
//!     .rank(&detected.object_description(), &catalog.style_names(), 3)
//!     .unwrap();
//! assert_eq!(ranked.len(), 3);
//!
//! let layout = LayoutGenerator::new(&catalog).generate(&ranked[0].name, &detected);
//! assert_eq!(layout.style, ranked[0].name);
//! ```

pub mod embed;
pub mod explain;
pub mod layout;
pub mod rank;

pub use embed::{Embedder, HashEmbedder, DEFAULT_EMBEDDING_DIM};
pub use explain::{ExplanationGenerator, StyleExplanation};
pub use layout::{FurniturePlacement, LayoutGenerator, LayoutSuggestion};
pub use rank::{RankedStyle, StyleRanker};
