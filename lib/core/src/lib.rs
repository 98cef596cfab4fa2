//! # decora Core
//!
//! Core library for the decora design recommendation engine.
//!
//! This crate provides the fundamental data structures shared by the catalog
//! and the rule engine:
//!
//! - [`Vector`] - Dense embedding vector with cosine similarity
//! - [`DetectedObject`] / [`DetectedObjectSet`] - Output of an upstream object detector
//! - [`RoomClassification`] / [`ColorFeatures`] - Auxiliary model outputs
//! - [`Error`] / [`Result`] - Shared error type
//!
//! ## Example
//!
//! ```rust
//! use decora_core::{BoundingBox, DetectedObject, DetectedObjectSet, Vector};
//!
//! let detections = DetectedObjectSet::from_objects(vec![
//!     DetectedObject::new("sofa", 0.93, BoundingBox::new(0.0, 0.0, 120.0, 80.0)),
//!     DetectedObject::new("table", 0.88, BoundingBox::new(130.0, 10.0, 200.0, 60.0)),
//! ]);
//! assert_eq!(detections.object_description(), "1 sofa, 1 table");
//!
//! let a = Vector::new(vec![1.0, 0.0]);
//! let b = Vector::new(vec![1.0, 0.0]);
//! assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-6);
//! ```

pub mod detection;
pub mod error;
pub mod features;
pub mod vector;

pub use detection::{BoundingBox, DetectedObject, DetectedObjectSet};
pub use error::{Error, Result};
pub use features::{ColorFeatures, RoomClassification};
pub use vector::Vector;
