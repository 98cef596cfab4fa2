//! Auxiliary model outputs carried alongside recommendations.
//!
//! Room classification and color features come from upstream models and are
//! not consumed by the rule engine itself; callers attach them to the final
//! response for clients that want them.

use serde::{Deserialize, Serialize};

/// Output of the room classifier capability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomClassification {
    /// Room type label, e.g. "living" or "bedroom".
    pub label: String,
    /// Classifier confidence in [0, 1].
    pub confidence: f32,
}

impl RoomClassification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Color features extracted from the input image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColorFeatures {
    /// Dominant color tags, most prominent first.
    pub dominant_colors: Vec<String>,
}

impl ColorFeatures {
    pub fn new(dominant_colors: Vec<String>) -> Self {
        Self { dominant_colors }
    }
}
