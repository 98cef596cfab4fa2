//! Detected-object data produced by an upstream object detector.
//!
//! The engine never runs detection itself; it consumes the detector's output
//! read-only. `DetectedObjectSet` keeps the invariant that `count[c]` equals
//! the number of objects with class `c`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Axis-aligned bounding box in image coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).abs()
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

/// A single object reported by the detector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectedObject {
    /// Detector class label, e.g. "sofa" or "table".
    pub class: String,
    /// Detection confidence in [0, 1].
    pub confidence: f32,
    pub bbox: BoundingBox,
}

impl DetectedObject {
    pub fn new(class: impl Into<String>, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            class: class.into(),
            confidence,
            bbox,
        }
    }
}

/// The full detection result for one image: the raw objects plus a per-class
/// count map derived from them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectedObjectSet {
    pub objects: Vec<DetectedObject>,
    #[serde(default)]
    pub count: HashMap<String, usize>,
}

impl DetectedObjectSet {
    /// Build a set from raw detections, deriving the count map.
    ///
    /// Sets built this way always satisfy the count invariant.
    pub fn from_objects(objects: Vec<DetectedObject>) -> Self {
        let mut count: HashMap<String, usize> = HashMap::new();
        for obj in &objects {
            *count.entry(obj.class.clone()).or_insert(0) += 1;
        }
        Self { objects, count }
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn total_objects(&self) -> usize {
        self.objects.len()
    }

    /// Check the count invariant for externally supplied sets.
    pub fn is_consistent(&self) -> bool {
        let mut derived: HashMap<&str, usize> = HashMap::new();
        for obj in &self.objects {
            *derived.entry(obj.class.as_str()).or_insert(0) += 1;
        }
        if derived.len() != self.count.len() {
            return false;
        }
        derived
            .iter()
            .all(|(class, n)| self.count.get(*class) == Some(n))
    }

    /// Per-class counts in a fixed order: descending count, ties broken
    /// alphabetically by class name.
    pub fn ordered_counts(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .count
            .iter()
            .map(|(class, n)| (class.as_str(), *n))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Textual description of the object composition, e.g.
    /// `"2 sofa, 1 table"`.
    ///
    /// Uses the `ordered_counts` ordering so the description (and hence its
    /// embedding) is deterministic for a given set of detections.
    pub fn object_description(&self) -> String {
        self.ordered_counts()
            .into_iter()
            .map(|(class, n)| format!("{} {}", n, class))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
