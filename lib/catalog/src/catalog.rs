//! The style catalog
//!
//! An immutable, insertion-ordered table of [`Style`] entries with O(1)
//! lookup by name. Insertion order matters: the ranker enumerates candidate
//! styles in catalog order and breaks score ties by it.
//!
//! The catalog serializes as a JSON array of style records, so a saved
//! catalog reloads with the exact same contents and order.

use crate::style::Style;
use decora_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Read-only table of design styles, initialized once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<Style>", into = "Vec<Style>")]
pub struct StyleCatalog {
    styles: Vec<Style>,
    index: HashMap<String, usize>,
}

impl StyleCatalog {
    /// Build a catalog from styles, preserving their order.
    ///
    /// Fails with [`Error::InvalidConfig`] on duplicate style names.
    pub fn new(styles: Vec<Style>) -> Result<Self> {
        let mut index = HashMap::with_capacity(styles.len());
        for (i, style) in styles.iter().enumerate() {
            if index.insert(style.name.clone(), i).is_some() {
                return Err(Error::InvalidConfig(format!(
                    "duplicate style name: {}",
                    style.name
                )));
            }
        }
        Ok(Self { styles, index })
    }

    /// Look up a style by name. Callers decide the fallback policy on a miss.
    pub fn lookup(&self, name: &str) -> Option<&Style> {
        self.index.get(name).map(|&i| &self.styles[i])
    }

    /// Look up a style by name, surfacing a miss as an error.
    pub fn get(&self, name: &str) -> Result<&Style> {
        self.lookup(name)
            .ok_or_else(|| Error::StyleNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Style names in catalog order, for use as ranking candidates.
    pub fn style_names(&self) -> Vec<String> {
        self.styles.iter().map(|s| s.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Load a catalog from a JSON config file (an array of style records).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&contents)?;
        Ok(catalog)
    }

    /// Save the catalog to a JSON config file, pretty-printed for editing.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl TryFrom<Vec<Style>> for StyleCatalog {
    type Error = Error;

    fn try_from(styles: Vec<Style>) -> Result<Self> {
        StyleCatalog::new(styles)
    }
}

impl From<StyleCatalog> for Vec<Style> {
    fn from(catalog: StyleCatalog) -> Self {
        catalog.styles
    }
}
