//! Knife paint kit lookup table
//!
//! Knives are not declared in any paint kit item set, so which finishes a
//! knife can carry has to come from an explicit table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Knife class name → eligible paint kit names
///
/// Stored on disk as a JSON object:
///
/// ```text
/// { "weapon_knife_karambit": ["aq_damascus", "am_ruby_marbleized"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnifePaintKits(HashMap<String, Vec<String>>);

impl KnifePaintKits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class_name: impl Into<String>, paint_kits: Vec<String>) {
        self.0.insert(class_name.into(), paint_kits);
    }

    /// Paint kit names for a knife class, in table order
    pub fn get(&self, class_name: &str) -> Option<&[String]> {
        self.0.get(class_name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for KnifePaintKits {
    fn from(table: HashMap<String, Vec<String>>) -> Self {
        Self(table)
    }
}

impl FromIterator<(String, Vec<String>)> for KnifePaintKits {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
