//! Paint kit lookup by schema name

use crate::types::PaintKit;
use std::collections::HashMap;

/// Name index over a paint kit catalog, built once per run
pub struct PaintKitIndex<'a> {
    paint_kits: &'a [PaintKit],
    by_name: HashMap<&'a str, Vec<usize>>,
}

impl<'a> PaintKitIndex<'a> {
    pub fn new(paint_kits: &'a [PaintKit]) -> Self {
        let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, kit) in paint_kits.iter().enumerate() {
            by_name.entry(kit.name.as_str()).or_default().push(i);
        }

        Self {
            paint_kits,
            by_name,
        }
    }

    /// First catalog entry with this name
    pub fn first(&self, name: &str) -> Option<&'a PaintKit> {
        let paint_kits = self.paint_kits;
        self.by_name
            .get(name)
            .and_then(|indices| indices.first())
            .map(|&i| &paint_kits[i])
    }

    /// Every catalog entry with this name, in catalog order
    pub fn all(&self, name: &str) -> impl Iterator<Item = &'a PaintKit> + '_ {
        let paint_kits = self.paint_kits;
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .map(move |&i| &paint_kits[i])
    }

    /// The whole catalog in catalog order
    pub fn iter(&self) -> std::slice::Iter<'a, PaintKit> {
        self.paint_kits.iter()
    }

    pub fn len(&self) -> usize {
        self.paint_kits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paint_kits.is_empty()
    }
}
