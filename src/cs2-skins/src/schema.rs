//! `items_game.txt` root accessor

use crate::kv::{self, KeyValue};
use crate::{Error, Result};
use std::path::Path;

/// Parsed item schema
///
/// Wraps the `items_game` block and exposes its top-level sections
/// (`item_sets`, `client_loot_lists`, `paint_kits`, ...).
#[derive(Debug, Clone)]
pub struct ItemsGame {
    root: KeyValue,
}

impl ItemsGame {
    /// Read and parse a schema file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse schema text
    ///
    /// A document holding a single top-level block is unwrapped to that
    /// block; otherwise the top-level nodes themselves are the sections.
    pub fn parse(text: &str) -> Result<Self> {
        let mut nodes = kv::parse(text)?;

        let root = if nodes.len() == 1 && nodes[0].as_str().is_none() {
            nodes.remove(0)
        } else {
            KeyValue::block("items_game", nodes)
        };

        Ok(Self::from_root(root))
    }

    pub fn from_root(root: KeyValue) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &KeyValue {
        &self.root
    }

    /// Look up a required top-level section
    pub fn section(&self, name: &str) -> Result<&KeyValue> {
        self.root
            .get(name)
            .ok_or_else(|| Error::MissingSection(name.to_string()))
    }
}
