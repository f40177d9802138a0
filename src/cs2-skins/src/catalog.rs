//! Pre-extracted JSON catalogs
//!
//! Weapons, gloves, paint kits, crates, souvenir packages and the knife
//! table are produced by earlier extraction passes and stored as JSON:
//!
//! ```text
//! weapons.json            [{"definition_index": 30, "class_name": "weapon_tec9", "name": "Tec-9", "num_stickers": 4}]
//! paint_kits.json         [{"definition_index": 179, "name": "cu_tec9_asiimov", "market_hash_name": "Isaac", "wear": 1.0, "rarity": "mythical"}]
//! crates.json             [{"item_set_id": "set_community_3", ...}]
//! knife_paint_kits.json   {"weapon_knife_karambit": ["aq_damascus", ...]}
//! ```
//!
//! Unknown fields are ignored so richer upstream exports load unchanged.

use crate::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load one JSON catalog
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let catalog = serde_json::from_str(&content)?;
    Ok(catalog)
}

/// Load a catalog if a path is given, otherwise start empty
pub fn load_or_default<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) => load(path),
        None => Ok(T::default()),
    }
}
