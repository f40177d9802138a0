//! Knife extraction from client loot lists

use crate::kv::KeyValue;
use crate::schema::ItemsGame;
use crate::types::BaseWeapon;
use std::time::Instant;

/// Prefab tag shared by every knife
pub const KNIFE_PREFAB: &str = "melee_unusual";

/// Collect knife base items from `client_loot_lists`
///
/// Only entries inheriting the [`KNIFE_PREFAB`] prefab are kept. Entries
/// whose key is not a definition index are skipped.
pub fn parse_knives(game: &ItemsGame) -> Vec<BaseWeapon> {
    let start = Instant::now();

    let loot_lists = match game.section("client_loot_lists") {
        Ok(section) => section,
        Err(err) => {
            tracing::error!(error = %err, "Failed to get client_loot_lists from items_game");
            return Vec::new();
        }
    };

    let knives: Vec<BaseWeapon> = loot_lists
        .children()
        .iter()
        .filter_map(knife_from_entry)
        .collect();

    tracing::info!(
        count = knives.len(),
        elapsed = ?start.elapsed(),
        "Parsed knives"
    );

    knives
}

/// Materialize a loot list entry as a knife, if it is one
pub fn knife_from_entry(entry: &KeyValue) -> Option<BaseWeapon> {
    if entry.get_string("prefab") != Some(KNIFE_PREFAB) {
        return None;
    }

    let definition_index = entry.key.parse().ok()?;
    let field = |name: &str| entry.get_string(name).unwrap_or_default().to_string();

    Some(BaseWeapon {
        definition_index,
        class_name: field("name"),
        display_name: field("item_name"),
        // Knives cannot carry stickers
        num_stickers: 0,
        image_inventory: field("image_inventory"),
    })
}
