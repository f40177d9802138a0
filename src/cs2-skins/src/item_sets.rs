//! Item set extraction
//!
//! Each child of `item_sets` is a collection. Weapon collections list their
//! skins as `"[paint_kit]weapon_class"` keys; agent collections list agent
//! identifiers directly.
//!
//! ```text
//! "set_community_3"
//! {
//!     "name"  "#CSGO_set_community_3"
//!     "items"
//!     {
//!         "[cu_tec9_asiimov]weapon_tec9"  "1"
//!         "[cu_m4a1s_cyrex]weapon_m4a1_silencer"  "1"
//!     }
//! }
//! ```

use crate::kv::KeyValue;
use crate::schema::ItemsGame;
use crate::types::{
    CrateReference, ItemSet, ItemSetId, ItemSetItem, ItemSetKind, SetReference,
    SouvenirPackageReference,
};
use std::time::Instant;

/// Extract all paint kit and agent sets from the schema
///
/// Crates and souvenir packages are scanned for references to each set to
/// decide StatTrak and Souvenir eligibility. A schema without `item_sets`
/// yields no sets.
pub fn parse_item_sets(
    game: &ItemsGame,
    crates: &[CrateReference],
    souvenir_packages: &[SouvenirPackageReference],
) -> Vec<ItemSet> {
    let start = Instant::now();

    let item_sets = match game.section("item_sets") {
        Ok(section) => section,
        Err(err) => {
            tracing::error!(error = %err, "Failed to get item_sets from items_game");
            return Vec::new();
        }
    };

    let mut sets = Vec::new();
    for node in item_sets.children() {
        let Some(mut set) = extract_item_set(node) else {
            continue;
        };

        set.has_crate = is_referenced(crates, &set.key);
        set.has_souvenir = is_referenced(souvenir_packages, &set.key);
        sets.push(set);
    }

    tracing::info!(
        count = sets.len(),
        elapsed = ?start.elapsed(),
        "Parsed item sets"
    );

    sets
}

/// Build one item set from its schema node
///
/// Returns `None` for sets that declare neither paint kits nor agents.
/// Eligibility flags are left unset.
pub fn extract_item_set(node: &KeyValue) -> Option<ItemSet> {
    let items = node.get("items");
    let paint_kits = items.map(item_set_paint_kits).unwrap_or_default();

    let (kind, agents) = if paint_kits.is_empty() {
        let agents = items.map(item_set_agents).unwrap_or_default();
        if agents.is_empty() {
            return None;
        }
        (ItemSetKind::Agents, agents)
    } else {
        (ItemSetKind::PaintKits, Vec::new())
    };

    Some(ItemSet {
        key: ItemSetId::from(node.key.as_str()),
        name: node.get_string("name").unwrap_or_default().to_string(),
        kind,
        items: paint_kits,
        agents,
        has_crate: false,
        has_souvenir: false,
    })
}

/// Paint kit/weapon pairs declared under an `items` node
pub fn item_set_paint_kits(items: &KeyValue) -> Vec<ItemSetItem> {
    items
        .children()
        .iter()
        .filter_map(|child| parse_item_set_key(&child.key))
        .collect()
}

/// Agent identifiers declared under an `items` node
pub fn item_set_agents(items: &KeyValue) -> Vec<String> {
    items.children().iter().map(|child| child.key.clone()).collect()
}

/// Split `"[cu_tec9_asiimov]weapon_tec9"` into its paint kit and weapon class
///
/// The paint kit name ends at the first `]` after at least one character,
/// and the weapon class must not be empty.
pub fn parse_item_set_key(key: &str) -> Option<ItemSetItem> {
    let rest = key.strip_prefix('[')?;
    let (close, _) = rest.char_indices().skip(1).find(|&(_, c)| c == ']')?;

    let paint_kit_name = &rest[..close];
    let weapon_class = &rest[close + 1..];
    if weapon_class.is_empty() {
        return None;
    }

    Some(ItemSetItem {
        paint_kit_name: paint_kit_name.to_string(),
        weapon_class: weapon_class.to_string(),
    })
}

fn is_referenced(references: &[SetReference], key: &ItemSetId) -> bool {
    references.iter().any(|r| r.references(key))
}
