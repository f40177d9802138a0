//! Schema and skin catalog type definitions

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Item set identifier
///
/// The schema keys item sets by node name (`set_community_3`, `set_dust_2`,
/// or a bare number). Catalogs may spell a reference as a JSON number or a
/// string; both compare equal to the node key with the same spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemSetId(String);

impl ItemSetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemSetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemSetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for ItemSetId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemSetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Self(n.to_string()),
            Repr::Text(s) => Self(s),
        })
    }
}

/// Equippable base item (weapon, knife or glove)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseWeapon {
    pub definition_index: u32,
    /// Schema class name (e.g. "weapon_tec9")
    pub class_name: String,
    /// Display name
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub num_stickers: u32,
    #[serde(default)]
    pub image_inventory: String,
}

/// Paint kit (skin) definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintKit {
    pub definition_index: u32,
    /// Schema identifier (e.g. "cu_tec9_asiimov")
    pub name: String,
    #[serde(default)]
    pub market_hash_name: String,
    #[serde(default, alias = "float")]
    pub wear: f64,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub item_set_id: Option<ItemSetId>,
    #[serde(default, rename = "stattrak", alias = "stat_trak")]
    pub stat_trak: bool,
    #[serde(default)]
    pub souvenir: bool,
}

/// One `[paint_kit]weapon_class` pairing declared inside an item set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSetItem {
    pub paint_kit_name: String,
    pub weapon_class: String,
}

/// What an item set groups together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSetKind {
    PaintKits,
    Agents,
}

/// Named item set (collection) from the schema
///
/// `items` is only populated for [`ItemSetKind::PaintKits`], `agents` only
/// for [`ItemSetKind::Agents`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSet {
    pub key: ItemSetId,
    pub name: String,
    pub kind: ItemSetKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemSetItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<String>,
    /// Some weapon case drops this set (StatTrak eligible)
    pub has_crate: bool,
    /// Some souvenir package drops this set
    pub has_souvenir: bool,
}

/// Projection of a crate or souvenir package onto the item set it drops
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetReference {
    #[serde(default)]
    pub item_set_id: Option<ItemSetId>,
}

impl SetReference {
    pub fn new(item_set_id: impl Into<ItemSetId>) -> Self {
        Self {
            item_set_id: Some(item_set_id.into()),
        }
    }

    pub fn references(&self, key: &ItemSetId) -> bool {
        self.item_set_id.as_ref() == Some(key)
    }
}

pub type CrateReference = SetReference;
pub type SouvenirPackageReference = SetReference;

/// Base item category in the output catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Knife,
    Glove,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Weapon => write!(f, "weapon"),
            ItemKind::Knife => write!(f, "knife"),
            ItemKind::Glove => write!(f, "glove"),
        }
    }
}

/// StatTrak/Souvenir eligibility of a paint kit on one base item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Eligibility {
    pub item_set_id: Option<ItemSetId>,
    pub stat_trak: bool,
    pub souvenir: bool,
}

impl Eligibility {
    /// The paint kit's own catalog values
    pub fn of(paint_kit: &PaintKit) -> Self {
        Self {
            item_set_id: paint_kit.item_set_id.clone(),
            stat_trak: paint_kit.stat_trak,
            souvenir: paint_kit.souvenir,
        }
    }
}

/// A paint kit applied to one base item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintKitAssociation {
    pub definition_index: u32,
    #[serde(rename = "float")]
    pub wear: f64,
    pub rarity: String,
    /// `<base class name>_<paint kit name>`
    #[serde(rename = "image")]
    pub image_id: String,
    #[serde(rename = "name")]
    pub market_hash_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_set_id: Option<ItemSetId>,
    pub souvenir: bool,
    #[serde(rename = "stattrak")]
    pub stat_trak: bool,
}

impl PaintKitAssociation {
    pub fn new(base: &BaseWeapon, paint_kit: &PaintKit, eligibility: Eligibility) -> Self {
        Self {
            definition_index: paint_kit.definition_index,
            wear: paint_kit.wear,
            rarity: paint_kit.rarity.clone(),
            image_id: image_id(&base.class_name, &paint_kit.name),
            market_hash_name: paint_kit.market_hash_name.clone(),
            item_set_id: eligibility.item_set_id,
            souvenir: eligibility.souvenir,
            stat_trak: eligibility.stat_trak,
        }
    }
}

/// Image identifier for a paint kit on a base item
pub fn image_id(class_name: &str, paint_kit_name: &str) -> String {
    format!("{}_{}", class_name, paint_kit_name)
}

/// Output record for one base item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinCatalogEntry {
    pub name: String,
    pub sticker_count: u32,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub paints: BTreeMap<u32, PaintKitAssociation>,
}

impl SkinCatalogEntry {
    pub fn new(name: impl Into<String>, sticker_count: u32, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            sticker_count,
            kind,
            paints: BTreeMap::new(),
        }
    }
}

/// Unified catalog keyed by base item definition index
pub type SkinCatalog = BTreeMap<u32, SkinCatalogEntry>;
