//! # cs2-skins
//!
//! Counter-Strike 2 item schema parser - builds a unified skin catalog.
//!
//! The game's `items_game.txt` declares paint kits, item sets and loot lists
//! in separate sections that only make sense once joined. This library:
//! - Reads the KeyValues text format into a tree ([`kv`])
//! - Extracts item sets and their crate/souvenir eligibility ([`item_sets`])
//! - Filters knife base items out of the client loot lists ([`loot_lists`])
//! - Resolves which paint kits apply to every weapon, knife and glove ([`resolve`])
//! - Writes the resulting catalog as JSON ([`export`])
//!
//! ## Example
//!
//! ```no_run
//! use cs2_skins::{
//!     build_catalog, catalog, export, parse_item_sets, parse_knives, BaseWeapon,
//!     CatalogInputs, CrateReference, GlovePrefixes, ItemsGame, KnifePaintKits, PaintKit,
//! };
//! use std::path::Path;
//!
//! # fn main() -> cs2_skins::Result<()> {
//! let game = ItemsGame::load("items_game.txt")?;
//! let weapons: Vec<BaseWeapon> = catalog::load(Path::new("weapons.json"))?;
//! let gloves: Vec<BaseWeapon> = catalog::load(Path::new("gloves.json"))?;
//! let paint_kits: Vec<PaintKit> = catalog::load(Path::new("paint_kits.json"))?;
//! let crates: Vec<CrateReference> = catalog::load(Path::new("crates.json"))?;
//! let souvenirs: Vec<CrateReference> = catalog::load(Path::new("souvenir_packages.json"))?;
//! let knife_paint_kits: KnifePaintKits = catalog::load(Path::new("knife_paint_kits.json"))?;
//!
//! let item_sets = parse_item_sets(&game, &crates, &souvenirs);
//! let knives = parse_knives(&game);
//! let glove_prefixes = GlovePrefixes::default();
//!
//! let skins = build_catalog(&CatalogInputs {
//!     weapons: &weapons,
//!     knives: &knives,
//!     gloves: &gloves,
//!     paint_kits: &paint_kits,
//!     item_sets: &item_sets,
//!     knife_paint_kits: &knife_paint_kits,
//!     glove_prefixes: &glove_prefixes,
//! });
//!
//! export::write_json(&skins, None, export::DEFAULT_CATALOG_NAME)?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod export;
pub mod item_sets;
pub mod kv;
pub mod loot_lists;
pub mod resolve;
pub mod schema;
pub mod types;

// Re-export commonly used items
#[doc(inline)]
pub use item_sets::{parse_item_set_key, parse_item_sets};
#[doc(inline)]
pub use kv::{KeyValue, Value};
#[doc(inline)]
pub use loot_lists::{parse_knives, KNIFE_PREFAB};
#[doc(inline)]
pub use resolve::{
    build_catalog, resolve, CatalogInputs, GlovePrefixes, KnifePaintKits, PaintKitIndex, Strategy,
    WeaponSkins, GLOVE_PREFIX_OVERRIDES,
};
#[doc(inline)]
pub use schema::ItemsGame;
#[doc(inline)]
pub use types::{
    BaseWeapon, CrateReference, Eligibility, ItemKind, ItemSet, ItemSetId, ItemSetItem,
    ItemSetKind, PaintKit, PaintKitAssociation, SetReference, SkinCatalog, SkinCatalogEntry,
    SouvenirPackageReference,
};

/// Errors from schema parsing and catalog I/O
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("KeyValues parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Schema section '{0}' not found")]
    MissingSection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
