//! Unified skin catalog build

use anyhow::{Context, Result};
use cs2_skins::{
    build_catalog, export, parse_item_sets, parse_knives, BaseWeapon, CatalogInputs,
    CrateReference, KnifePaintKits, PaintKit, SouvenirPackageReference,
};
use std::path::PathBuf;
use std::time::Instant;

use super::{load_catalog, load_schema};
use crate::config::Config;

/// Run the whole pipeline and write the catalog
pub fn handle(config: &Config) -> Result<PathBuf> {
    let start = Instant::now();

    let game = load_schema(config)?;
    let weapons: Vec<BaseWeapon> = load_catalog(config.weapons.as_deref(), "weapon")?;
    let gloves: Vec<BaseWeapon> = load_catalog(config.gloves.as_deref(), "glove")?;
    let paint_kits: Vec<PaintKit> = load_catalog(config.paint_kits.as_deref(), "paint kit")?;
    let crates: Vec<CrateReference> = load_catalog(config.crates.as_deref(), "crate")?;
    let souvenirs: Vec<SouvenirPackageReference> =
        load_catalog(config.souvenir_packages.as_deref(), "souvenir package")?;
    let knife_paint_kits: KnifePaintKits =
        load_catalog(config.knife_paint_kits.as_deref(), "knife paint kit")?;

    let item_sets = parse_item_sets(&game, &crates, &souvenirs);
    let knives = parse_knives(&game);
    let glove_prefixes = config.glove_prefixes();

    let catalog = build_catalog(&CatalogInputs {
        weapons: &weapons,
        knives: &knives,
        gloves: &gloves,
        paint_kits: &paint_kits,
        item_sets: &item_sets,
        knife_paint_kits: &knife_paint_kits,
        glove_prefixes: &glove_prefixes,
    });

    let path = export::write_json(
        &catalog,
        config.output.as_deref(),
        export::DEFAULT_CATALOG_NAME,
    )
    .context("Failed to write skin catalog")?;

    tracing::info!(
        items = catalog.len(),
        path = %path.display(),
        elapsed = ?start.elapsed(),
        "Wrote skin catalog"
    );
    println!("Wrote {} items to {}", catalog.len(), path.display());

    Ok(path)
}
