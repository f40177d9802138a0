//! Intermediate schema dumps (item sets, knives)

use anyhow::{Context, Result};
use cs2_skins::{
    export, parse_item_sets, parse_knives, CrateReference, ItemSetKind, SouvenirPackageReference,
};
use std::path::PathBuf;

use super::{load_catalog, load_schema};
use crate::config::Config;

pub const ITEM_SETS_NAME: &str = "item_sets";
pub const KNIVES_NAME: &str = "knives";

/// Export item sets with crate/souvenir eligibility
pub fn item_sets(config: &Config) -> Result<PathBuf> {
    let game = load_schema(config)?;
    let crates: Vec<CrateReference> = load_catalog(config.crates.as_deref(), "crate")?;
    let souvenirs: Vec<SouvenirPackageReference> =
        load_catalog(config.souvenir_packages.as_deref(), "souvenir package")?;

    let sets = parse_item_sets(&game, &crates, &souvenirs);
    let path = export::write_json(&sets, config.output.as_deref(), ITEM_SETS_NAME)
        .context("Failed to write item sets")?;

    let agents = sets
        .iter()
        .filter(|set| set.kind == ItemSetKind::Agents)
        .count();
    println!(
        "Wrote {} item sets ({} agent sets) to {}",
        sets.len(),
        agents,
        path.display()
    );

    Ok(path)
}

/// Export knife base items from the client loot lists
pub fn knives(config: &Config) -> Result<PathBuf> {
    let game = load_schema(config)?;

    let knives = parse_knives(&game);
    let path = export::write_json(&knives, config.output.as_deref(), KNIVES_NAME)
        .context("Failed to write knives")?;

    println!("Wrote {} knives to {}", knives.len(), path.display());

    Ok(path)
}
