//! Command handlers for cs2skins
//!
//! Each subcommand has its own module with handler functions.

pub mod build;
pub mod config;
pub mod schema;

use anyhow::{Context, Result};
use cs2_skins::{catalog, ItemsGame};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::config::Config;

/// Load and parse the configured items_game.txt
fn load_schema(config: &Config) -> Result<ItemsGame> {
    let path = config.schema_path()?;
    ItemsGame::load(path).with_context(|| format!("Failed to load schema {}", path.display()))
}

/// Load an optional JSON catalog, starting empty when none is configured
fn load_catalog<T: DeserializeOwned + Default>(path: Option<&Path>, what: &str) -> Result<T> {
    if path.is_none() {
        tracing::warn!("No {} catalog configured, continuing without it", what);
    }

    catalog::load_or_default(path).with_context(|| match path {
        Some(path) => format!("Failed to load {} catalog {}", what, path.display()),
        None => format!("Failed to load {} catalog", what),
    })
}
