//! Configuration management for cs2skins
//!
//! Input paths can come from command-line flags, environment variables or a
//! TOML config file, in that order of precedence:
//!
//! ```toml
//! schema = "game/csgo/pak01_dir/scripts/items/items_game.txt"
//! weapons = "exported/weapons.json"
//! paint_kits = "exported/paint_kits.json"
//! output = "exported/skins.json"
//!
//! [glove_prefixes]
//! sporty_gloves = "sporty_"
//! ```

use anyhow::{Context, Result};
use cs2_skins::GlovePrefixes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{CatalogArgs, SchemaArgs, SetReferenceArgs};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schema: Option<PathBuf>,
    pub weapons: Option<PathBuf>,
    pub gloves: Option<PathBuf>,
    pub paint_kits: Option<PathBuf>,
    pub crates: Option<PathBuf>,
    pub souvenir_packages: Option<PathBuf>,
    pub knife_paint_kits: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Extra glove class → paint kit prefix overrides
    pub glove_prefixes: BTreeMap<String, String>,
}

impl Config {
    /// Get the path to the default config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cs2skins").join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicitly given file must exist. Without one, the default config
    /// file is used if present, otherwise an empty configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Config::default()),
            },
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn apply_schema(&mut self, args: &SchemaArgs) {
        override_with(&mut self.schema, &args.schema);
    }

    pub fn apply_set_references(&mut self, args: &SetReferenceArgs) {
        override_with(&mut self.crates, &args.crates);
        override_with(&mut self.souvenir_packages, &args.souvenir_packages);
    }

    pub fn apply_catalogs(&mut self, args: &CatalogArgs) {
        override_with(&mut self.weapons, &args.weapons);
        override_with(&mut self.gloves, &args.gloves);
        override_with(&mut self.paint_kits, &args.paint_kits);
        override_with(&mut self.knife_paint_kits, &args.knife_paint_kits);
        self.apply_set_references(&args.sets);
    }

    /// Schema path, which every command needs
    pub fn schema_path(&self) -> Result<&Path> {
        self.schema.as_deref().context(
            "No schema configured: pass --schema, set CS2SKINS_SCHEMA, or add `schema` to the config file",
        )
    }

    /// Built-in glove prefix overrides extended with the configured ones
    pub fn glove_prefixes(&self) -> GlovePrefixes {
        GlovePrefixes::default().with_overrides(
            self.glove_prefixes
                .iter()
                .map(|(class, prefix)| (class.as_str(), prefix.as_str())),
        )
    }
}

fn override_with(target: &mut Option<PathBuf>, value: &Option<PathBuf>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}
