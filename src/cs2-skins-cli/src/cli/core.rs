//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::inputs::{CatalogArgs, SchemaArgs, SetReferenceArgs};

#[derive(Parser)]
#[command(name = "cs2skins")]
#[command(about = "Counter-Strike 2 skin catalog exporter", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "CS2SKINS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the unified weapon/knife/glove skin catalog
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        catalogs: CatalogArgs,

        /// Output file (default: exported/skins.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export item sets with their crate/souvenir eligibility
    #[command(visible_alias = "s")]
    ItemSets {
        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        sets: SetReferenceArgs,

        /// Output file (default: exported/item_sets.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export knives found in the client loot lists
    #[command(visible_alias = "k")]
    Knives {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Output file (default: exported/knives.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the effective configuration
    #[command(visible_alias = "c")]
    Config,
}
