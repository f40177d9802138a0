//! Input file arguments shared between commands

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub struct SchemaArgs {
    /// Path to items_game.txt
    #[arg(long, env = "CS2SKINS_SCHEMA")]
    pub schema: Option<PathBuf>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct SetReferenceArgs {
    /// Crate catalog (JSON)
    #[arg(long, env = "CS2SKINS_CRATES")]
    pub crates: Option<PathBuf>,

    /// Souvenir package catalog (JSON)
    #[arg(long, env = "CS2SKINS_SOUVENIR_PACKAGES")]
    pub souvenir_packages: Option<PathBuf>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct CatalogArgs {
    /// Weapon catalog (JSON)
    #[arg(long, env = "CS2SKINS_WEAPONS")]
    pub weapons: Option<PathBuf>,

    /// Glove catalog (JSON)
    #[arg(long, env = "CS2SKINS_GLOVES")]
    pub gloves: Option<PathBuf>,

    /// Paint kit catalog (JSON)
    #[arg(long, env = "CS2SKINS_PAINT_KITS")]
    pub paint_kits: Option<PathBuf>,

    /// Knife class → paint kit names table (JSON)
    #[arg(long, env = "CS2SKINS_KNIFE_PAINT_KITS")]
    pub knife_paint_kits: Option<PathBuf>,

    #[command(flatten)]
    pub sets: SetReferenceArgs,
}
