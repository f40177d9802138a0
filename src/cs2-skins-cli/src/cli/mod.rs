//! CLI argument definitions for cs2skins
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod inputs;

pub use self::core::{Cli, Commands};
pub use inputs::{CatalogArgs, SchemaArgs, SetReferenceArgs};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};
    use std::path::Path;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from([
            "cs2skins",
            "-v",
            "build",
            "--schema",
            "items_game.txt",
            "--paint-kits",
            "paint_kits.json",
            "--crates",
            "crates.json",
            "-o",
            "out.json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Build {
                schema,
                catalogs,
                output,
            } => {
                assert_eq!(schema.schema.as_deref(), Some(Path::new("items_game.txt")));
                assert_eq!(catalogs.paint_kits.as_deref(), Some(Path::new("paint_kits.json")));
                assert_eq!(catalogs.sets.crates.as_deref(), Some(Path::new("crates.json")));
                assert!(catalogs.weapons.is_none());
                assert_eq!(output.as_deref(), Some(Path::new("out.json")));
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_parse_knives_alias() {
        let cli = Cli::try_parse_from(["cs2skins", "k", "--schema", "items_game.txt"]).unwrap();
        assert!(matches!(cli.command, Commands::Knives { .. }));
    }
}
