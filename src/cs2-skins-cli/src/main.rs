mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "cs2_skins=debug,cs2skins=debug"
    } else {
        "cs2_skins=info,cs2skins=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Build {
            schema,
            catalogs,
            output,
        } => {
            config.apply_schema(&schema);
            config.apply_catalogs(&catalogs);
            config.output = output.or(config.output);
            commands::build::handle(&config)?;
        }

        Commands::ItemSets {
            schema,
            sets,
            output,
        } => {
            config.apply_schema(&schema);
            config.apply_set_references(&sets);
            // The configured output names the skin catalog, not this dump
            config.output = output;
            commands::schema::item_sets(&config)?;
        }

        Commands::Knives { schema, output } => {
            config.apply_schema(&schema);
            config.output = output;
            commands::schema::knives(&config)?;
        }

        Commands::Config => {
            commands::config::show(&config)?;
        }
    }

    Ok(())
}
