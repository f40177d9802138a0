//! Configuration command handler

use crate::config::Config;
use anyhow::Result;

/// Display the effective configuration after flags and environment
pub fn show(config: &Config) -> Result<()> {
    match Config::config_path() {
        Some(path) if path.exists() => println!("# Config file: {}", path.display()),
        Some(path) => println!("# Config file: {} (not found)", path.display()),
        None => println!("# No config directory available"),
    }

    print!("{}", config.to_toml()?);

    Ok(())
}
