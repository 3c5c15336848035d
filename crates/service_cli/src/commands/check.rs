//! Check command implementation
//!
//! Loads and validates the configuration and reports the effective settings.

use std::path::Path;

use tracing::info;

use crate::config::WalkgenConfig;
use crate::Result;

/// Run the check command
pub fn run(config_path: &Path, config: &WalkgenConfig) -> Result<()> {
    info!("Checking configuration...");

    if config_path.exists() {
        info!("  Config file: {}", config_path.display());
    } else {
        info!("  Config file: {} (not found, using defaults)", config_path.display());
    }

    config.validate()?;

    println!("log_level   = {}", config.log_level);
    println!("format      = {}", config.output_format()?);
    println!("volatility  = {}", config.walk.volatility);
    println!("start_value = {}", config.walk.start_value);
    match config.walk.seed {
        Some(seed) => println!("seed        = {}", seed),
        None => println!("seed        = (time-derived)"),
    }

    info!("Configuration OK");
    Ok(())
}
