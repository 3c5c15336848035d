//! walkgen - Command Line Front-End for Random-Walk Generation
//!
//! This is the operational entry point for the walk_core library.
//!
//! # Commands
//!
//! - `walkgen generate --length <n>` - Generate a walk and render it
//! - `walkgen check` - Validate configuration and show effective settings
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only resolves settings and
//! renders output; all walk semantics live in `walk_core`.
//!
//! Settings are resolved in order: command-line flags, then `WALKGEN_*`
//! environment variables, then the TOML configuration file, then defaults.
//! Logs go to stderr so that stdout carries only the rendered walk.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod render;

pub use error::{CliError, Result};

use commands::generate::GenerateOptions;
use config::WalkgenConfig;

/// Bounded random-walk generator
#[derive(Parser)]
#[command(name = "walkgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "walkgen.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random walk
    Generate {
        /// Number of points
        #[arg(short, long)]
        length: usize,

        /// Maximum absolute step size (must be positive)
        #[arg(long, allow_negative_numbers = true)]
        volatility: Option<i64>,

        /// Starting value
        #[arg(short, long, allow_negative_numbers = true)]
        start_value: Option<i64>,

        /// Seed for a reproducible walk (0 is a valid seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check configuration and show effective settings
    Check,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = WalkgenConfig::load_or_default(&cli.config)?.with_env_override();

    // Initialise tracing
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Generate {
            length,
            volatility,
            start_value,
            seed,
            format,
            output,
        } => {
            config.validate_log_level()?;
            let options = GenerateOptions {
                length,
                volatility,
                start_value,
                seed,
                format,
                output,
            };
            commands::generate::run(&config, &options).map(|_| ())
        }
        Commands::Check => commands::check::run(&cli.config, &config),
    }
}
