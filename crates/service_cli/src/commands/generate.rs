//! Generate command implementation
//!
//! Generates a random walk with walk_core and renders it to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tracing::info;
use walk_core::{WalkRequest, WalkResult};

use crate::config::WalkgenConfig;
use crate::render::{write_walk, OutputFormat};
use crate::{CliError, Result};

/// Command-line options for a single walk.
///
/// `None` fields fall back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Number of points
    pub length: usize,
    /// Step bound
    pub volatility: Option<i64>,
    /// Starting value
    pub start_value: Option<i64>,
    /// Fixed seed
    pub seed: Option<u64>,
    /// Output format name
    pub format: Option<String>,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
}

impl GenerateOptions {
    /// Merge with configuration defaults into a walk request
    ///
    /// A configured value is only checked when no flag replaces it.
    pub fn to_request(&self, config: &WalkgenConfig) -> Result<WalkRequest> {
        let volatility = match self.volatility {
            Some(volatility) => volatility,
            None => config.checked("volatility", config.walk.volatility)?,
        };
        let start_value = match self.start_value {
            Some(start_value) => start_value,
            None => config.checked("start_value", config.walk.start_value)?,
        };
        let seed = match self.seed {
            Some(seed) => Some(seed),
            None => config.checked("seed", config.walk.seed)?,
        };

        Ok(WalkRequest::new(self.length)
            .volatility(volatility)
            .start_value(start_value)
            .with_seed(seed))
    }

    /// Resolve the output format, preferring the command-line value
    pub fn output_format(&self, config: &WalkgenConfig) -> Result<OutputFormat> {
        match &self.format {
            Some(format) => format.parse().map_err(CliError::InvalidArgument),
            None => Ok(config.output_format()?),
        }
    }
}

/// Run the generate command
pub fn run(config: &WalkgenConfig, options: &GenerateOptions) -> Result<WalkResult> {
    let format = options.output_format(config)?;
    let request = options.to_request(config)?;

    info!("Generating walk...");
    info!("  Length: {}", request.length);
    info!("  Volatility: {}", request.volatility);
    info!("  Start value: {}", request.start_value);
    info!("  Output format: {}", format);

    let walk = request.generate()?;
    info!("  Seed: {}", walk.seed());

    match &options.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_walk(&walk, format, &mut writer)?;
            writer.flush()?;
            info!("Walk written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_walk(&walk, format, stdout.lock())?;
        }
    }

    Ok(walk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = WalkgenConfig::default();
        config.walk.seed = Some(1);

        let options = GenerateOptions {
            length: 10,
            volatility: Some(5),
            seed: Some(0),
            ..Default::default()
        };
        let request = options.to_request(&config).unwrap();

        assert_eq!(request.length, 10);
        assert_eq!(request.volatility, 5);
        assert_eq!(request.start_value, 50);
        assert_eq!(request.seed, Some(0));
    }

    #[test]
    fn test_config_seed_used_when_flag_absent() {
        let mut config = WalkgenConfig::default();
        config.walk.seed = Some(77);

        let request = GenerateOptions::default().to_request(&config).unwrap();
        assert_eq!(request.seed, Some(77));
    }

    fn env_config(vars: &'static [(&'static str, &'static str)]) -> WalkgenConfig {
        WalkgenConfig::default().with_overrides(|key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        })
    }

    #[test]
    fn test_flags_replace_malformed_environment() {
        let config = env_config(&[
            ("WALKGEN_VOLATILITY", "abc"),
            ("WALKGEN_FORMAT", "xml"),
            ("WALKGEN_SEED", "-1"),
        ]);
        assert!(config.validate().is_err());

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("walk.json");
        let options = GenerateOptions {
            length: 5,
            volatility: Some(2),
            seed: Some(9),
            format: Some("json".to_string()),
            output: Some(output.clone()),
            ..Default::default()
        };

        let walk = run(&config, &options).unwrap();
        assert_eq!(walk.len(), 5);
        assert_eq!(walk.seed(), 9);
        assert!(output.exists());
    }

    #[test]
    fn test_malformed_seed_without_flag_rejected() {
        let config = env_config(&[("WALKGEN_SEED", "4x2")]);
        let err = GenerateOptions::default().to_request(&config).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_malformed_start_value_without_flag_rejected() {
        let config = env_config(&[("WALKGEN_START_VALUE", "fifty")]);
        let options = GenerateOptions {
            length: 3,
            ..Default::default()
        };
        assert!(matches!(run(&config, &options), Err(CliError::Config(_))));

        let options = GenerateOptions {
            start_value: Some(10),
            ..options
        };
        assert_eq!(options.to_request(&config).unwrap().start_value, 10);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let options = GenerateOptions {
            format: Some("xml".to_string()),
            ..Default::default()
        };
        let err = options.output_format(&WalkgenConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_invalid_volatility_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("walk.csv");
        let options = GenerateOptions {
            length: 10,
            volatility: Some(0),
            output: Some(output.clone()),
            ..Default::default()
        };

        let err = run(&WalkgenConfig::default(), &options).unwrap_err();
        assert!(matches!(err, CliError::Walk(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("walk.csv");
        let options = GenerateOptions {
            length: 20,
            seed: Some(42),
            format: Some("csv".to_string()),
            output: Some(output.clone()),
            ..Default::default()
        };

        let walk = run(&WalkgenConfig::default(), &options).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();

        assert_eq!(walk.len(), 20);
        assert_eq!(written.lines().count(), 21);
        assert!(written.starts_with("index,value\n"));
    }
}
