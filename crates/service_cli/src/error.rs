//! Error types for the walkgen CLI.

use thiserror::Error;
use walk_core::WalkError;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Walk generation rejected its inputs
    #[error("Walk generation error: {0}")]
    Walk(#[from] WalkError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialisation failed
    #[error("Serialisation error: {0}")]
    Serialisation(String),
}

impl CliError {
    /// Create a serialisation error
    pub fn serialisation(msg: impl std::fmt::Display) -> Self {
        Self::Serialisation(msg.to_string())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
