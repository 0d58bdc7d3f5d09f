//! Error types for the engine crate.
//!
//! Comparisons never fail; only loading a [`crate::DiffConfig`] can.

use std::path::PathBuf;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown value types.
    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the engine cannot work with.
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Convenience alias for config results.
pub type ConfigResult<T> = Result<T, ConfigError>;
