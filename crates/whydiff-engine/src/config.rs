use std::path::Path;

use serde::{Deserialize, Serialize};
use whydiff_render::{HunkStrategy, MIN_COLUMN_WIDTH};
use whydiff_types::limits::{
    COLUMN_WIDTH, DEFAULT_CONTEXT_LINES, DEFAULT_WINDOW_SIZE, MAX_INPUT_BYTES, MAX_LINES,
};

use crate::error::{ConfigError, ConfigResult};

/// Thresholds and layout settings for a [`crate::DiffEngine`].
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Inputs larger than this many bytes skip line-level detection.
    pub max_input_bytes: usize,
    /// Only this many leading lines of each input are compared and rendered.
    pub max_lines: usize,
    /// Characters per side-by-side cell.
    pub column_width: usize,
    /// Units shown on each side of a scalar divergence.
    pub window_size: usize,
    /// Lines shown before and after the divergent line.
    pub context_lines: usize,
    /// How unified-diff blocks are located.
    pub hunk_strategy: HunkStrategy,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: MAX_INPUT_BYTES,
            max_lines: MAX_LINES,
            column_width: COLUMN_WIDTH,
            window_size: DEFAULT_WINDOW_SIZE,
            context_lines: DEFAULT_CONTEXT_LINES,
            hunk_strategy: HunkStrategy::Greedy,
        }
    }
}

impl DiffConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject limits that would disable the guard or break the table layout.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_input_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "max_input_bytes",
                reason: "must be greater than zero".into(),
            });
        }
        if self.max_lines == 0 {
            return Err(ConfigError::Invalid {
                field: "max_lines",
                reason: "must be greater than zero".into(),
            });
        }
        if self.column_width < MIN_COLUMN_WIDTH {
            return Err(ConfigError::Invalid {
                field: "column_width",
                reason: format!("must be at least {MIN_COLUMN_WIDTH}"),
            });
        }
        Ok(())
    }
}
