//! Visualizer configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT, DEFAULT_TICK_INTERVAL_MS,
};
use crate::errors::ConfigError;
use crate::runner::Algorithm;

/// Grid dimensions. A dimension change means a full grid rebuild.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GridSection {
    pub rows: Option<u32>,
    pub cols: Option<u32>,
}

/// Run scheduling and algorithm selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunSection {
    pub tick_interval_ms: Option<u64>,
    pub algorithm: Option<Algorithm>,
}

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GRIDWALK_*`)
/// 2. Project config (`gridwalk.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VisualizerConfig {
    pub grid: GridSection,
    pub run: RunSection,
}

/// Fully resolved settings with every default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub rows: u32,
    pub cols: u32,
    pub tick_interval_ms: u64,
    pub algorithm: Algorithm,
}

impl VisualizerConfig {
    /// Load configuration with 3-layer resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("gridwalk.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values. Dimension problems are caught
    /// here, before they can reach `GridGraph::build`.
    pub fn validate(config: &VisualizerConfig) -> Result<(), ConfigError> {
        if config.grid.rows == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "grid.rows".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.grid.cols == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "grid.cols".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.run.tick_interval_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "run.tick_interval_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply every compiled default, producing concrete settings.
    pub fn resolve(&self) -> ResolvedSettings {
        ResolvedSettings {
            rows: self.grid.rows.unwrap_or(DEFAULT_ROW_COUNT),
            cols: self.grid.cols.unwrap_or(DEFAULT_COLUMN_COUNT),
            tick_interval_ms: self
                .run
                .tick_interval_ms
                .unwrap_or(DEFAULT_TICK_INTERVAL_MS),
            algorithm: self.run.algorithm.unwrap_or(Algorithm::BreadthFirst),
        }
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(
        config: &mut VisualizerConfig,
        path: &Path,
    ) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: VisualizerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut VisualizerConfig, other: &VisualizerConfig) {
        if other.grid.rows.is_some() {
            base.grid.rows = other.grid.rows;
        }
        if other.grid.cols.is_some() {
            base.grid.cols = other.grid.cols;
        }
        if other.run.tick_interval_ms.is_some() {
            base.run.tick_interval_ms = other.run.tick_interval_ms;
        }
        if other.run.algorithm.is_some() {
            base.run.algorithm = other.run.algorithm;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GRIDWALK_GRID_ROWS`, `GRIDWALK_RUN_ALGORITHM`, etc.
    fn apply_env_overrides(config: &mut VisualizerConfig) {
        if let Ok(val) = std::env::var("GRIDWALK_GRID_ROWS") {
            if let Ok(v) = val.parse::<u32>() {
                config.grid.rows = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GRIDWALK_GRID_COLS") {
            if let Ok(v) = val.parse::<u32>() {
                config.grid.cols = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GRIDWALK_RUN_TICK_INTERVAL_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.run.tick_interval_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GRIDWALK_RUN_ALGORITHM") {
            if let Some(v) = Algorithm::parse(&val) {
                config.run.algorithm = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
