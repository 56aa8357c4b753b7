//! # Configuration
//!
//! Search configuration: where the dataset lives, which metric to use when
//! the caller does not pick one, and how verbose logging is.
//!
//! Values can come from a JSON file; missing fields fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Metric;

/// Errors raised while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Main search configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Dataset file of alternating name / coordinates lines
    pub data_file: PathBuf,

    /// Metric used when a query does not specify one
    pub default_metric: Metric,

    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl SearchConfig {
    /// Create a configuration reading the given dataset
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Set the dataset file
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// Set the default metric
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.default_metric = metric;
        self
    }

    /// Set the default log filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for SearchConfig {
    /// Default configuration: `data.txt`, Euclidean metric, `info` logging
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.txt"),
            default_metric: Metric::Euclidean,
            log_level: "info".to_string(),
        }
    }
}
