//! Configuration for the flight planner.

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::Deserialize;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "FLIGHT_PLANNER_CONFIG";

/// Error loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid config JSON
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration parameters for path search and reporting.
///
/// The defaults reproduce exhaustive search with the top three paths
/// reported. The two limits exist for dense route tables, where the number
/// of simple paths grows factorially.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum number of paths reported per request.
    pub max_results: usize,

    /// Maximum number of flights in one path.
    /// Branches that reach this length without arriving are abandoned.
    pub max_stops: Option<usize>,

    /// Wall-clock budget for one exploration (milliseconds).
    /// When it runs out, the paths found so far are ranked.
    pub time_budget_ms: Option<i64>,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_results: usize, max_stops: Option<usize>, time_budget_ms: Option<i64>) -> Self {
        Self {
            max_results,
            max_stops,
            time_budget_ms,
        }
    }

    /// Returns the exploration time budget as a Duration.
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::milliseconds)
    }

    /// Load a configuration from a JSON file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the file named by [`CONFIG_ENV`], or fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            max_stops: None,
            time_budget_ms: None,
        }
    }
}
