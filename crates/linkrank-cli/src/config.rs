//! Configuration file for the `linkrank` command.
//!
//! The file is TOML with one table per concern:
//!
//! ```toml
//! [graph]
//! preset = "simple"
//!
//! [pagerank]
//! damping_factor = 0.85
//! max_iterations = 20
//! tolerance = 0.0001
//!
//! [hits]
//! iterations = 10
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! Every table and key is optional; missing values take their defaults.

use crate::logging;
use linkrank_core::{Error, Result};
use linkrank_graph::{HitsConfig, PageRankConfig, Preset};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name used for the config directory and environment variable prefix.
pub const PROJECT_NAME: &str = "linkrank";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LINKRANK_CONFIG";

/// Which graph to rank when the command line does not say.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Preset used when no file is configured.
    pub preset: Preset,
    /// JSON graph definition; takes precedence over `preset`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base level; each `-v` raises it one step.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::DEFAULT_LEVEL.to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkrankConfig {
    /// Graph selection.
    pub graph: GraphConfig,
    /// PageRank parameters.
    pub pagerank: PageRankConfig,
    /// HITS parameters.
    pub hits: HitsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl LinkrankConfig {
    /// Loads the configuration from the resolved path.
    ///
    /// A missing file yields the defaults. A file that exists but does not
    /// parse or holds out-of-range values is an error.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        match resolve_config_path(config_path) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No config file at {}; using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<()> {
        self.pagerank.validate()?;
        self.hits.validate()?;
        if logging::level_index(&self.logging.level).is_none() {
            return Err(Error::config(format!(
                "logging.level must be one of {}, got '{}'",
                logging::LEVELS.join(", "),
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flattens the configuration into `LINKRANK_*` environment variables.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_env(&PROJECT_NAME.to_uppercase(), &value, &mut vars);
        Ok(vars)
    }
}

fn flatten_env(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                flatten_env(&format!("{prefix}_{}", key.to_uppercase()), child, out);
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

/// `<config dir>/linkrank/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
}

/// The explicit path when given, otherwise the default location.
///
/// `LINKRANK_CONFIG` reaches this function as the explicit path through the
/// `--config` argument.
pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
    match config_path {
        Some(p) => Some(PathBuf::from(p)),
        None => default_config_path(),
    }
}
