//! Configuration system for sql-recase.
//!
//! Supports loading configuration from:
//! - `sql-recase.toml` in current directory
//! - `~/.config/sql-recase/config.toml` for user defaults
//! - Environment variables (SQL_RECASE_*)
//! - Command-line arguments (highest priority)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sql_recase::CaseMode;

/// Complete configuration for sql-recase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scanner settings.
    pub scan: ScanConfig,
}

/// Scanner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Case applied when neither case flag is given ("upper" or "lower").
    pub default_case: String,
    /// Default search string anchoring statement regions.
    pub delimiter: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_case: "upper".to_string(),
            delimiter: "\"".to_string(),
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Config file is not valid TOML.
    #[error("Failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl Config {
    /// Load configuration from default locations.
    pub fn load() -> Self {
        let mut config = Config::default();

        // User config first, then project config (higher priority)
        if let Some(user_config) = Self::user_config_path() {
            config.merge_file(&user_config);
        }
        config.merge_file(Path::new("sql-recase.toml"));

        // Environment variables (highest priority below CLI args)
        config.apply_env_vars();

        config
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the user configuration file path.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sql-recase").join("config.toml"))
    }

    /// Merge a config file into this one if it exists and parses. A
    /// missing file is fine; a malformed one is reported and skipped.
    fn merge_file(&mut self, path: &Path) {
        match Self::load_from_file(path) {
            Ok(other) => *self = self.clone().merge(other),
            Err(ConfigError::Io { .. }) => {}
            Err(e) => tracing::warn!("{}", e),
        }
    }

    /// Merge another config into this one (other takes priority).
    fn merge(mut self, other: Config) -> Self {
        let defaults = ScanConfig::default();
        if other.scan.default_case != defaults.default_case {
            self.scan.default_case = other.scan.default_case;
        }
        if other.scan.delimiter != defaults.delimiter {
            self.scan.delimiter = other.scan.delimiter;
        }
        self
    }

    /// Apply SQL_RECASE_* environment variable overrides.
    fn apply_env_vars(&mut self) {
        if let Ok(case) = std::env::var("SQL_RECASE_CASE") {
            self.scan.default_case = case;
        }
        if let Ok(delimiter) = std::env::var("SQL_RECASE_DELIMITER") {
            self.scan.delimiter = delimiter;
        }
    }
}

impl ScanConfig {
    /// Resolve the configured default case. Unrecognized values fall back
    /// to uppercase.
    pub fn case_mode(&self) -> CaseMode {
        if self.default_case.eq_ignore_ascii_case("lower") {
            CaseMode::Lower
        } else {
            CaseMode::Upper
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.scan.default_case, "upper");
        assert_eq!(config.scan.delimiter, "\"");
        assert_eq!(config.scan.case_mode(), CaseMode::Upper);
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            [scan]
            default_case = "lower"
            delimiter = "exec("
        "#,
        )
        .unwrap();
        assert_eq!(config.scan.case_mode(), CaseMode::Lower);
        assert_eq!(config.scan.delimiter, "exec(");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scan]
            default_case = "lower"
        "#,
        )
        .unwrap();
        assert_eq!(config.scan.delimiter, "\"");
    }

    #[test]
    fn test_merge_prefers_non_default_values() {
        let base = Config::default();
        let mut project = Config::default();
        project.scan.delimiter = "query(".to_string();

        let merged = base.merge(project);
        assert_eq!(merged.scan.delimiter, "query(");
        assert_eq!(merged.scan.default_case, "upper");
    }

    #[test]
    fn test_unknown_case_falls_back_to_upper() {
        let scan = ScanConfig {
            default_case: "sideways".to_string(),
            ..ScanConfig::default()
        };
        assert_eq!(scan.case_mode(), CaseMode::Upper);
    }
}
