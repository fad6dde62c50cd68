//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading extraction and
//! aggregation rules from YAML files, and [`ConfigLoader::server_settings`]
//! for the environment-driven server settings.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AggregationRules, ExtractionRules, RulesConfig, ServerSettings};

/// Loads and provides access to the rule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── extraction.yaml   # Header/day-row heuristics
/// └── aggregation.yaml  # Output mode and roster defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Marker: {}", loader.extraction().employee_marker);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RulesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or is not valid YAML for
    /// its rule type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let extraction = Self::load_yaml::<ExtractionRules>(&path.join("extraction.yaml"))?;
        let aggregation = Self::load_yaml::<AggregationRules>(&path.join("aggregation.yaml"))?;

        tracing::debug!(
            path = %path.display(),
            marker = %extraction.employee_marker,
            mode = ?aggregation.mode,
            "Loaded rule configuration"
        );

        Ok(Self {
            config: RulesConfig::new(extraction, aggregation),
        })
    }

    /// Builds a loader from the built-in defaults without touching the filesystem.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Builds a loader from already-constructed rules.
    pub fn from_rules(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Reads [`ServerSettings`] from `ATTENDANCE_*` environment variables,
    /// after loading a `.env` file if one is present.
    pub fn server_settings() -> EngineResult<ServerSettings> {
        dotenv::dotenv().ok();
        envy::prefixed("ATTENDANCE_")
            .from_env::<ServerSettings>()
            .map_err(|e| EngineError::ConfigParseError {
                path: "environment".to_string(),
                message: e.to_string(),
            })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rule configuration.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Returns the extraction rules.
    pub fn extraction(&self) -> &ExtractionRules {
        self.config.extraction()
    }

    /// Returns the aggregation rules.
    pub fn aggregation(&self) -> &AggregationRules {
        self.config.aggregation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AggregationMode;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.extraction().employee_marker, "Employee");
        assert_eq!(loader.aggregation().mode, AggregationMode::PerDay);
    }

    #[test]
    fn test_loaded_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), ConfigLoader::with_defaults().config());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("extraction.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("attendance-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("extraction.yaml"), "name_offset: [not a number\n").unwrap();
        fs::write(dir.join("aggregation.yaml"), "mode: per_day\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("extraction.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_weekly_mode_from_file() {
        let dir = std::env::temp_dir().join(format!("attendance-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("extraction.yaml"), "employee_marker: Empleado\n").unwrap();
        fs::write(dir.join("aggregation.yaml"), "mode: weekly\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(loader.extraction().employee_marker, "Empleado");
        assert_eq!(loader.extraction().name_offset, 3);
        assert_eq!(loader.aggregation().mode, AggregationMode::Weekly);
    }
}
