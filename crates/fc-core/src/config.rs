//! Configuration types and parsing for fieldcheck.yml

use crate::error::{CoreError, CoreResult};
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from fieldcheck.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Path to the cases file, relative to the project directory
    #[serde(default = "default_cases_path")]
    pub cases_path: String,

    /// Statuses selected for (re-)execution on each run
    #[serde(default = "Status::default_rerun")]
    pub rerun_statuses: Vec<Status>,

    /// Seconds to sleep between runs in watch mode
    #[serde(default = "default_watch_interval")]
    pub watch_interval_secs: u64,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database path (file-based or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> String {
    ":memory:".to_string()
}

fn default_cases_path() -> String {
    "cases.yml".to_string()
}

fn default_watch_interval() -> u64 {
    180
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory.
    /// Looks for fieldcheck.yml or fieldcheck.yaml.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("fieldcheck.yml");
        let yaml_path = dir.join("fieldcheck.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Cases file path resolved against the project directory
    pub fn cases_path_absolute(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.cases_path)
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }
        if self.rerun_statuses.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "rerun_statuses cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
