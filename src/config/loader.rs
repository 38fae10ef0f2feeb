//! Configuration file discovery and loading.
//!
//! The first existing file wins:
//! 1. An explicit `--config` path (must exist)
//! 2. Project config (`.groundwork/config.yml`)
//! 3. User global config (`~/.groundwork/config.yml`)
//!
//! When none exists the built-in checklist is used.

use crate::config::schema::GroundworkConfig;
use crate::config::validator::validate;
use crate::error::{GroundworkError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding Groundwork configuration.
pub const CONFIG_DIR: &str = ".groundwork";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Candidate configuration locations for a project.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .groundwork/config.yml
    pub project: Option<PathBuf>,

    /// User's global config: ~/.groundwork/config.yml
    pub user_global: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join(CONFIG_FILE)),
            user_global: dirs::home_dir()
                .and_then(|home| existing(home.join(CONFIG_DIR).join(CONFIG_FILE))),
        }
    }

    /// The highest-priority config file that exists.
    pub fn first_existing(&self) -> Option<&PathBuf> {
        self.project.as_ref().or(self.user_global.as_ref())
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// No file found; built-in defaults.
    Builtin,
}

/// A validated configuration and its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: GroundworkConfig,
    pub source: ConfigSource,
}

/// Parse configuration from a YAML string.
pub fn parse_config(content: &str, path: &Path) -> Result<GroundworkConfig> {
    // An empty file deserializes to unit, not a mapping.
    if content.trim().is_empty() {
        return Ok(GroundworkConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| GroundworkError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and parse a single configuration file.
pub fn load_config_file(path: &Path) -> Result<GroundworkConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GroundworkError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GroundworkError::Io(e)
        }
    })?;
    parse_config(&content, path)
}

/// Load the configuration for a project.
///
/// `explicit` comes from `--config`; a missing explicit file is an error,
/// whereas missing discovered files fall back to built-in defaults.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
    let chosen = match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            };
            Some(path)
        }
        None => ConfigPaths::discover(project_root).first_existing().cloned(),
    };

    let loaded = match chosen {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            LoadedConfig {
                config: load_config_file(&path)?,
                source: ConfigSource::File(path),
            }
        }
        None => {
            tracing::debug!("No config file found, using built-in checklist");
            LoadedConfig {
                config: GroundworkConfig::builtin(),
                source: ConfigSource::Builtin,
            }
        }
    };

    validate(&loaded.config)?;
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project_config(temp: &TempDir, content: &str) -> PathBuf {
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discovers_project_config() {
        let temp = TempDir::new().unwrap();
        let path = write_project_config(&temp, "validate: {}");

        let paths = ConfigPaths::discover(temp.path());
        assert_eq!(paths.project, Some(path.clone()));
        assert_eq!(paths.first_existing(), Some(&path));
    }

    #[test]
    fn loads_project_config_over_builtin() {
        let temp = TempDir::new().unwrap();
        write_project_config(&temp, "validate:\n  check_redis: false\n");

        let loaded = load_config(temp.path(), None).unwrap();
        assert!(matches!(loaded.source, ConfigSource::File(_)));
        assert!(!loaded.config.validate.check_redis);
    }

    #[test]
    fn explicit_relative_path_resolves_against_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ci.yml"), "env_file: ci.env\n").unwrap();

        let loaded = load_config(temp.path(), Some(Path::new("ci.yml"))).unwrap();
        assert_eq!(loaded.config.env_file, Some(PathBuf::from("ci.env")));
        assert_eq!(loaded.source, ConfigSource::File(temp.path().join("ci.yml")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(Path::new("nope.yml")));
        assert!(matches!(
            result,
            Err(GroundworkError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "validate: [unclosed").unwrap();

        let result = load_config(temp.path(), Some(&path));
        assert!(matches!(
            result,
            Err(GroundworkError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let config = parse_config("   \n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, GroundworkConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected_on_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zero.yml");
        fs::write(&path, "validate:\n  connect_timeout_secs: 0\n").unwrap();

        let result = load_config(temp.path(), Some(&path));
        assert!(matches!(
            result,
            Err(GroundworkError::ConfigValidationError { .. })
        ));
    }
}
