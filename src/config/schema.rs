//! Configuration schema definitions for Groundwork.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format. Every field has a documented default so a
//! partial file (or no file at all) yields a complete configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure for `.groundwork/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundworkConfig {
    /// Dotenv file pre-loaded before validation (relative to project root).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<PathBuf>,

    /// Environment validator settings.
    pub validate: ValidationConfig,

    /// Repository helper settings.
    pub repo: RepoConfig,
}

impl GroundworkConfig {
    /// Configuration used when no config file is found.
    ///
    /// Mirrors the checklist of a typical web application: database, cache,
    /// secret key, a local health endpoint and writable asset directories.
    pub fn builtin() -> Self {
        Self {
            env_file: None,
            validate: ValidationConfig::web_app(),
            repo: RepoConfig::default(),
        }
    }

    /// The dotenv file to load, falling back to `.env`.
    pub fn env_file_or_default(&self) -> PathBuf {
        self.env_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
    }
}

/// Default dotenv file name.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Which validation checks run and with what parameters.
///
/// Two toggle styles coexist. List/map categories (`required_vars`,
/// `external_apis`, `required_paths`) run only when the field is present.
/// Service categories (`check_*`) run unless explicitly set to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Environment variables that must be set to a non-empty value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_vars: Option<Vec<String>>,

    /// Named HTTP endpoints that must answer with a non-error status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_apis: Option<BTreeMap<String, String>>,

    /// Directories that must exist (created if missing) and be writable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_paths: Option<Vec<PathBuf>>,

    /// Check that `DATABASE_URL` is reachable.
    pub check_database: bool,

    /// Check that `REDIS_URL` answers `PING`.
    pub check_redis: bool,

    /// Check that installed dependencies are consistent.
    pub check_dependencies: bool,

    /// Report whether we are running inside a container.
    pub check_docker: bool,

    /// Manifest that must exist before the dependency command runs.
    pub dependency_manifest: PathBuf,

    /// Shell command whose zero exit means dependencies are consistent.
    pub dependency_command: String,

    /// Connect timeout for the database and cache probes.
    pub connect_timeout_secs: u64,

    /// Time limit for the dependency command.
    pub command_timeout_secs: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            required_vars: None,
            external_apis: None,
            required_paths: None,
            check_database: true,
            check_redis: true,
            check_dependencies: true,
            check_docker: true,
            dependency_manifest: PathBuf::from("requirements.txt"),
            dependency_command: "python3 -m pip check".to_string(),
            connect_timeout_secs: 5,
            command_timeout_secs: 120,
        }
    }
}

impl ValidationConfig {
    /// The standard web application checklist.
    pub fn web_app() -> Self {
        let mut apis = BTreeMap::new();
        apis.insert(
            "health_check".to_string(),
            "http://localhost:8000/health".to_string(),
        );

        Self {
            required_vars: Some(
                ["DATABASE_URL", "REDIS_URL", "SECRET_KEY", "APP_NAME"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            external_apis: Some(apis),
            required_paths: Some(vec![
                PathBuf::from("./uploads"),
                PathBuf::from("./logs"),
                PathBuf::from("./static"),
            ]),
            ..Self::default()
        }
    }

    /// A configuration with every category disabled.
    pub fn disabled() -> Self {
        Self {
            check_database: false,
            check_redis: false,
            check_dependencies: false,
            check_docker: false,
            ..Self::default()
        }
    }
}

/// Settings for the GitHub repository helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Path or name of the GitHub CLI binary.
    pub gh_path: String,

    /// Path or name of the git binary.
    pub git_path: String,

    /// Credential store service name holding the username.
    pub credential_service: String,

    /// Credential store entry name holding the username.
    pub credential_entry: String,

    /// Username used when the credential store has no answer.
    pub fallback_username: String,

    /// Description used by `repo init` when none is given.
    pub default_description: String,

    /// Branch pushed by `repo push` when none is given.
    pub default_branch: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            gh_path: "gh".to_string(),
            git_path: "git".to_string(),
            credential_service: "memex".to_string(),
            credential_entry: "GITHUB_USERNAME".to_string(),
            fallback_username: "noelmcmichael".to_string(),
            default_description: "Memex project".to_string(),
            default_branch: "main".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: GroundworkConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, GroundworkConfig::default());
        assert!(config.validate.check_database);
        assert!(config.validate.required_vars.is_none());
    }

    #[test]
    fn partial_validate_section_keeps_other_defaults() {
        let yaml = r#"
validate:
  required_vars: [SECRET_KEY]
  check_redis: false
"#;
        let config: GroundworkConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.validate.required_vars,
            Some(vec!["SECRET_KEY".to_string()])
        );
        assert!(!config.validate.check_redis);
        assert!(config.validate.check_database);
        assert_eq!(config.validate.connect_timeout_secs, 5);
    }

    #[test]
    fn external_apis_parse_as_map() {
        let yaml = r#"
validate:
  external_apis:
    payments: https://pay.example.com/health
    search: https://search.example.com/ping
"#;
        let config: GroundworkConfig = serde_yaml::from_str(yaml).unwrap();
        let apis = config.validate.external_apis.unwrap();
        assert_eq!(apis.len(), 2);
        assert_eq!(apis["search"], "https://search.example.com/ping");
    }

    #[test]
    fn builtin_mirrors_web_app_checklist() {
        let config = GroundworkConfig::builtin();
        let vars = config.validate.required_vars.unwrap();
        assert_eq!(vars, ["DATABASE_URL", "REDIS_URL", "SECRET_KEY", "APP_NAME"]);
        assert_eq!(config.validate.required_paths.unwrap().len(), 3);
        assert!(config.validate.external_apis.unwrap().contains_key("health_check"));
    }

    #[test]
    fn disabled_turns_off_every_flag() {
        let config = ValidationConfig::disabled();
        assert!(!config.check_database);
        assert!(!config.check_redis);
        assert!(!config.check_dependencies);
        assert!(!config.check_docker);
        assert!(config.required_vars.is_none());
    }

    #[test]
    fn repo_defaults() {
        let repo = RepoConfig::default();
        assert_eq!(repo.gh_path, "gh");
        assert_eq!(repo.credential_service, "memex");
        assert_eq!(repo.credential_entry, "GITHUB_USERNAME");
        assert_eq!(repo.default_branch, "main");
    }

    #[test]
    fn env_file_defaults_to_dotenv() {
        let config = GroundworkConfig::default();
        assert_eq!(config.env_file_or_default(), PathBuf::from(".env"));
    }
}
