//! Environment variable snapshot.
//!
//! Checks read variables from an [`Environment`] value instead of the
//! process environment, so a run sees one consistent view and tests can
//! supply arbitrary variables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::EnvFileParser;
use crate::error::Result;

/// Outcome of trying to pre-load a dotenv file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// The file existed and its variables were layered in.
    Loaded(PathBuf),
    /// No file at this path; only the process environment is used.
    Missing(PathBuf),
}

/// An immutable set of environment variables for one validation run.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
    env_file: PathBuf,
}

impl Environment {
    /// Build an environment from explicit variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            env_file: PathBuf::from(crate::config::DEFAULT_ENV_FILE),
        }
    }

    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Snapshot the process environment layered over a dotenv file.
    ///
    /// Variables already present in the process environment win over the
    /// file, matching the usual dotenv convention. A missing file is not an
    /// error; an unreadable one is.
    pub fn load(project_root: &Path, env_file: &Path) -> Result<(Self, EnvFileStatus)> {
        let path = if env_file.is_absolute() {
            env_file.to_path_buf()
        } else {
            project_root.join(env_file)
        };

        let mut env = Self::capture();
        env.env_file = env_file.to_path_buf();

        let status = match EnvFileParser::load_optional(&path)? {
            Some(file_vars) => {
                tracing::debug!("Loaded {} variables from {}", file_vars.len(), path.display());
                env.layer_under(file_vars);
                EnvFileStatus::Loaded(path)
            }
            None => {
                tracing::debug!("No env file at {}", path.display());
                EnvFileStatus::Missing(path)
            }
        };

        Ok((env, status))
    }

    /// Add variables that are not already set.
    pub fn layer_under(&mut self, vars: HashMap<String, String>) {
        for (key, value) in vars {
            self.vars.entry(key).or_insert(value);
        }
    }

    /// Replace the dotenv path used in remediation hints.
    pub fn with_env_file(mut self, env_file: impl Into<PathBuf>) -> Self {
        self.env_file = env_file.into();
        self
    }

    /// The dotenv file this environment was (or would have been) loaded from.
    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    /// Raw value of a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of a variable, treating an empty string as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Iterate over all variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the environment has no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
