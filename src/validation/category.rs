//! Check categories and their selection from configuration.

use std::fmt;
use std::str::FromStr;

use crate::config::ValidationConfig;

/// A named group of checks toggled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckCategory {
    RequiredVars,
    Database,
    Cache,
    ExternalApis,
    FilePermissions,
    Dependencies,
    Container,
}

impl CheckCategory {
    /// Every category in execution order.
    pub const ALL: [CheckCategory; 7] = [
        CheckCategory::RequiredVars,
        CheckCategory::Database,
        CheckCategory::Cache,
        CheckCategory::ExternalApis,
        CheckCategory::FilePermissions,
        CheckCategory::Dependencies,
        CheckCategory::Container,
    ];

    /// Name used on the produced [`ValidationResult`](super::ValidationResult).
    pub fn result_name(&self) -> &'static str {
        match self {
            Self::RequiredVars => "Required Environment Variables",
            Self::Database => "Database Connection",
            Self::Cache => "Redis Connection",
            Self::ExternalApis => "External APIs",
            Self::FilePermissions => "File Permissions",
            Self::Dependencies => "Dependencies",
            Self::Container => "Docker Environment",
        }
    }

    /// Short key accepted by `--skip`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::RequiredVars => "vars",
            Self::Database => "database",
            Self::Cache => "redis",
            Self::ExternalApis => "apis",
            Self::FilePermissions => "paths",
            Self::Dependencies => "dependencies",
            Self::Container => "docker",
        }
    }

    /// Whether `config` enables this category.
    ///
    /// List categories are enabled by presence, service categories by flag.
    pub fn is_enabled(&self, config: &ValidationConfig) -> bool {
        match self {
            Self::RequiredVars => config.required_vars.is_some(),
            Self::Database => config.check_database,
            Self::Cache => config.check_redis,
            Self::ExternalApis => config.external_apis.is_some(),
            Self::FilePermissions => config.required_paths.is_some(),
            Self::Dependencies => config.check_dependencies,
            Self::Container => config.check_docker,
        }
    }

    /// Turn this category off in `config`.
    pub fn disable(&self, config: &mut ValidationConfig) {
        match self {
            Self::RequiredVars => config.required_vars = None,
            Self::Database => config.check_database = false,
            Self::Cache => config.check_redis = false,
            Self::ExternalApis => config.external_apis = None,
            Self::FilePermissions => config.required_paths = None,
            Self::Dependencies => config.check_dependencies = false,
            Self::Container => config.check_docker = false,
        }
    }

    /// Enabled categories in execution order.
    pub fn enabled(config: &ValidationConfig) -> Vec<CheckCategory> {
        Self::ALL
            .into_iter()
            .filter(|c| c.is_enabled(config))
            .collect()
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CheckCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == needle)
            .ok_or_else(|| {
                let keys: Vec<_> = Self::ALL.iter().map(|c| c.key()).collect();
                format!("unknown check '{}' (expected one of: {})", s, keys.join(", "))
            })
    }
}
