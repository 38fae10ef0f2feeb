//! Runs the enabled checks in order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::ValidationConfig;
use crate::environment::{ContainerProbe, Environment};

use super::checks::{
    check_cache, check_container, check_database, check_dependencies, check_external_apis,
    check_required_paths, check_required_vars, DependencyCheck, HttpProbe,
};
use super::{CheckCategory, ValidationReport, ValidationResult};

/// Runs every enabled check against one environment snapshot.
///
/// Checks are independent: a failure never stops later checks.
pub struct Validator<'a> {
    config: &'a ValidationConfig,
    env: &'a Environment,
    project_root: PathBuf,
    container_probe: ContainerProbe,
}

impl<'a> Validator<'a> {
    /// Create a validator for `project_root`.
    pub fn new(config: &'a ValidationConfig, env: &'a Environment, project_root: &Path) -> Self {
        Self {
            config,
            env,
            project_root: project_root.to_path_buf(),
            container_probe: ContainerProbe::new(),
        }
    }

    /// Use a different container probe (tests point it at a temp dir).
    pub fn with_container_probe(mut self, probe: ContainerProbe) -> Self {
        self.container_probe = probe;
        self
    }

    /// Categories that will run, in order.
    pub fn categories(&self) -> Vec<CheckCategory> {
        CheckCategory::enabled(self.config)
    }

    /// Run every enabled check.
    pub fn run(&self) -> ValidationReport {
        self.run_with_progress(|_| {})
    }

    /// Run every enabled check, calling `before_each` as each one starts.
    pub fn run_with_progress<F>(&self, mut before_each: F) -> ValidationReport
    where
        F: FnMut(CheckCategory),
    {
        let results = self
            .categories()
            .into_iter()
            .map(|category| {
                before_each(category);
                let result = self.run_check(category);
                tracing::debug!(
                    "{} -> {}",
                    result.name,
                    if result.passed { "passed" } else { "failed" }
                );
                result
            })
            .collect();

        ValidationReport::new(results)
    }

    fn run_check(&self, category: CheckCategory) -> ValidationResult {
        let config = self.config;
        let connect_timeout = Duration::from_secs(config.connect_timeout_secs);

        match category {
            CheckCategory::RequiredVars => check_required_vars(
                config.required_vars.as_deref().unwrap_or_default(),
                self.env,
            ),
            CheckCategory::Database => check_database(self.env, connect_timeout),
            CheckCategory::Cache => check_cache(self.env, connect_timeout),
            CheckCategory::ExternalApis => {
                let empty = BTreeMap::new();
                let apis = config.external_apis.as_ref().unwrap_or(&empty);
                match HttpProbe::new() {
                    Ok(probe) => check_external_apis(apis, &probe),
                    Err(e) => ValidationResult::fail(
                        category.result_name(),
                        format!("Failed to connect to: HTTP client unavailable ({})", e),
                    ),
                }
            }
            CheckCategory::FilePermissions => check_required_paths(
                config.required_paths.as_deref().unwrap_or_default(),
                &self.project_root,
            ),
            CheckCategory::Dependencies => check_dependencies(
                &DependencyCheck {
                    manifest: &config.dependency_manifest,
                    command: &config.dependency_command,
                    timeout: Duration::from_secs(config.command_timeout_secs),
                    env: self.env,
                },
                &self.project_root,
            ),
            CheckCategory::Container => check_container(&self.container_probe),
        }
    }
}
