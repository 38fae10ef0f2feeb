//! Dependency consistency check.

use std::path::Path;
use std::time::Duration;

use crate::environment::Environment;
use crate::shell::{execute, CommandOptions};
use crate::validation::{CheckCategory, ValidationResult};

/// What the dependency check runs.
#[derive(Debug, Clone)]
pub struct DependencyCheck<'a> {
    /// Manifest that must exist, relative to the project root.
    pub manifest: &'a Path,
    /// Consistency command, run through the shell in the project root.
    pub command: &'a str,
    /// Kill the command after this long.
    pub timeout: Duration,
    /// Variables exported to the command, including dotenv values.
    pub env: &'a Environment,
}

/// Verify the manifest exists and the consistency command exits zero.
pub fn check_dependencies(check: &DependencyCheck<'_>, project_root: &Path) -> ValidationResult {
    let name = CheckCategory::Dependencies.result_name();

    let manifest = project_root.join(check.manifest);
    if !manifest.is_file() {
        return ValidationResult::fail(
            name,
            format!("{} not found", check.manifest.display()),
        );
    }

    let options = CommandOptions {
        cwd: Some(project_root.to_path_buf()),
        env: check
            .env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        timeout: Some(check.timeout),
    };

    match execute(check.command, &options) {
        Ok(result) if result.success => {
            ValidationResult::pass(name, "All dependencies are properly installed")
        }
        Ok(result) => {
            tracing::debug!("'{}' exited with {:?}", check.command, result.exit_code);
            ValidationResult::fail(name, "Dependency issues found")
                .with_details(result.combined_output())
        }
        Err(e) => ValidationResult::fail(name, format!("Failed to check dependencies: {}", e)),
    }
}
