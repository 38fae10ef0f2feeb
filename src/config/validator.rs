//! Configuration validation rules.
//!
//! - Required variable names must be non-empty and contain no `=`
//! - External API names and URLs must be non-empty; URLs must parse
//! - Required paths must be non-empty
//! - Timeouts must be positive
//! - The dependency command and helper binaries must be non-empty

use crate::config::schema::GroundworkConfig;
use crate::error::{GroundworkError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &GroundworkConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let validate = &config.validate;

    if let Some(vars) = &validate.required_vars {
        for var in vars {
            if var.trim().is_empty() {
                errors.push(ValidationError::new(
                    "empty-variable-name",
                    "required_vars contains an empty name",
                ));
            } else if var.contains('=') {
                errors.push(ValidationError::new(
                    "invalid-variable-name",
                    format!("required_vars entry '{}' must not contain '='", var),
                ));
            }
        }
    }

    if let Some(apis) = &validate.external_apis {
        for (name, url) in apis {
            if name.trim().is_empty() {
                errors.push(ValidationError::new(
                    "empty-api-name",
                    "external_apis contains an empty name",
                ));
            }
            if let Err(e) = url::Url::parse(url) {
                errors.push(ValidationError::new(
                    "invalid-api-url",
                    format!("external_apis '{}' has invalid URL '{}': {}", name, url, e),
                ));
            }
        }
    }

    if let Some(paths) = &validate.required_paths {
        if paths.iter().any(|p| p.as_os_str().is_empty()) {
            errors.push(ValidationError::new(
                "empty-path",
                "required_paths contains an empty path",
            ));
        }
    }

    if validate.connect_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "connect_timeout_secs must be greater than zero",
        ));
    }

    if validate.command_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "command_timeout_secs must be greater than zero",
        ));
    }

    if validate.check_dependencies && validate.dependency_command.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-command",
            "dependency_command must not be empty when check_dependencies is enabled",
        ));
    }

    for (field, value) in [
        ("gh_path", &config.repo.gh_path),
        ("git_path", &config.repo.git_path),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-binary",
                format!("repo.{} must not be empty", field),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &GroundworkConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(GroundworkError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
