//! Required environment variable check.

use crate::environment::Environment;
use crate::validation::{CheckCategory, ValidationResult};

/// Verify every name in `required` is set to a non-empty value.
///
/// Missing names are reported in configuration order.
pub fn check_required_vars(required: &[String], env: &Environment) -> ValidationResult {
    let name = CheckCategory::RequiredVars.result_name();

    let missing: Vec<&str> = required
        .iter()
        .filter(|var| env.get_non_empty(var).is_none())
        .map(String::as_str)
        .collect();

    if missing.is_empty() {
        return ValidationResult::pass(
            name,
            format!(
                "All {} required environment variables are set",
                required.len()
            ),
        );
    }

    tracing::debug!("Missing variables: {:?}", missing);

    ValidationResult::fail(
        name,
        format!("Missing required environment variables: {}", missing.join(", ")),
    )
    .with_details(format!(
        "Add these variables to your {} file",
        env.env_file().display()
    ))
}
