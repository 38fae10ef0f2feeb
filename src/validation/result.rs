//! Validation result records.

use serde::Serialize;

/// Outcome of one check.
///
/// Produced once by a check and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Check identifier, e.g. "Database Connection".
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// One-line summary.
    pub message: String,
    /// Optional elaboration (remediation hint, tool output).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
            details: None,
        }
    }

    /// A failing result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
            details: None,
        }
    }

    /// Attach details. Empty details are dropped.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        self.details = (!details.trim().is_empty()).then_some(details);
        self
    }
}
