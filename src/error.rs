//! Error types for Groundwork operations.
//!
//! This module defines [`GroundworkError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation checks never return errors; they encode failures in a
//!   [`ValidationResult`](crate::validation::ValidationResult)
//! - Repository helpers return `GroundworkError` values instead of panicking,
//!   so callers branch on success or failure
//! - Use `anyhow::Error` (via `GroundworkError::Other`) for unexpected errors

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for Groundwork operations.
#[derive(Debug, Error)]
pub enum GroundworkError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// External command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// External command could not be started at all.
    #[error("Failed to launch '{command}': {message}")]
    CommandLaunchFailed { command: String, message: String },

    /// External command did not finish within its time limit.
    #[error("Command timed out after {limit:?}: {command}")]
    CommandTimedOut { command: String, limit: Duration },

    /// Repository name rejected before contacting the host platform.
    #[error("Invalid repository name '{name}'")]
    InvalidRepositoryName { name: String },

    /// Structured output from an external tool could not be parsed.
    #[error("Could not parse output of '{command}': {message}")]
    OutputParseError { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Groundwork operations.
pub type Result<T> = std::result::Result<T, GroundworkError>;
