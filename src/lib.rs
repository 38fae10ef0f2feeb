//! Groundwork - project bootstrap helpers.
//!
//! Groundwork wraps the `git` and `gh` command-line tools for the handful of
//! repository chores a new project needs, and runs a configurable checklist
//! that confirms a development environment is ready before work starts.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`environment`] - Environment variable snapshot and container detection
//! - [`error`] - Error types and result aliases
//! - [`github`] - Repository operations over `git` and `gh`
//! - [`secrets`] - Secret detection and output masking
//! - [`shell`] - External command execution
//! - [`ui`] - Spinners, tables, and terminal output
//! - [`validation`] - Environment checks and reports
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use groundwork::environment::Environment;
//! use groundwork::validation::checks::check_required_vars;
//!
//! let env = Environment::from_vars(HashMap::from([
//!     ("SECRET_KEY".to_string(), "s3cret".to_string()),
//! ]));
//! let result = check_required_vars(&["SECRET_KEY".to_string()], &env);
//! assert!(result.passed);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod github;
pub mod secrets;
pub mod shell;
pub mod ui;
pub mod validation;

pub use error::{GroundworkError, Result};
