//! Environment validation.
//!
//! A fixed checklist of independent checks:
//!
//! 1. required variables are set
//! 2. the `DATABASE_URL` host accepts connections
//! 3. the `REDIS_URL` server answers `PING`
//! 4. configured HTTP endpoints respond below 400
//! 5. required directories exist and are writable
//! 6. the dependency manifest exists and the consistency command passes
//! 7. container detection (informational, never fails)
//!
//! Each check yields a [`ValidationResult`]; the [`Validator`] collects them
//! into a [`ValidationReport`] without short-circuiting.
//!
//! # Example
//!
//! ```
//! use groundwork::config::ValidationConfig;
//! use groundwork::environment::Environment;
//! use groundwork::validation::Validator;
//!
//! let config = ValidationConfig {
//!     required_vars: Some(vec!["APP_NAME".to_string()]),
//!     ..ValidationConfig::disabled()
//! };
//! let env = Environment::from_vars([("APP_NAME", "demo")]);
//!
//! let report = Validator::new(&config, &env, std::path::Path::new(".")).run();
//! assert!(report.success());
//! ```

mod category;
pub mod checks;
mod report;
mod result;
mod runner;

pub use category::CheckCategory;
pub use report::{render_report, ValidationReport};
pub use result::ValidationResult;
pub use runner::Validator;
