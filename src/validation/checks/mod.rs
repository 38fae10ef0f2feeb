//! Individual environment checks.
//!
//! Each check inspects one concern and returns a single
//! [`ValidationResult`](super::ValidationResult). Checks never return
//! errors; anything that goes wrong becomes a failed result.

mod apis;
mod cache;
mod container;
mod database;
mod dependencies;
mod paths;
mod variables;

pub use apis::{check_external_apis, HttpProbe, API_TIMEOUT};
pub use cache::{check_cache, REDIS_URL_VAR};
pub use container::check_container;
pub use database::{check_database, parse_target, DatabaseTarget, DATABASE_URL_VAR};
pub use dependencies::{check_dependencies, DependencyCheck};
pub use paths::{check_required_paths, MARKER_FILE};
pub use variables::check_required_vars;
