//! Configuration loading, parsing, and validation for Groundwork.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - Dotenv parsing in [`env_file`]
//!
//! # Example
//!
//! ```
//! use groundwork::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".groundwork");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "validate:\n  check_redis: false\n").unwrap();
//!
//! let loaded = load_config(temp.path(), None).unwrap();
//! assert!(!loaded.config.validate.check_redis);
//! ```

pub mod env_file;
pub mod loader;
pub mod schema;
pub mod validator;

pub use env_file::EnvFileParser;
pub use loader::{
    load_config, load_config_file, parse_config, ConfigPaths, ConfigSource, LoadedConfig,
    CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{GroundworkConfig, RepoConfig, ValidationConfig, DEFAULT_ENV_FILE};
pub use validator::{validate, validate_config, ValidationError};
