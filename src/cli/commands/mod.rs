//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`groundwork validate`, `groundwork repo`)
//! - Shared config loading and UI handling
//! - Consistent global flag handling

pub mod completions;
pub mod dispatcher;
pub mod repo;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
