//! Command-line interface for Groundwork.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ValidateArgs};
pub use commands::repo::{RepoArgs, RepoSubcommand};
pub use commands::{Command, CommandDispatcher, CommandResult};
