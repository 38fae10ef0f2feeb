//! External command execution.

pub mod command;
pub mod platform;
pub mod runner;

pub use command::{execute, execute_program, CommandOptions, CommandResult};
pub use platform::{is_ci, shell_invocation};
pub use runner::{CommandRunner, SystemRunner};
