//! Program runner abstraction.
//!
//! The repository helpers talk to `git` and `gh` through [`CommandRunner`]
//! so tests can substitute a recording fake for the real processes.

use crate::error::Result;

use super::command::{execute_program, CommandOptions, CommandResult};

/// Runs external programs with an argument vector.
pub trait CommandRunner {
    /// Run `program` with `args`, returning its captured result.
    ///
    /// An `Err` means the program could not be run at all; a non-zero exit
    /// is reported through [`CommandResult::success`].
    fn run(&self, program: &str, args: &[String]) -> Result<CommandResult>;
}

/// Runner that spawns real processes in the current working directory.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    options: CommandOptions,
}

impl SystemRunner {
    /// Create a runner with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with custom options (working directory, env).
    pub fn with_options(options: CommandOptions) -> Self {
        Self { options }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandResult> {
        execute_program(program, args, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn system_runner_runs_program() {
        let runner = SystemRunner::new();
        let result = runner.run("echo", &["hi".to_string()]).unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("hi"));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_respects_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = SystemRunner::with_options(CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        });
        let result = runner.run("pwd", &[]).unwrap();
        let expected = temp.path().canonicalize().unwrap();
        let actual = std::path::PathBuf::from(result.stdout.trim())
            .canonicalize()
            .unwrap();
        assert_eq!(actual, expected);
    }
}
