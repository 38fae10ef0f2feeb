//! Validate command implementation.
//!
//! Runs the environment checklist and prints a report.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::config::load_config;
use crate::environment::{EnvFileStatus, Environment};
use crate::error::Result;
use crate::secrets::{OutputMasker, SecretMatcher};
use crate::ui::UserInterface;
use crate::validation::{render_report, ValidationReport, Validator};

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path, args: ValidateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            args,
        }
    }

    /// Use an explicit config file instead of discovery.
    pub fn with_config_path(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    fn run_checks(
        &self,
        validator: &Validator<'_>,
        ui: &mut dyn UserInterface,
    ) -> ValidationReport {
        if self.args.json {
            return validator.run();
        }

        ui.show_header("Environment validation");
        let mut spinner = ui.start_spinner("Starting environment validation...");
        let report = validator.run_with_progress(|category| {
            spinner.set_message(&format!("Checking {}...", category.result_name()));
        });
        spinner.finish_clear();
        report
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?.config;
        for category in &self.args.skip {
            tracing::debug!("Skipping {}", category);
            category.disable(&mut config.validate);
        }

        let env_file = self
            .args
            .env_file
            .clone()
            .unwrap_or_else(|| config.env_file_or_default());
        let (env, status) = Environment::load(&self.project_root, &env_file)?;
        match status {
            EnvFileStatus::Missing(_) => ui.warning(&format!(
                "No {} file found, using system environment",
                env_file.display()
            )),
            // stdout carries only the report in JSON mode
            EnvFileStatus::Loaded(_) if !self.args.json => {
                ui.success(&format!("Loaded environment from {}", env_file.display()))
            }
            EnvFileStatus::Loaded(_) => {}
        }

        let masker = OutputMasker::from_environment(&env, &SecretMatcher::with_builtins());
        tracing::debug!("Masking {} secret values", masker.secret_count());

        let validator = Validator::new(&config.validate, &env, &self.project_root);
        let report = self.run_checks(&validator, ui).masked(&masker);

        if self.args.json {
            let output = report.to_json().map_err(anyhow::Error::from)?;
            ui.message(&output);
        } else {
            render_report(&report, ui);
        }

        Ok(CommandResult::from_success(report.success()))
    }
}
