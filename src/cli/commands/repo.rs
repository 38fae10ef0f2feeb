//! Repo command implementation.
//!
//! Provides `groundwork repo create`, `groundwork repo init`, etc.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::config::{load_config, RepoConfig};
use crate::error::Result;
use crate::github::{IdentityResolver, KeychainStore, RepoHelper, RepoInfo, Visibility};
use crate::shell::{CommandOptions, CommandRunner, SystemRunner};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Arguments for the repo command.
#[derive(Debug, Clone, Args)]
pub struct RepoArgs {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

/// Repo subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum RepoSubcommand {
    /// Show the account name used for remote URLs.
    Whoami,
    /// Create a repository on GitHub.
    Create {
        /// Repository name.
        name: String,
        /// Repository description.
        #[arg(short, long)]
        description: Option<String>,
        /// Create a private repository.
        #[arg(long)]
        private: bool,
    },
    /// Run `git init`, create the GitHub repository and add it as origin.
    Init {
        /// Repository name.
        name: String,
        /// Repository description.
        #[arg(short, long)]
        description: Option<String>,
        /// Create a private repository.
        #[arg(long)]
        private: bool,
    },
    /// Push a branch to origin and set upstream.
    Push {
        /// Branch to push (default from config, usually main).
        branch: Option<String>,
    },
    /// Show the repository for the current directory.
    Info {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List your repositories.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// The repo command implementation.
pub struct RepoCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RepoArgs,
}

impl RepoCommand {
    /// Create a new repo command.
    pub fn new(project_root: &Path, args: RepoArgs) -> Self {
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

    /// Run the subcommand against an already-built helper.
    pub fn run_with<R: CommandRunner>(
        &self,
        helper: &RepoHelper<R>,
        config: &RepoConfig,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let success = match &self.args.command {
            RepoSubcommand::Whoami => {
                ui.message(&helper.resolve_identity());
                true
            }
            RepoSubcommand::Create {
                name,
                description,
                private,
            } => {
                let description = description
                    .as_deref()
                    .unwrap_or(&config.default_description);
                match helper.create_remote_repository(
                    name,
                    description,
                    Visibility::from_private(*private),
                ) {
                    Ok(()) => {
                        ui.success(&format!("Repository '{}' created successfully", name));
                        true
                    }
                    Err(e) => {
                        ui.error(&format!("Repository creation failed: {}", e));
                        false
                    }
                }
            }
            RepoSubcommand::Init {
                name,
                description,
                private,
            } => {
                let description = description
                    .as_deref()
                    .unwrap_or(&config.default_description);
                match helper.initialize_and_publish(
                    name,
                    description,
                    Visibility::from_private(*private),
                ) {
                    Ok(url) => {
                        ui.success(&format!("Repository '{}' created successfully", name));
                        ui.success(&format!("Remote origin added: {}", url));
                        true
                    }
                    Err(e) => {
                        ui.error(&format!("Repository setup failed: {}", e));
                        false
                    }
                }
            }
            RepoSubcommand::Push { branch } => {
                let branch = branch.as_deref().unwrap_or(&config.default_branch);
                match helper.push(branch) {
                    Ok(()) => {
                        ui.success(&format!("Pushed to GitHub branch: {}", branch));
                        true
                    }
                    Err(e) => {
                        ui.error(&format!("Failed to push: {}", e));
                        false
                    }
                }
            }
            RepoSubcommand::Info { json } => match helper.fetch_repository_metadata() {
                Ok(info) => {
                    show_info(&info, *json, ui)?;
                    true
                }
                Err(e) => {
                    ui.error(&format!("Could not read repository info: {}", e));
                    false
                }
            },
            RepoSubcommand::List { json } => match helper.list_repositories() {
                Ok(repos) => {
                    show_list(&repos, *json, ui)?;
                    true
                }
                Err(e) => {
                    ui.error(&format!("Could not list repositories: {}", e));
                    false
                }
            },
        };

        Ok(CommandResult::from_success(success))
    }
}

impl Command for RepoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?
            .config
            .repo;

        let runner = SystemRunner::with_options(CommandOptions {
            cwd: Some(self.project_root.clone()),
            ..Default::default()
        });
        let store = KeychainStore::new(SystemRunner::new());
        let identity = IdentityResolver::new(Box::new(store), &config);
        let helper = RepoHelper::new(runner, &config, identity);

        self.run_with(&helper, &config, ui)
    }
}

fn show_info(info: &RepoInfo, json: bool, ui: &mut dyn UserInterface) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(info).map_err(anyhow::Error::from)?;
        ui.message(&output);
        return Ok(());
    }

    ui.message(&format!("Name:        {}", info.name));
    ui.message(&format!(
        "Description: {}",
        info.description.as_deref().unwrap_or("-")
    ));
    ui.message(&format!("Visibility:  {}", info.visibility()));
    ui.message(&format!("URL:         {}", info.url));
    Ok(())
}

fn show_list(repos: &[RepoInfo], json: bool, ui: &mut dyn UserInterface) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(repos).map_err(anyhow::Error::from)?;
        ui.message(&output);
        return Ok(());
    }

    if repos.is_empty() {
        ui.message("No repositories found");
        return Ok(());
    }

    let mut table = Table::new(&["Name", "Visibility", "Description", "URL"]);
    for repo in repos {
        let visibility = repo.visibility().to_string();
        table.add_row(&[
            repo.name.as_str(),
            visibility.as_str(),
            repo.description.as_deref().unwrap_or(""),
            repo.url.as_str(),
        ]);
    }
    ui.message(&table.render());
    ui.message(&format!("{} repositories", repos.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::CredentialStore;
    use crate::shell::CommandResult as ProcessResult;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    struct NoCredentials;

    impl CredentialStore for NoCredentials {
        fn lookup(&self, _: &str, _: &str) -> Result<Option<String>> {
            Ok(None)
        }
    }

    /// Answers every call with the same result and records the command lines.
    struct FixedRunner {
        reply: std::result::Result<String, String>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl FixedRunner {
        fn ok(stdout: &str) -> Self {
            Self {
                reply: Ok(stdout.to_string()),
                calls: Rc::default(),
            }
        }

        fn failing(stderr: &str) -> Self {
            Self {
                reply: Err(stderr.to_string()),
                calls: Rc::default(),
            }
        }
    }

    impl CommandRunner for FixedRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<ProcessResult> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));
            Ok(match &self.reply {
                Ok(out) => ProcessResult::success(out.clone(), String::new(), Duration::ZERO),
                Err(err) => {
                    ProcessResult::failure(Some(1), String::new(), err.clone(), Duration::ZERO)
                }
            })
        }
    }

    fn run(command: RepoSubcommand, runner: FixedRunner) -> (CommandResult, MockUI, Vec<String>) {
        let config = RepoConfig {
            fallback_username: "octo".into(),
            ..RepoConfig::default()
        };
        let calls = Rc::clone(&runner.calls);
        let identity = IdentityResolver::new(Box::new(NoCredentials), &config);
        let helper = RepoHelper::new(runner, &config, identity);
        let cmd = RepoCommand::new(Path::new("."), RepoArgs { command });

        let mut ui = MockUI::new();
        let result = cmd.run_with(&helper, &config, &mut ui).unwrap();
        let calls = calls.borrow().clone();
        (result, ui, calls)
    }

    #[test]
    fn whoami_prints_fallback() {
        let (result, ui, calls) = run(RepoSubcommand::Whoami, FixedRunner::ok(""));
        assert!(result.success);
        assert_eq!(ui.messages(), ["octo"]);
        assert!(calls.is_empty());
    }

    #[test]
    fn create_reports_success() {
        let (result, ui, calls) = run(
            RepoSubcommand::Create {
                name: "demo".into(),
                description: Some("A demo".into()),
                private: true,
            },
            FixedRunner::ok("https://github.com/octo/demo\n"),
        );

        assert!(result.success);
        assert!(ui.has_success("Repository 'demo' created successfully"));
        assert_eq!(
            calls,
            vec!["gh repo create demo --description A demo --private"]
        );
    }

    #[test]
    fn create_failure_surfaces_stderr() {
        let (result, ui, _) = run(
            RepoSubcommand::Create {
                name: "demo".into(),
                description: None,
                private: false,
            },
            FixedRunner::failing("GraphQL: Name already exists on this account"),
        );

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Repository creation failed"));
        assert!(ui.has_error("Name already exists on this account"));
    }

    #[test]
    fn init_uses_default_description() {
        let (result, ui, calls) = run(
            RepoSubcommand::Init {
                name: "demo".into(),
                description: None,
                private: false,
            },
            FixedRunner::ok(""),
        );

        assert!(result.success);
        assert!(ui.has_success("Remote origin added: https://github.com/octo/demo.git"));
        assert_eq!(calls[0], "git init");
        assert!(calls[1].contains("--description Memex project"));
        assert_eq!(
            calls[2],
            "git remote add origin https://github.com/octo/demo.git"
        );
    }

    #[test]
    fn init_with_bad_name_runs_nothing() {
        let (result, ui, calls) = run(
            RepoSubcommand::Init {
                name: "bad name".into(),
                description: None,
                private: false,
            },
            FixedRunner::ok(""),
        );

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Invalid repository name"));
        assert!(calls.is_empty());
    }

    #[test]
    fn push_defaults_to_main() {
        let (result, ui, calls) = run(RepoSubcommand::Push { branch: None }, FixedRunner::ok(""));
        assert!(result.success);
        assert!(ui.has_success("Pushed to GitHub branch: main"));
        assert_eq!(calls, vec!["git push -u origin main"]);
    }

    #[test]
    fn push_failure_exits_one() {
        let (result, ui, calls) = run(
            RepoSubcommand::Push {
                branch: Some("feature".into()),
            },
            FixedRunner::failing("rejected"),
        );
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Failed to push"));
        assert_eq!(calls, vec!["git push -u origin feature"]);
    }

    #[test]
    fn info_prints_fields() {
        let json = r#"{"name":"memex","description":"","url":"https://github.com/octo/memex","isPrivate":true}"#;
        let (result, ui, _) = run(RepoSubcommand::Info { json: false }, FixedRunner::ok(json));

        assert!(result.success);
        assert!(ui.has_message("Name:        memex"));
        assert!(ui.has_message("Description: -"));
        assert!(ui.has_message("Visibility:  private"));
    }

    #[test]
    fn info_outside_repo_fails() {
        let (result, ui, _) = run(
            RepoSubcommand::Info { json: false },
            FixedRunner::failing("no git remotes found"),
        );
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Could not read repository info"));
    }

    #[test]
    fn list_renders_table() {
        let json = r#"[{"name":"memex","description":"notes","isPrivate":false,"url":"https://github.com/octo/memex"}]"#;
        let (result, ui, _) = run(RepoSubcommand::List { json: false }, FixedRunner::ok(json));

        assert!(result.success);
        assert!(ui.has_message("memex"));
        assert!(ui.has_message("public"));
        assert!(ui.has_message("1 repositories"));
    }

    #[test]
    fn list_json_keeps_fields() {
        let json = r#"[{"name":"memex","description":"notes","isPrivate":false,"url":"u"}]"#;
        let (_, ui, _) = run(RepoSubcommand::List { json: true }, FixedRunner::ok(json));

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed[0]["name"], "memex");
        assert_eq!(parsed[0]["isPrivate"], false);
    }

    #[test]
    fn empty_list_says_so() {
        let (result, ui, _) = run(RepoSubcommand::List { json: false }, FixedRunner::ok("[]"));
        assert!(result.success);
        assert!(ui.has_message("No repositories found"));
    }

    #[test]
    fn unparseable_list_fails() {
        let (result, ui, _) = run(
            RepoSubcommand::List { json: false },
            FixedRunner::ok("not json"),
        );
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Could not list repositories"));
    }
}
