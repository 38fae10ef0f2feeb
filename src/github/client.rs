//! Repository operations over `git` and `gh`.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::RepoConfig;
use crate::error::{GroundworkError, Result};
use crate::shell::{CommandResult, CommandRunner};

use super::identity::IdentityResolver;
use super::types::{RepoInfo, Visibility};

/// Fields requested from `gh repo view`.
pub const VIEW_FIELDS: &str = "name,description,url,isPrivate";

/// Fields requested from `gh repo list`.
pub const LIST_FIELDS: &str = "name,description,isPrivate,url";

static REPO_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+$").expect("REPO_NAME must compile")
});

/// Reject names the host would refuse or that could be read as flags.
pub fn validate_repo_name(name: &str) -> Result<()> {
    if name == "." || name == ".." || name.starts_with('-') || !REPO_NAME.is_match(name) {
        return Err(GroundworkError::InvalidRepositoryName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// HTTPS remote URL for `owner/name`.
pub fn remote_url(owner: &str, name: &str) -> String {
    format!("https://github.com/{}/{}.git", owner, name)
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Thin wrappers around the version-control and host-platform CLIs.
///
/// Every failure (spawn error, non-zero exit, unparseable output) is
/// logged and returned as an `Err`; nothing panics and nothing is retried.
pub struct RepoHelper<R> {
    runner: R,
    gh: String,
    git: String,
    identity: IdentityResolver,
}

impl<R: CommandRunner> RepoHelper<R> {
    pub fn new(runner: R, config: &RepoConfig, identity: IdentityResolver) -> Self {
        Self {
            runner,
            gh: config.gh_path.clone(),
            git: config.git_path.clone(),
            identity,
        }
    }

    /// The account name used in remote URLs. Never fails.
    pub fn resolve_identity(&self) -> String {
        self.identity.resolve()
    }

    /// `gh repo create <name> --description <desc> --public|--private`.
    pub fn create_remote_repository(
        &self,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<()> {
        validate_repo_name(name)?;

        let argv = args(&[
            "repo",
            "create",
            name,
            "--description",
            description,
            visibility.flag(),
        ]);
        self.run_checked(&self.gh, &argv)?;

        tracing::info!("Repository '{}' created", name);
        Ok(())
    }

    /// `git init`, create the remote, then add it as `origin`.
    ///
    /// Stops at the first failing step. A local repository created by
    /// `git init` is left in place if a later step fails. Returns the remote
    /// URL that was added.
    pub fn initialize_and_publish(
        &self,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<String> {
        validate_repo_name(name)?;

        self.run_checked(&self.git, &args(&["init"]))?;
        self.create_remote_repository(name, description, visibility)?;

        let url = remote_url(&self.resolve_identity(), name);
        self.run_checked(&self.git, &args(&["remote", "add", "origin", &url]))?;

        tracing::info!("Remote origin added: {}", url);
        Ok(url)
    }

    /// `git push -u origin <branch>`.
    pub fn push(&self, branch: &str) -> Result<()> {
        self.run_checked(&self.git, &args(&["push", "-u", "origin", branch]))?;
        tracing::info!("Pushed branch {}", branch);
        Ok(())
    }

    /// Metadata for the repository in the current directory.
    pub fn fetch_repository_metadata(&self) -> Result<RepoInfo> {
        let argv = args(&["repo", "view", "--json", VIEW_FIELDS]);
        let result = self.run_checked(&self.gh, &argv)?;
        self.parse_json(&argv, &result)
    }

    /// Repositories owned by the authenticated account, in `gh` order.
    pub fn list_repositories(&self) -> Result<Vec<RepoInfo>> {
        let argv = args(&["repo", "list", "--json", LIST_FIELDS]);
        let result = self.run_checked(&self.gh, &argv)?;
        self.parse_json(&argv, &result)
    }

    fn describe(&self, program: &str, argv: &[String]) -> String {
        std::iter::once(program)
            .chain(argv.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run_checked(&self, program: &str, argv: &[String]) -> Result<CommandResult> {
        let command = self.describe(program, argv);
        tracing::debug!("Running {}", command);

        let result = self.runner.run(program, argv).inspect_err(|e| {
            tracing::warn!("{}", e);
        })?;

        if !result.success {
            let stderr = result.stderr.trim().to_string();
            tracing::warn!("{} failed: {}", command, stderr);
            return Err(GroundworkError::CommandFailed {
                command,
                code: result.exit_code,
                stderr,
            });
        }

        Ok(result)
    }

    fn parse_json<T: serde::de::DeserializeOwned>(
        &self,
        argv: &[String],
        result: &CommandResult,
    ) -> Result<T> {
        serde_json::from_str(result.stdout.trim()).map_err(|e| {
            let command = self.describe(&self.gh, argv);
            tracing::warn!("Unparseable output from {}: {}", command, e);
            GroundworkError::OutputParseError {
                command,
                message: e.to_string(),
            }
        })
    }
}
