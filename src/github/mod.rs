//! GitHub repository helpers.
//!
//! Wraps the `git` and `gh` command-line tools for the handful of
//! operations a new project needs: create the remote, wire up `origin`,
//! push, and inspect repositories. All calls go through a
//! [`CommandRunner`](crate::shell::CommandRunner), so tests can substitute
//! a recording fake.

mod client;
mod identity;
mod types;

pub use client::{remote_url, validate_repo_name, RepoHelper, LIST_FIELDS, VIEW_FIELDS};
pub use identity::{CredentialStore, IdentityResolver, KeychainStore};
pub use types::{RepoInfo, Visibility};
