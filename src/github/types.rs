//! Repository records returned by the host platform CLI.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Who can see a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Map a `private` flag onto a visibility.
    pub fn from_private(private: bool) -> Self {
        if private {
            Self::Private
        } else {
            Self::Public
        }
    }

    /// The `gh repo create` flag for this visibility.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Public => "--public",
            Self::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Private => f.write_str("private"),
        }
    }
}

/// A repository as described by `gh repo view/list --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub name: String,
    /// `gh` reports a missing description as an empty string.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
}

impl RepoInfo {
    pub fn visibility(&self) -> Visibility {
        Visibility::from_private(self.is_private)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
