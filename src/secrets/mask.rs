//! Output masking for secret values.

use std::collections::BTreeSet;

use crate::environment::Environment;

use super::pattern::SecretMatcher;

/// Values shorter than this are not masked; replacing them would mangle
/// ordinary words in messages.
const MIN_SECRET_LEN: usize = 4;

/// Masks secret values in text.
///
/// # Example
///
/// ```
/// use groundwork::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("s3cr3t-pass");
///
/// let output = masker.mask("auth failed for s3cr3t-pass");
/// assert_eq!(output, "auth failed for [REDACTED]");
/// ```
#[derive(Debug, Clone)]
pub struct OutputMasker {
    /// Secret values, longest first so overlapping values mask fully.
    secrets: BTreeSet<(std::cmp::Reverse<usize>, String)>,
    /// The mask string to use.
    mask: String,
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputMasker {
    /// Create a new masker with default mask string.
    pub fn new() -> Self {
        Self {
            secrets: BTreeSet::new(),
            mask: "[REDACTED]".to_string(),
        }
    }

    /// Create a masker for every secret-looking variable in `env`.
    ///
    /// Connection strings also register their password component, since
    /// client errors often echo it back without the rest of the URL.
    pub fn from_environment(env: &Environment, matcher: &SecretMatcher) -> Self {
        let mut masker = Self::new();
        for (name, value) in env.iter() {
            if matcher.is_secret(name) {
                masker.add_secret(value);
                if let Some(password) = url::Url::parse(value)
                    .ok()
                    .and_then(|u| u.password().map(str::to_string))
                {
                    masker.add_secret(password);
                }
            }
        }
        masker
    }

    /// Register a secret value to be masked.
    ///
    /// Very short values are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.len() >= MIN_SECRET_LEN {
            self.secrets
                .insert((std::cmp::Reverse(value.len()), value));
        }
    }

    /// Mask any secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        let mut result = input.to_string();
        for (_, secret) in &self.secrets {
            result = result.replace(secret.as_str(), &self.mask);
        }
        result
    }

    /// Get the number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}
