//! Secret pattern matching.
//!
//! Decides whether an environment variable holds a secret by matching its
//! name against regex patterns.

use regex::Regex;

/// A pattern that identifies secret values.
#[derive(Debug, Clone)]
pub struct SecretPattern {
    /// Name of this pattern (for debugging).
    pub name: String,
    /// Regex pattern to match environment variable names.
    pub env_pattern: Regex,
}

/// Built-in patterns for common secrets.
///
/// Each tuple contains (name, regex_pattern).
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("api_key", r"(?i)^.*_?(API_?KEY|APIKEY)$"),
    ("secret", r"(?i)^.*_?(SECRET|SECRET_KEY)$"),
    ("token", r"(?i)^.*_?(TOKEN|ACCESS_TOKEN|AUTH_TOKEN)$"),
    ("password", r"(?i)^.*_?(PASSWORD|PASSWD)$"),
    ("credential", r"(?i)^.*_?CREDENTIALS?$"),
    ("private_key", r"(?i)^.*_?PRIVATE_KEY$"),
    (
        "connection_string",
        r"(?i)^.*(CONNECTION_STRING|DATABASE_URL|REDIS_URL)$",
    ),
];

/// Matches environment variable names against secret patterns.
///
/// # Example
///
/// ```
/// use groundwork::secrets::SecretMatcher;
///
/// let matcher = SecretMatcher::with_builtins();
///
/// assert!(matcher.is_secret("SECRET_KEY"));
/// assert!(matcher.is_secret("DATABASE_URL"));
/// assert!(!matcher.is_secret("APP_NAME"));
/// ```
#[derive(Debug, Clone)]
pub struct SecretMatcher {
    patterns: Vec<SecretPattern>,
}

impl Default for SecretMatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl SecretMatcher {
    /// Create a matcher with built-in patterns.
    pub fn with_builtins() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .filter_map(|(name, pattern)| {
                Regex::new(pattern).ok().map(|env_pattern| SecretPattern {
                    name: name.to_string(),
                    env_pattern,
                })
            })
            .collect();

        Self { patterns }
    }

    /// Check if a variable name looks like a secret.
    pub fn is_secret(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.env_pattern.is_match(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_all_compile() {
        let matcher = SecretMatcher::with_builtins();
        assert_eq!(matcher.patterns.len(), BUILTIN_PATTERNS.len());
    }

    #[test]
    fn detects_common_secrets() {
        let matcher = SecretMatcher::with_builtins();
        assert!(matcher.is_secret("STRIPE_API_KEY"));
        assert!(matcher.is_secret("GITHUB_TOKEN"));
        assert!(matcher.is_secret("DB_PASSWORD"));
        assert!(matcher.is_secret("REDIS_URL"));
        assert!(matcher.is_secret("secret_key"));
    }

    #[test]
    fn ignores_plain_settings() {
        let matcher = SecretMatcher::with_builtins();
        assert!(!matcher.is_secret("APP_NAME"));
        assert!(!matcher.is_secret("PATH"));
        assert!(!matcher.is_secret("PWD"));
    }
}
