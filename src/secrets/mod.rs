//! Secret detection and masking.
//!
//! - [`SecretMatcher`] - Matches environment variable names against secret patterns
//! - [`OutputMasker`] - Replaces secret values in text shown to the user
//!
//! # Example
//!
//! ```
//! use groundwork::environment::Environment;
//! use groundwork::secrets::{OutputMasker, SecretMatcher};
//!
//! let env = Environment::from_vars([("API_KEY", "abc-123-xyz")]);
//! let masker = OutputMasker::from_environment(&env, &SecretMatcher::with_builtins());
//! assert!(!masker.mask("key abc-123-xyz rejected").contains("abc-123-xyz"));
//! ```

pub mod mask;
pub mod pattern;

pub use mask::OutputMasker;
pub use pattern::{SecretMatcher, SecretPattern, BUILTIN_PATTERNS};
