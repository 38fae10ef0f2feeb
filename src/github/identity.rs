//! Account identity lookup.
//!
//! The username used in remote URLs comes from the OS credential store,
//! falling back to a configured default when the store has nothing.

use crate::config::RepoConfig;
use crate::error::Result;
use crate::shell::CommandRunner;

/// A secure key/value store addressed by service and entry name.
pub trait CredentialStore {
    /// Look up the secret for `service`/`entry`.
    ///
    /// `Ok(None)` means the store has no such entry.
    fn lookup(&self, service: &str, entry: &str) -> Result<Option<String>>;
}

/// Credential store backed by the platform keychain CLI.
///
/// macOS uses `security`, other systems the freedesktop `secret-tool`.
pub struct KeychainStore<R> {
    runner: R,
}

impl<R: CommandRunner> KeychainStore<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn lookup_command(service: &str, entry: &str) -> (&'static str, Vec<String>) {
        if cfg!(target_os = "macos") {
            (
                "security",
                ["find-generic-password", "-s", service, "-a", entry, "-w"]
                    .map(String::from)
                    .to_vec(),
            )
        } else {
            (
                "secret-tool",
                ["lookup", "service", service, "account", entry]
                    .map(String::from)
                    .to_vec(),
            )
        }
    }
}

impl<R: CommandRunner> CredentialStore for KeychainStore<R> {
    fn lookup(&self, service: &str, entry: &str) -> Result<Option<String>> {
        let (program, args) = Self::lookup_command(service, entry);
        let result = self.runner.run(program, &args)?;

        if !result.success {
            return Ok(None);
        }

        let value = result.stdout.trim();
        Ok((!value.is_empty()).then(|| value.to_string()))
    }
}

/// Resolves the account name, never failing.
pub struct IdentityResolver {
    store: Box<dyn CredentialStore>,
    service: String,
    entry: String,
    fallback: String,
}

impl IdentityResolver {
    /// Build a resolver using the credential key and fallback from `config`.
    pub fn new(store: Box<dyn CredentialStore>, config: &RepoConfig) -> Self {
        Self {
            store,
            service: config.credential_service.clone(),
            entry: config.credential_entry.clone(),
            fallback: config.fallback_username.clone(),
        }
    }

    /// The stored username, or the fallback on absence or error.
    pub fn resolve(&self) -> String {
        match self.store.lookup(&self.service, &self.entry) {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::debug!(
                    "No credential for {}/{}; using fallback",
                    self.service,
                    self.entry
                );
                self.fallback.clone()
            }
            Err(e) => {
                tracing::debug!("Credential lookup failed: {}; using fallback", e);
                self.fallback.clone()
            }
        }
    }
}
