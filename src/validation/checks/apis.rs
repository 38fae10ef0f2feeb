//! External service reachability.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;
use crate::validation::{CheckCategory, ValidationResult};

/// Per-request timeout for endpoint probes.
pub const API_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues GET requests against configured endpoints.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Create a probe with the standard 10-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(API_TIMEOUT)
    }

    /// Create a probe with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("groundwork/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(anyhow::Error::from)?;
        Ok(Self { client })
    }

    /// GET `url`, returning a failure description if it is not reachable.
    ///
    /// Any status below 400 counts as reachable.
    pub fn probe(&self, url: &str) -> std::result::Result<u16, String> {
        match self.client.get(url).send() {
            Ok(response) => {
                let status = response.status().as_u16();
                if status >= 400 {
                    Err(format!("HTTP {}", status))
                } else {
                    Ok(status)
                }
            }
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Check every endpoint in `apis`, in name order.
pub fn check_external_apis(apis: &BTreeMap<String, String>, probe: &HttpProbe) -> ValidationResult {
    let name = CheckCategory::ExternalApis.result_name();

    let failures: Vec<String> = apis
        .iter()
        .filter_map(|(api, url)| match probe.probe(url) {
            Ok(status) => {
                tracing::debug!("{} -> HTTP {}", api, status);
                None
            }
            Err(reason) => Some(format!("{} ({})", api, reason)),
        })
        .collect();

    if failures.is_empty() {
        ValidationResult::pass(
            name,
            format!("All {} external APIs are reachable", apis.len()),
        )
    } else {
        ValidationResult::fail(
            name,
            format!("Failed to connect to: {}", failures.join(", ")),
        )
    }
}
