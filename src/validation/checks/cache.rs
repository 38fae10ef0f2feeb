//! Cache service reachability.

use std::time::Duration;

use crate::environment::Environment;
use crate::validation::{CheckCategory, ValidationResult};

/// Variable holding the cache connection string.
pub const REDIS_URL_VAR: &str = "REDIS_URL";

fn ping(url: &str, timeout: Duration) -> redis::RedisResult<String> {
    let client = redis::Client::open(url)?;
    let mut conn = client.get_connection_with_timeout(timeout)?;
    conn.set_read_timeout(Some(timeout))?;
    conn.set_write_timeout(Some(timeout))?;
    redis::cmd("PING").query::<String>(&mut conn)
}

/// Check that the cache named by `REDIS_URL` answers `PING`.
pub fn check_cache(env: &Environment, timeout: Duration) -> ValidationResult {
    let name = CheckCategory::Cache.result_name();

    let Some(url) = env.get_non_empty(REDIS_URL_VAR) else {
        return ValidationResult::fail(name, format!("{} not configured", REDIS_URL_VAR));
    };

    match ping(url, timeout) {
        Ok(reply) => {
            tracing::debug!("Redis replied {}", reply);
            ValidationResult::pass(name, "Redis connection successful")
        }
        Err(e) => ValidationResult::fail(name, format!("Redis connection failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[test]
    fn unset_url_fails() {
        let env = Environment::from_vars(Vec::<(String, String)>::new());
        let result = check_cache(&env, TIMEOUT);

        assert!(!result.passed);
        assert_eq!(result.name, "Redis Connection");
        assert_eq!(result.message, "REDIS_URL not configured");
    }

    #[test]
    fn malformed_url_fails() {
        let env = Environment::from_vars([("REDIS_URL", "definitely-not-redis")]);
        let result = check_cache(&env, TIMEOUT);

        assert!(!result.passed);
        assert!(result.message.starts_with("Redis connection failed: "));
    }

    #[test]
    fn closed_port_fails() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let env = Environment::from_vars([("REDIS_URL", format!("redis://127.0.0.1:{}/0", port))]);

        let result = check_cache(&env, TIMEOUT);
        assert!(!result.passed);
        assert!(result.message.starts_with("Redis connection failed: "));
    }
}
