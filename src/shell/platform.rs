//! Platform-specific shell detection.

/// Shell program and flag used to run a command line.
///
/// Uses the POSIX `sh -c` on Unix rather than the user's login shell so
/// that check commands behave the same in CI and on a workstation.
pub fn shell_invocation() -> (String, &'static str) {
    if cfg!(target_os = "windows") {
        let shell = std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string());
        (shell, "/C")
    } else {
        ("/bin/sh".to_string(), "-c")
    }
}

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive output in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
