//! Container detection, reported for information only.

use crate::environment::{ContainerProbe, ContainerState};
use crate::validation::{CheckCategory, ValidationResult};

/// Report whether the process runs inside a container.
///
/// Never fails: every state is informational.
pub fn check_container(probe: &ContainerProbe) -> ValidationResult {
    let name = CheckCategory::Container.result_name();

    let message = match probe.detect() {
        ContainerState::NotContainerized => "Not running in Docker container",
        ContainerState::Docker => "Running in Docker container",
        ContainerState::Unconfirmed => "Docker environment detected",
    };

    ValidationResult::pass(name, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn bare_host_passes() {
        let temp = TempDir::new().unwrap();
        let result = check_container(&ContainerProbe::with_root(temp.path()));

        assert!(result.passed);
        assert_eq!(result.message, "Not running in Docker container");
    }

    #[test]
    fn docker_cgroup_passes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".dockerenv"), "").unwrap();
        fs::create_dir_all(temp.path().join("proc/1")).unwrap();
        fs::write(temp.path().join("proc/1/cgroup"), "1:name=systemd:/docker/abc\n").unwrap();

        let result = check_container(&ContainerProbe::with_root(temp.path()));
        assert!(result.passed);
        assert_eq!(result.message, "Running in Docker container");
    }

    #[test]
    fn unconfirmed_marker_still_passes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".dockerenv"), "").unwrap();

        let result = check_container(&ContainerProbe::with_root(temp.path()));
        assert!(result.passed);
        assert_eq!(result.message, "Docker environment detected");
    }
}
