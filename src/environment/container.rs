//! Container detection.

use std::fs;
use std::path::{Path, PathBuf};

/// What the probe found out about containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// No `/.dockerenv` marker.
    NotContainerized,
    /// Marker present and PID 1's cgroup names docker.
    Docker,
    /// Marker present but the cgroup could not confirm it.
    Unconfirmed,
}

/// Looks for container markers relative to a filesystem root.
#[derive(Debug, Clone)]
pub struct ContainerProbe {
    root: PathBuf,
}

impl Default for ContainerProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerProbe {
    /// Probe the real filesystem.
    pub fn new() -> Self {
        Self::with_root("/")
    }

    /// Probe a different root (used by tests).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn marker(&self) -> PathBuf {
        self.root.join(".dockerenv")
    }

    fn init_cgroup(&self) -> PathBuf {
        self.root.join(Path::new("proc/1/cgroup"))
    }

    /// Inspect the markers.
    pub fn detect(&self) -> ContainerState {
        if !self.marker().exists() {
            return ContainerState::NotContainerized;
        }

        match fs::read_to_string(self.init_cgroup()) {
            Ok(cgroup) if cgroup.contains("docker") => ContainerState::Docker,
            Ok(_) => ContainerState::Unconfirmed,
            Err(e) => {
                tracing::debug!("Could not read PID 1 cgroup: {}", e);
                ContainerState::Unconfirmed
            }
        }
    }
}
