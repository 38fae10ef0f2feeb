//! Runtime environment inspection.
//!
//! - [`snapshot`] - Environment variables for a run, optionally pre-loaded
//!   from a dotenv file
//! - [`container`] - Detection of container markers

pub mod container;
pub mod snapshot;

pub use container::{ContainerProbe, ContainerState};
pub use snapshot::{EnvFileStatus, Environment};
