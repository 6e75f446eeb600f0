//! Core functionality of the assistant
//!
//! Contains manifest loading, build tool command assembly and version
//! synchronization.

pub mod command;
pub mod manifest;
pub mod versions;

pub use command::{CommandBuilder, Invocation, ToolCommand};
pub use manifest::{Manifest, ManifestSettings};
pub use versions::{VersionRule, VersionSynchronizer, VersionUpdate};
