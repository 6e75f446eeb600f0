//! # Rust Project Builder Assistant
//!
//! Short commands for the everyday `cargo` invocations of a crate: run the
//! main program or an example, run the tests, build the documentation,
//! publish, and keep the version shown in the documentation in sync with the
//! manifest.
//!
//! ## Features
//!
//! - Debug or release builds for every command
//! - Quick (library) or complete (all targets) test runs with full backtraces
//! - Example discovery when no example name is given
//! - Version synchronization of `[dependencies]` snippets
//!
//! ## Example
//!
//! ```no_run
//! use rpba::core::{Manifest, VersionSynchronizer};
//! use std::path::{Path, PathBuf};
//!
//! let manifest = Manifest::load("Cargo.toml")?;
//! let files = [PathBuf::from("README.md")];
//! VersionSynchronizer::for_manifest(&manifest, Path::new("."), &files)?.synchronize()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr so stdout only carries the build tool's output.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
