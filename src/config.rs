//! Configuration management for the assistant
//!
//! Centralizes the settings of one run: command line flags first, then
//! overrides from the manifest's `[package.metadata.rpba]` table, then
//! defaults.

use crate::{cli::Args, core::manifest::Manifest, error::AssistantError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Build in release mode
    pub release: bool,
    /// Manifest the run was configured from
    pub manifest_path: PathBuf,
    /// Directory containing the manifest; child processes run here
    pub project_root: PathBuf,
    /// Build tool executable
    pub tool: String,
    /// Example discovery configuration
    pub examples: ExamplesConfig,
    /// Test run configuration
    pub test: TestConfig,
    /// Version synchronization configuration
    pub versions: VersionConfig,
}

/// Example discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamplesConfig {
    /// Directory scanned for examples, relative to the project root
    pub dir: PathBuf,
    /// File extension of example sources
    pub extension: String,
}

/// Test run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    /// Arguments handed to the test harness after `--`
    pub harness_args: Vec<String>,
    /// Value exported as `RUST_BACKTRACE`
    pub backtrace: String,
}

/// Version synchronization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Tracked files, relative to the project root
    pub files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            release: false,
            manifest_path: PathBuf::from("Cargo.toml"),
            project_root: PathBuf::from("."),
            tool: "cargo".to_string(),
            examples: ExamplesConfig::default(),
            test: TestConfig::default(),
            versions: VersionConfig::default(),
        }
    }
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("examples"),
            extension: "rs".to_string(),
        }
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            harness_args: vec![
                "--color".to_string(),
                "always".to_string(),
                "--nocapture".to_string(),
            ],
            backtrace: "full".to_string(),
        }
    }
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            files: vec![PathBuf::from("src/lib.rs"), PathBuf::from("README.md")],
        }
    }
}

impl Config {
    /// Create configuration from command line arguments and the loaded manifest
    pub fn from_args(args: &Args, manifest: &Manifest) -> Result<Self, AssistantError> {
        let mut config = Self {
            debug: args.debug,
            release: args.release,
            manifest_path: args.manifest_path.clone(),
            project_root: project_root(&args.manifest_path),
            ..Self::default()
        };

        let settings = &manifest.settings;
        if let Some(tool) = &settings.tool {
            config.tool.clone_from(tool);
        }
        if let Some(dir) = &settings.examples_dir {
            config.examples.dir.clone_from(dir);
        }
        if let Some(files) = &settings.version_files {
            config.versions.files.clone_from(files);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AssistantError> {
        if !self.project_root.is_dir() {
            return Err(AssistantError::config(format!(
                "Project directory not found: {}",
                self.project_root.display()
            )));
        }

        if self.tool.trim().is_empty() {
            return Err(AssistantError::config("Build tool must not be empty"));
        }

        Ok(())
    }

    /// Absolute or root-relative location of the examples directory
    pub fn examples_dir(&self) -> PathBuf {
        self.project_root.join(&self.examples.dir)
    }
}

fn project_root(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
