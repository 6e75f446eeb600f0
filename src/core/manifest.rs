//! Project manifest loading
//!
//! Reads `Cargo.toml`, expands `${VAR}` references from the environment and
//! extracts the package name, version and optional assistant settings.

use crate::{
    error::{AssistantError, Result},
    utils::{env::EnvUtils, fs::FileSystemUtils},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Package information extracted from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Location the manifest was read from
    pub path: PathBuf,
    /// `package.name`
    pub name: String,
    /// `package.version`
    pub version: String,
    /// Overrides from `[package.metadata.rpba]`
    pub settings: ManifestSettings,
}

/// Settings read from the `[package.metadata.rpba]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestSettings {
    /// Build tool executable
    pub tool: Option<String>,
    /// Directory holding runnable examples
    pub examples_dir: Option<PathBuf>,
    /// Files whose dependency snippet tracks the package version
    pub version_files: Option<Vec<PathBuf>>,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    package: Option<RawPackage>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    metadata: Option<RawMetadata>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    rpba: Option<ManifestSettings>,
}

impl Manifest {
    /// Load and validate the manifest at `path`
    #[instrument]
    pub fn load<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading manifest: {}", path.display());

        let content = FileSystemUtils::new()
            .read_file_to_string(path)
            .map_err(|e| AssistantError::manifest_with_source("cannot read manifest", path, e))?;

        Self::parse(&EnvUtils::interpolate(&content)?, path)
    }

    /// Parse already interpolated manifest text
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest = toml::from_str(content)
            .map_err(|e| AssistantError::manifest_with_source("invalid TOML", path, e))?;

        let package = raw
            .package
            .ok_or_else(|| AssistantError::manifest("missing [package] table", path))?;

        let name = required_field(package.name, "package.name", path)?;
        let version = required_field(package.version, "package.version", path)?;
        let settings = package
            .metadata
            .and_then(|metadata| metadata.rpba)
            .unwrap_or_default();

        debug!("Manifest describes {} {}", name, version);

        Ok(Self {
            path: path.to_path_buf(),
            name,
            version,
            settings,
        })
    }
}

fn required_field(value: Option<String>, field: &str, path: &Path) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(AssistantError::manifest(format!("{field} is empty"), path)),
        None => Err(AssistantError::manifest(format!("missing {field}"), path)),
    }
}
