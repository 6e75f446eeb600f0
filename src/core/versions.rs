//! Version string synchronization
//!
//! Keeps the `[dependencies]` snippet shown in documentation files in line
//! with the manifest version. Every tracked file must contain exactly one
//! snippet; nothing is written unless all files validate.

use crate::{
    core::manifest::Manifest,
    error::{AssistantError, Result},
    utils::fs::FileSystemUtils,
};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A file and the pattern locating its version string
#[derive(Debug, Clone)]
pub struct VersionRule {
    /// File to rewrite
    pub path: PathBuf,
    /// Pattern whose second group is the quoted version
    pub pattern: Regex,
    /// Version written in place of the match
    pub version: String,
}

impl VersionRule {
    /// Rule matching `[dependencies]` followed by `<name> = "x.y.z"`
    pub fn dependency_snippet(path: impl Into<PathBuf>, name: &str, version: &str) -> Result<Self> {
        let pattern = format!(
            r#"(\[dependencies\]\r?\n{}\s=\s)("[\d.]+")"#,
            regex::escape(name)
        );
        let pattern = Regex::new(&pattern)
            .map_err(|e| AssistantError::config(format!("Failed to compile regex: {e}")))?;

        Ok(Self {
            path: path.into(),
            pattern,
            version: version.to_string(),
        })
    }

    /// Number of matches in `contents`
    pub fn count_matches(&self, contents: &str) -> usize {
        self.pattern.find_iter(contents).count()
    }

    /// Replace the single match with the rule's version
    pub fn apply(&self, contents: &str) -> String {
        self.pattern
            .replacen(contents, 1, |caps: &Captures| {
                format!("{}\"{}\"", &caps[1], self.version)
            })
            .into_owned()
    }
}

/// Outcome of a successful synchronization for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionUpdate {
    /// File that was checked
    pub path: PathBuf,
    /// Whether the content differed and was rewritten
    pub changed: bool,
}

/// Rewrites tracked files so their version matches the manifest
#[derive(Debug)]
pub struct VersionSynchronizer {
    rules: Vec<VersionRule>,
    fs_utils: FileSystemUtils,
}

impl VersionSynchronizer {
    /// Create a synchronizer from explicit rules
    pub const fn new(rules: Vec<VersionRule>) -> Self {
        Self {
            rules,
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Build the rule table for `files` (relative to `root`) from the manifest
    pub fn for_manifest(manifest: &Manifest, root: &Path, files: &[PathBuf]) -> Result<Self> {
        let rules = files
            .iter()
            .map(|file| {
                VersionRule::dependency_snippet(root.join(file), &manifest.name, &manifest.version)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rules))
    }

    /// Tracked rules
    pub fn rules(&self) -> &[VersionRule] {
        &self.rules
    }

    /// Validate every file, then rewrite them all
    ///
    /// Files whose match count is not exactly one are all reported together
    /// and no file is modified in that case.
    #[instrument(skip(self))]
    pub fn synchronize(&self) -> Result<Vec<VersionUpdate>> {
        let mut pending = Vec::with_capacity(self.rules.len());
        let mut mismatches = Vec::new();

        for rule in &self.rules {
            let contents = self.fs_utils.read_file_to_string(&rule.path)?;
            let count = rule.count_matches(&contents);
            debug!("{}: {} version match(es)", rule.path.display(), count);

            if count == 1 {
                let updated = rule.apply(&contents);
                pending.push((rule, contents, updated));
            } else {
                mismatches.push((rule.path.clone(), count));
            }
        }

        if !mismatches.is_empty() {
            return Err(AssistantError::version_mismatch(mismatches));
        }

        let mut updates = Vec::with_capacity(pending.len());
        for (rule, original, updated) in pending {
            let changed = original != updated;
            if changed {
                self.fs_utils.write_file(&rule.path, &updated)?;
                info!("Updated version in {}", rule.path.display());
            } else {
                debug!("{} is already up to date", rule.path.display());
            }
            updates.push(VersionUpdate {
                path: rule.path.clone(),
                changed,
            });
        }

        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const README: &str = "# rust-spice\n\nAdd this to your `Cargo.toml`:\n\n```toml\n[dependencies]\nrust-spice = \"0.7.4\"\n```\n\nThen enjoy.\n";
    const LIB: &str = "/*!\r\n```.ignore\r\n[dependencies]\r\nrust-spice = \"0.7.4\"\r\n```\r\n*/\r\n";

    fn manifest(version: &str) -> Manifest {
        Manifest::parse(
            &format!("[package]\nname = \"rust-spice\"\nversion = \"{version}\"\n"),
            Path::new("Cargo.toml"),
        )
        .unwrap()
    }

    fn synchronizer(root: &Path, version: &str) -> VersionSynchronizer {
        let files = [PathBuf::from("README.md"), PathBuf::from("lib.rs")];
        VersionSynchronizer::for_manifest(&manifest(version), root, &files).unwrap()
    }

    #[test]
    fn test_rule_escapes_package_name() {
        let rule = VersionRule::dependency_snippet("README.md", "a.b", "1.0.0").unwrap();

        assert_eq!(rule.count_matches("[dependencies]\na.b = \"0.1\""), 1);
        assert_eq!(rule.count_matches("[dependencies]\naxb = \"0.1\""), 0);
    }

    #[test]
    fn test_apply_replaces_only_version() {
        let rule = VersionRule::dependency_snippet("README.md", "rust-spice", "9.9.9").unwrap();
        let updated = rule.apply(README);

        assert_eq!(updated, README.replace("\"0.7.4\"", "\"9.9.9\""));
    }

    #[test]
    fn test_synchronize_updates_all_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), README).unwrap();
        fs::write(temp_dir.path().join("lib.rs"), "[dependencies]\nrust-spice = \"0.7.4\"\n").unwrap();

        let updates = synchronizer(temp_dir.path(), "9.9.9").synchronize().unwrap();

        assert_eq!(updates.len(), 2);
        assert!(updates.iter().all(|update| update.changed));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
            README.replace("0.7.4", "9.9.9")
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("lib.rs")).unwrap(),
            "[dependencies]\nrust-spice = \"9.9.9\"\n"
        );
    }

    #[test]
    fn test_rule_accepts_crlf_line_endings() {
        let rule = VersionRule::dependency_snippet("lib.rs", "rust-spice", "1.0.0").unwrap();

        assert_eq!(rule.count_matches(LIB), 1);
        assert_eq!(rule.apply(LIB), LIB.replace("0.7.4", "1.0.0"));
    }

    #[test]
    fn test_synchronize_rejects_ambiguous_file_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let duplicated = format!("{README}\n{README}");
        fs::write(temp_dir.path().join("README.md"), &duplicated).unwrap();
        fs::write(temp_dir.path().join("lib.rs"), "[dependencies]\nrust-spice = \"0.7.4\"\n").unwrap();

        let result = synchronizer(temp_dir.path(), "9.9.9").synchronize();

        match result {
            Err(AssistantError::VersionMismatch { mismatches }) => {
                assert_eq!(mismatches, vec![(temp_dir.path().join("README.md"), 2)]);
            }
            other => panic!("Expected version mismatch, got {other:?}"),
        }
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
            duplicated
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("lib.rs")).unwrap(),
            "[dependencies]\nrust-spice = \"0.7.4\"\n"
        );
    }

    #[test]
    fn test_synchronize_reports_every_bad_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), "no snippet here").unwrap();
        fs::write(temp_dir.path().join("lib.rs"), "").unwrap();

        let result = synchronizer(temp_dir.path(), "9.9.9").synchronize();

        match result {
            Err(AssistantError::VersionMismatch { mismatches }) => {
                assert_eq!(mismatches.len(), 2);
                assert!(mismatches.iter().all(|(_, count)| *count == 0));
            }
            other => panic!("Expected version mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_synchronize_up_to_date_file_is_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), README).unwrap();
        fs::write(temp_dir.path().join("lib.rs"), "[dependencies]\nrust-spice = \"0.7.4\"\n").unwrap();

        let updates = synchronizer(temp_dir.path(), "0.7.4").synchronize().unwrap();
        assert!(updates.iter().all(|update| !update.changed));
    }

    #[test]
    fn test_synchronize_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = synchronizer(temp_dir.path(), "9.9.9").synchronize();
        assert!(matches!(result, Err(AssistantError::FileSystem { .. })));
    }
}
