//! File system utility functions
//!
//! Provides file operations with proper error handling.

use crate::error::{AssistantError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub const fn new() -> Self {
        Self
    }

    /// Read file contents as string
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path).map_err(|e| AssistantError::file_system("read", path, e))
    }

    /// Overwrite a file with new contents
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> Result<()> {
        let path = path.as_ref();
        debug!("Writing file: {}", path.display());
        fs::write(path, contents).map_err(|e| AssistantError::file_system("write", path, e))
    }

    /// List the stems of files in `dir` with the given extension, sorted
    ///
    /// A missing directory yields an empty list.
    #[instrument(skip(self))]
    pub fn list_file_stems(&self, dir: &Path, extension: &str) -> Result<Vec<String>> {
        if !dir.is_dir() {
            debug!("Directory does not exist: {}", dir.display());
            return Ok(Vec::new());
        }

        let pattern = format!(
            "{}/*.{extension}",
            glob::Pattern::escape(&dir.to_string_lossy())
        );
        let entries = glob::glob(&pattern).map_err(|e| {
            AssistantError::config(format!("Invalid search pattern {pattern}: {e}"))
        })?;

        let mut stems: Vec<String> = entries
            .flatten()
            .filter(|path: &PathBuf| path.is_file())
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();

        stems.sort();
        debug!("Found {} file(s) in {}", stems.len(), dir.display());
        Ok(stems)
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("test.txt");
        let content = "Hello, world!";

        fs_utils.write_file(&file_path, content).unwrap();
        let read_content = fs_utils.read_file_to_string(&file_path).unwrap();

        assert_eq!(content, read_content);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let result = fs_utils.read_file_to_string(temp_dir.path().join("missing.txt"));
        assert!(matches!(
            result,
            Err(AssistantError::FileSystem { ref operation, .. }) if operation == "read"
        ));
    }

    #[test]
    fn test_list_file_stems_filters_extension() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        fs::write(temp_dir.path().join("zeta.rs"), "").unwrap();
        fs::write(temp_dir.path().join("alpha.rs"), "").unwrap();
        fs::write(temp_dir.path().join("notes.md"), "").unwrap();
        fs::create_dir(temp_dir.path().join("nested.rs")).unwrap();

        let stems = fs_utils.list_file_stems(temp_dir.path(), "rs").unwrap();
        assert_eq!(stems, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_file_stems_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let stems = fs_utils
            .list_file_stems(&temp_dir.path().join("examples"), "rs")
            .unwrap();
        assert!(stems.is_empty());
    }
}
