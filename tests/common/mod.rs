//! Common test utilities

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for the build tool: records its arguments and backtrace setting,
/// then exits with `$FAKE_TOOL_EXIT` (default 0).
const FAKE_TOOL: &str = r#"#!/bin/sh
dir=$(dirname "$0")
printf '%s\n' "$@" > "$dir/tool-args.txt"
printf '%s' "$RUST_BACKTRACE" > "$dir/tool-backtrace.txt"
exit "${FAKE_TOOL_EXIT:-0}"
"#;

/// A temporary crate whose manifest points the assistant at the fake tool
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new(name: &str, version: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let tool = dir.path().join("fake-cargo.sh");
        fs::write(&tool, FAKE_TOOL).unwrap();
        make_executable(&tool);

        let manifest = format!(
            "[package]\nname = \"{name}\"\nversion = \"{version}\"\nedition = \"2021\"\n\n\
             [package.metadata.rpba]\ntool = \"{}\"\n",
            tool.display()
        );
        fs::write(dir.path().join("Cargo.toml"), manifest).unwrap();

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).unwrap()
    }

    /// The assistant binary, running inside the project
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rpba").unwrap();
        cmd.current_dir(self.dir.path()).env_remove("FAKE_TOOL_EXIT");
        cmd
    }

    /// Arguments the fake tool received, if it ran
    pub fn tool_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.dir.path().join("tool-args.txt"))
            .ok()
            .map(|content| content.lines().map(str::to_string).collect())
    }

    pub fn tool_backtrace(&self) -> Option<String> {
        fs::read_to_string(self.dir.path().join("tool-backtrace.txt")).ok()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
