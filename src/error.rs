//! Error types for the builder assistant
//!
//! Provides structured error handling with context and proper error chains.

use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the builder assistant
#[derive(Error, Debug)]
pub enum AssistantError {
    /// The project manifest could not be read, parsed or is incomplete
    #[error("Manifest error in {path}: {message}")]
    Manifest {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build tool exited unsuccessfully or could not be started
    #[error("Process error: `{command}` failed{}", describe_exit(.exit_code))]
    Process {
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// `example` was called without a name
    #[error("{}", format_missing_example(.available))]
    MissingExample { available: Vec<String> },

    /// One or more tracked files do not contain exactly one version match
    #[error("{}", format_version_mismatches(.mismatches))]
    VersionMismatch { mismatches: Vec<(PathBuf, usize)> },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    exit_code.map_or_else(
        || " (terminated without an exit code)".to_string(),
        |code| format!(" with exit code {code}"),
    )
}

fn format_missing_example(available: &[String]) -> String {
    let mut message = String::from("missing the name of the example.\n\nAvailable examples:");
    if available.is_empty() {
        message.push_str("\n   (none)");
    }
    for name in available {
        let _ = write!(message, "\n   {name}");
    }
    message
}

fn format_version_mismatches(mismatches: &[(PathBuf, usize)]) -> String {
    let mut message = String::from("expected exactly one version match per tracked file:");
    for (path, count) in mismatches {
        let _ = write!(message, "\n   {}: {count} match(es)", path.display());
    }
    message
}

impl AssistantError {
    /// Create a new manifest error
    pub fn manifest<P: Into<PathBuf>>(message: impl Into<String>, path: P) -> Self {
        Self::Manifest {
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a new manifest error caused by another error
    pub fn manifest_with_source<P, E>(message: impl Into<String>, path: P, source: E) -> Self
    where
        P: Into<PathBuf>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Manifest {
            message: message.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new process error
    pub fn process(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a process error for a command that could not be spawned
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            source: Some(source),
        }
    }

    /// Create a new missing example error
    pub const fn missing_example(available: Vec<String>) -> Self {
        Self::MissingExample { available }
    }

    /// Create a new version mismatch error
    pub const fn version_mismatch(mismatches: Vec<(PathBuf, usize)>) -> Self {
        Self::VersionMismatch { mismatches }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AssistantError>;
