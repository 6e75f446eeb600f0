//! Environment handling utilities
//!
//! Expands `${VAR}` references in manifest text and prepares the environment
//! passed to the build tool.

use crate::error::{AssistantError, Result};
use regex::{Captures, Regex};
use std::env;
use tracing::debug;

/// Variable that controls backtrace verbosity in the child process
pub const BACKTRACE_VAR: &str = "RUST_BACKTRACE";

/// Environment variable utilities
#[derive(Debug)]
pub struct EnvUtils;

impl EnvUtils {
    /// Replace every `${VAR}` with the value of the environment variable
    ///
    /// References to unset variables are left untouched.
    pub fn interpolate(content: &str) -> Result<String> {
        Self::interpolate_with(content, |name| env::var(name).ok())
    }

    /// Same as [`EnvUtils::interpolate`] with a custom variable lookup
    pub fn interpolate_with<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_reference = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
            .map_err(|e| AssistantError::config(format!("Failed to compile regex: {e}")))?;

        let expanded = var_reference
            .replace_all(content, |caps: &Captures| {
                let name = &caps[1];
                lookup(name).unwrap_or_else(|| {
                    debug!("Environment variable {} is not set, keeping reference", name);
                    caps[0].to_string()
                })
            })
            .into_owned();
        Ok(expanded)
    }

    /// Environment overrides applied to every build tool invocation
    pub fn child_env(backtrace: &str) -> Vec<(String, String)> {
        match env::var(BACKTRACE_VAR) {
            Ok(current) if current == backtrace => {}
            Ok(current) => debug!("Overriding {}={} with {}", BACKTRACE_VAR, current, backtrace),
            Err(_) => debug!("Setting {}={}", BACKTRACE_VAR, backtrace),
        }
        vec![(BACKTRACE_VAR.to_string(), backtrace.to_string())]
    }
}
