//! Process execution utilities
//!
//! Runs the build tool with inherited standard streams and maps failures to
//! structured errors.

use crate::error::{AssistantError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
    work_dir: PathBuf,
}

impl ProcessRunner {
    /// Create a new process runner executing in `work_dir`
    pub fn new(debug: bool, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            debug,
            work_dir: work_dir.into(),
        }
    }

    /// Directory the child processes run in
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Run a command with arguments, inheriting stdin/stdout/stderr
    #[instrument(skip(self))]
    pub fn run_command(&self, command: &str, args: &[&str]) -> Result<()> {
        self.run_command_with_env(command, args, &[])
    }

    /// Run a command with arguments and environment variables
    ///
    /// Any non-zero exit is reported as [`AssistantError::Process`]; the
    /// child's own output is the diagnostic and is never captured.
    #[instrument(skip(self, env_vars))]
    pub fn run_command_with_env(
        &self,
        command: &str,
        args: &[&str],
        env_vars: &[(String, String)],
    ) -> Result<()> {
        let cmd_str = if args.is_empty() {
            command.to_string()
        } else {
            format!("{} {}", command, args.join(" "))
        };

        if self.debug {
            debug!("Running command: {} (in {})", cmd_str, self.work_dir.display());
            if !env_vars.is_empty() {
                debug!("Environment variables: {:?}", env_vars);
            }
        } else {
            info!("+ {}", cmd_str);
        }

        let mut cmd = Command::new(command);
        cmd.args(args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let status = cmd
            .status()
            .map_err(|e| AssistantError::spawn(cmd_str.clone(), e))?;

        if !status.success() {
            return Err(AssistantError::process(cmd_str, status.code()));
        }

        debug!("Command completed successfully");
        Ok(())
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false, ".")
    }
}
