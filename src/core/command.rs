//! Build tool command assembly
//!
//! Turns the assistant's options into discrete argument lists for the build
//! tool. Nothing here touches the shell: every token stays a separate
//! argument.

use crate::{config::Config, utils::env::EnvUtils};
use std::fmt;

/// Token requesting the optimized build profile
pub const RELEASE_FLAG: &str = "--release";

/// Build tool subcommands the assistant drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCommand {
    Run,
    Test,
    Doc,
    Publish,
}

impl ToolCommand {
    /// Name of the subcommand as the build tool expects it
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Test => "test",
            Self::Doc => "doc",
            Self::Publish => "publish",
        }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully assembled build tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    command: ToolCommand,
    args: Vec<String>,
    env: Vec<(String, String)>,
}

impl Invocation {
    /// Start an invocation of `command` without arguments
    pub const fn new(command: ToolCommand) -> Self {
        Self {
            command,
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// Append the release token when `release` is set
    ///
    /// The token is added at most once no matter how often this is called.
    #[must_use]
    pub fn release(mut self, release: bool) -> Self {
        if release && !self.has_arg(RELEASE_FLAG) {
            self.args.push(RELEASE_FLAG.to_string());
        }
        self
    }

    /// Append a single argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append `arg` only when `enabled` is set
    #[must_use]
    pub fn arg_if(self, enabled: bool, arg: impl Into<String>) -> Self {
        if enabled { self.arg(arg) } else { self }
    }

    /// Append arguments forwarded to the test harness after `--`
    #[must_use]
    pub fn harness_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.push("--".to_string());
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child process
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Subcommand passed to the build tool
    pub const fn command(&self) -> ToolCommand {
        self.command
    }

    /// Arguments following the subcommand
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Environment overrides for the child process
    pub fn env_vars(&self) -> &[(String, String)] {
        &self.env
    }

    /// Whether `arg` is already part of the argument list
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    /// Subcommand followed by its arguments, ready for process execution
    pub fn tool_args(&self) -> Vec<&str> {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// Assembles invocations from the run configuration
#[derive(Debug)]
pub struct CommandBuilder<'a> {
    config: &'a Config,
}

impl<'a> CommandBuilder<'a> {
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn base(&self, command: ToolCommand) -> Invocation {
        EnvUtils::child_env(&self.config.test.backtrace)
            .into_iter()
            .fold(Invocation::new(command), |invocation, (key, value)| {
                invocation.env(key, value)
            })
    }

    /// `run [--release]`
    pub fn run(&self) -> Invocation {
        self.base(ToolCommand::Run).release(self.config.release)
    }

    /// `run [--release] --example NAME`
    pub fn example(&self, name: &str) -> Invocation {
        self.run().arg("--example").arg(name)
    }

    /// `test [--release] (--all-targets | --test lib) -- <harness args>`
    pub fn tests(&self, all_targets: bool) -> Invocation {
        let invocation = self.base(ToolCommand::Test).release(self.config.release);
        let invocation = if all_targets {
            invocation.arg("--all-targets")
        } else {
            invocation.arg("--test").arg("lib")
        };
        invocation.harness_args(self.config.test.harness_args.iter().cloned())
    }

    /// `doc [--open]`
    pub fn doc(&self, open: bool) -> Invocation {
        self.base(ToolCommand::Doc).arg_if(open, "--open")
    }

    /// `publish [--dry-run]`
    pub fn publish(&self, dry_run: bool) -> Invocation {
        self.base(ToolCommand::Publish).arg_if(dry_run, "--dry-run")
    }
}
