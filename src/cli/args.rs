//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rust Project Builder Assistant
///
/// By default, compile the main program in debug mode and run it. Use the
/// release option to build in release mode, for the default command or any
/// subcommand.
#[derive(Parser, Debug)]
#[command(author, disable_version_flag = true)]
#[command(name = "rpba")]
pub struct Args {
    /// Show the project version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Enable release mode
    #[arg(short = 'r', long, global = true)]
    pub release: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to the project manifest
    #[arg(long, global = true, value_name = "PATH", default_value = "Cargo.toml")]
    pub manifest_path: PathBuf,

    /// Subcommand to execute; runs the main program when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compile and run an example
    Example {
        /// Example to run; lists the available examples when omitted
        name: Option<String>,
    },

    /// Compile and execute unit and integration tests
    Tests {
        /// Test all targets: lib, bins, tests, benches, examples
        #[arg(short = 'a', long)]
        all: bool,
    },

    /// Build documentation
    Doc {
        /// Open the documentation in your browser after the build
        #[arg(short = 'o', long)]
        open: bool,
    },

    /// Publish the crate on crates.io
    Publish {
        /// Check for any warning or error without publishing
        #[arg(short = 'c', long)]
        check: bool,
    },

    /// Update versions in all tracked files according to the manifest
    UpdateVersions,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
