#![allow(clippy::cargo_common_metadata)]
use anyhow::{Context, Result};
use colored::Colorize;
use rpba::{cli, config::Config, core::Manifest, setup_logging};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // The manifest is required by every command, including --version
    let manifest = Manifest::load(&args.manifest_path).context("Failed to load project manifest")?;

    if args.version {
        println!("{}", manifest.version);
        return Ok(());
    }

    // Initialize configuration
    let config = Config::from_args(&args, &manifest)?;

    // Execute the appropriate command
    cli::execute_command(&config, &manifest, args.command.as_ref())
}
