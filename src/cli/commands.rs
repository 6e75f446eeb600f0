//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{CommandBuilder, Invocation, Manifest, VersionSynchronizer},
    error::AssistantError,
    utils::{fs::FileSystemUtils, process::ProcessRunner},
};
use anyhow::Context;
use tracing::{debug, info, instrument};

/// Execute the appropriate command; `None` runs the main program
#[instrument(skip(config, manifest))]
pub fn execute_command(
    config: &Config,
    manifest: &Manifest,
    command: Option<&Command>,
) -> anyhow::Result<()> {
    let builder = CommandBuilder::new(config);

    match command {
        None => invoke(config, &builder.run()),
        Some(Command::Example { name }) => execute_example_command(config, &builder, name.as_deref()),
        Some(Command::Tests { all }) => invoke(config, &builder.tests(*all)),
        Some(Command::Doc { open }) => invoke(config, &builder.doc(*open)),
        Some(Command::Publish { check }) => invoke(config, &builder.publish(*check)),
        Some(Command::UpdateVersions) => execute_update_versions_command(config, manifest),
    }
}

/// Run an example, or list the available ones when no name is given
#[instrument(skip(config, builder))]
fn execute_example_command(
    config: &Config,
    builder: &CommandBuilder<'_>,
    name: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(name) = name {
        return invoke(config, &builder.example(name));
    }

    let examples_dir = config.examples_dir();
    debug!("No example given, scanning {}", examples_dir.display());

    let available = FileSystemUtils::new()
        .list_file_stems(&examples_dir, &config.examples.extension)
        .context("Failed to list examples")?;

    Err(AssistantError::missing_example(available).into())
}

/// Rewrite the version of every tracked file
#[instrument(skip(config, manifest))]
fn execute_update_versions_command(config: &Config, manifest: &Manifest) -> anyhow::Result<()> {
    info!("Synchronizing tracked files with version {}", manifest.version);

    let synchronizer =
        VersionSynchronizer::for_manifest(manifest, &config.project_root, &config.versions.files)?;
    let updates = synchronizer.synchronize()?;

    let changed = updates.iter().filter(|update| update.changed).count();
    info!(
        "Version synchronization completed: {} of {} file(s) updated",
        changed,
        updates.len()
    );
    Ok(())
}

/// Hand an invocation to the build tool
fn invoke(config: &Config, invocation: &Invocation) -> anyhow::Result<()> {
    let runner = ProcessRunner::new(config.debug, &config.project_root);
    runner.run_command_with_env(&config.tool, &invocation.tool_args(), invocation.env_vars())?;
    Ok(())
}
