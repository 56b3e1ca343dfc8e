//! CLI command implementations

use crate::cli::{InstallArgs, ProfileArgs};
use crate::error::ConfigError;
use crate::menu;
use crate::network::{NetworkConfig, apply_network_config, parse_network_value};
use crate::profile::Profile;
use crate::prompt::Prompter;
use crate::system::System;
use crate::target::{DryRunTarget, Installation};
use crate::ui;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

/// Profile path from the arguments, falling back to the user default
///
/// # Errors
///
/// Returns an error if no path was given and no configuration directory exists
#[inline]
pub fn resolve_profile_path(args: &ProfileArgs) -> Result<PathBuf> {
    if let Some(path) = args.profile.clone() {
        return Ok(path);
    }

    Profile::default_path().ok_or_else(|| {
        ConfigError::profile("No profile given and no configuration directory found; use --profile")
            .into()
    })
}

/// Parse the network configuration and render it for display
///
/// # Errors
///
/// Returns an error if:
/// - The profile cannot be loaded or `input` is not valid JSON
/// - The network input has an unknown type or lacks a required address
pub fn show_network(
    system: &dyn System,
    profile: &ProfileArgs,
    input: Option<&str>,
    json: bool,
) -> Result<String> {
    let config = match input {
        Some(raw) => {
            let value: Value = serde_json::from_str(raw)
                .map_err(|e| ConfigError::malformed(format!("--input is not valid JSON: {e}")))?;
            parse_network_value(value)?
        }
        None => {
            let path = resolve_profile_path(profile)?;
            Profile::load_from_file(system, &path)?.network_config()?
        }
    };

    render_network(config.as_ref(), json)
}

fn render_network(config: Option<&NetworkConfig>, json: bool) -> Result<String> {
    match (config, json) {
        (Some(config), true) => Ok(serde_json::to_string_pretty(config)?),
        (None, true) => Ok("null".to_owned()),
        (Some(config), false) => Ok(config.to_string()),
        (None, false) => Ok("No network configuration".to_owned()),
    }
}

/// Interactively configure the network and save it to the profile
///
/// # Errors
///
/// Returns an error if the profile cannot be loaded or saved, or prompting fails
pub fn configure_network(
    system: &dyn System,
    prompter: &dyn Prompter,
    profile_args: &ProfileArgs,
) -> Result<()> {
    let path = resolve_profile_path(profile_args)?;
    let mut profile = Profile::load_or_default(system, &path)?;

    let current = profile.network_config()?;
    let updated = menu::configure_network(prompter, current.as_ref())?;

    if updated == current {
        info!("Network configuration unchanged");
        return Ok(());
    }

    profile.set_network_config(updated.as_ref());
    profile.save(system, &path)?;

    let summary = updated.map_or_else(|| "none".to_owned(), |config| config.to_string());
    ui::print_success(&format!("Saved network configuration: {summary}"));
    Ok(())
}

/// Listing lines for the profile's subvolumes
///
/// # Errors
///
/// Returns an error if the profile cannot be loaded
pub fn list_subvolumes(system: &dyn System, profile_args: &ProfileArgs) -> Result<Vec<String>> {
    let path = resolve_profile_path(profile_args)?;
    let profile = Profile::load_from_file(system, &path)?;
    Ok(profile.subvolumes.display_lines())
}

/// Interactively edit the profile's subvolumes and save the result
///
/// # Errors
///
/// Returns an error if the profile cannot be loaded or saved, or prompting fails
pub fn edit_subvolumes(
    system: &dyn System,
    prompter: &dyn Prompter,
    profile_args: &ProfileArgs,
) -> Result<()> {
    let path = resolve_profile_path(profile_args)?;
    let mut profile = Profile::load_or_default(system, &path)?;

    let before = profile.subvolumes.clone();
    menu::edit_subvolumes(&mut profile.subvolumes, prompter)?;

    if profile.subvolumes == before {
        info!("Subvolumes unchanged");
        return Ok(());
    }

    profile.save(system, &path)?;
    ui::print_success(&format!("Saved {} subvolume(s)", profile.subvolumes.len()));
    Ok(())
}

/// Apply the profile's network configuration to the target
///
/// Returns the planned steps in dry-run mode.
///
/// # Errors
///
/// Returns an error if:
/// - The profile cannot be loaded or its network input is invalid
/// - The target root is not a directory
/// - Any installation step fails
pub fn install(system: &dyn System, args: &InstallArgs) -> Result<Vec<String>> {
    let path = resolve_profile_path(&args.profile)?;
    let profile = Profile::load_from_file(system, &path)?;

    if !profile.subvolumes.is_empty() {
        debug!("Profile defines {} subvolume(s)", profile.subvolumes.len());
    }

    let Some(config) = profile.network_config()? else {
        ui::print_warning("No network configuration in profile, skipping network setup");
        return Ok(Vec::new());
    };

    if args.dry_run {
        let target = DryRunTarget::new();
        apply_network_config(&config, &target)?;
        return Ok(target.steps());
    }

    if !system.is_dir(&args.root) {
        return Err(ConfigError::apply(
            "prepare installation target",
            format!("{} is not a directory", args.root.display()),
        )
        .into());
    }

    info!("Installing network configuration into {}", args.root.display());
    let target = Installation::new(&args.root, system);
    let pb = ui::spinner(format!("Applying network configuration: {config}"));
    let result = apply_network_config(&config, &target)
        .with_context(|| format!("Network setup failed for {}", target.root().display()));
    if let Err(err) = result {
        pb.finish_and_clear();
        return Err(err);
    }

    ui::done_spinner(&pb, &format!("Network configured: {config}"));
    Ok(Vec::new())
}
