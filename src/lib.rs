//! `nicvol` - Network and subvolume configuration for Linux installers
//!
//! This library turns user-supplied or persisted configuration (command-line
//! JSON, saved profiles, or interactive menu input) into validated network
//! and subvolume records, and applies the network configuration to a
//! mounted installation target.

pub mod cli;
pub mod error;
pub mod menu;
pub mod network;
pub mod profile;
pub mod prompt;
pub mod subvolume;
pub mod system;
pub mod target;
pub mod ui;

use anyhow::Result;
use cli::{Args, Command, NetworkCommand, SubvolumeCommand, commands};
use prompt::TerminalPrompter;
use system::RealSystem;

/// Main entry point for the nicvol library
///
/// # Errors
///
/// Returns an error if the selected command fails
pub fn run(args: Args) -> Result<()> {
    let system = RealSystem::new();

    match args.command {
        Command::Network {
            action: NetworkCommand::Show { profile, input, json },
        } => {
            let rendered = commands::show_network(&system, &profile, input.as_deref(), json)?;
            // Output to stdout (not using logging)
            println!("{rendered}");
        }
        Command::Network {
            action: NetworkCommand::Configure { profile },
        } => commands::configure_network(&system, &TerminalPrompter::new(), &profile)?,
        Command::Subvolumes {
            action: SubvolumeCommand::List { profile },
        } => {
            let lines = commands::list_subvolumes(&system, &profile)?;
            if lines.is_empty() {
                println!("No subvolumes configured");
            }
            for line in lines {
                println!("{line}");
            }
        }
        Command::Subvolumes {
            action: SubvolumeCommand::Edit { profile },
        } => commands::edit_subvolumes(&system, &TerminalPrompter::new(), &profile)?,
        Command::Install(install_args) => {
            let steps = commands::install(&system, &install_args)?;
            if install_args.dry_run {
                println!("Dry run preview - no changes made:");
                for step in steps {
                    println!("  - {step}");
                }
            }
        }
    }

    Ok(())
}
