use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for nicvol
#[derive(Parser, Debug, Clone)]
#[command(name = "nicvol")]
#[command(about = "Network and subvolume configuration for Linux installers")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Whether the command writes machine-readable output to stdout
    #[must_use]
    #[inline]
    pub fn machine_output(&self) -> bool {
        matches!(
            self.command,
            Command::Network {
                action: NetworkCommand::Show { json: true, .. }
            }
        )
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Inspect or edit the network configuration
    Network {
        #[command(subcommand)]
        action: NetworkCommand,
    },

    /// List or edit the btrfs subvolume layout
    Subvolumes {
        #[command(subcommand)]
        action: SubvolumeCommand,
    },

    /// Apply the profile's network configuration to a mounted target
    Install(InstallArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum NetworkCommand {
    /// Parse the network configuration and print the canonical record
    Show {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Raw network input as JSON instead of reading a profile
        #[arg(long, value_name = "JSON")]
        input: Option<String>,

        /// Print the record as JSON in the current input shape
        #[arg(long)]
        json: bool,
    },

    /// Interactively configure the network and save it to the profile
    Configure {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubvolumeCommand {
    /// Print the subvolumes in the profile
    List {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Interactively add, edit and delete subvolumes
    Edit {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InstallArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Mountpoint of the system being installed
    #[arg(long, value_name = "DIR")]
    pub root: PathBuf,

    /// Print the installation steps without executing them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Profile file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, value_name = "PATH", env = "NICVOL_PROFILE")]
    pub profile: Option<PathBuf>,
}
