//! # `nicvol`
//!
//! `nicvol` converts installer network and subvolume configuration from
//! saved profiles, command-line JSON, or interactive menus into validated
//! records, and applies the network configuration to a mounted target.
//!
//! ## Usage
//!
//! ```sh
//! nicvol network show --input '{"type":"manual","iface":"eth0","dhcp":true}'
//! nicvol subvolumes edit --profile profile.json
//! nicvol install --profile profile.json --root /mnt
//! ```

use anyhow::Result;
use clap::Parser as _;
use nicvol::cli::Args;
use nicvol::error::ConfigError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Keep stdout clean when printing JSON
    let log_level = if args.machine_output() {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match nicvol::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<ConfigError>()
                    .map_or(1, ConfigError::exit_code),
            );
        }
    }
}
