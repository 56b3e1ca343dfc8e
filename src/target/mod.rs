//! Installation target abstraction
//!
//! The operations a configuration needs from the system being installed.
//! Every failure is reported as [`ConfigError::Apply`] and is fatal.

pub mod dry_run;
pub mod installation;

pub use dry_run::DryRunTarget;
pub use installation::Installation;

use crate::error::ConfigError;
use crate::network::NetworkConfig;

/// Side-effecting steps performed on the installed system
pub trait InstallTarget {
    /// Replicate the running medium's network configuration, optionally
    /// enabling the services it needs
    fn copy_install_medium_network_config(&self, enable_services: bool) -> Result<(), ConfigError>;

    /// Install a package into the target
    fn install_package(&self, name: &str) -> Result<(), ConfigError>;

    /// Enable a service in the target
    fn enable_service(&self, name: &str) -> Result<(), ConfigError>;

    /// Write the interface configuration for a manual network record
    fn write_interface_config(&self, config: &NetworkConfig) -> Result<(), ConfigError>;
}
