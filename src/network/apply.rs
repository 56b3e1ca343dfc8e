//! Applying a network configuration to the installation target

use crate::error::ConfigError;
use crate::network::record::{NetworkConfig, NicType};
use crate::target::InstallTarget;
use tracing::info;

pub const NETWORK_MANAGER_PACKAGE: &str = "networkmanager";
pub const NETWORK_MANAGER_SERVICE: &str = "NetworkManager.service";
pub const NETWORKD_SERVICE: &str = "systemd-networkd";
pub const RESOLVED_SERVICE: &str = "systemd-resolved";

/// Apply a network configuration to the target system
///
/// Call once per installation. Target failures are returned as-is and are
/// not retried.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration does not validate
/// - The target fails any installation step
#[inline]
pub fn apply_network_config(
    config: &NetworkConfig,
    target: &dyn InstallTarget,
) -> Result<(), ConfigError> {
    config.validate()?;

    match config.kind() {
        NicType::Iso => {
            info!("Copying install medium network configuration");
            target.copy_install_medium_network_config(true)
        }
        NicType::NetworkManager => {
            info!("Configuring NetworkManager");
            target.install_package(NETWORK_MANAGER_PACKAGE)?;
            target.enable_service(NETWORK_MANAGER_SERVICE)
        }
        NicType::Manual => {
            info!("Configuring interface: {}", config);
            target.write_interface_config(config)?;
            target.enable_service(NETWORKD_SERVICE)?;
            target.enable_service(RESOLVED_SERVICE)
        }
    }
}
