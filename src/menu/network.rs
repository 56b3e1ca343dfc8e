//! Interactive network configuration

use crate::error::ConfigError;
use crate::network::{NetworkConfig, NicType};
use crate::prompt::Prompter;
use tracing::warn;

/// Ask the user how the installed system should be networked
///
/// Returns `current` unchanged when the user backs out of the first menu.
///
/// # Errors
///
/// Returns an error if:
/// - The prompter fails
pub fn configure_network(
    prompter: &dyn Prompter,
    current: Option<&NetworkConfig>,
) -> Result<Option<NetworkConfig>, ConfigError> {
    let items: Vec<String> = NicType::ALL
        .iter()
        .map(|kind| kind.display_name().to_owned())
        .collect();
    let default = current
        .and_then(|config| NicType::ALL.iter().position(|kind| *kind == config.kind()))
        .unwrap_or(0);

    let Some(index) = prompter.select("Network configuration", &items, default)? else {
        return Ok(current.cloned());
    };

    let kind = NicType::ALL.get(index).copied().unwrap_or(NicType::Iso);
    if kind != NicType::Manual {
        return Ok(Some(NetworkConfig::new(kind)));
    }

    let mut config = current
        .filter(|config| config.is_manual())
        .cloned()
        .unwrap_or_else(|| NetworkConfig::new(NicType::Manual));

    loop {
        let iface = prompter.text("Interface name", config.interface.as_deref())?;
        let iface = iface.trim();
        if iface.is_empty() {
            warn!("An interface name is required for manual configuration");
            continue;
        }
        config.interface = Some(iface.to_owned());
        match config.validate_interface() {
            Ok(()) => break,
            Err(err) => warn!("{}", err),
        }
    }

    config.use_dhcp = prompter.confirm("Configure the interface with DHCP?", config.use_dhcp)?;

    if config.use_dhcp {
        config.address = None;
        config.gateway = None;
        config.dns_servers.clear();
        return Ok(Some(config));
    }

    loop {
        let address = prompter.text(
            "IP address with prefix (e.g. 192.168.0.5/24)",
            config.address.as_deref(),
        )?;
        config.address = Some(address.trim().to_owned()).filter(|a| !a.is_empty());
        match config.validate() {
            Ok(()) => break,
            Err(err) => warn!("{}", err),
        }
    }

    let gateway = prompter.text("Gateway address (blank for none)", config.gateway.as_deref())?;
    config.gateway = Some(gateway.trim().to_owned());

    let current_dns = config.dns_servers.join(" ");
    let dns = prompter.text("DNS servers, separated by spaces or commas", Some(&current_dns))?;
    config.dns_servers = dns
        .split([' ', ','])
        .filter(|server| !server.is_empty())
        .map(str::to_owned)
        .collect();

    Ok(Some(config))
}
