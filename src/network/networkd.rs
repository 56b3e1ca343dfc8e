//! systemd-networkd unit rendering for manual configurations

use crate::network::record::NetworkConfig;
use core::fmt::Write as _;

/// Directory holding networkd units, relative to a system root
pub const NETWORKD_DIR: &str = "etc/systemd/network";

/// File name of the unit written for `interface`
#[must_use]
#[inline]
pub fn unit_file_name(interface: &str) -> String {
    format!("10-{interface}.network")
}

/// Render the `.network` unit for a manual configuration
#[must_use]
pub fn render_network_unit(config: &NetworkConfig) -> String {
    let mut unit = String::new();
    let iface = config.interface.as_deref().unwrap_or_default();

    let _ = writeln!(unit, "[Match]");
    let _ = writeln!(unit, "Name={iface}");
    let _ = writeln!(unit);
    let _ = writeln!(unit, "[Network]");

    if config.use_dhcp {
        let _ = writeln!(unit, "DHCP=yes");
        return unit;
    }

    if let Some(address) = config.address.as_deref() {
        let _ = writeln!(unit, "Address={address}");
    }
    if let Some(gateway) = config.gateway.as_deref().filter(|g| !g.is_empty()) {
        let _ = writeln!(unit, "Gateway={gateway}");
    }
    for server in &config.dns_servers {
        let _ = writeln!(unit, "DNS={server}");
    }

    unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dhcp_unit() {
        let unit = render_network_unit(&NetworkConfig::manual_dhcp("enp1s0"));
        assert_eq!(unit, "[Match]\nName=enp1s0\n\n[Network]\nDHCP=yes\n");
    }

    #[test]
    fn renders_static_unit_with_dns_in_order() {
        let config = NetworkConfig::manual_static(
            "eth0",
            Some("192.168.1.50/24".to_owned()),
            "192.168.1.1".to_owned(),
            vec!["1.1.1.1".to_owned(), "8.8.8.8".to_owned()],
        );
        assert_eq!(
            render_network_unit(&config),
            "[Match]\nName=eth0\n\n[Network]\nAddress=192.168.1.50/24\nGateway=192.168.1.1\nDNS=1.1.1.1\nDNS=8.8.8.8\n"
        );
    }

    #[test]
    fn omits_empty_gateway() {
        let config = NetworkConfig::manual_static("eth0", Some("10.0.0.2/8".to_owned()), String::new(), Vec::new());
        assert!(!render_network_unit(&config).contains("Gateway="));
        assert_eq!(unit_file_name("eth0"), "10-eth0.network");
    }
}
