//! Canonical network configuration record

use core::fmt;
use core::str::FromStr;

use crate::error::ConfigError;
use crate::network::input::NetworkMapping;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// How the installed system gets its network configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NicType {
    /// Replicate the running install medium's configuration
    #[serde(rename = "iso")]
    Iso,
    /// Install and enable NetworkManager
    #[serde(rename = "nm")]
    NetworkManager,
    /// Write an explicit interface configuration
    #[serde(rename = "manual")]
    Manual,
}

impl NicType {
    /// Every kind, in the order they are offered to the user
    pub const ALL: [Self; 3] = [Self::Iso, Self::NetworkManager, Self::Manual];

    /// String value used in profiles
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::NetworkManager => "nm",
            Self::Manual => "manual",
        }
    }

    /// Human-readable label shown in menus
    #[must_use]
    #[inline]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Iso => "Copy ISO network configuration to installation",
            Self::NetworkManager => "Use NetworkManager",
            Self::Manual => "Manual configuration",
        }
    }
}

impl fmt::Display for NicType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NicType {
    type Err = ConfigError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                ConfigError::unknown_type(s, &expected)
            })
    }
}

/// One network configuration, per interface or mode
///
/// The kind is fixed at construction. The remaining fields only matter to
/// the installer when the kind is [`NicType::Manual`]; they may be edited one
/// at a time and are checked by [`NetworkConfig::validate`] before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    kind: NicType,
    pub interface: Option<String>,
    pub address: Option<String>,
    pub use_dhcp: bool,
    pub gateway: Option<String>,
    pub dns_servers: Vec<String>,
}

impl NetworkConfig {
    /// Create a bare record of the given kind
    #[must_use]
    #[inline]
    pub const fn new(kind: NicType) -> Self {
        Self {
            kind,
            interface: None,
            address: None,
            use_dhcp: true,
            gateway: None,
            dns_servers: Vec::new(),
        }
    }

    /// Manual configuration of `interface` via DHCP
    #[must_use]
    #[inline]
    pub fn manual_dhcp<S: Into<String>>(interface: S) -> Self {
        Self {
            interface: Some(interface.into()),
            ..Self::new(NicType::Manual)
        }
    }

    /// Manual configuration of `interface` with a static address
    #[must_use]
    #[inline]
    pub fn manual_static<S: Into<String>>(
        interface: S,
        address: Option<String>,
        gateway: String,
        dns_servers: Vec<String>,
    ) -> Self {
        Self {
            kind: NicType::Manual,
            interface: Some(interface.into()),
            address,
            use_dhcp: false,
            gateway: Some(gateway),
            dns_servers,
        }
    }

    #[must_use]
    #[inline]
    pub const fn kind(&self) -> NicType {
        self.kind
    }

    #[must_use]
    #[inline]
    pub fn is_iso(&self) -> bool {
        self.kind == NicType::Iso
    }

    #[must_use]
    #[inline]
    pub fn is_network_manager(&self) -> bool {
        self.kind == NicType::NetworkManager
    }

    #[must_use]
    #[inline]
    pub fn is_manual(&self) -> bool {
        self.kind == NicType::Manual
    }

    /// Check that the record can be applied
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record is manual, DHCP is disabled and no address is set
    /// - The interface name contains `/` or NUL
    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_address = self.address.as_deref().is_some_and(|a| !a.trim().is_empty());
        if self.is_manual() && !self.use_dhcp && !has_address {
            return Err(ConfigError::MissingRequiredAddress);
        }
        self.validate_interface()
    }

    /// Check that the interface name is usable in a unit file name
    ///
    /// # Errors
    ///
    /// Returns an error if the interface name contains `/` or NUL
    #[inline]
    pub fn validate_interface(&self) -> Result<(), ConfigError> {
        match self.interface.as_deref() {
            Some(name) if name.contains(['/', '\0']) => Err(ConfigError::invalid_interface(name)),
            _ => Ok(()),
        }
    }

    /// Convert back to the current, `type`-keyed input shape
    #[must_use]
    pub fn to_input(&self) -> NetworkMapping {
        let mut mapping = NetworkMapping {
            nic_type: Some(self.kind.as_str().to_owned()),
            ..NetworkMapping::default()
        };

        if !self.is_manual() {
            return mapping;
        }

        mapping.iface = self.interface.clone();
        mapping.dhcp = Some(Value::Bool(self.use_dhcp));
        if !self.use_dhcp {
            mapping.ip = self.address.clone().map(Some);
            mapping.gateway = self.gateway.clone();
            mapping.dns = Some(self.dns_servers.clone());
        }

        mapping
    }
}

impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iface = self.interface.as_deref().unwrap_or_default();
        match self.kind {
            NicType::Iso => f.write_str("Copy ISO configuration"),
            NicType::NetworkManager => f.write_str("Use NetworkManager"),
            NicType::Manual if self.use_dhcp => write!(f, "iface={iface}, dhcp=auto"),
            NicType::Manual => write!(
                f,
                "iface={iface}, ip={}, dhcp=staticIp, gateway={}, dns=[{}]",
                self.address.as_deref().unwrap_or_default(),
                self.gateway.as_deref().unwrap_or_default(),
                self.dns_servers.join(", ")
            ),
        }
    }
}

impl Serialize for NetworkConfig {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_input().serialize(serializer)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn nic_type_parse_is_case_sensitive() {
        assert_eq!("nm".parse::<NicType>().unwrap(), NicType::NetworkManager);
        let err = "Manual".parse::<NicType>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::unknown_type("Manual", &["iso", "nm", "manual"])
        );
    }

    #[test]
    fn validate_requires_address_without_dhcp() {
        let mut config = NetworkConfig::manual_dhcp("eth0");
        config.validate().unwrap();

        config.use_dhcp = false;
        assert_eq!(config.validate(), Err(ConfigError::MissingRequiredAddress));

        config.address = Some("10.0.0.2/24".to_owned());
        config.validate().unwrap();
    }

    #[test]
    fn validate_rejects_path_like_interface() {
        let config = NetworkConfig::manual_dhcp("../../etc/passwd");
        assert_eq!(
            config.validate(),
            Err(ConfigError::invalid_interface("../../etc/passwd"))
        );
        assert!(NetworkConfig::manual_dhcp("eth\0").validate().is_err());
        NetworkConfig::manual_dhcp("enp0s31f6").validate().unwrap();
    }

    #[test]
    fn non_manual_kinds_ignore_manual_fields() {
        let mut config = NetworkConfig::new(NicType::Iso);
        config.use_dhcp = false;
        config.validate().unwrap();
        assert_eq!(config.to_input(), NetworkMapping {
            nic_type: Some("iso".to_owned()),
            ..NetworkMapping::default()
        });
    }

    #[test]
    fn display_matches_kind() {
        assert_eq!(NetworkConfig::new(NicType::Iso).to_string(), "Copy ISO configuration");
        assert_eq!(
            NetworkConfig::manual_dhcp("eth0").to_string(),
            "iface=eth0, dhcp=auto"
        );
        let config = NetworkConfig::manual_static(
            "eth0",
            Some("10.0.0.2/24".to_owned()),
            "10.0.0.1".to_owned(),
            vec!["1.1.1.1".to_owned(), "9.9.9.9".to_owned()],
        );
        assert_eq!(
            config.to_string(),
            "iface=eth0, ip=10.0.0.2/24, dhcp=staticIp, gateway=10.0.0.1, dns=[1.1.1.1, 9.9.9.9]"
        );
    }
}
