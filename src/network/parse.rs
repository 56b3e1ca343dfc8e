//! Network input parsing
//!
//! Resolution order: an explicit `type` always wins; otherwise the legacy
//! rules below are tried in order and the first match is used.

use crate::error::ConfigError;
use crate::network::input::{NetworkInput, NetworkMapping};
use crate::network::record::{NetworkConfig, NicType};
use serde_json::Value;
use tracing::{debug, warn};

/// A legacy (untyped) mapping heuristic
struct LegacyRule {
    name: &'static str,
    matches: fn(&NetworkMapping) -> bool,
    build: fn(&NetworkMapping) -> NetworkConfig,
}

/// Legacy heuristics in priority order. Saved profiles depend on this order.
const LEGACY_RULES: [LegacyRule; 3] = [
    LegacyRule {
        name: "NetworkManager flag",
        matches: NetworkMapping::network_manager_requested,
        build: |_| NetworkConfig::new(NicType::NetworkManager),
    },
    LegacyRule {
        name: "static ip",
        matches: |mapping| mapping.ip.is_some(),
        build: |mapping| {
            NetworkConfig::manual_static(
                mapping.nic_name().unwrap_or_default(),
                mapping.ip_address().map(str::to_owned),
                mapping.gateway.clone().unwrap_or_default(),
                mapping.dns.clone().unwrap_or_default(),
            )
        },
    },
    LegacyRule {
        name: "interface only",
        matches: |mapping| mapping.nic.is_some(),
        build: |mapping| NetworkConfig::manual_dhcp(mapping.nic_name().unwrap_or_default()),
    },
];

/// Parse network input into a canonical record
///
/// Returns `Ok(None)` when the input is a legacy mapping that none of the
/// heuristics recognize; callers proceed without network setup.
///
/// # Errors
///
/// Returns an error if:
/// - The explicit `type` is not one of `iso`, `nm`, `manual`
/// - A manual configuration without DHCP has static fields but no address
/// - The interface name contains `/` or NUL
#[inline]
pub fn parse_network_config(input: &NetworkInput) -> Result<Option<NetworkConfig>, ConfigError> {
    let mapping = match input {
        NetworkInput::Legacy(_) => {
            debug!("Bare string network input, copying install medium configuration");
            return Ok(Some(NetworkConfig::new(NicType::Iso)));
        }
        NetworkInput::Mapping(mapping) => mapping,
    };

    let config = match mapping.explicit_type() {
        Some(nic_type) => Some(parse_typed(nic_type, mapping)?),
        None => parse_legacy(mapping),
    };

    if let Some(config) = &config {
        config.validate_interface()?;
    }
    Ok(config)
}

/// Parse an untyped JSON value, e.g. from `--input` on the command line
///
/// # Errors
///
/// Returns an error if:
/// - The value is not a string or a mapping with correctly typed keys
/// - [`parse_network_config`] fails
#[inline]
pub fn parse_network_value(value: Value) -> Result<Option<NetworkConfig>, ConfigError> {
    parse_network_config(&NetworkInput::from_value(value)?)
}

fn parse_legacy(mapping: &NetworkMapping) -> Option<NetworkConfig> {
    let Some(rule) = LEGACY_RULES.iter().find(|rule| (rule.matches)(mapping)) else {
        warn!("Network configuration not recognized, skipping network setup");
        return None;
    };

    debug!("Legacy network input matched rule: {}", rule.name);
    Some((rule.build)(mapping))
}

fn parse_typed(nic_type: &str, mapping: &NetworkMapping) -> Result<NetworkConfig, ConfigError> {
    let kind: NicType = nic_type.parse()?;
    debug!("Network input with explicit type: {}", kind);

    if kind != NicType::Manual {
        return Ok(NetworkConfig::new(kind));
    }

    let iface = mapping.iface.clone().unwrap_or_default();

    // No static fields at all falls back to DHCP even when `dhcp` is false.
    if mapping.dhcp_requested() || !mapping.has_static_fields() {
        return Ok(NetworkConfig::manual_dhcp(iface));
    }

    let address = mapping
        .ip_address()
        .filter(|ip| !ip.is_empty())
        .ok_or(ConfigError::MissingRequiredAddress)?
        .to_owned();

    Ok(NetworkConfig::manual_static(
        iface,
        Some(address),
        mapping.gateway.clone().unwrap_or_default(),
        mapping.dns.clone().unwrap_or_default(),
    ))
}
