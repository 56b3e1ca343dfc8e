//! Network input parsing across the three input generations

use nicvol::error::ConfigError;
use nicvol::network::{NetworkConfig, NetworkInput, NicType, parse_network_config, parse_network_value};
use serde_json::json;

#[test]
fn test_bare_strings_copy_iso_config() {
    for marker in ["", "iso", "copy network configuration"] {
        let config = parse_network_value(json!(marker)).unwrap().unwrap();
        assert_eq!(config.kind(), NicType::Iso);
        assert!(config.is_iso());
    }
}

#[test]
fn test_legacy_network_manager_flag() {
    let config = parse_network_value(json!({"NetworkManager": true}))
        .unwrap()
        .unwrap();
    assert!(config.is_network_manager());
}

#[test]
fn test_legacy_ip_is_static_manual() {
    let config = parse_network_value(json!({
        "nic": "enp0s3",
        "ip": "10.1.1.5/16",
        "gateway": "10.1.0.1",
        "dns": ["10.1.0.1", "9.9.9.9"]
    }))
    .unwrap()
    .unwrap();

    assert_eq!(
        config,
        NetworkConfig::manual_static(
            "enp0s3",
            Some("10.1.1.5/16".to_owned()),
            "10.1.0.1".to_owned(),
            vec!["10.1.0.1".to_owned(), "9.9.9.9".to_owned()],
        )
    );
}

#[test]
fn test_legacy_nic_only_is_dhcp_manual() {
    let config = parse_network_value(json!({"nic": "wlan0"})).unwrap().unwrap();
    assert!(config.is_manual());
    assert!(config.use_dhcp);
    assert_eq!(config.interface.as_deref(), Some("wlan0"));
}

#[test]
fn test_legacy_null_ip_is_still_static() {
    let config = parse_network_value(json!({"nic": "eth0", "ip": null}))
        .unwrap()
        .unwrap();

    assert!(config.is_manual());
    assert!(!config.use_dhcp);
    assert_eq!(config.interface.as_deref(), Some("eth0"));
    assert_eq!(config.address, None);
    assert_eq!(config.validate(), Err(ConfigError::MissingRequiredAddress));
}

#[test]
fn test_legacy_null_nic_is_dhcp_manual() {
    let config = parse_network_value(json!({"nic": null})).unwrap().unwrap();
    assert_eq!(config, NetworkConfig::manual_dhcp(""));
}

#[test]
fn test_legacy_unrecognized_is_absent() {
    assert_eq!(parse_network_value(json!({})).unwrap(), None);
    assert_eq!(parse_network_value(json!({"gateway": "10.0.0.1"})).unwrap(), None);
}

#[test]
fn test_manual_dhcp_ignores_static_fields() {
    let config = parse_network_value(json!({
        "type": "manual",
        "iface": "eth0",
        "dhcp": true,
        "ip": "192.168.1.50/24",
        "gateway": "192.168.1.1",
        "dns": ["1.1.1.1"]
    }))
    .unwrap()
    .unwrap();

    assert_eq!(config, NetworkConfig::manual_dhcp("eth0"));
}

#[test]
fn test_manual_without_static_fields_falls_back_to_dhcp() {
    for input in [
        json!({"type": "manual", "iface": "eth0"}),
        json!({"type": "manual", "iface": "eth0", "dhcp": false}),
    ] {
        let config = parse_network_value(input).unwrap().unwrap();
        assert!(config.use_dhcp);
        assert_eq!(config.address, None);
    }
}

#[test]
fn test_manual_missing_address_is_fatal() {
    for input in [
        json!({"type": "manual", "iface": "eth0", "gateway": "192.168.1.1"}),
        json!({"type": "manual", "iface": "eth0", "dhcp": false, "dns": ["1.1.1.1"]}),
    ] {
        let err = parse_network_value(input).unwrap_err();
        assert_eq!(err, ConfigError::MissingRequiredAddress);
        assert_eq!(err.exit_code(), 1);
    }
}

#[test]
fn test_unknown_type_is_fatal() {
    for nic_type in ["wifi", "ISO", "Manual", "networkmanager"] {
        let err = parse_network_value(json!({"type": nic_type})).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownType {
                value: nic_type.to_owned(),
                expected: vec!["iso".to_owned(), "nm".to_owned(), "manual".to_owned()],
            }
        );
    }
}

#[test]
fn test_explicit_non_manual_types_are_bare() {
    let config = parse_network_value(json!({"type": "nm", "iface": "eth0", "ip": "10.0.0.2/8"}))
        .unwrap()
        .unwrap();
    assert_eq!(config, NetworkConfig::new(NicType::NetworkManager));
}

#[test]
fn test_static_manual_scenario() {
    let config = parse_network_value(json!({
        "type": "manual",
        "iface": "eth0",
        "ip": "192.168.1.50/24",
        "gateway": "192.168.1.1",
        "dns": ["1.1.1.1"]
    }))
    .unwrap()
    .unwrap();

    assert_eq!(config.kind(), NicType::Manual);
    assert_eq!(config.interface.as_deref(), Some("eth0"));
    assert_eq!(config.address.as_deref(), Some("192.168.1.50/24"));
    assert!(!config.use_dhcp);
    assert_eq!(config.gateway.as_deref(), Some("192.168.1.1"));
    assert_eq!(config.dns_servers, vec!["1.1.1.1".to_owned()]);
}

#[test]
fn test_dhcp_manual_scenario() {
    let config = parse_network_value(json!({"type": "manual", "dhcp": true, "iface": "eth0"}))
        .unwrap()
        .unwrap();

    assert_eq!(config.kind(), NicType::Manual);
    assert_eq!(config.interface.as_deref(), Some("eth0"));
    assert!(config.use_dhcp);
}

#[test]
fn test_static_record_round_trips_through_current_shape() {
    let original = NetworkConfig::manual_static(
        "eth1",
        Some("172.16.3.96/23".to_owned()),
        "172.16.2.1".to_owned(),
        vec!["172.16.2.1".to_owned(), "8.8.8.8".to_owned()],
    );

    let serialized = serde_json::to_value(&original).unwrap();
    assert_eq!(serialized["type"], "manual");
    assert_eq!(serialized["dhcp"], false);

    let reparsed = parse_network_value(serialized).unwrap().unwrap();
    assert_eq!(reparsed, original);

    let input = NetworkInput::from(original.to_input());
    assert_eq!(parse_network_config(&input).unwrap(), Some(original));
}

#[test]
fn test_path_like_interface_is_rejected() {
    for input in [
        json!({"type": "manual", "iface": "../etc", "dhcp": true}),
        json!({"nic": "eth0/../../x"}),
        json!({"nic": "eth\0", "ip": "10.0.0.2/24"}),
    ] {
        let err = parse_network_value(input).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInterface { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
