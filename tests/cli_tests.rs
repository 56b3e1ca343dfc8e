//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn nicvol() -> Command {
    let mut cmd = Command::cargo_bin("nicvol").unwrap();
    cmd.env_remove("NICVOL_PROFILE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_flag() {
    nicvol()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nicvol"));
}

#[test]
fn test_help_flag() {
    nicvol()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Network and subvolume configuration for Linux installers",
        ));
}

#[test]
fn test_show_manual_input() {
    nicvol()
        .args(["network", "show", "--input"])
        .arg(r#"{"type":"manual","dhcp":true,"iface":"eth0"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("iface=eth0, dhcp=auto"));
}

#[test]
fn test_show_json_output() {
    nicvol()
        .args(["network", "show", "--json", "--input", r#""iso""#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "iso""#));
}

#[test]
fn test_show_unrecognized_input() {
    nicvol()
        .args(["network", "show", "--input", r#"{"hostname":"arch"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("No network configuration"));
}

#[test]
fn test_unknown_type_exits_with_config_error() {
    nicvol()
        .args(["network", "show", "--input", r#"{"type":"wifi"}"#])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown nic type: wifi"));
}

#[test]
fn test_missing_address_exits_with_config_error() {
    nicvol()
        .args(["network", "show", "--input"])
        .arg(r#"{"type":"manual","iface":"eth0","gateway":"10.0.0.1"}"#)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires an IP address"));
}

#[test]
fn test_missing_profile_exits_with_profile_error() {
    let temp_dir = TempDir::new().unwrap();
    nicvol()
        .args(["subvolumes", "list", "--profile"])
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Profile not found"));
}

#[test]
fn test_list_subvolumes() {
    let temp_dir = TempDir::new().unwrap();
    let profile = temp_dir.path().join("profile.json");
    fs::write(&profile, r#"{"subvolumes": {"@home": "/home"}}"#).unwrap();

    nicvol()
        .args(["subvolumes", "list", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Subvolume :@home"))
        .stdout(predicate::str::contains("mounted at /home"));
}

#[test]
fn test_install_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let profile = temp_dir.path().join("profile.yaml");
    fs::write(&profile, "nic:\n  NetworkManager: true\n").unwrap();

    nicvol()
        .args(["install", "--dry-run", "--root", "/mnt", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run preview"))
        .stdout(predicate::str::contains("install package networkmanager"))
        .stdout(predicate::str::contains("enable service NetworkManager.service"));
}

#[test]
fn test_install_profile_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let profile = temp_dir.path().join("profile.json");
    fs::write(&profile, r#"{"nic": {"type": "manual", "iface": "eth0"}}"#).unwrap();

    nicvol()
        .env("NICVOL_PROFILE", &profile)
        .args(["install", "--dry-run", "--root", "/mnt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enable service systemd-networkd"));
}
