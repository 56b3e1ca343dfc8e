//! Installation target rooted at a mounted directory

use super::InstallTarget;
use crate::error::ConfigError;
use crate::network::NetworkConfig;
use crate::network::networkd::{NETWORKD_DIR, render_network_unit, unit_file_name};
use crate::network::apply::{NETWORKD_SERVICE, RESOLVED_SERVICE};
use crate::system::System;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const IWD_DIR: &str = "var/lib/iwd";
const IWD_PACKAGE: &str = "iwd";
const IWD_SERVICE: &str = "iwd";

/// The system being installed, mounted at `root`
///
/// Packages are installed with `pacstrap` and services are enabled through
/// `arch-chroot`, both run via the [`System`] abstraction.
pub struct Installation<'sys> {
    root: PathBuf,
    medium_root: PathBuf,
    system: &'sys dyn System,
}

impl<'sys> Installation<'sys> {
    /// Create a target for the system mounted at `root`
    #[must_use]
    #[inline]
    pub fn new<P: Into<PathBuf>>(root: P, system: &'sys dyn System) -> Self {
        Self {
            root: root.into(),
            medium_root: PathBuf::from("/"),
            system,
        }
    }

    /// Read the install medium's files from `medium_root` instead of `/`
    #[must_use]
    #[inline]
    pub fn with_medium_root<P: Into<PathBuf>>(mut self, medium_root: P) -> Self {
        self.medium_root = medium_root.into();
        self
    }

    #[must_use]
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Copy the regular files of `relative` from the medium into the target
    fn copy_medium_dir(&self, relative: &str) -> Result<usize, ConfigError> {
        const STEP: &str = "copy install medium network configuration";

        let source = self.medium_root.join(relative);
        if !self.system.is_dir(&source) {
            debug!("Nothing to copy from {}", source.display());
            return Ok(0);
        }

        let destination = self.root.join(relative);
        self.system
            .create_dir_all(&destination)
            .map_err(|e| ConfigError::apply(STEP, format!("{}: {e}", destination.display())))?;

        let mut copied = 0;
        let entries = self
            .system
            .read_dir(&source)
            .map_err(|e| ConfigError::apply(STEP, format!("{}: {e}", source.display())))?;

        for entry in entries.iter().filter(|entry| self.system.is_file(entry)) {
            let Some(file_name) = entry.file_name() else {
                continue;
            };
            let to = destination.join(file_name);
            debug!("Copying {} -> {}", entry.display(), to.display());
            self.system
                .copy(entry, &to)
                .map_err(|e| ConfigError::apply(STEP, format!("{}: {e}", entry.display())))?;
            copied += 1;
        }

        Ok(copied)
    }

    fn run(&self, step: &str, program: &str, args: &[&str]) -> Result<(), ConfigError> {
        let output = self
            .system
            .run_command(program, args)
            .map_err(|e| ConfigError::apply(step, format!("could not run {program}: {e}")))?;

        if !output.success() {
            let code = output
                .code
                .map_or_else(|| "signal".to_owned(), |code| code.to_string());
            let mut message = format!("{program} exited with {code}");
            if !output.stderr.trim().is_empty() {
                message.push_str(": ");
                message.push_str(output.stderr.trim());
            }
            return Err(ConfigError::apply(step, message));
        }

        Ok(())
    }
}

impl InstallTarget for Installation<'_> {
    fn copy_install_medium_network_config(&self, enable_services: bool) -> Result<(), ConfigError> {
        let networkd_files = self.copy_medium_dir(NETWORKD_DIR)?;
        let iwd_files = self.copy_medium_dir(IWD_DIR)?;
        info!(
            "Copied {} networkd and {} iwd files from install medium",
            networkd_files, iwd_files
        );

        if !enable_services {
            return Ok(());
        }

        if iwd_files > 0 {
            self.install_package(IWD_PACKAGE)?;
            self.enable_service(IWD_SERVICE)?;
        }

        if networkd_files > 0 {
            self.enable_service(NETWORKD_SERVICE)?;
            self.enable_service(RESOLVED_SERVICE)?;
        }

        Ok(())
    }

    fn install_package(&self, name: &str) -> Result<(), ConfigError> {
        info!("Installing package: {}", name);
        let root = self.root.to_string_lossy();
        self.run(&format!("install package {name}"), "pacstrap", &[&*root, name])
    }

    fn enable_service(&self, name: &str) -> Result<(), ConfigError> {
        info!("Enabling service: {}", name);
        let root = self.root.to_string_lossy();
        self.run(
            &format!("enable service {name}"),
            "arch-chroot",
            &[&*root, "systemctl", "enable", name],
        )
    }

    fn write_interface_config(&self, config: &NetworkConfig) -> Result<(), ConfigError> {
        const STEP: &str = "write interface configuration";

        let iface = config
            .interface
            .as_deref()
            .filter(|iface| !iface.is_empty())
            .ok_or_else(|| ConfigError::apply(STEP, "manual configuration has no interface name"))?;

        let dir = self.root.join(NETWORKD_DIR);
        self.system
            .create_dir_all(&dir)
            .map_err(|e| ConfigError::apply(STEP, format!("{}: {e}", dir.display())))?;

        let path = dir.join(unit_file_name(iface));
        info!("Writing {}", path.display());
        self.system
            .write(&path, render_network_unit(config).as_bytes())
            .map_err(|e| ConfigError::apply(STEP, format!("{}: {e}", path.display())))
    }
}
