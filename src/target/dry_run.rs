//! Target that only records the steps it would perform

use super::InstallTarget;
use crate::error::ConfigError;
use crate::network::NetworkConfig;
use std::cell::RefCell;
use tracing::info;

/// Records installation steps without touching any system
#[derive(Debug, Default)]
pub struct DryRunTarget {
    steps: RefCell<Vec<String>>,
}

impl DryRunTarget {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps recorded so far, in order
    #[must_use]
    #[inline]
    pub fn steps(&self) -> Vec<String> {
        self.steps.borrow().clone()
    }

    fn record(&self, step: String) {
        info!("[dry run] {}", step);
        self.steps.borrow_mut().push(step);
    }
}

impl InstallTarget for DryRunTarget {
    fn copy_install_medium_network_config(&self, enable_services: bool) -> Result<(), ConfigError> {
        self.record(format!(
            "copy install medium network configuration (enable services: {enable_services})"
        ));
        Ok(())
    }

    fn install_package(&self, name: &str) -> Result<(), ConfigError> {
        self.record(format!("install package {name}"));
        Ok(())
    }

    fn enable_service(&self, name: &str) -> Result<(), ConfigError> {
        self.record(format!("enable service {name}"));
        Ok(())
    }

    fn write_interface_config(&self, config: &NetworkConfig) -> Result<(), ConfigError> {
        self.record(format!("write interface configuration ({config})"));
        Ok(())
    }
}
