//! Network configuration module
//!
//! Reconciles the legacy and current network input shapes into one
//! canonical record, validates it, and applies it to an installation target

pub mod apply;
pub mod input;
pub mod networkd;
pub mod parse;
pub mod record;

pub use apply::apply_network_config;
pub use input::{NetworkInput, NetworkMapping};
pub use parse::{parse_network_config, parse_network_value};
pub use record::{NetworkConfig, NicType};
