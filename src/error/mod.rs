//! Error handling module
//!
//! Defines the configuration error taxonomy and its exit codes

pub mod types;

pub use types::*;
