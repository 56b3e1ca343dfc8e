//! Command-line interface module
//!
//! Handles argument parsing and command execution

pub mod args;
pub mod commands;

pub use args::*;
