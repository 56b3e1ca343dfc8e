//! System abstraction for filesystem and external command operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing the installation steps to be tested with a mock implementation.

use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Captured result of an external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with status zero
    #[must_use]
    #[inline]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Unified trait for system operations (filesystem + processes)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs` and `std::process`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    // ==================== Filesystem Operations ====================

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating it if it doesn't exist
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy a file from source to destination
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read directory entries, returning paths of all entries
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    // ==================== Process Operations ====================

    /// Run an external program to completion, capturing its output
    fn run_command(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}
