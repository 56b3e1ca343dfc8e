//! Mock system implementation for testing

#![expect(clippy::module_name_repetitions)]

use super::{CommandOutput, System};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` keeps files and directories in memory and records every
/// external command instead of running it.
///
/// # Example
/// ```
/// use nicvol::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/etc/hostname", b"archiso").unwrap()
///     .with_dir("/etc/systemd/network").unwrap();
///
/// assert!(system.exists(Path::new("/etc/hostname")));
/// system.run_command("pacstrap", &["/mnt", "networkmanager"]).unwrap();
/// assert_eq!(system.commands(), vec!["pacstrap /mnt networkmanager"]);
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    commands: Vec<String>,
    failing_commands: HashMap<String, i32>,
}

impl MockSystem {
    /// Create a new `MockSystem` with an empty root directory
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
                commands: Vec::new(),
                failing_commands: HashMap::new(),
            })),
        }
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        if let Some(parent) = path_buf.parent() {
            Self::ensure_parent_dirs(&mut state.dirs, parent);
        }

        state.files.insert(path_buf, contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Add a directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Self::ensure_parent_dirs(&mut state.dirs, &path_buf);
        drop(state);
        Ok(self)
    }

    /// Make every invocation of `program` exit with `code` (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_failing_command(self, program: &str, code: i32) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.failing_commands.insert(program.to_owned(), code);
        drop(state);
        Ok(self)
    }

    /// Command lines recorded so far, in execution order
    #[must_use]
    #[inline]
    pub fn commands(&self) -> Vec<String> {
        self.state
            .read()
            .map(|state| state.commands.clone())
            .unwrap_or_default()
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor == Path::new("") {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let bytes = state.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        String::from_utf8(result)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        state.files.insert(path.to_path_buf(), contents.to_vec());
        drop(state);
        Ok(())
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Self::ensure_parent_dirs(&mut state.dirs, path);
        drop(state);
        Ok(())
    }

    #[inline]
    #[expect(clippy::as_conversions, reason = "This is for usize to u64 conversion")]
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let contents = {
            let state = self
                .state
                .read()
                .map_err(|e| io::Error::other(e.to_string()))?;
            state
                .files
                .get(from)
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("Source file not found: {}", from.display()),
                    )
                })?
                .clone()
        };

        let size = contents.len() as u64;
        self.write(to, &contents)?;
        Ok(size)
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.files.contains_key(path) || state.dirs.contains(path))
    }

    #[inline]
    fn is_file(&self, path: &Path) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.files.contains_key(path))
    }

    #[inline]
    fn is_dir(&self, path: &Path) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.dirs.contains(path))
    }

    #[inline]
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Directory not found: {}", path.display()),
            ));
        }

        let mut entries: Vec<PathBuf> = state
            .files
            .keys()
            .chain(state.dirs.iter())
            .filter(|entry| entry.parent() == Some(path) && entry.as_path() != path)
            .cloned()
            .collect();
        drop(state);

        entries.sort();
        Ok(entries)
    }

    #[inline]
    fn run_command(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        let mut line = program.to_owned();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        state.commands.push(line);

        let output = match state.failing_commands.get(program) {
            Some(&code) => CommandOutput {
                code: Some(code),
                stdout: String::new(),
                stderr: format!("{program}: mock failure"),
            },
            None => CommandOutput {
                code: Some(0),
                ..CommandOutput::default()
            },
        };
        drop(state);
        Ok(output)
    }
}
