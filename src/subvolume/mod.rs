//! Subvolume configuration module
//!
//! A name → record mapping owned by the installation profile, kept in the
//! order the user created it and edited through detached sessions that are
//! committed or discarded whole. Only listings are sorted by name.

pub mod session;

pub use session::{CommitOutcome, EditMode, EditSession};

use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mount options offered when selecting options interactively
pub const SUBVOLUME_OPTIONS: [&str; 2] = ["nodatacow", "compress"];

/// Mount settings of one subvolume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSubvolumeRecord")]
pub struct SubvolumeRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mountpoint: Option<String>,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub options: BTreeSet<String>,
}

/// Profile shapes: a bare mountpoint string or a full mapping
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSubvolumeRecord {
    Mountpoint(String),
    Full {
        #[serde(default)]
        mountpoint: Option<String>,
        #[serde(default)]
        options: BTreeSet<String>,
    },
}

impl From<RawSubvolumeRecord> for SubvolumeRecord {
    fn from(raw: RawSubvolumeRecord) -> Self {
        match raw {
            RawSubvolumeRecord::Mountpoint(mountpoint) => Self::new(Some(mountpoint), Vec::<String>::new()),
            RawSubvolumeRecord::Full {
                mountpoint,
                options,
            } => Self::new(mountpoint, options),
        }
    }
}

impl SubvolumeRecord {
    /// Create a record; an empty mountpoint counts as unset
    #[must_use]
    #[inline]
    pub fn new<I, S>(mountpoint: Option<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mountpoint: mountpoint.filter(|m| !m.is_empty()),
            options: options
                .into_iter()
                .map(Into::<String>::into)
                .filter(|o| !o.is_empty())
                .collect(),
        }
    }

    /// A record with neither mountpoint nor options has no effect
    #[must_use]
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.mountpoint.is_none() && self.options.is_empty()
    }
}

/// Subvolumes keyed by unique name, iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubvolumeCollection {
    entries: IndexMap<String, SubvolumeRecord>,
}

impl SubvolumeCollection {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<&SubvolumeRecord> {
        self.entries.get(name)
    }

    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubvolumeRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Start a session for a new subvolume
    #[must_use]
    #[inline]
    pub fn begin_add(&self) -> EditSession {
        EditSession::for_add()
    }

    /// Start a session seeded from the existing subvolume `name`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No subvolume named `name` exists
    #[inline]
    pub fn begin_edit(&self, name: &str) -> Result<EditSession, ConfigError> {
        let record = self
            .entries
            .get(name)
            .ok_or_else(|| ConfigError::subvolume(format!("No subvolume named '{name}'")))?;
        Ok(EditSession::for_edit(name, record))
    }

    /// Add a subvolume, replacing any existing one with the same name
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty
    pub fn add<I, S>(&mut self, name: &str, mountpoint: Option<String>, options: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut session = self.begin_add();
        session.set_name(name)?;
        session.set_mountpoint(mountpoint);
        session.set_options(options);

        match session.commit(self) {
            CommitOutcome::Committed { .. } => Ok(()),
            CommitOutcome::Skipped => Err(ConfigError::subvolume("Subvolume name cannot be empty")),
        }
    }

    /// Replace the mountpoint and options of an existing subvolume
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No subvolume named `name` exists
    pub fn edit<I, S>(&mut self, name: &str, mountpoint: Option<String>, options: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut session = self.begin_edit(name)?;
        session.set_mountpoint(mountpoint);
        session.set_options(options);
        session.commit(self);
        Ok(())
    }

    /// Remove a subvolume; unknown names are ignored
    #[inline]
    pub fn delete(&mut self, name: &str) -> bool {
        self.entries.shift_remove(name).is_some()
    }

    /// Names sorted for display
    #[must_use]
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Replace the entry for `name` in one step, returning whether it existed.
    /// An existing entry keeps its position.
    pub(crate) fn replace(&mut self, name: String, record: SubvolumeRecord) -> bool {
        self.entries.insert(name, record).is_some()
    }

    /// One listing line per subvolume, in name order
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        let mut entries: Vec<(&str, &SubvolumeRecord)> = self.iter().collect();
        entries.sort_unstable_by_key(|(name, _)| *name);

        entries
            .into_iter()
            .map(|(name, record)| {
                let mut line = format!(" Subvolume :{name:16}");
                match record.mountpoint.as_deref() {
                    Some(mountpoint) => line.push_str(&format!(" mounted at {mountpoint:16}")),
                    None => line.push_str(&" ".repeat(28)),
                }
                if !record.options.is_empty() {
                    let options: Vec<&str> = record.options.iter().map(String::as_str).collect();
                    line.push_str(&format!(" with option {}", options.join(", ")));
                }
                line
            })
            .collect()
    }
}
