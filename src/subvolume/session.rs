//! Two-phase editing of a single subvolume
//!
//! A session holds a detached scratch record. Committing replaces the
//! collection entry in one step; cancelling drops the scratch record without
//! touching the collection.

use super::{SubvolumeCollection, SubvolumeRecord};
use crate::error::ConfigError;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Add,
    /// Name is fixed; only mountpoint and options change
    Edit,
}

/// Result of committing a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed { name: String, replaced: bool },
    /// The scratch record had no name, so nothing was merged
    Skipped,
}

/// Scratch copy of one subvolume being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    mode: EditMode,
    name: String,
    mountpoint: Option<String>,
    options: BTreeSet<String>,
}

impl EditSession {
    pub(crate) const fn for_add() -> Self {
        Self {
            mode: EditMode::Add,
            name: String::new(),
            mountpoint: None,
            options: BTreeSet::new(),
        }
    }

    pub(crate) fn for_edit(name: &str, record: &SubvolumeRecord) -> Self {
        Self {
            mode: EditMode::Edit,
            name: name.to_owned(),
            mountpoint: record.mountpoint.clone(),
            options: record.options.clone(),
        }
    }

    #[must_use]
    #[inline]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn mountpoint(&self) -> Option<&str> {
        self.mountpoint.as_deref()
    }

    #[must_use]
    #[inline]
    pub const fn options(&self) -> &BTreeSet<String> {
        &self.options
    }

    /// Set the subvolume name
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The session edits an existing subvolume, whose name is immutable
    #[inline]
    pub fn set_name(&mut self, name: &str) -> Result<(), ConfigError> {
        if self.mode == EditMode::Edit {
            return Err(ConfigError::subvolume(format!(
                "Subvolume '{}' cannot be renamed",
                self.name
            )));
        }
        name.trim().clone_into(&mut self.name);
        Ok(())
    }

    /// Set the mountpoint; empty counts as unset
    #[inline]
    pub fn set_mountpoint(&mut self, mountpoint: Option<String>) {
        self.mountpoint = mountpoint.filter(|m| !m.is_empty());
    }

    #[inline]
    pub fn set_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options
            .into_iter()
            .map(Into::<String>::into)
            .filter(|o| !o.is_empty())
            .collect();
    }

    /// Merge the scratch record into `collection`
    ///
    /// An existing entry with the same name is replaced. A session without a
    /// name leaves the collection unchanged.
    pub fn commit(self, collection: &mut SubvolumeCollection) -> CommitOutcome {
        if self.name.is_empty() {
            debug!("Discarding subvolume without a name");
            return CommitOutcome::Skipped;
        }

        let record = SubvolumeRecord {
            mountpoint: self.mountpoint,
            options: self.options,
        };
        let replaced = collection.replace(self.name.clone(), record);
        debug!("Committed subvolume {} (replaced: {})", self.name, replaced);

        CommitOutcome::Committed {
            name: self.name,
            replaced,
        }
    }

    /// Discard the scratch record
    #[inline]
    pub fn cancel(self) {
        debug!("Discarding changes to subvolume {:?}", self.name);
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn cancel_leaves_collection_untouched() {
        let mut subvolumes = SubvolumeCollection::new();
        subvolumes.add("@", Some("/".to_owned()), ["compress"]).unwrap();
        let before = subvolumes.clone();

        let mut session = subvolumes.begin_edit("@").unwrap();
        session.set_mountpoint(Some("/mnt".to_owned()));
        session.set_options(Vec::<String>::new());
        session.cancel();

        assert_eq!(subvolumes, before);
    }

    #[test]
    fn edit_session_is_seeded_and_name_is_locked() {
        let mut subvolumes = SubvolumeCollection::new();
        subvolumes.add("@log", Some("/var/log".to_owned()), ["nodatacow"]).unwrap();

        let mut session = subvolumes.begin_edit("@log").unwrap();
        assert_eq!(session.mode(), EditMode::Edit);
        assert_eq!(session.mountpoint(), Some("/var/log"));
        assert!(session.options().contains("nodatacow"));
        assert!(session.set_name("@logs").is_err());

        let outcome = session.commit(&mut subvolumes);
        assert_eq!(
            outcome,
            CommitOutcome::Committed {
                name: "@log".to_owned(),
                replaced: true
            }
        );
        assert!(!subvolumes.contains("@logs"));
    }

    #[test]
    fn unnamed_add_session_is_skipped() {
        let mut subvolumes = SubvolumeCollection::new();
        let mut session = subvolumes.begin_add();
        session.set_mountpoint(Some("/srv".to_owned()));
        session.set_name("   ").unwrap();

        assert_eq!(session.commit(&mut subvolumes), CommitOutcome::Skipped);
        assert!(subvolumes.is_empty());
    }
}
