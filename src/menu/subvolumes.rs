//! Subvolume list editor

use crate::error::ConfigError;
use crate::prompt::Prompter;
use crate::subvolume::{CommitOutcome, EditMode, EditSession, SUBVOLUME_OPTIONS, SubvolumeCollection};
use tracing::{info, warn};

pub const ADD: &str = "Add";
pub const EDIT: &str = "Edit";
pub const DELETE: &str = "Delete";
pub const CANCEL: &str = "Cancel";
pub const SAVE: &str = "Save";
pub const DONE: &str = "Confirm and exit";

/// One user action on the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubvolumeAction {
    Add,
    Edit(String),
    Delete(String),
    Cancel,
}

/// Let the user add, edit and delete subvolumes until they confirm
///
/// # Errors
///
/// Returns an error if:
/// - The prompter fails
pub fn edit_subvolumes(
    collection: &mut SubvolumeCollection,
    prompter: &dyn Prompter,
) -> Result<(), ConfigError> {
    while let Some(action) = choose_action(collection, prompter)? {
        exec_action(collection, action, prompter)?;
    }
    Ok(())
}

/// `None` once the user is done with the list
fn choose_action(
    collection: &SubvolumeCollection,
    prompter: &dyn Prompter,
) -> Result<Option<SubvolumeAction>, ConfigError> {
    // Listing lines are sorted by name; index them the same way.
    let names: Vec<String> = collection.sorted_names().into_iter().map(str::to_owned).collect();
    let mut items = collection.display_lines();
    items.push(ADD.to_owned());
    items.push(DONE.to_owned());

    let Some(index) = prompter.select("Subvolumes", &items, names.len())? else {
        return Ok(None);
    };

    if let Some(name) = names.get(index) {
        let actions = [EDIT, DELETE, CANCEL].map(str::to_owned);
        let action = match prompter.select(&format!("Select an action for '{name}'"), &actions, 0)? {
            Some(0) => SubvolumeAction::Edit(name.clone()),
            Some(1) => SubvolumeAction::Delete(name.clone()),
            _ => SubvolumeAction::Cancel,
        };
        return Ok(Some(action));
    }

    if items.get(index).map(String::as_str) == Some(ADD) {
        return Ok(Some(SubvolumeAction::Add));
    }

    Ok(None)
}

/// Perform one action, prompting for field values as needed
///
/// # Errors
///
/// Returns an error if:
/// - The prompter fails
/// - An edited subvolume does not exist
pub fn exec_action(
    collection: &mut SubvolumeCollection,
    action: SubvolumeAction,
    prompter: &dyn Prompter,
) -> Result<(), ConfigError> {
    let session = match action {
        SubvolumeAction::Cancel => return Ok(()),
        SubvolumeAction::Delete(name) => {
            if collection.delete(&name) {
                info!("Deleted subvolume {}", name);
            }
            return Ok(());
        }
        SubvolumeAction::Add => collection.begin_add(),
        SubvolumeAction::Edit(name) => collection.begin_edit(&name)?,
    };

    let session = fill_session(session, prompter)?;
    finish_session(session, collection, prompter)
}

fn fill_session(mut session: EditSession, prompter: &dyn Prompter) -> Result<EditSession, ConfigError> {
    if session.mode() == EditMode::Add {
        let name = prompter.text("Subvolume name", None)?;
        session.set_name(&name)?;
    }

    let mountpoint = prompter.text("Select a mount point", session.mountpoint())?;
    session.set_mountpoint(Some(mountpoint.trim().to_owned()));

    let preset: Vec<bool> = SUBVOLUME_OPTIONS
        .iter()
        .map(|option| session.options().contains(*option))
        .collect();
    let checked = prompter.multi_select("Select the desired subvolume options", &SUBVOLUME_OPTIONS, &preset)?;

    // Options set outside the menu vocabulary are kept as they are.
    let mut options: Vec<String> = session
        .options()
        .iter()
        .filter(|option| !SUBVOLUME_OPTIONS.contains(&option.as_str()))
        .cloned()
        .collect();
    options.extend(
        checked
            .into_iter()
            .filter_map(|index| SUBVOLUME_OPTIONS.get(index))
            .map(|option| (*option).to_owned()),
    );
    session.set_options(options);

    Ok(session)
}

fn finish_session(
    session: EditSession,
    collection: &mut SubvolumeCollection,
    prompter: &dyn Prompter,
) -> Result<(), ConfigError> {
    let choices = [SAVE, CANCEL].map(str::to_owned);
    if prompter.select("Save this subvolume?", &choices, 0)? != Some(0) {
        session.cancel();
        return Ok(());
    }

    match session.commit(collection) {
        CommitOutcome::Committed { name, replaced } if replaced => info!("Updated subvolume {}", name),
        CommitOutcome::Committed { name, .. } => info!("Added subvolume {}", name),
        CommitOutcome::Skipped => warn!("Subvolume not saved: a name is required"),
    }
    Ok(())
}
