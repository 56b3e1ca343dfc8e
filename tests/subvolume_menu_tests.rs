//! Interactive subvolume editing driven by scripted answers

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use nicvol::menu::subvolumes::{ADD, CANCEL, DELETE, DONE, EDIT, SAVE};
    use nicvol::menu::{SubvolumeAction, edit_subvolumes, exec_action};
    use nicvol::prompt::{Answer, ScriptedPrompter};
    use nicvol::subvolume::SubvolumeCollection;

    fn with_root() -> SubvolumeCollection {
        let mut subvolumes = SubvolumeCollection::new();
        subvolumes.add("root", Some("/".to_owned()), ["compress"]).unwrap();
        subvolumes
    }

    #[test]
    fn add_prompts_name_mountpoint_and_options() {
        let mut subvolumes = SubvolumeCollection::new();
        let prompter = ScriptedPrompter::new([
            Answer::choose(ADD),
            Answer::text("@home"),
            Answer::text("/home"),
            Answer::check(&["compress"]),
            Answer::choose(SAVE),
            Answer::choose(DONE),
        ]);

        edit_subvolumes(&mut subvolumes, &prompter).unwrap();

        let record = subvolumes.get("@home").unwrap();
        assert_eq!(record.mountpoint.as_deref(), Some("/home"));
        assert!(record.options.contains("compress"));
        assert_eq!(prompter.remaining(), 0);
        assert_eq!(
            prompter.asked()[1..4],
            [
                "Subvolume name",
                "Select a mount point",
                "Select the desired subvolume options"
            ]
        );
    }

    #[test]
    fn edit_changes_mountpoint_without_asking_for_name() {
        let mut subvolumes = with_root();
        let line = subvolumes.display_lines()[0].clone();
        let prompter = ScriptedPrompter::new([
            Answer::Choose(line),
            Answer::choose(EDIT),
            Answer::text("/mnt/root"),
            Answer::check(&["compress"]),
            Answer::choose(SAVE),
            Answer::choose(DONE),
        ]);

        edit_subvolumes(&mut subvolumes, &prompter).unwrap();

        assert_eq!(subvolumes.len(), 1);
        assert_eq!(
            subvolumes.get("root").unwrap().mountpoint.as_deref(),
            Some("/mnt/root")
        );
        assert!(!prompter.asked().iter().any(|p| p == "Subvolume name"));
    }

    #[test]
    fn cancel_discards_scratch_record() {
        let mut subvolumes = with_root();
        let before = subvolumes.clone();
        let prompter = ScriptedPrompter::new([
            Answer::text("/elsewhere"),
            Answer::check(&[]),
            Answer::choose(CANCEL),
        ]);

        exec_action(&mut subvolumes, SubvolumeAction::Edit("root".to_owned()), &prompter).unwrap();

        assert_eq!(subvolumes, before);
    }

    #[test]
    fn delete_removes_entry_immediately() {
        let mut subvolumes = with_root();
        let line = subvolumes.display_lines()[0].clone();
        let prompter = ScriptedPrompter::new([
            Answer::Choose(line),
            Answer::choose(DELETE),
            Answer::Escape,
        ]);

        edit_subvolumes(&mut subvolumes, &prompter).unwrap();

        assert!(subvolumes.is_empty());
    }

    #[test]
    fn sorted_listing_selects_matching_entry() {
        let mut subvolumes = with_root();
        subvolumes.add("home", Some("/home".to_owned()), Vec::<String>::new()).unwrap();
        let home_line = subvolumes.display_lines()[0].clone();
        assert!(home_line.contains("home"));

        let prompter = ScriptedPrompter::new([
            Answer::Choose(home_line),
            Answer::choose(DELETE),
            Answer::Escape,
        ]);

        edit_subvolumes(&mut subvolumes, &prompter).unwrap();

        assert!(!subvolumes.contains("home"));
        assert!(subvolumes.contains("root"));
    }

    #[test]
    fn delete_unknown_is_noop() {
        let mut subvolumes = with_root();
        let prompter = ScriptedPrompter::new([]);

        exec_action(&mut subvolumes, SubvolumeAction::Delete("@srv".to_owned()), &prompter).unwrap();

        assert_eq!(subvolumes, with_root());
    }

    #[test]
    fn add_without_name_is_not_merged() {
        let mut subvolumes = SubvolumeCollection::new();
        let prompter = ScriptedPrompter::new([
            Answer::text(""),
            Answer::text("/srv"),
            Answer::check(&["nodatacow"]),
            Answer::choose(SAVE),
        ]);

        exec_action(&mut subvolumes, SubvolumeAction::Add, &prompter).unwrap();

        assert!(subvolumes.is_empty());
    }

    #[test]
    fn add_with_existing_name_overwrites() {
        let mut subvolumes = with_root();
        let prompter = ScriptedPrompter::new([
            Answer::text("root"),
            Answer::text(""),
            Answer::check(&["nodatacow"]),
            Answer::choose(SAVE),
        ]);

        exec_action(&mut subvolumes, SubvolumeAction::Add, &prompter).unwrap();

        let record = subvolumes.get("root").unwrap();
        assert_eq!(subvolumes.len(), 1);
        assert_eq!(record.mountpoint, None);
        assert_eq!(record.options.iter().collect::<Vec<_>>(), ["nodatacow"]);
    }

    #[test]
    fn edit_keeps_options_outside_menu_vocabulary() {
        let mut subvolumes = SubvolumeCollection::new();
        subvolumes
            .add("@", Some("/".to_owned()), ["compress=zstd:3", "compress"])
            .unwrap();
        let prompter = ScriptedPrompter::new([
            Answer::text("/"),
            Answer::check(&["nodatacow"]),
            Answer::choose(SAVE),
        ]);

        exec_action(&mut subvolumes, SubvolumeAction::Edit("@".to_owned()), &prompter).unwrap();

        let options: Vec<&String> = subvolumes.get("@").unwrap().options.iter().collect();
        assert_eq!(options, ["compress=zstd:3", "nodatacow"]);
    }

    #[test]
    fn exhausted_script_is_prompt_error() {
        let mut subvolumes = SubvolumeCollection::new();
        let prompter = ScriptedPrompter::new([Answer::choose(ADD)]);

        let err = edit_subvolumes(&mut subvolumes, &prompter).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(subvolumes.is_empty());
    }
}
