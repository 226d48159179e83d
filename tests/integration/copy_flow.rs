use super::IntegrationHarness;
use std::fs;
use stemtree::history::EventKind;

#[test]
fn session_copies_tree_to_each_destination() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let source = harness.scratch_join("lesson");
    fs::create_dir_all(source.join(".vscode")).unwrap();
    fs::create_dir_all(source.join("assets/empty")).unwrap();
    fs::write(source.join("main.cpp"), "int main() {}\n").unwrap();
    fs::write(source.join(".vscode/tasks.json"), "{}\n").unwrap();
    let first = harness.scratch_join("week1");
    let second = harness.scratch_join("week2");

    let console = harness.run_session(
        &workspace,
        [
            "3".to_string(),
            source.display().to_string(),
            first.display().to_string(),
            second.display().to_string(),
            "q".to_string(),
            "y".to_string(),
            "q".to_string(),
        ],
    );

    for dest in [&first, &second] {
        assert_eq!(fs::read_to_string(dest.join("main.cpp")).unwrap(), "int main() {}\n");
        assert!(dest.join(".vscode/tasks.json").is_file());
        assert!(dest.join("assets/empty").is_dir());
    }
    assert!(console.mentions("Copied the tree into 2 of 2 destinations."));
    let events = workspace.history().unwrap().load_events().unwrap();
    assert_eq!(events[0].kind, EventKind::TreeCopied);
    assert_eq!(events[0].details["completed"], 2);
}

#[test]
fn failing_destination_does_not_stop_the_others() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let source = harness.scratch_join("lesson");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("main.cpp"), "x").unwrap();
    // A plain file where the destination directory should be.
    let blocked = harness.scratch_join("blocked");
    fs::write(&blocked, "file").unwrap();
    let open = harness.scratch_join("open");

    let console = harness.run_session(
        &workspace,
        [
            "3".to_string(),
            source.display().to_string(),
            blocked.display().to_string(),
            open.display().to_string(),
            "q".to_string(),
            "y".to_string(),
        ],
    );

    assert!(console.mentions("Copied the tree into 1 of 2 destinations."));
    assert!(open.join("main.cpp").is_file());
    assert_eq!(console.warnings().len(), 1);
}

#[test]
fn declined_copy_leaves_destinations_untouched() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let source = harness.scratch_join("lesson");
    fs::create_dir_all(&source).unwrap();
    let dest = harness.scratch_join("dest");

    harness.run_session(
        &workspace,
        [
            "3".to_string(),
            source.display().to_string(),
            dest.display().to_string(),
            "q".to_string(),
            "n".to_string(),
        ],
    );

    assert!(!dest.exists());
    assert!(workspace.history().unwrap().load_events().unwrap().is_empty());
}
