use super::support::{child_dir_names, has_all_templates};
use super::IntegrationHarness;
use stemtree::history::EventKind;
use stemtree::materialize::{create_directories, EntryStatus};
use stemtree::{plan, Label};

#[test]
fn manual_session_creates_numbered_tree_with_templates() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let stem = harness.scratch_join("course");

    let console = harness.run_session(
        &workspace,
        [
            "1".to_string(),
            "1".to_string(),
            stem.display().to_string(),
            "y".to_string(),
            "Intro".to_string(),
            "a/b".to_string(),
            "Intro".to_string(),
            "q".to_string(),
            "y".to_string(),
            "q".to_string(),
        ],
    );

    assert_eq!(
        child_dir_names(&stem),
        ["01 - Intro", "02 - a_b", "03 - Intro"]
    );
    for name in child_dir_names(&stem) {
        assert!(has_all_templates(&stem.join(name)));
    }
    assert!(console.mentions("Created 3 of 3 directories."));
    assert!(console.mentions("Template files created in 3 of 3 directories."));

    let events = workspace.history().unwrap().load_events().unwrap();
    let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();
    assert_eq!(kinds, [EventKind::DirectoriesCreated, EventKind::TemplatesApplied]);
}

#[test]
fn wide_batches_keep_natural_index_width() {
    let harness = IntegrationHarness::new();
    let labels: Vec<Label> = (1..=100)
        .map(|n| Label::new(format!("Topic {n}")).unwrap())
        .collect();
    let plan = plan(harness.scratch(), &labels);

    let result = create_directories(&plan);
    assert_eq!(result.succeeded, 100);
    assert!(harness.scratch_join("09 - Topic 9").is_dir());
    assert!(harness.scratch_join("100 - Topic 100").is_dir());
}

#[test]
fn rerun_over_existing_tree_succeeds() {
    let harness = IntegrationHarness::new();
    let labels = [Label::new("Intro").unwrap()];
    let plan = plan(harness.scratch(), &labels);

    assert_eq!(create_directories(&plan).succeeded, 1);
    let second = create_directories(&plan);
    assert_eq!(second.succeeded, 1);
    assert_eq!(
        second.status_of(&harness.scratch_join("01 - Intro")),
        Some(&EntryStatus::Created)
    );
}
