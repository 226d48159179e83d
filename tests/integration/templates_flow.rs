use super::support::has_all_templates;
use super::IntegrationHarness;
use std::fs;
use stemtree::templates::{verify_templates, DriftKind, TemplateCatalog};

#[test]
fn session_fills_every_subdirectory_then_verifies_clean() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    for name in ["01 - Intro", "02 - Basics", "03 - Advanced"] {
        fs::create_dir(harness.scratch_join(name)).unwrap();
    }
    fs::write(harness.scratch_join("README.md"), "not a directory").unwrap();

    let console = harness.run_session(
        &workspace,
        [
            "2".to_string(),
            harness.scratch().display().to_string(),
            "y".to_string(),
            "q".to_string(),
        ],
    );

    assert!(console.mentions("Template files created in 3 of 3 directories."));
    for name in ["01 - Intro", "02 - Basics", "03 - Advanced"] {
        let dir = harness.scratch_join(name);
        assert!(has_all_templates(&dir));
        assert!(verify_templates(&dir, TemplateCatalog::all()).unwrap().is_empty());
    }
}

#[test]
fn blocked_subdirectory_is_counted_as_incomplete() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    fs::create_dir(harness.scratch_join("01 - Ok")).unwrap();
    fs::create_dir_all(harness.scratch_join("02 - Blocked/.vscode/tasks.json")).unwrap();

    let console = harness.run_session(
        &workspace,
        [
            "2".to_string(),
            harness.scratch().display().to_string(),
            "y".to_string(),
        ],
    );

    assert!(console.mentions("Template files created in 1 of 2 directories."));
    assert_eq!(console.warnings().len(), 1);
    assert!(harness.scratch_join("02 - Blocked/main.cpp").is_file());
}

#[test]
fn verify_reports_edited_and_missing_files() {
    let harness = IntegrationHarness::new();
    let dir = harness.scratch();
    stemtree::materialize::materialize_templates(dir, TemplateCatalog::all());
    fs::write(dir.join("main.cpp"), "// edited\n").unwrap();
    fs::remove_file(dir.join(".vscode/tasks.json")).unwrap();

    let drift = verify_templates(dir, TemplateCatalog::all()).unwrap();
    assert_eq!(drift.len(), 2);
    assert!(matches!(drift[0].kind, DriftKind::Modified { .. }));
    assert_eq!(drift[1].kind, DriftKind::Missing);
    assert!(drift[1].describe().starts_with("[missing]"));
}
