use super::support::{child_dir_names, COURSE_OUTLINE};
use super::IntegrationHarness;
use std::fs;
use stemtree::workspace::AppConfig;

#[test]
fn configured_width_and_separator_shape_names() {
    let harness = IntegrationHarness::new();
    let mut config = AppConfig::default();
    config.planning.prefix_width = 3;
    config.planning.separator = "_".to_string();
    let workspace = harness.with_config(config);
    let stem = harness.scratch_join("stem");
    fs::create_dir(&stem).unwrap();

    harness.run_session(
        &workspace,
        [
            "1".to_string(),
            "1".to_string(),
            stem.display().to_string(),
            "Intro".to_string(),
            "q".to_string(),
            "n".to_string(),
        ],
    );

    assert_eq!(child_dir_names(&stem), ["001_Intro"]);
}

#[test]
fn raw_root_policy_keeps_label_verbatim() {
    let harness = IntegrationHarness::new();
    let mut config = AppConfig::default();
    config.planning.sanitize_root_label = false;
    let workspace = harness.with_config(config);
    let outline = harness.scratch_join("course.md");
    fs::write(&outline, COURSE_OUTLINE).unwrap();

    harness.run_session(
        &workspace,
        [
            "1".to_string(),
            "2".to_string(),
            outline.display().to_string(),
            "c".to_string(),
            harness.scratch().display().to_string(),
            "n".to_string(),
        ],
    );

    assert!(harness.scratch_join("C++ Course: Part 1").is_dir());
}

#[test]
fn disabled_history_records_nothing() {
    let harness = IntegrationHarness::new();
    let mut config = AppConfig::default();
    config.history.enabled = false;
    let workspace = harness.with_config(config);
    let stem = harness.scratch_join("stem");
    fs::create_dir(&stem).unwrap();

    harness.run_session(
        &workspace,
        [
            "1".to_string(),
            "1".to_string(),
            stem.display().to_string(),
            "Intro".to_string(),
            "q".to_string(),
            "n".to_string(),
        ],
    );

    assert!(workspace.history().is_none());
    assert!(!workspace.history_path().exists());
}

#[test]
fn saved_config_survives_reopen() {
    let harness = IntegrationHarness::new();
    let mut config = AppConfig::default();
    config.history.display_limit = 5;
    let reopened = harness.with_config(config.clone());
    assert_eq!(reopened.config, config);
    assert!(reopened.config_path.is_file());
}
