use super::support::{child_dir_names, COURSE_OUTLINE};
use super::IntegrationHarness;
use std::fs;
use stemtree::outline::{parse_outline_file, OutlineError};
use stemtree::planning::StructurePlanner;

const EXPECTED_CHILDREN: [&str; 5] = [
    "01 - Getting Started",
    "02 - Variables & Types",
    "03 - Control Flow_",
    "04 - Functions _Intro_",
    "05 - Getting Started",
];

#[test]
fn outline_session_builds_sanitized_stem_and_children() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let outline = harness.scratch_join("course.md");
    fs::write(&outline, COURSE_OUTLINE).unwrap();
    let parent = harness.scratch_join("out");
    fs::create_dir(&parent).unwrap();

    let console = harness.run_session(
        &workspace,
        [
            "1".to_string(),
            "2".to_string(),
            format!("\"{}\"", outline.display()),
            "c".to_string(),
            parent.display().to_string(),
            "n".to_string(),
            "q".to_string(),
        ],
    );

    let stem = parent.join("C++ Course_ Part 1");
    assert_eq!(child_dir_names(&stem), EXPECTED_CHILDREN);
    assert!(console.mentions("Created 5 of 5 directories."));
}

#[test]
fn review_edits_shape_the_created_tree() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let outline = harness.scratch_join("course.md");
    fs::write(&outline, "# Course\n- Intro\n- Basics\n").unwrap();

    harness.run_session(
        &workspace,
        [
            "1".to_string(),
            "2".to_string(),
            outline.display().to_string(),
            "r".to_string(),
            "Renamed".to_string(),
            "e".to_string(),
            "1".to_string(),
            "Welcome".to_string(),
            "a".to_string(),
            "Extras".to_string(),
            "q".to_string(),
            "c".to_string(),
            harness.scratch().display().to_string(),
            "n".to_string(),
        ],
    );

    assert_eq!(
        child_dir_names(&harness.scratch_join("Renamed")),
        ["01 - Welcome", "02 - Basics", "03 - Extras"]
    );
}

#[test]
fn invalid_parent_is_requested_again() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let outline = harness.scratch_join("course.md");
    fs::write(&outline, "# Course\n- Intro\n").unwrap();

    let console = harness.run_session(
        &workspace,
        [
            "1".to_string(),
            "2".to_string(),
            outline.display().to_string(),
            "c".to_string(),
            harness.scratch_join("missing").display().to_string(),
            harness.scratch().display().to_string(),
            "n".to_string(),
        ],
    );

    assert!(console.mentions("Invalid directory path"));
    assert!(harness.scratch_join("Course/01 - Intro").is_dir());
}

#[test]
fn file_without_content_has_no_root() {
    let harness = IntegrationHarness::new();
    let outline = harness.scratch_join("empty.md");
    fs::write(&outline, "\n   \n").unwrap();

    let err = parse_outline_file(&outline).unwrap_err();
    assert!(matches!(err, OutlineError::MissingRoot));
}

#[test]
fn planner_output_matches_session_output() {
    let harness = IntegrationHarness::new();
    let outline = harness.scratch_join("course.md");
    fs::write(&outline, COURSE_OUTLINE).unwrap();

    let document = parse_outline_file(&outline).unwrap();
    let plan = StructurePlanner::default().plan_from_markdown(&document, harness.scratch());
    let names: Vec<&str> = plan.entries().iter().map(|e| e.dir_name.as_str()).collect();
    assert_eq!(names, EXPECTED_CHILDREN);
    assert_eq!(plan.stem(), harness.scratch_join("C++ Course_ Part 1"));
}
