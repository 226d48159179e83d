use std::fs;
use std::path::Path;

pub const COURSE_OUTLINE: &str = "\
# C++ Course: Part 1

- Getting Started
- Variables & Types
|- Control Flow?
* Functions <Intro>
- Getting Started
";

/// Names of the immediate subdirectories of `dir`, sorted.
pub fn child_dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("failed to read dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn has_all_templates(dir: &Path) -> bool {
    ["main.cpp", ".vscode/c_cpp_properties.json", ".vscode/tasks.json"]
        .iter()
        .all(|relative| dir.join(relative).is_file())
}
