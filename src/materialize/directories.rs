use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::planning::DirectoryPlan;

use super::issue::{MaterializationIssue, MaterializationStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Created,
    Failed(MaterializationIssue),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub target_path: PathBuf,
    pub status: EntryStatus,
}

/// Per-call summary of a directory batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializationResult {
    pub attempted: usize,
    pub succeeded: usize,
    pub outcomes: Vec<EntryOutcome>,
}

impl MaterializationResult {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    pub fn status_of(&self, path: &Path) -> Option<&EntryStatus> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.target_path == path)
            .map(|outcome| &outcome.status)
    }

    pub fn issues(&self) -> impl Iterator<Item = &MaterializationIssue> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.status {
            EntryStatus::Failed(issue) => Some(issue),
            EntryStatus::Created => None,
        })
    }

    /// Paths that exist after the batch, in plan order.
    pub fn created_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == EntryStatus::Created)
            .map(|outcome| outcome.target_path.as_path())
    }

    pub fn describe(&self) -> String {
        format!(
            "Created {} of {} directories.",
            self.succeeded, self.attempted
        )
    }
}

/// Creates every planned directory in order, continuing past failures.
pub fn create_directories(plan: &DirectoryPlan) -> MaterializationResult {
    let mut result = MaterializationResult::default();
    for entry in plan.entries() {
        result.attempted += 1;
        let status = match fs::create_dir_all(&entry.target_path) {
            Ok(()) => {
                info!(path = %entry.target_path.display(), "created directory");
                result.succeeded += 1;
                EntryStatus::Created
            }
            Err(err) => {
                let issue = MaterializationIssue::from_io(
                    &entry.target_path,
                    MaterializationStep::CreateDirectory,
                    &err,
                );
                warn!(path = %entry.target_path.display(), error = %err, "directory creation failed");
                EntryStatus::Failed(issue)
            }
        };
        result.outcomes.push(EntryOutcome {
            target_path: entry.target_path.clone(),
            status,
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::Label;
    use crate::planning::plan;
    use tempfile::TempDir;

    fn labels(names: &[&str]) -> Vec<Label> {
        names.iter().map(|n| Label::new(*n).unwrap()).collect()
    }

    #[test]
    fn creates_stem_and_all_entries() {
        let tmp = TempDir::new().unwrap();
        let stem = tmp.path().join("nested").join("course");
        let plan = plan(&stem, &labels(&["Intro", "Basics"]));

        let result = create_directories(&plan);
        assert_eq!(result.attempted, 2);
        assert_eq!(result.succeeded, 2);
        assert!(stem.join("01 - Intro").is_dir());
        assert!(stem.join("02 - Basics").is_dir());
        assert_eq!(
            result.status_of(&stem.join("01 - Intro")),
            Some(&EntryStatus::Created)
        );
    }

    #[test]
    fn failure_does_not_stop_later_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("02 - Blocked"), "file in the way").unwrap();
        let plan = plan(tmp.path(), &labels(&["Open", "Blocked", "After"]));

        let result = create_directories(&plan);
        assert_eq!(result.attempted, 3);
        assert_eq!(result.succeeded, 2);
        assert_eq!(result.failed(), 1);
        assert!(tmp.path().join("03 - After").is_dir());
        let issue = result.issues().next().unwrap();
        assert_eq!(issue.path, tmp.path().join("02 - Blocked"));
        assert_eq!(issue.step, MaterializationStep::CreateDirectory);
        assert_eq!(result.created_paths().count(), 2);
    }

    #[test]
    fn rerun_is_harmless() {
        let tmp = TempDir::new().unwrap();
        let plan = plan(tmp.path(), &labels(&["Again"]));
        assert_eq!(create_directories(&plan).succeeded, 1);
        assert_eq!(create_directories(&plan).succeeded, 1);
    }
}
