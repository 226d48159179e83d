//! Legacy materialization: mirror an existing directory tree.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::issue::{MaterializationIssue, MaterializationStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub files_copied: usize,
    pub directories_created: usize,
    /// First error hit; the rest of this tree was skipped.
    pub aborted: Option<MaterializationIssue>,
}

impl CopyReport {
    fn new(source: &Path, destination: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            files_copied: 0,
            directories_created: 0,
            aborted: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }

    fn abort(mut self, issue: MaterializationIssue) -> Self {
        warn!(
            source = %self.source.display(),
            destination = %self.destination.display(),
            "{issue}"
        );
        self.aborted = Some(issue);
        self
    }
}

/// Best-effort absolute form of a path that may not exist yet.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => resolve(parent).join(name),
        _ if path.is_relative() => std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

/// Recursively copies `source` into `destination`, overwriting files.
///
/// Every directory is mirrored, including empty ones. The first filesystem
/// error stops this copy and is recorded in [`CopyReport::aborted`].
pub fn copy_tree(source: &Path, destination: &Path) -> CopyReport {
    let mut report = CopyReport::new(source, destination);

    if !source.is_dir() {
        return report.abort(MaterializationIssue::new(
            source,
            MaterializationStep::ReadDirectory,
            "source is not a directory",
        ));
    }
    if resolve(destination).starts_with(resolve(source)) {
        return report.abort(MaterializationIssue::new(
            destination,
            MaterializationStep::CreateDirectory,
            "destination lies inside the source tree",
        ));
    }

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(source).to_path_buf();
                return report.abort(MaterializationIssue::new(
                    path,
                    MaterializationStep::Walk,
                    err.to_string(),
                ));
            }
        };
        let relative = match entry.path().strip_prefix(source) {
            Ok(relative) => relative,
            Err(err) => {
                return report.abort(MaterializationIssue::new(
                    entry.path(),
                    MaterializationStep::Walk,
                    err.to_string(),
                ))
            }
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            if let Err(err) = fs::create_dir_all(&target) {
                return report.abort(MaterializationIssue::from_io(
                    &target,
                    MaterializationStep::CreateDirectory,
                    &err,
                ));
            }
            report.directories_created += 1;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                if let Err(err) = fs::create_dir_all(parent) {
                    return report.abort(MaterializationIssue::from_io(
                        parent,
                        MaterializationStep::CreateDirectory,
                        &err,
                    ));
                }
            }
            if let Err(err) = fs::copy(entry.path(), &target) {
                return report.abort(MaterializationIssue::from_io(
                    entry.path(),
                    MaterializationStep::CopyFile,
                    &err,
                ));
            }
            report.files_copied += 1;
        } else {
            debug!(path = %entry.path().display(), "skipping non-regular entry");
        }
    }

    info!(
        source = %source.display(),
        destination = %destination.display(),
        files = report.files_copied,
        "copied tree"
    );
    report
}

/// Runs one independent [`copy_tree`] per destination.
pub fn copy_tree_to_many(source: &Path, destinations: &[PathBuf]) -> Vec<CopyReport> {
    destinations
        .iter()
        .map(|destination| copy_tree(source, destination))
        .collect()
}
