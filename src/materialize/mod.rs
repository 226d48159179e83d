//! Executes plans against the filesystem.
//!
//! Every operation is best effort: a failing item is recorded as a
//! [`MaterializationIssue`] and the batch moves on to the next item.

mod copy;
mod directories;
mod issue;
mod templates;

pub use copy::{copy_tree, copy_tree_to_many, CopyReport};
pub use directories::{create_directories, EntryOutcome, EntryStatus, MaterializationResult};
pub use issue::{MaterializationIssue, MaterializationStep};
pub use templates::{materialize_templates, TemplateReport};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::templates::TemplateFile;

/// Immediate subdirectories of `stem`, sorted by name.
pub fn list_subdirectories(stem: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in
        fs::read_dir(stem).with_context(|| format!("Unable to read directory {}", stem.display()))?
    {
        let entry = entry.with_context(|| format!("Unable to read directory {}", stem.display()))?;
        // Follows symlinks, so a link to a directory counts as one.
        if entry.path().is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Template outcome for each directory of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub reports: Vec<TemplateReport>,
}

impl BatchReport {
    pub fn directories(&self) -> usize {
        self.reports.len()
    }

    /// Directories that received every template file.
    pub fn completed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_complete()).count()
    }

    pub fn issues(&self) -> impl Iterator<Item = &MaterializationIssue> {
        self.reports.iter().flat_map(|r| r.issues.iter())
    }

    pub fn describe(&self) -> String {
        format!(
            "Template files created in {} of {} directories.",
            self.completed(),
            self.directories()
        )
    }
}

/// Writes the catalog into each directory in order.
pub fn apply_templates<'a>(
    directories: impl IntoIterator<Item = &'a Path>,
    catalog: &[TemplateFile],
) -> BatchReport {
    BatchReport {
        reports: directories
            .into_iter()
            .map(|dir| materialize_templates(dir, catalog))
            .collect(),
    }
}

/// Writes the catalog into every immediate subdirectory of `stem`.
pub fn apply_templates_to_subdirectories(stem: &Path, catalog: &[TemplateFile]) -> Result<BatchReport> {
    let dirs = list_subdirectories(stem)?;
    Ok(apply_templates(dirs.iter().map(PathBuf::as_path), catalog))
}
