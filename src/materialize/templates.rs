use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::templates::TemplateFile;

use super::issue::{MaterializationIssue, MaterializationStep};

/// Outcome of writing the catalog into one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateReport {
    pub target_dir: PathBuf,
    pub attempted: usize,
    pub written: Vec<PathBuf>,
    pub issues: Vec<MaterializationIssue>,
}

impl TemplateReport {
    /// True iff every catalog file was written.
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty() && self.written.len() == self.attempted
    }
}

fn ensure_directory(dir: &Path, issues: &mut Vec<MaterializationIssue>) -> bool {
    match fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "unable to create template directory");
            issues.push(MaterializationIssue::from_io(
                dir,
                MaterializationStep::CreateDirectory,
                &err,
            ));
            false
        }
    }
}

/// Writes every template into `target_dir`, overwriting existing files.
///
/// A failing file does not stop the remaining ones.
pub fn materialize_templates(target_dir: &Path, catalog: &[TemplateFile]) -> TemplateReport {
    let mut report = TemplateReport {
        target_dir: target_dir.to_path_buf(),
        ..TemplateReport::default()
    };
    ensure_directory(target_dir, &mut report.issues);

    for template in catalog {
        report.attempted += 1;
        let directory = template.directory_in(target_dir);
        if !ensure_directory(&directory, &mut report.issues) {
            continue;
        }
        let path = directory.join(template.file_name);
        match fs::write(&path, template.content) {
            Ok(()) => {
                info!(path = %path.display(), "wrote template file");
                report.written.push(path);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "template write failed");
                report.issues.push(MaterializationIssue::from_io(
                    &path,
                    MaterializationStep::WriteFile,
                    &err,
                ));
            }
        }
    }
    report
}
