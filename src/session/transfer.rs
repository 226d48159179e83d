//! Menu flows that work on existing trees: template filling and copying.

use anyhow::Result;
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::history::{record, EventKind};
use crate::materialize::{apply_templates, copy_tree_to_many, list_subdirectories, BatchReport};
use crate::paths::{clean_path, request_valid_directory, DirectoryRequest};
use crate::templates::TemplateCatalog;

use super::console::{confirm, is_quit};
use super::Session;

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl Session<'_> {
    pub(super) fn add_templates(&mut self) -> Result<()> {
        self.console.say("Let's add template files to subdirectories.");
        let stem = match request_valid_directory(
            self.console,
            "Please paste the path to the stem dir (or q to quit): ",
        )? {
            DirectoryRequest::Valid(stem) => stem,
            DirectoryRequest::Quit => return Ok(()),
        };

        let subdirectories = match list_subdirectories(&stem) {
            Ok(dirs) => dirs,
            Err(err) => {
                self.console.warn(&format!("{err:#}"));
                return Ok(());
            }
        };
        if subdirectories.is_empty() {
            self.console.say("No subdirectories found in the stem dir.");
            return Ok(());
        }

        self.console.say("Found the following subdirectories:");
        for dir in &subdirectories {
            self.console.say(&format!("* {}", display_name(dir)));
        }
        if !confirm(self.console, "Create template files in all subdirectories?")? {
            self.console.say("Operation canceled.");
            return Ok(());
        }

        let batch = apply_templates(
            subdirectories.iter().map(PathBuf::as_path),
            TemplateCatalog::all(),
        );
        self.report_batch(&stem, &batch);
        Ok(())
    }

    /// Prints per-directory results plus the batch summary and records it.
    pub(super) fn report_batch(&mut self, stem: &Path, batch: &BatchReport) {
        for report in &batch.reports {
            self.console
                .say(&format!("Processing: {}", display_name(&report.target_dir)));
            for issue in &report.issues {
                self.console.warn(&issue.to_string());
            }
        }
        self.console.say(&batch.describe());

        let history = self.workspace.history();
        record(
            history.as_ref(),
            EventKind::TemplatesApplied,
            json!({
                "stem": stem.display().to_string(),
                "directories": batch.directories(),
                "completed": batch.completed(),
            }),
        );
    }

    pub(super) fn copy_tree(&mut self) -> Result<()> {
        self.console.say("Let's copy a directory tree.");
        let source = match request_valid_directory(
            self.console,
            "Paste the path to the source dir (or q to quit): ",
        )? {
            DirectoryRequest::Valid(source) => source,
            DirectoryRequest::Quit => return Ok(()),
        };

        let mut destinations = Vec::new();
        while let Some(line) = self
            .console
            .read_line("Enter a destination dir (or q to finish): ")?
        {
            if is_quit(&line) {
                break;
            }
            let cleaned = clean_path(&line).trim();
            if cleaned.is_empty() {
                self.console.warn("Please enter a directory path.");
                continue;
            }
            destinations.push(PathBuf::from(cleaned));
        }
        if destinations.is_empty() {
            self.console.say("No destinations given.");
            return Ok(());
        }

        let question = format!(
            "Copy {} into {} destination(s)?",
            source.display(),
            destinations.len()
        );
        if !confirm(self.console, &question)? {
            self.console.say("Operation canceled.");
            return Ok(());
        }

        let reports = copy_tree_to_many(&source, &destinations);
        for report in &reports {
            match &report.aborted {
                None => self.console.say(&format!(
                    "Copied {} files to {}.",
                    report.files_copied,
                    report.destination.display()
                )),
                Some(issue) => self.console.warn(&format!(
                    "Copy to {} stopped after {} files: {issue}",
                    report.destination.display(),
                    report.files_copied
                )),
            }
        }
        let complete = reports.iter().filter(|r| r.is_complete()).count();
        self.console.say(&format!(
            "Copied the tree into {complete} of {} destinations.",
            reports.len()
        ));

        let history = self.workspace.history();
        record(
            history.as_ref(),
            EventKind::TreeCopied,
            json!({
                "source": source.display().to_string(),
                "destinations": reports.len(),
                "completed": complete,
            }),
        );
        Ok(())
    }
}
