use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::history::{record, EventKind};
use crate::materialize::{apply_templates, create_directories, EntryStatus};
use crate::outline::parse_outline_file;
use crate::paths::{clean_path, request_valid_directory, DirectoryRequest};
use crate::planning::DirectoryPlan;
use crate::templates::TemplateCatalog;

use super::console::{confirm, is_quit};
use super::prompts::{collect_labels, request_stem_directory};
use super::review::review_outline;
use super::Session;

impl Session<'_> {
    pub(super) fn create_structure(&mut self) -> Result<()> {
        self.console.say("Let's create the directory tree!");
        let Some(mode) = self
            .console
            .read_line("Enter labels manually (1) or read them from a markdown outline (2)? ")?
        else {
            return Ok(());
        };
        match mode.trim() {
            "1" => self.create_manually(),
            "2" => self.create_from_outline(),
            other if is_quit(other) => Ok(()),
            other => {
                self.console.warn(&format!("Unknown input mode '{other}'."));
                Ok(())
            }
        }
    }

    fn create_manually(&mut self) -> Result<()> {
        let Some(stem) = request_stem_directory(
            self.console,
            "First paste the path to the main stem dir (or q to quit): ",
        )?
        else {
            return Ok(());
        };
        let labels = collect_labels(
            self.console,
            "Enter the name of the next dir inside the stem dir (or q to finish): ",
        )?;
        if labels.is_empty() {
            self.console.say("No directories to create.");
            return Ok(());
        }
        let plan = self.workspace.planner().plan(stem, &labels);
        self.execute_plan(&plan)
    }

    fn create_from_outline(&mut self) -> Result<()> {
        let Some(line) = self
            .console
            .read_line("Paste the path to the markdown outline (or q to quit): ")?
        else {
            return Ok(());
        };
        if is_quit(&line) {
            return Ok(());
        }

        let outline = match parse_outline_file(Path::new(clean_path(&line))) {
            Ok(outline) => outline,
            Err(err) => {
                self.console.warn(&format!("Could not use the outline: {err}"));
                self.console.say("Falling back to manual entry.");
                return self.create_manually();
            }
        };

        let Some(outline) = review_outline(self.console, outline)? else {
            self.console.say("Operation canceled.");
            return Ok(());
        };

        let parent = match request_valid_directory(
            self.console,
            "Paste the path to the dir that will hold the stem dir (or q to quit): ",
        )? {
            DirectoryRequest::Valid(parent) => parent,
            DirectoryRequest::Quit => return Ok(()),
        };

        let plan = self.workspace.planner().plan_from_markdown(&outline, &parent);
        if let Err(err) = fs::create_dir_all(plan.stem()) {
            self.console.warn(&format!(
                "Error creating stem directory {}: {err}",
                plan.stem().display()
            ));
            return Ok(());
        }
        self.console
            .say(&format!("Stem directory: {}", plan.stem().display()));
        if plan.is_empty() {
            self.console.say("The outline has no entries below the root.");
            return Ok(());
        }
        self.execute_plan(&plan)
    }

    /// Creates the planned directories, reports each entry and offers to
    /// add the template files to the ones that were created.
    fn execute_plan(&mut self, plan: &DirectoryPlan) -> Result<()> {
        let result = create_directories(plan);
        for outcome in &result.outcomes {
            match &outcome.status {
                EntryStatus::Created => self
                    .console
                    .say(&format!("Created: {}", outcome.target_path.display())),
                EntryStatus::Failed(issue) => self.console.warn(&issue.to_string()),
            }
        }
        self.console.say(&result.describe());

        let history = self.workspace.history();
        record(
            history.as_ref(),
            EventKind::DirectoriesCreated,
            json!({
                "stem": plan.stem().display().to_string(),
                "attempted": result.attempted,
                "succeeded": result.succeeded,
            }),
        );

        let created: Vec<PathBuf> = result.created_paths().map(Path::to_path_buf).collect();
        if created.is_empty() {
            return Ok(());
        }
        if confirm(self.console, "Create template files in the new directories?")? {
            let batch = apply_templates(
                created.iter().map(PathBuf::as_path),
                TemplateCatalog::all(),
            );
            self.report_batch(plan.stem(), &batch);
        }
        Ok(())
    }
}
