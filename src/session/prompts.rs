//! Reusable prompt loops built on the console seam.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::naming::Label;
use crate::paths::{check_directory, clean_path, DirectoryCheck};

use super::console::{confirm, is_quit, Console};

/// Reads labels until the quit sentinel or end of input.
///
/// Input is trimmed once here; blank entries are rejected with a message.
pub fn collect_labels(console: &mut dyn Console, prompt: &str) -> Result<Vec<Label>> {
    let mut labels = Vec::new();
    while let Some(line) = console.read_line(prompt)? {
        if is_quit(&line) {
            break;
        }
        match Label::from_input(&line) {
            Ok(label) => labels.push(label),
            Err(err) => console.warn(&format!("Skipped: {err}.")),
        }
    }
    Ok(labels)
}

/// Asks for the stem directory, offering to create it when missing.
///
/// Returns `None` on the quit sentinel or end of input.
pub fn request_stem_directory(console: &mut dyn Console, prompt: &str) -> Result<Option<PathBuf>> {
    loop {
        let Some(line) = console.read_line(prompt)? else {
            return Ok(None);
        };
        if is_quit(&line) {
            return Ok(None);
        }
        let cleaned = clean_path(&line);
        if cleaned.trim().is_empty() {
            console.warn("Please enter a directory path.");
            continue;
        }
        let path = PathBuf::from(cleaned);

        match check_directory(&path) {
            DirectoryCheck::Valid => return Ok(Some(path)),
            DirectoryCheck::Missing => {
                if !confirm(console, "Directory doesn't exist. Create it?")? {
                    console.say("Please enter another path.");
                    continue;
                }
                match fs::create_dir_all(&path) {
                    Ok(()) => {
                        console.say(&format!("Created directory: {}", path.display()));
                        return Ok(Some(path));
                    }
                    Err(err) => console.warn(&format!(
                        "Error creating directory {}: {err}",
                        path.display()
                    )),
                }
            }
            other => console.warn(&format!(
                "Invalid directory path ({}). Please try again.",
                other.describe(&path)
            )),
        }
    }
}
