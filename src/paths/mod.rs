//! Path normalization and directory validation shared by every flow.

use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::session::console::{is_quit, Console};

/// Strips one layer of enclosing double quotes, as pasted by file managers.
pub fn clean_path(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

/// Result of inspecting a candidate directory path.
#[derive(Debug)]
pub enum DirectoryCheck {
    Valid,
    Missing,
    NotADirectory,
    Inaccessible(io::Error),
}

impl DirectoryCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, DirectoryCheck::Valid)
    }

    /// One-line explanation suitable for the console.
    pub fn describe(&self, path: &Path) -> String {
        match self {
            DirectoryCheck::Valid => format!("{} is a directory", path.display()),
            DirectoryCheck::Missing => format!("{} does not exist", path.display()),
            DirectoryCheck::NotADirectory => format!("{} is not a directory", path.display()),
            DirectoryCheck::Inaccessible(err) => {
                format!("Unable to access {}: {err}", path.display())
            }
        }
    }
}

/// Inspects an already cleaned path.
pub fn check_directory(path: &Path) -> DirectoryCheck {
    match path.metadata() {
        Ok(meta) if meta.is_dir() => DirectoryCheck::Valid,
        Ok(_) => DirectoryCheck::NotADirectory,
        Err(err) if err.kind() == io::ErrorKind::NotFound => DirectoryCheck::Missing,
        Err(err) => DirectoryCheck::Inaccessible(err),
    }
}

/// True iff the cleaned path exists and is a directory.
///
/// Filesystem errors fail closed: they are logged and count as invalid.
pub fn is_valid_directory(raw: &str) -> bool {
    let cleaned = clean_path(raw);
    match check_directory(Path::new(cleaned)) {
        DirectoryCheck::Valid => true,
        DirectoryCheck::Inaccessible(err) => {
            warn!(path = cleaned, error = %err, "directory validation failed");
            false
        }
        _ => false,
    }
}

/// Outcome of an ask-until-valid directory prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryRequest {
    Valid(PathBuf),
    Quit,
}

/// Prompts until the user supplies an existing directory or the quit sentinel.
///
/// End of input is treated like the sentinel.
pub fn request_valid_directory(
    console: &mut dyn Console,
    prompt: &str,
) -> Result<DirectoryRequest> {
    loop {
        let Some(line) = console.read_line(prompt)? else {
            return Ok(DirectoryRequest::Quit);
        };
        if is_quit(&line) {
            return Ok(DirectoryRequest::Quit);
        }

        let path = PathBuf::from(clean_path(&line));
        let check = check_directory(&path);
        if check.is_valid() {
            return Ok(DirectoryRequest::Valid(path));
        }
        if let DirectoryCheck::Inaccessible(err) = &check {
            warn!(path = %path.display(), error = %err, "directory validation failed");
        }
        console.warn(&format!(
            "Invalid directory path ({}). Please try again.",
            check.describe(&path)
        ));
    }
}
