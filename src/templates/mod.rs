//! The fixed set of files materialized into a target directory.
//!
//! Contents are embedded at compile time; the catalog is a plain constant
//! table and is identical for the lifetime of the process.

pub mod verify;

pub use verify::{content_hash, verify_templates, DriftKind, TemplateDrift};

use std::path::{Path, PathBuf};

/// Editor configuration directory shared by the JSON templates.
pub const EDITOR_SUBDIR: &str = ".vscode";

/// One embedded file and where it lands relative to a target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub file_name: &'static str,
    /// Empty for the target root.
    pub subdirectory: &'static str,
    pub content: &'static str,
}

impl TemplateFile {
    /// Directory the file is written into.
    pub fn directory_in(&self, target_dir: &Path) -> PathBuf {
        if self.subdirectory.is_empty() {
            target_dir.to_path_buf()
        } else {
            target_dir.join(self.subdirectory)
        }
    }

    pub fn path_in(&self, target_dir: &Path) -> PathBuf {
        self.directory_in(target_dir).join(self.file_name)
    }

    /// Path relative to the target directory, e.g. `.vscode/tasks.json`.
    pub fn relative_path(&self) -> PathBuf {
        self.path_in(Path::new(""))
    }
}

const CATALOG: [TemplateFile; 3] = [
    TemplateFile {
        file_name: "main.cpp",
        subdirectory: "",
        content: include_str!("assets/main.cpp"),
    },
    TemplateFile {
        file_name: "c_cpp_properties.json",
        subdirectory: EDITOR_SUBDIR,
        content: include_str!("assets/c_cpp_properties.json"),
    },
    TemplateFile {
        file_name: "tasks.json",
        subdirectory: EDITOR_SUBDIR,
        content: include_str!("assets/tasks.json"),
    },
];

/// Read-only view over the embedded templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCatalog;

impl TemplateCatalog {
    pub fn all() -> &'static [TemplateFile] {
        &CATALOG
    }

    pub fn count() -> usize {
        CATALOG.len()
    }
}
