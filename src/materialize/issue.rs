use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializationStep {
    CreateDirectory,
    WriteFile,
    ReadDirectory,
    CopyFile,
    Walk,
}

impl MaterializationStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterializationStep::CreateDirectory => "create directory",
            MaterializationStep::WriteFile => "write file",
            MaterializationStep::ReadDirectory => "read directory",
            MaterializationStep::CopyFile => "copy file",
            MaterializationStep::Walk => "walk tree",
        }
    }
}

/// A filesystem failure recorded for one item of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializationIssue {
    pub path: PathBuf,
    pub step: MaterializationStep,
    pub message: String,
}

impl MaterializationIssue {
    pub fn new(path: impl Into<PathBuf>, step: MaterializationStep, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            step,
            message: message.into(),
        }
    }

    pub fn from_io(path: &Path, step: MaterializationStep, err: &io::Error) -> Self {
        Self::new(path, step, err.to_string())
    }
}

impl fmt::Display for MaterializationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to {} {}: {}",
            self.step.as_str(),
            self.path.display(),
            self.message
        )
    }
}
