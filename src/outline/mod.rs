//! Minimal markdown outlines as an alternative to prompting for each name.
//!
//! ```text
//! # My Project      <- root label (stem directory)
//! - Intro           <- child labels, in order
//! |- Basics
//! * Advanced
//! ```

mod error;
mod parser;

pub use error::OutlineError;
pub use parser::{parse_outline, parse_outline_file, LIST_MARKERS};

use crate::naming::Label;

/// Parsed outline. Edits made during review produce a new document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineDocument {
    root_label: String,
    child_labels: Vec<Label>,
}

impl OutlineDocument {
    pub fn new(root_label: impl Into<String>, child_labels: Vec<Label>) -> Self {
        Self {
            root_label: root_label.into(),
            child_labels,
        }
    }

    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    pub fn child_labels(&self) -> &[Label] {
        &self.child_labels
    }

    pub fn len(&self) -> usize {
        self.child_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.child_labels.is_empty()
    }

    pub fn with_root_label(&self, root_label: impl Into<String>) -> Self {
        Self {
            root_label: root_label.into(),
            child_labels: self.child_labels.clone(),
        }
    }

    /// Replaces the label at 1-based `position`; `None` when out of range.
    pub fn with_child_label(&self, position: usize, label: Label) -> Option<Self> {
        let slot = position.checked_sub(1)?;
        if slot >= self.child_labels.len() {
            return None;
        }
        let mut child_labels = self.child_labels.clone();
        child_labels[slot] = label;
        Some(Self {
            root_label: self.root_label.clone(),
            child_labels,
        })
    }

    pub fn with_appended(&self, extra: impl IntoIterator<Item = Label>) -> Self {
        let mut child_labels = self.child_labels.clone();
        child_labels.extend(extra);
        Self {
            root_label: self.root_label.clone(),
            child_labels,
        }
    }

    pub fn into_parts(self) -> (String, Vec<Label>) {
        (self.root_label, self.child_labels)
    }
}
