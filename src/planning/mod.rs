//! Turns an ordered list of labels into concrete numbered directory paths.
//!
//! Entry `i` (1-based) is named `<prefix(i)><separator><sanitize(label)>`,
//! where the prefix is the decimal index zero-padded to the configured
//! minimum width. Nothing is merged or deduplicated: the prefix alone keeps
//! duplicate labels apart.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::naming::{sanitize, Label};
use crate::outline::OutlineDocument;

pub const DEFAULT_PREFIX_WIDTH: usize = 2;
pub const DEFAULT_SEPARATOR: &str = " - ";

/// How the outline root label becomes the stem directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootLabelPolicy {
    /// Apply the same sanitization as child labels.
    #[default]
    Sanitize,
    /// Use the root label verbatim.
    Raw,
}

/// One directory to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlanEntry {
    pub index: usize,
    pub raw_label: Label,
    pub sanitized_label: String,
    /// Final directory name, prefix included.
    pub dir_name: String,
    pub target_path: PathBuf,
}

/// Ordered entries sharing one stem directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlan {
    stem: PathBuf,
    entries: Vec<DirectoryPlanEntry>,
}

impl DirectoryPlan {
    pub fn stem(&self) -> &Path {
        &self.stem
    }

    pub fn entries(&self) -> &[DirectoryPlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn target_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|entry| entry.target_path.as_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructurePlanner {
    prefix_width: usize,
    separator: String,
    root_policy: RootLabelPolicy,
}

impl Default for StructurePlanner {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX_WIDTH, DEFAULT_SEPARATOR)
    }
}

impl StructurePlanner {
    pub fn new(prefix_width: usize, separator: impl Into<String>) -> Self {
        Self {
            prefix_width,
            separator: separator.into(),
            root_policy: RootLabelPolicy::default(),
        }
    }

    pub fn with_root_policy(mut self, root_policy: RootLabelPolicy) -> Self {
        self.root_policy = root_policy;
        self
    }

    pub fn root_policy(&self) -> RootLabelPolicy {
        self.root_policy
    }

    /// Zero-padded index; wider indices keep their natural digit count.
    pub fn prefix(&self, index: usize) -> String {
        format!("{:0width$}", index, width = self.prefix_width)
    }

    pub fn dir_name(&self, index: usize, label: &Label) -> String {
        format!("{}{}{}", self.prefix(index), self.separator, label.sanitized())
    }

    pub fn plan(&self, stem: impl Into<PathBuf>, labels: &[Label]) -> DirectoryPlan {
        let stem = stem.into();
        let entries = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let index = i + 1;
                let dir_name = self.dir_name(index, label);
                DirectoryPlanEntry {
                    index,
                    raw_label: label.clone(),
                    sanitized_label: label.sanitized(),
                    target_path: stem.join(&dir_name),
                    dir_name,
                }
            })
            .collect::<Vec<_>>();
        debug!(stem = %stem.display(), entries = entries.len(), "planned directory structure");
        DirectoryPlan { stem, entries }
    }

    /// Stem directory an outline's root maps to under `parent_dir`.
    pub fn stem_for(&self, outline: &OutlineDocument, parent_dir: &Path) -> PathBuf {
        let root = match self.root_policy {
            RootLabelPolicy::Sanitize => sanitize(outline.root_label()),
            RootLabelPolicy::Raw => outline.root_label().to_string(),
        };
        parent_dir.join(root)
    }

    pub fn plan_from_markdown(&self, outline: &OutlineDocument, parent_dir: &Path) -> DirectoryPlan {
        self.plan(self.stem_for(outline, parent_dir), outline.child_labels())
    }
}

/// Plans with the default prefix width and separator.
pub fn plan(stem: impl Into<PathBuf>, labels: &[Label]) -> DirectoryPlan {
    StructurePlanner::default().plan(stem, labels)
}

/// Plans an outline below `parent_dir` with default settings.
pub fn plan_from_markdown(outline: &OutlineDocument, parent_dir: &Path) -> DirectoryPlan {
    StructurePlanner::default().plan_from_markdown(outline, parent_dir)
}
