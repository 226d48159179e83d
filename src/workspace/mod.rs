mod config;

pub use config::{
    config_file_path, load_or_default, save, workspace_root, AppConfig, HistorySettings,
    LoggingSettings, PlanningSettings, CONFIG_FILE_NAME,
};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::history::HistoryLog;
use crate::planning::{RootLabelPolicy, StructurePlanner};

/// Name of the workspace subdirectory storing the run history.
pub const HISTORY_SUBDIR: &str = "history";
/// File name of the JSONL run history.
pub const HISTORY_FILE_NAME: &str = "events.jsonl";

/// Loaded configuration plus the on-disk locations it came from.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: AppConfig,
    pub config_path: PathBuf,
}

impl Workspace {
    /// Opens the workspace at `STEMTREE_HOME` or the OS data directory.
    pub fn open() -> Result<Self> {
        Self::at(workspace_root()?)
    }

    /// Opens the workspace rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config_path = config_file_path(&root);
        let config = load_or_default(&config_path)?;
        Ok(Self {
            root,
            config,
            config_path,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn save_config(&self) -> Result<()> {
        save(&self.config_path, &self.config)
    }

    pub fn history_path(&self) -> PathBuf {
        self.root.join(HISTORY_SUBDIR).join(HISTORY_FILE_NAME)
    }

    /// History log for this workspace, or `None` when history is disabled.
    pub fn history(&self) -> Option<HistoryLog> {
        self.config
            .history
            .enabled
            .then(|| HistoryLog::at(self.history_path()))
    }

    /// Planner configured from the `[planning]` section.
    pub fn planner(&self) -> StructurePlanner {
        let settings = &self.config.planning;
        let root_policy = if settings.sanitize_root_label {
            RootLabelPolicy::Sanitize
        } else {
            RootLabelPolicy::Raw
        };
        StructurePlanner::new(settings.prefix_width, settings.separator.clone())
            .with_root_policy(root_policy)
    }
}
