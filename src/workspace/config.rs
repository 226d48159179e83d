//! Configuration primitives for stemtree.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/stemtree/config/config.toml on Windows
//!   $XDG_DATA_HOME/stemtree/config/config.toml on Linux
//!   ~/Library/Application Support/stemtree/config/config.toml on macOS
//!
//! `STEMTREE_HOME` overrides the root for scripted runs and tests.

use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Numbering and naming of planned directories.
    #[serde(default)]
    pub planning: PlanningSettings,
    /// Run history (JSONL event log) preferences.
    #[serde(default)]
    pub history: HistorySettings,
    /// Diagnostic logging defaults.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Directory naming knobs used by the structure planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanningSettings {
    /// Minimum digit count of the numeric prefix (indices wider than this keep
    /// their natural width).
    #[serde(default = "default_prefix_width")]
    pub prefix_width: usize,
    /// Text placed between the numeric prefix and the label.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Whether the outline root label is sanitized before it becomes the stem
    /// directory name.
    #[serde(default = "default_sanitize_root_label")]
    pub sanitize_root_label: bool,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            prefix_width: default_prefix_width(),
            separator: default_separator(),
            sanitize_root_label: default_sanitize_root_label(),
        }
    }
}

const fn default_prefix_width() -> usize {
    2
}

fn default_separator() -> String {
    " - ".to_string()
}

const fn default_sanitize_root_label() -> bool {
    true
}

/// Run history preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySettings {
    /// Append one event per completed operation to `history/events.jsonl`.
    #[serde(default = "default_history_enabled")]
    pub enabled: bool,
    /// Number of events printed by `stemtree history`.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            enabled: default_history_enabled(),
            display_limit: default_display_limit(),
        }
    }
}

const fn default_history_enabled() -> bool {
    true
}

const fn default_display_limit() -> usize {
    20
}

/// Logging defaults, overridden by `RUST_LOG` when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "stemtree=warn".to_string()
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the root directory where stemtree stores its config and history.
///
/// Order of precedence:
/// 1. `STEMTREE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("STEMTREE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("stemtree"))
}

/// Path to the config file below a workspace root.
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join("config").join(CONFIG_FILE_NAME)
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Unable to create config directory {}", dir.display()))?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}
