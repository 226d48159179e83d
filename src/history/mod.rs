//! Append-only JSONL record of completed operations.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// Type of operations recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    DirectoriesCreated,
    TemplatesApplied,
    TreeCopied,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::DirectoriesCreated => "directories_created",
            EventKind::TemplatesApplied => "templates_applied",
            EventKind::TreeCopied => "tree_copied",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub event_id: Uuid,
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl HistoryEvent {
    pub fn new(kind: EventKind, details: serde_json::Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            kind,
            timestamp: Utc::now(),
            details,
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind.as_str(),
            self.details
        )
    }
}

#[derive(Debug, Clone)]
pub struct HistoryLog {
    events_path: PathBuf,
}

impl HistoryLog {
    pub fn at(events_path: impl Into<PathBuf>) -> Self {
        Self {
            events_path: events_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.events_path
    }

    pub fn append_event(&self, event: &HistoryEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)
            .with_context(|| format!("Unable to open history {}", self.events_path.display()))?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn load_events(&self) -> Result<Vec<HistoryEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: HistoryEvent = serde_json::from_str(line)
                .with_context(|| format!("Corrupt history line in {}", self.events_path.display()))?;
            events.push(event);
        }
        Ok(events)
    }

    /// The most recent `limit` events, oldest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEvent>> {
        let mut events = self.load_events()?;
        let skip = events.len().saturating_sub(limit);
        Ok(events.split_off(skip))
    }
}

/// Appends an event when history is enabled; failures are only logged.
pub fn record(log: Option<&HistoryLog>, kind: EventKind, details: serde_json::Value) {
    let Some(log) = log else {
        return;
    };
    if let Err(err) = log.append_event(&HistoryEvent::new(kind, details)) {
        warn!(path = %log.path().display(), error = %err, "unable to record history event");
    }
}
