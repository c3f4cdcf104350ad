//! Reformulation history: newest-first log of past indications.
//!
//! Each entry keeps the raw input, the reformulated text and the protocol
//! suggestion that came with it, so a past case can be restored in full.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::suggestion::ExternalSuggestion;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("History serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub protocol: Option<ExternalSuggestion>,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(input: &str, output: &str, protocol: Option<ExternalSuggestion>) -> Self {
        Self {
            id: Uuid::new_v4(),
            input: input.trim().to_string(),
            output: output.trim().to_string(),
            protocol,
            timestamp: Utc::now(),
        }
    }
}

/// Persistence for the history log (allows in-memory stores in tests).
pub trait HistoryStore {
    /// All entries, newest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Prepend an entry, dropping the oldest beyond the store limit.
    fn save(&mut self, entry: HistoryEntry) -> Result<(), HistoryError>;

    fn get(&self, id: &Uuid) -> Result<Option<HistoryEntry>, HistoryError> {
        Ok(self.list()?.into_iter().find(|e| e.id == *id))
    }

    /// Returns whether an entry was removed.
    fn delete(&mut self, id: &Uuid) -> Result<bool, HistoryError>;

    fn clear(&mut self) -> Result<(), HistoryError>;
}

/// History kept as a JSON array in a single file.
pub struct JsonFileHistory {
    path: PathBuf,
    limit: usize,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit: limit.max(1),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistory {
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str(&json) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Unreadable history file, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut entries = self.list()?;
        entries.insert(0, entry);
        entries.truncate(self.limit);
        self.write_all(&entries)?;
        tracing::debug!(count = entries.len(), "History entry saved");
        Ok(())
    }

    fn delete(&mut self, id: &Uuid) -> Result<bool, HistoryError> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|e| e.id != *id);
        if entries.len() == before {
            return Ok(false);
        }
        self.write_all(&entries)?;
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ── Display ─────────────────────────────────────────────

const MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Relative French label for an entry timestamp.
///
/// Timestamps in the future read as "À l'instant". Past the week mark the
/// absolute date is shown as `D mois, HH:MM` (UTC).
pub fn format_history_timestamp(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(ts);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "À l'instant".to_string()
    } else if minutes < 60 {
        format!("Il y a {minutes} min")
    } else if hours < 24 {
        format!("Il y a {hours}h")
    } else if days < 7 {
        format!("Il y a {days}j")
    } else {
        format!(
            "{} {}, {:02}:{:02}",
            ts.day(),
            MONTHS_SHORT[ts.month0() as usize],
            ts.hour(),
            ts.minute()
        )
    }
}
