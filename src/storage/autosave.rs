use std::fs;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::doc::PoemDocument;

use super::{DraftStore, StorageError};

const AUTOSAVE_FILE: &str = "autosave.json";

/// How long an autosave record counts as fresh after it was written.
const FRESH_WINDOW_MS: i64 = 60 * 60 * 1000;

/// Content subset written by the autosave timer.
#[derive(Debug, Serialize, Deserialize)]
struct AutosaveRecord {
    text: String,
    title: String,
    poet: String,
    timestamp: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    /// Written less than an hour ago.
    Fresh,
    Stale,
    Missing,
}

impl DraftStore {
    /// Writes the autosave record, skipping documents whose text is empty or
    /// whitespace-only. Returns whether a record was written.
    pub fn autosave(&self, doc: &PoemDocument, now: DateTime<Utc>) -> Result<bool, StorageError> {
        if doc.text.trim().is_empty() {
            return Ok(false);
        }
        let record = AutosaveRecord {
            text: doc.text.clone(),
            title: doc.title.clone(),
            poet: doc.author.clone(),
            timestamp: now.timestamp_millis(),
        };
        fs::create_dir_all(&self.dir)?;
        let serialized = serde_json::to_string(&record)?;
        fs::write(self.dir.join(AUTOSAVE_FILE), serialized)?;
        Ok(true)
    }

    /// Startup freshness check. Unreadable or malformed records count as
    /// `Missing`; autosave is best-effort and never blocks startup.
    pub fn check_autosave(&self, now: DateTime<Utc>) -> Freshness {
        let Ok(contents) = fs::read_to_string(self.dir.join(AUTOSAVE_FILE)) else {
            return Freshness::Missing;
        };
        let Ok(record) = serde_json::from_str::<AutosaveRecord>(&contents) else {
            return Freshness::Missing;
        };
        let age_ms = now.timestamp_millis() - record.timestamp;
        if age_ms < FRESH_WINDOW_MS {
            Freshness::Fresh
        } else {
            Freshness::Stale
        }
    }
}
