//! Completed-result history storage.
//!
//! The history is append-only: results are added once at quiz completion and
//! never edited. The only removal is [`HistoryStore::clear`], which deletes the
//! whole log.
//!
//! Persistence problems never reach the quiz flow. A missing or corrupt log
//! reads as an empty one, and write failures are returned for the caller to
//! log and drop.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use quizzer_types::QuizResult;
use quizzer_utils::{atomic_write, recover_bak_file};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The persisted log: every completed result plus when it was last touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryLog {
    #[serde(default)]
    pub results: Vec<QuizResult>,
    #[serde(default = "Utc::now")]
    pub last_accessed: DateTime<Utc>,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            last_accessed: Utc::now(),
        }
    }
}

impl HistoryLog {
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results in completion order, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &QuizResult> {
        self.results.iter().rev()
    }
}

/// File-backed history log at a fixed path.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted log, or an empty one if it is absent or corrupt.
    #[must_use]
    pub fn load(&self) -> HistoryLog {
        recover_bak_file(&self.path);

        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return HistoryLog::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to read quiz history: {e}");
                return HistoryLog::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(log) => log,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to parse quiz history: {e}");
                HistoryLog::default()
            }
        }
    }

    /// Append one result and rewrite the log in a single atomic replace.
    pub fn append(&self, result: &QuizResult) -> Result<(), HistoryError> {
        let mut log = self.load();
        log.results.push(result.clone());
        log.last_accessed = Utc::now();
        self.save(&log)?;
        tracing::debug!(
            path = %self.path.display(),
            results = log.len(),
            "Appended quiz result"
        );
        Ok(())
    }

    /// Remove the persisted log entirely. A log that does not exist is already clear.
    pub fn clear(&self) -> Result<(), HistoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(HistoryError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, log: &HistoryLog) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(log)?;
        let io_err = |source| HistoryError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            quizzer_utils::ensure_private_dir(parent).map_err(io_err)?;
        }
        atomic_write(&self.path, json.as_bytes()).map_err(io_err)
    }
}
