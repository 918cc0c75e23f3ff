//! ResultStore - append-only list of saved detailed analyses.
//!
//! The whole list lives as one JSON array under [`SAVED_ANALYSES_KEY`].
//! Each save reads the array, appends a timestamped record and writes the
//! array back.

use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::analysis::{DetailedAnalysisResult, SavedAnalysisRecord};
use crate::domain::foundation::Timestamp;
use crate::ports::{KeyValueStore, StoreError};

pub const SAVED_ANALYSES_KEY: &str = "skinScanAnalyses";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Failed to read saved analyses: {0}")]
    ReadFailed(StoreError),

    /// The stored document is not a list of records. It is left untouched.
    #[error("Saved analyses are corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to serialize saved analyses: {0}")]
    Serialize(String),

    #[error("Failed to write saved analyses: {0}")]
    WriteFailed(StoreError),
}

type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

pub struct ResultStore {
    store: Arc<dyn KeyValueStore>,
    clock: Clock,
}

impl ResultStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            clock: Arc::new(Timestamp::now),
        }
    }

    /// Replaces the wall clock used for capture timestamps.
    pub fn with_clock(mut self, clock: impl Fn() -> Timestamp + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// All saved records, oldest first. Nothing stored yet is an empty list.
    ///
    /// # Errors
    ///
    /// `ReadFailed` or `Corrupt`.
    pub fn saved_analyses(&self) -> Result<Vec<SavedAnalysisRecord>, PersistenceError> {
        let raw = self
            .store
            .read(SAVED_ANALYSES_KEY)
            .map_err(PersistenceError::ReadFailed)?;

        match raw {
            None => Ok(Vec::new()),
            Some(text) if text.trim().is_empty() => Ok(Vec::new()),
            Some(text) => serde_json::from_str(&text)
                .map_err(|e| PersistenceError::Corrupt(e.to_string())),
        }
    }

    /// Appends `result` with a capture timestamp and persists the full list.
    ///
    /// The timestamp never precedes the last stored record's.
    ///
    /// # Errors
    ///
    /// Any `PersistenceError`; the stored list is unchanged on failure.
    pub fn append_analysis(
        &self,
        result: DetailedAnalysisResult,
    ) -> Result<SavedAnalysisRecord, PersistenceError> {
        let outcome = self.try_append(result);
        match &outcome {
            Ok(record) => info!(saved_at = ?record.saved_at, "analysis saved"),
            Err(e) => error!(error = %e, "failed to save analysis"),
        }
        outcome
    }

    fn try_append(
        &self,
        result: DetailedAnalysisResult,
    ) -> Result<SavedAnalysisRecord, PersistenceError> {
        let mut records = self.saved_analyses()?;

        let now = (self.clock)();
        let saved_at = match records.last() {
            Some(last) => now.at_least(last.saved_at),
            None => now,
        };

        let record = SavedAnalysisRecord::new(result, saved_at);
        records.push(record.clone());

        let text = serde_json::to_string(&records)
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;

        self.store
            .write(SAVED_ANALYSES_KEY, &text)
            .map_err(PersistenceError::WriteFailed)?;

        Ok(record)
    }
}
