use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;
use vocab_core::WordEntry;

use crate::file::{CsvFileSource, EmbeddedCsvSource};
use crate::sheet::SheetSource;

/// Errors surfaced by word source adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("word sheet request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("could not read word file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed word table: {0}")]
    Csv(#[from] csv::Error),

    #[error("word table has no `{0}` column")]
    MissingColumn(&'static str),

    #[error("invalid sheet url `{raw}`: {reason}")]
    InvalidUrl { raw: String, reason: String },

    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can produce the word list for a quiz.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Load every usable word/meaning pair, in source order.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the underlying table cannot be read or parsed.
    async fn load_words(&self) -> Result<Vec<WordEntry>, SourceError>;

    /// Short human-readable description, shown in the UI and logs.
    fn describe(&self) -> String;
}

/// Fixed word list held in memory, for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySource {
    entries: Arc<Mutex<Vec<WordEntry>>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    /// Replace the stored entries, e.g. to simulate an edited sheet.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the lock is poisoned.
    pub fn replace(&self, entries: Vec<WordEntry>) -> Result<(), SourceError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        *guard = entries;
        Ok(())
    }
}

#[async_trait]
impl WordSource for InMemorySource {
    async fn load_words(&self) -> Result<Vec<WordEntry>, SourceError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    fn describe(&self) -> String {
        "in-memory word list".to_string()
    }
}

/// Holds the configured word source behind a trait object so backends can be swapped.
#[derive(Clone)]
pub struct Sources {
    pub words: Arc<dyn WordSource>,
}

impl Sources {
    #[must_use]
    pub fn in_memory(entries: Vec<WordEntry>) -> Self {
        Self {
            words: Arc::new(InMemorySource::new(entries)),
        }
    }

    #[must_use]
    pub fn embedded(label: &'static str, csv: &'static str) -> Self {
        Self {
            words: Arc::new(EmbeddedCsvSource::new(label, csv)),
        }
    }

    #[must_use]
    pub fn csv_file(path: impl Into<PathBuf>) -> Self {
        Self {
            words: Arc::new(CsvFileSource::new(path)),
        }
    }

    /// Build a source that downloads a Google Sheet as CSV.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidUrl` if `share_url` is not a usable sheet link.
    pub fn sheet(share_url: &str) -> Result<Self, SourceError> {
        Ok(Self {
            words: Arc::new(SheetSource::new(share_url)?),
        })
    }
}
