use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;
use vocab_core::WordEntry;

use crate::mapping::parse_entries;
use crate::source::{SourceError, WordSource};

/// Word table stored in a local CSV file. Re-read on every load.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WordSource for CsvFileSource {
    async fn load_words(&self) -> Result<Vec<WordEntry>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let entries = parse_entries(bytes.as_slice())?;
        info!(path = %self.path.display(), count = entries.len(), "loaded words from file");
        Ok(entries)
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }
}

/// Word table compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedCsvSource {
    label: &'static str,
    csv: &'static str,
}

impl EmbeddedCsvSource {
    #[must_use]
    pub fn new(label: &'static str, csv: &'static str) -> Self {
        Self { label, csv }
    }
}

#[async_trait]
impl WordSource for EmbeddedCsvSource {
    async fn load_words(&self) -> Result<Vec<WordEntry>, SourceError> {
        parse_entries(self.csv.as_bytes())
    }

    fn describe(&self) -> String {
        self.label.to_string()
    }
}
