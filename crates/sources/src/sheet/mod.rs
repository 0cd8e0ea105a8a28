use std::env;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;
use url::Url;
use vocab_core::WordEntry;

use crate::mapping::parse_entries;
use crate::source::{SourceError, WordSource};

mod link;

pub use link::export_url;

/// Where to find the shared word sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetConfig {
    pub share_url: String,
}

impl SheetConfig {
    /// Reads `VOCAB_SHEET_URL`. Returns `None` when unset or blank.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let share_url = env::var("VOCAB_SHEET_URL").ok()?;
        if share_url.trim().is_empty() {
            return None;
        }
        Some(Self {
            share_url: share_url.trim().to_string(),
        })
    }
}

/// Downloads a Google Sheet through its CSV export endpoint.
///
/// The sheet must be shared as "anyone with the link can view".
#[derive(Clone)]
pub struct SheetSource {
    client: Client,
    share_url: String,
    export_url: Url,
}

impl SheetSource {
    /// # Errors
    ///
    /// Returns `SourceError::InvalidUrl` if `share_url` cannot be turned into an export link.
    pub fn new(share_url: &str) -> Result<Self, SourceError> {
        Ok(Self {
            client: Client::new(),
            share_url: share_url.to_string(),
            export_url: export_url(share_url)?,
        })
    }

    #[must_use]
    pub fn export_url(&self) -> &Url {
        &self.export_url
    }
}

#[async_trait]
impl WordSource for SheetSource {
    async fn load_words(&self) -> Result<Vec<WordEntry>, SourceError> {
        info!(url = %self.export_url, "fetching word sheet");
        let response = self.client.get(self.export_url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let entries = parse_entries(body.as_ref())?;
        info!(count = entries.len(), "loaded words from sheet");
        Ok(entries)
    }

    fn describe(&self) -> String {
        format!("Google Sheet {}", self.share_url)
    }
}
