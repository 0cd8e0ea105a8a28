//! Maps a CSV word table onto `WordEntry` values.
//!
//! The first row is the header. It must name a `word` and a `meaning` column
//! (any case, any position); other columns are ignored.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};
use vocab_core::WordEntry;

use crate::source::SourceError;

pub const WORD_COLUMN: &str = "word";
pub const MEANING_COLUMN: &str = "meaning";

/// Parse every usable row of a CSV word table.
///
/// Rows with a blank word or meaning are skipped.
///
/// # Errors
///
/// Returns `SourceError::MissingColumn` if the header lacks a required column,
/// or `SourceError::Csv` for malformed input.
pub fn parse_entries<R: Read>(reader: R) -> Result<Vec<WordEntry>, SourceError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let word_col = find_column(&headers, WORD_COLUMN)?;
    let meaning_col = find_column(&headers, MEANING_COLUMN)?;

    let mut entries = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        // +2: one for the header, one for 1-based row numbers.
        let row = index + 2;
        let word = record.get(word_col).unwrap_or_default();
        let meaning = record.get(meaning_col).unwrap_or_default();

        match WordEntry::new(word, meaning) {
            Ok(entry) => entries.push(entry),
            Err(_) if word.is_empty() && meaning.is_empty() => {
                debug!(row, "skipping empty row");
            }
            Err(err) => {
                warn!(row, %err, "skipping incomplete word row");
            }
        }
    }

    Ok(entries)
}

fn find_column(headers: &StringRecord, name: &'static str) -> Result<usize, SourceError> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
        .ok_or(SourceError::MissingColumn(name))
}
