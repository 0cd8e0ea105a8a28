use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordEntryError {
    #[error("word must not be empty")]
    EmptyWord,

    #[error("meaning must not be empty")]
    EmptyMeaning,
}

/// A single word/meaning pair from the word list.
///
/// Both fields are trimmed on construction and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordEntry {
    word: String,
    meaning: String,
}

impl WordEntry {
    /// # Errors
    ///
    /// Returns `WordEntryError` if either field is blank after trimming.
    pub fn new(word: impl AsRef<str>, meaning: impl AsRef<str>) -> Result<Self, WordEntryError> {
        let word = word.as_ref().trim();
        if word.is_empty() {
            return Err(WordEntryError::EmptyWord);
        }
        let meaning = meaning.as_ref().trim();
        if meaning.is_empty() {
            return Err(WordEntryError::EmptyMeaning);
        }

        Ok(Self {
            word: word.to_owned(),
            meaning: meaning.to_owned(),
        })
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }
}
