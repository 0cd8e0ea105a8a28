//! Shared error types for the services crate.

use thiserror::Error;

use sources::SourceError;
use vocab_core::QuizError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl QuizServiceError {
    /// True when the word list loaded fine but had nothing to quiz on.
    #[must_use]
    pub fn is_empty_source(&self) -> bool {
        matches!(self, Self::Quiz(QuizError::EmptySource))
    }
}
