use thiserror::Error;

use crate::quiz::QuizPhase;

/// Errors returned by quiz session transitions.
///
/// A failed transition never mutates the session, so the caller can retry
/// a valid operation afterwards.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no words available to quiz on")]
    EmptySource,

    #[error("no question at position {position} (session has {len})")]
    OutOfRange { position: usize, len: usize },

    #[error("cannot {operation} while session is {phase}")]
    State {
        operation: &'static str,
        phase: QuizPhase,
    },
}
