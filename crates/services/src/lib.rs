#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod shuffle;
pub mod word_cache;

pub use vocab_core::Clock;

pub use error::QuizServiceError;
pub use quiz::{AdvanceOutcome, AnswerFeedback, QuizProgress, QuizReport, QuizService};
pub use shuffle::Shuffle;
pub use word_cache::{DEFAULT_CACHE_TTL_SECS, WordCache};
