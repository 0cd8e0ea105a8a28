#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;
pub mod time;

pub use error::QuizError;
pub use model::{Hint, Mistake, WordEntry, WordEntryError};
pub use quiz::{QuizPhase, QuizSession, SubmitOutcome, normalize_answer};
pub use time::Clock;
