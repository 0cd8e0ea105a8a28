mod progress;
mod report;
mod service;

// Public API of the quiz subsystem.
pub use crate::error::QuizServiceError;
pub use progress::QuizProgress;
pub use report::QuizReport;
pub use service::{AdvanceOutcome, AnswerFeedback, QuizService};
