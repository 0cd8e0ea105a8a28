use vocab_core::QuizSession;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizProgress {
    pub total: usize,
    pub position: usize,
    pub answered: usize,
    pub remaining: usize,
    pub fraction: f64,
    pub is_complete: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        Self {
            total: session.len(),
            position: session.position(),
            answered: session.score() + session.mistakes().len(),
            remaining: session.len().saturating_sub(session.position()),
            fraction: session.progress_fraction(),
            is_complete: session.is_finished(),
        }
    }
}
