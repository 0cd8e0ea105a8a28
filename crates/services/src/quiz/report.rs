use vocab_core::{Mistake, QuizSession};

/// Final results of a quiz: score and the review list of missed words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    /// Score as a whole percentage, rounded down.
    pub percent: u32,
    pub mistakes: Vec<Mistake>,
}

impl QuizReport {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        let score = session.score();
        let total = session.len();
        let percent = u32::try_from(score * 100 / total.max(1)).unwrap_or(100);

        Self {
            score,
            total,
            percent,
            mistakes: session.mistakes().to_vec(),
        }
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.mistakes.is_empty() && self.score == self.total
    }
}
