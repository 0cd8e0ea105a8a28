/// A wrong submission, kept for the review list at the end of a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mistake {
    pub meaning: String,
    pub expected_word: String,
    /// Exactly what was typed, before normalization.
    pub given_answer: String,
}
