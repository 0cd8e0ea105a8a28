use std::fmt;

use crate::error::QuizError;
use crate::model::{Hint, Mistake, WordEntry};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where a session sits in the question/answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for an answer to the current question.
    InProgress,
    /// The current question was graded; `advance` moves on.
    AwaitingAdvance,
    /// Every question was answered and the final advance happened.
    Finished,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizPhase::InProgress => "in progress",
            QuizPhase::AwaitingAdvance => "awaiting advance",
            QuizPhase::Finished => "finished",
        };
        f.write_str(label)
    }
}

/// Result of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub correct: bool,
}

/// Trims surrounding whitespace and lower-cases, the only normalization applied
/// before comparing an answer with the expected word.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a shuffled word list.
///
/// The order is fixed at construction. Each question goes through
/// `submit_answer` then `advance`; the last `advance` finishes the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    order: Vec<WordEntry>,
    position: usize,
    score: usize,
    hint_revealed: bool,
    mistakes: Vec<Mistake>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Create a session over `entries`, letting `shuffle` reorder them once.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptySource` if `entries` is empty.
    pub fn new<F>(entries: Vec<WordEntry>, shuffle: F) -> Result<Self, QuizError>
    where
        F: FnOnce(&mut [WordEntry]),
    {
        if entries.is_empty() {
            return Err(QuizError::EmptySource);
        }

        let mut order = entries;
        shuffle(&mut order);

        Ok(Self {
            order,
            position: 0,
            score: 0,
            hint_revealed: false,
            mistakes: Vec::new(),
            phase: QuizPhase::InProgress,
        })
    }

    /// Discard this session and start over on the same entries with a new shuffle.
    #[must_use]
    pub fn reset<F>(self, shuffle: F) -> Self
    where
        F: FnOnce(&mut [WordEntry]),
    {
        let mut order = self.order;
        shuffle(&mut order);

        Self {
            order,
            position: 0,
            score: 0,
            hint_revealed: false,
            mistakes: Vec::new(),
            phase: QuizPhase::InProgress,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of questions in this session. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn mistakes(&self) -> &[Mistake] {
        &self.mistakes
    }

    #[must_use]
    pub fn hint_revealed(&self) -> bool {
        self.hint_revealed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    /// The shuffled entries, in question order.
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.order
    }

    /// True while the current question is the final one.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.is_finished() && self.position + 1 == self.order.len()
    }

    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` once the session is finished.
    pub fn current_question(&self) -> Result<&WordEntry, QuizError> {
        self.order.get(self.position).ok_or(QuizError::OutOfRange {
            position: self.position,
            len: self.order.len(),
        })
    }

    /// Reveal the hint for the current word. Repeated calls return the same hint.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` once the session is finished.
    pub fn reveal_hint(&mut self) -> Result<Hint, QuizError> {
        let hint = Hint::for_word(self.current_question()?.word());
        self.hint_revealed = true;
        Ok(hint)
    }

    /// Grade `raw_answer` against the current word without moving on.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::State` if the session is finished or the current
    /// question was already graded.
    pub fn submit_answer(&mut self, raw_answer: &str) -> Result<SubmitOutcome, QuizError> {
        self.require_phase("submit an answer", QuizPhase::InProgress)?;

        let current = self.current_question()?;
        let correct = normalize_answer(raw_answer) == normalize_answer(current.word());
        if correct {
            self.score += 1;
        } else {
            let mistake = Mistake {
                meaning: current.meaning().to_owned(),
                expected_word: current.word().to_owned(),
                given_answer: raw_answer.to_owned(),
            };
            self.mistakes.push(mistake);
        }

        self.hint_revealed = false;
        self.phase = QuizPhase::AwaitingAdvance;
        Ok(SubmitOutcome { correct })
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::State` if the session is finished or the current
    /// question has not been graded yet.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        self.require_phase("advance", QuizPhase::AwaitingAdvance)?;

        self.position += 1;
        self.hint_revealed = false;
        self.phase = if self.position < self.order.len() {
            QuizPhase::InProgress
        } else {
            QuizPhase::Finished
        };
        Ok(())
    }

    /// `position / len`, which is exactly 1.0 once finished.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        self.position as f64 / self.order.len() as f64
    }

    fn require_phase(&self, operation: &'static str, expected: QuizPhase) -> Result<(), QuizError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuizError::State {
                operation,
                phase: self.phase,
            })
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, meaning: &str) -> WordEntry {
        WordEntry::new(word, meaning).unwrap()
    }

    fn identity(_: &mut [WordEntry]) {}

    fn dog_cat() -> QuizSession {
        QuizSession::new(vec![entry("dog", "개"), entry("cat", "고양이")], identity).unwrap()
    }

    fn sample(n: usize) -> Vec<WordEntry> {
        (0..n)
            .map(|i| entry(&format!("word{i}"), &format!("meaning {i}")))
            .collect()
    }

    #[test]
    fn empty_entries_are_rejected() {
        let err = QuizSession::new(Vec::new(), identity).unwrap_err();
        assert_eq!(err, QuizError::EmptySource);
    }

    #[test]
    fn new_session_starts_clean() {
        let session = dog_cat();
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.mistakes().is_empty());
        assert!(!session.hint_revealed());
        assert!(!session.is_finished());
        assert_eq!(session.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn order_is_a_permutation_of_the_input() {
        for n in 1..12 {
            let input = sample(n);
            let session = QuizSession::new(input.clone(), |order| {
                order.reverse();
                order.rotate_left(n / 2);
            })
            .unwrap();

            let mut got = session.entries().to_vec();
            let mut want = input;
            got.sort();
            want.sort();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn shuffle_is_applied_once_at_creation() {
        let session = QuizSession::new(sample(3), |order| order.reverse()).unwrap();
        assert_eq!(session.current_question().unwrap().word(), "word2");
    }

    #[test]
    fn dog_cat_scenario() {
        let mut session = dog_cat();

        let outcome = session.submit_answer("dog").unwrap();
        assert!(outcome.correct);
        assert_eq!(session.score(), 1);

        session.advance().unwrap();
        assert_eq!(session.position(), 1);

        let outcome = session.submit_answer("dog").unwrap();
        assert!(!outcome.correct);
        assert_eq!(
            session.mistakes(),
            &[Mistake {
                meaning: "고양이".into(),
                expected_word: "cat".into(),
                given_answer: "dog".into(),
            }]
        );

        session.advance().unwrap();
        assert!(session.is_finished());
        assert_eq!(session.score(), 1);
        assert_eq!(session.mistakes().len(), 1);
    }

    #[test]
    fn matching_ignores_case_and_surrounding_whitespace() {
        let mut session = QuizSession::new(vec![entry("apple", "사과")], identity).unwrap();
        assert!(session.submit_answer("  Apple ").unwrap().correct);
    }

    #[test]
    fn matching_is_not_fuzzy() {
        let mut session = QuizSession::new(vec![entry("apple", "사과")], identity).unwrap();
        assert!(!session.submit_answer("aple").unwrap().correct);
        assert_eq!(session.mistakes()[0].expected_word, "apple");
    }

    #[test]
    fn mistake_keeps_raw_answer() {
        let mut session = QuizSession::new(vec![entry("apple", "사과")], identity).unwrap();
        session.submit_answer("  Pear ").unwrap();
        assert_eq!(session.mistakes()[0].given_answer, "  Pear ");
    }

    #[test]
    fn hint_is_idempotent_and_side_effect_free() {
        let mut session = dog_cat();
        let first = session.reveal_hint().unwrap();
        let second = session.reveal_hint().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.masked, "d _ _");
        assert_eq!(first.char_count, 3);
        assert!(session.hint_revealed());
        assert_eq!(session.score(), 0);
        assert_eq!(session.position(), 0);
        assert!(session.mistakes().is_empty());
    }

    #[test]
    fn submit_and_advance_clear_the_hint() {
        let mut session = dog_cat();
        session.reveal_hint().unwrap();
        session.submit_answer("dog").unwrap();
        assert!(!session.hint_revealed());

        session.reveal_hint().unwrap();
        session.advance().unwrap();
        assert!(!session.hint_revealed());
    }

    #[test]
    fn score_plus_mistakes_tracks_position() {
        let mut session = QuizSession::new(sample(7), |order| order.swap(0, 6)).unwrap();
        let mut turn = 0;
        while !session.is_finished() {
            let answer = if turn % 3 == 0 {
                "wrong".to_string()
            } else {
                session.current_question().unwrap().word().to_uppercase()
            };
            session.submit_answer(&answer).unwrap();
            session.advance().unwrap();
            turn += 1;
            assert_eq!(session.score() + session.mistakes().len(), session.position());
        }
        assert_eq!(session.position(), session.len());
    }

    #[test]
    fn progress_is_monotonic_and_exact() {
        let mut session = QuizSession::new(sample(4), identity).unwrap();
        let mut last = session.progress_fraction();
        assert!(last.abs() < f64::EPSILON);

        while !session.is_finished() {
            session.submit_answer("x").unwrap();
            session.advance().unwrap();
            let now = session.progress_fraction();
            assert!(now >= last);
            assert!((now - session.position() as f64 / 4.0).abs() < f64::EPSILON);
            last = now;
        }
        assert!((session.progress_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn finished_session_rejects_transitions_without_changing_state() {
        let mut session = QuizSession::new(vec![entry("sun", "해")], identity).unwrap();
        session.submit_answer("moon").unwrap();
        session.advance().unwrap();
        let snapshot = session.clone();

        let submit = session.submit_answer("sun").unwrap_err();
        assert_eq!(
            submit,
            QuizError::State {
                operation: "submit an answer",
                phase: QuizPhase::Finished,
            }
        );
        assert!(matches!(session.advance(), Err(QuizError::State { .. })));
        assert_eq!(session, snapshot);
    }

    #[test]
    fn current_question_after_finish_is_out_of_range() {
        let mut session = QuizSession::new(vec![entry("sun", "해")], identity).unwrap();
        session.submit_answer("sun").unwrap();
        session.advance().unwrap();

        assert_eq!(
            session.current_question().unwrap_err(),
            QuizError::OutOfRange {
                position: 1,
                len: 1
            }
        );
        assert!(session.reveal_hint().is_err());
        assert!(!session.hint_revealed());
    }

    #[test]
    fn double_submit_and_early_advance_are_rejected() {
        let mut session = dog_cat();
        assert!(matches!(session.advance(), Err(QuizError::State { .. })));

        session.submit_answer("dog").unwrap();
        let snapshot = session.clone();
        assert!(matches!(
            session.submit_answer("dog"),
            Err(QuizError::State {
                phase: QuizPhase::AwaitingAdvance,
                ..
            })
        ));
        assert_eq!(session, snapshot);
    }

    #[test]
    fn last_question_is_flagged() {
        let mut session = dog_cat();
        assert!(!session.is_last_question());
        session.submit_answer("dog").unwrap();
        session.advance().unwrap();
        assert!(session.is_last_question());
        session.submit_answer("cat").unwrap();
        session.advance().unwrap();
        assert!(!session.is_last_question());
    }

    #[test]
    fn reset_starts_over_with_a_new_order() {
        let mut session = dog_cat();
        session.submit_answer("cow").unwrap();
        session.advance().unwrap();

        let fresh = session.reset(|order| order.reverse());
        assert_eq!(fresh.position(), 0);
        assert_eq!(fresh.score(), 0);
        assert!(fresh.mistakes().is_empty());
        assert_eq!(fresh.phase(), QuizPhase::InProgress);
        assert_eq!(fresh.current_question().unwrap().word(), "cat");
        assert_eq!(fresh.len(), 2);
    }

    #[test]
    fn normalize_answer_folds_case_and_trims() {
        assert_eq!(normalize_answer("\t Straße \n"), "straße");
        assert_eq!(normalize_answer("ÉCOLE"), "école");
    }
}
