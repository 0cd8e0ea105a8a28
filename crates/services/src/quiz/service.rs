use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use sources::WordSource;
use tracing::{debug, info, warn};
use vocab_core::{Clock, Hint, QuizSession, WordEntry};

use super::progress::QuizProgress;
use super::report::QuizReport;
use crate::error::QuizServiceError;
use crate::shuffle::{Shuffle, Shuffler};
use crate::word_cache::WordCache;

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

/// What the UI needs to show right after an answer is graded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub expected_word: String,
    pub given_answer: String,
    /// The graded question was the final one; the next advance finishes the quiz.
    pub is_last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next,
    Finished,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Loads words from the configured source and drives quiz sessions.
///
/// Sessions are plain values owned by the caller; the service only holds the
/// word cache and the shuffle policy.
pub struct QuizService {
    clock: Clock,
    source: Arc<dyn WordSource>,
    cache: WordCache,
    shuffler: Shuffler,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn WordSource>) -> Self {
        Self {
            clock,
            source,
            cache: WordCache::default(),
            shuffler: Shuffler::new(Shuffle::Random),
        }
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: Shuffle) -> Self {
        self.shuffler = Shuffler::new(shuffle);
        self
    }

    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = WordCache::new(ttl);
        self
    }

    #[must_use]
    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// Load the word list, reusing the cached copy while it is fresh.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Source` if the source cannot be read.
    pub async fn load_words(&self) -> Result<Vec<WordEntry>, QuizServiceError> {
        let now = self.clock.now();
        if let Some(words) = self.cache.get(now) {
            debug!(count = words.len(), "using cached word list");
            return Ok(words);
        }

        let words = self.source.load_words().await?;
        info!(
            count = words.len(),
            source = %self.source.describe(),
            "loaded word list"
        );
        self.cache.store(words.clone(), now);
        Ok(words)
    }

    /// Drop the cached word list so the next load reads the source again.
    pub fn refresh(&self) {
        debug!("word cache invalidated");
        self.cache.invalidate();
    }

    /// Load words and start a freshly shuffled session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz(QuizError::EmptySource)` if the source has no
    /// usable rows, or `QuizServiceError::Source` if loading fails.
    pub async fn start_quiz(&self) -> Result<QuizSession, QuizServiceError> {
        let words = self.load_words().await?;
        let session = QuizSession::new(words, |order| self.shuffler.apply(order))?;
        info!(
            questions = session.len(),
            shuffle = ?self.shuffler.mode(),
            "quiz started"
        );
        Ok(session)
    }

    /// Reveal the hint for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the session is already finished.
    pub fn reveal_hint(&self, session: &mut QuizSession) -> Result<Hint, QuizServiceError> {
        let hint = session.reveal_hint()?;
        debug!(position = session.position(), "hint revealed");
        Ok(hint)
    }

    /// Grade an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the session is finished or the question
    /// was already graded.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        raw_answer: &str,
    ) -> Result<AnswerFeedback, QuizServiceError> {
        let outcome = session.submit_answer(raw_answer)?;
        let expected_word = session.current_question()?.word().to_owned();
        debug!(
            position = session.position(),
            correct = outcome.correct,
            score = session.score(),
            "answer graded"
        );

        Ok(AnswerFeedback {
            correct: outcome.correct,
            expected_word,
            given_answer: raw_answer.to_owned(),
            is_last: session.is_last_question(),
        })
    }

    /// Move past a graded question.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the question was not graded yet or the
    /// session is already finished.
    pub fn advance(&self, session: &mut QuizSession) -> Result<AdvanceOutcome, QuizServiceError> {
        session.advance()?;

        if session.is_finished() {
            info!(
                score = session.score(),
                total = session.len(),
                mistakes = session.mistakes().len(),
                "quiz finished"
            );
            Ok(AdvanceOutcome::Finished)
        } else {
            Ok(AdvanceOutcome::Next)
        }
    }

    /// Replace `session` with a freshly shuffled one.
    ///
    /// Words come through the cache, so a restart after the TTL picks up edits
    /// to the source. If the reload fails or comes back empty, the old session's
    /// words are reshuffled instead.
    pub async fn restart(&self, session: QuizSession) -> QuizSession {
        let fresh = match self.load_words().await {
            Ok(words) => QuizSession::new(words, |order| self.shuffler.apply(order)).ok(),
            Err(err) => {
                warn!(%err, "reload failed on restart");
                None
            }
        };
        let fresh = match fresh {
            Some(fresh) => fresh,
            None => session.reset(|order| self.shuffler.apply(order)),
        };
        info!(questions = fresh.len(), "quiz restarted");
        fresh
    }

    #[must_use]
    pub fn progress(&self, session: &QuizSession) -> QuizProgress {
        QuizProgress::of(session)
    }

    #[must_use]
    pub fn report(&self, session: &QuizSession) -> QuizReport {
        QuizReport::of(session)
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("clock", &self.clock)
            .field("source", &self.source.describe())
            .field("cache_ttl", &self.cache.ttl())
            .field("shuffle", &self.shuffler.mode())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
