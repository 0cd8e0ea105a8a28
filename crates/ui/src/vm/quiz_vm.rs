use services::{AdvanceOutcome, AnswerFeedback, QuizProgress, QuizService};
use vocab_core::{Hint, QuizSession};

use crate::views::ViewError;
use crate::vm::results_vm::{ResultsVm, map_results};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    RevealHint,
    Submit,
    Next,
    Restart,
}

/// Which part of the quiz page is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    /// Meaning shown, waiting for an answer.
    Question,
    /// Answer graded; showing right/wrong before moving on.
    Feedback,
    /// All questions done.
    Results,
}

pub struct QuizVm {
    session: QuizSession,
    hint: Option<Hint>,
    feedback: Option<AnswerFeedback>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            hint: None,
            feedback: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        if self.session.is_finished() {
            QuizScreen::Results
        } else if self.feedback.is_some() {
            QuizScreen::Feedback
        } else {
            QuizScreen::Question
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn meaning(&self) -> Option<&str> {
        self.session.current_question().ok().map(|entry| entry.meaning())
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::of(&self.session)
    }

    #[must_use]
    pub fn question_label(&self) -> String {
        let progress = self.progress();
        let number = (progress.position + 1).min(progress.total);
        format!("Question {number} / {}", progress.total)
    }

    /// Answered and still-open counts, e.g. "1 answered, 2 to go".
    #[must_use]
    pub fn tally_label(&self) -> String {
        let progress = self.progress();
        let to_go = progress.total - progress.answered;
        format!("{} answered, {to_go} to go", progress.answered)
    }

    /// Progress as a whole percentage for the progress bar.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_percent(&self) -> u32 {
        (self.progress().fraction * 100.0).round() as u32
    }

    #[must_use]
    pub fn hint_label(&self) -> Option<String> {
        if !self.session.hint_revealed() {
            return None;
        }
        self.hint.as_ref().map(|hint| {
            let unit = if hint.char_count == 1 { "letter" } else { "letters" };
            format!("Hint: {} ({} {unit})", hint.masked, hint.char_count)
        })
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    /// Label for the button that leaves the feedback screen. The last question
    /// asks for an explicit confirmation before showing results.
    #[must_use]
    pub fn advance_label(&self) -> &'static str {
        match &self.feedback {
            Some(feedback) if feedback.is_last => "See final results",
            _ => "Next question",
        }
    }

    #[must_use]
    pub fn results(&self, quiz: &QuizService) -> Option<ResultsVm> {
        self.progress()
            .is_complete
            .then(|| map_results(&quiz.report(&self.session)))
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the quiz is already over.
    pub fn reveal_hint(&mut self, quiz: &QuizService) -> Result<(), ViewError> {
        if self.screen() != QuizScreen::Question {
            return Ok(());
        }
        let hint = quiz
            .reveal_hint(&mut self.session)
            .map_err(|err| ViewError::from_service(&err))?;
        self.hint = Some(hint);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the current question cannot take an answer.
    pub fn submit(&mut self, quiz: &QuizService, raw_answer: &str) -> Result<(), ViewError> {
        if self.screen() != QuizScreen::Question {
            return Ok(());
        }
        let feedback = quiz
            .answer(&mut self.session, raw_answer)
            .map_err(|err| ViewError::from_service(&err))?;
        self.hint = None;
        self.feedback = Some(feedback);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if there is no graded question to move past.
    pub fn next(&mut self, quiz: &QuizService) -> Result<Option<AdvanceOutcome>, ViewError> {
        if self.screen() != QuizScreen::Feedback {
            return Ok(None);
        }
        let outcome = quiz
            .advance(&mut self.session)
            .map_err(|err| ViewError::from_service(&err))?;
        self.hint = None;
        self.feedback = None;
        Ok(Some(outcome))
    }
}

/// # Errors
///
/// Returns `ViewError::EmptySource` when the word list has no rows,
/// `ViewError::SourceUnavailable` when it cannot be loaded.
pub async fn start_quiz(quiz: &QuizService) -> Result<QuizVm, ViewError> {
    let session = quiz
        .start_quiz()
        .await
        .map_err(|err| ViewError::from_service(&err))?;
    Ok(QuizVm::new(session))
}

/// Start over from `session`, reloading words when the cached list has expired.
pub async fn restart_quiz(quiz: &QuizService, session: QuizSession) -> QuizVm {
    QuizVm::new(quiz.restart(session).await)
}
