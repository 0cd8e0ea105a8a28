use std::sync::Arc;

use services::{AdvanceOutcome, Clock, QuizService, Shuffle};
use sources::Sources;
use vocab_core::time::fixed_now;

const DECK: &str = "word,meaning\nabandon,버리다\nbenefit,이익\ncourage,용기\ndebate,토론\n";

#[tokio::test]
async fn quiz_loop_runs_to_completion() {
    let sources = Sources::embedded("smoke deck", DECK);
    let svc = QuizService::new(Clock::fixed(fixed_now()), Arc::clone(&sources.words))
        .with_shuffle(Shuffle::Seeded(42));

    let mut session = svc.start_quiz().await.unwrap();
    assert_eq!(session.len(), 4);

    let mut turn = 0;
    loop {
        let answer = if turn % 2 == 0 {
            session.current_question().unwrap().word().to_uppercase()
        } else {
            "wrong".to_string()
        };
        let feedback = svc.answer(&mut session, &answer).unwrap();
        assert_eq!(feedback.correct, turn % 2 == 0);
        turn += 1;

        match svc.advance(&mut session).unwrap() {
            AdvanceOutcome::Next => assert!(!feedback.is_last),
            AdvanceOutcome::Finished => {
                assert!(feedback.is_last);
                break;
            }
        }
    }

    let report = svc.report(&session);
    assert_eq!(report.score, 2);
    assert_eq!(report.mistakes.len(), 2);
    assert!(report.mistakes.iter().all(|m| m.given_answer == "wrong"));
    assert_eq!(svc.progress(&session).fraction, 1.0);
}

#[tokio::test]
async fn seeded_services_agree_on_order() {
    let sources = Sources::embedded("smoke deck", DECK);
    let a = QuizService::new(Clock::fixed(fixed_now()), Arc::clone(&sources.words))
        .with_shuffle(Shuffle::Seeded(5));
    let b = QuizService::new(Clock::fixed(fixed_now()), Arc::clone(&sources.words))
        .with_shuffle(Shuffle::Seeded(5));

    let first = a.start_quiz().await.unwrap();
    let second = b.start_quiz().await.unwrap();
    assert_eq!(first.entries(), second.entries());
}
