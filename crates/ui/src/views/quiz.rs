use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ResultsPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizScreen, QuizVm, restart_quiz, start_quiz};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_service();

    let mut vm = use_signal(|| None::<QuizVm>);
    let mut answer = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);

    let mut resource = {
        let quiz = quiz.clone();
        use_resource(move || {
            let quiz = quiz.clone();
            async move {
                let loaded = start_quiz(&quiz)
                    .await
                    .inspect_err(|err| warn!(?err, "quiz could not start"))?;
                vm.set(Some(loaded));
                answer.set(String::new());
                Ok::<_, ViewError>(())
            }
        })
    };
    let state = view_state_from_resource(resource);

    let dispatch = {
        let quiz = quiz.clone();
        use_callback(move |intent: QuizIntent| {
            let mut guard = vm.write();

            if intent == QuizIntent::Restart {
                let Some(session) = guard.as_ref().map(|current| current.session().clone()) else {
                    return;
                };
                drop(guard);
                answer.set(String::new());
                error.set(None);
                let quiz = quiz.clone();
                spawn(async move {
                    vm.set(Some(restart_quiz(&quiz, session).await));
                });
                return;
            }

            let Some(current) = guard.as_mut() else {
                error.set(Some(ViewError::Unknown));
                return;
            };
            let result = match intent {
                QuizIntent::RevealHint => current.reveal_hint(&quiz),
                QuizIntent::Submit => {
                    let typed = answer.peek().clone();
                    current.submit(&quiz, &typed)
                }
                QuizIntent::Next => current.next(&quiz).map(|_| answer.set(String::new())),
                QuizIntent::Restart => Ok(()),
            };
            error.set(result.err());
        })
    };

    let on_retry = {
        let quiz = quiz.clone();
        use_callback(move |()| {
            quiz.refresh();
            error.set(None);
            resource.restart();
        })
    };

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.key() != Key::Enter {
            return;
        }
        evt.prevent_default();
        let screen = vm.read().as_ref().map(QuizVm::screen);
        match screen {
            Some(QuizScreen::Question) => dispatch.call(QuizIntent::Submit),
            Some(QuizScreen::Feedback) => dispatch.call(QuizIntent::Next),
            Some(QuizScreen::Results) | None => {}
        }
    });

    let vm_guard = vm.read();
    let screen = vm_guard.as_ref().map(QuizVm::screen);
    let meaning = vm_guard
        .as_ref()
        .and_then(QuizVm::meaning)
        .map(str::to_owned);
    let question_label = vm_guard
        .as_ref()
        .map(QuizVm::question_label)
        .unwrap_or_default();
    let tally_label = vm_guard
        .as_ref()
        .map(QuizVm::tally_label)
        .unwrap_or_default();
    let percent = vm_guard.as_ref().map_or(0, QuizVm::progress_percent);
    let hint_label = vm_guard.as_ref().and_then(QuizVm::hint_label);
    let feedback = vm_guard.as_ref().and_then(QuizVm::feedback).cloned();
    let advance_label = vm_guard.as_ref().map_or("Next question", QuizVm::advance_label);
    let results = vm_guard.as_ref().and_then(|vm| vm.results(&quiz));
    drop(vm_guard);

    let answering = screen == Some(QuizScreen::Question);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading words..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "quiz-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_retry.call(()),
                        "Retry"
                    }
                    Link { class: "btn btn-ghost", to: Route::Home {}, "Back" }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = *error.read() {
                        p { class: "quiz-error", "{err.message()}" }
                    }
                    if let Some(results) = results {
                        ResultsPanel {
                            results,
                            on_restart: move |()| dispatch.call(QuizIntent::Restart),
                        }
                    } else if let Some(meaning) = meaning {
                        progress { class: "quiz-progress", max: "100", value: "{percent}" }
                        p { class: "quiz-counter", "{question_label}" }
                        p { class: "quiz-tally", "{tally_label}" }

                        div { class: "quiz-meaning",
                            span { class: "quiz-meaning__label", "Meaning" }
                            p { class: "quiz-meaning__text", "{meaning}" }
                        }

                        if answering {
                            button {
                                class: "btn btn-ghost",
                                id: "quiz-hint",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::RevealHint),
                                "Show hint"
                            }
                        }
                        if let Some(hint) = hint_label {
                            p { class: "quiz-hint", "{hint}" }
                        }

                        input {
                            class: "quiz-answer",
                            id: "quiz-answer",
                            r#type: "text",
                            placeholder: "Type the English word",
                            autocomplete: "off",
                            disabled: !answering,
                            value: "{answer}",
                            oninput: move |evt| answer.set(evt.value()),
                            onkeydown: on_key,
                        }

                        if let Some(feedback) = feedback {
                            if feedback.correct {
                                p { class: "quiz-feedback quiz-feedback--correct", "Correct!" }
                            } else {
                                p {
                                    class: "quiz-feedback quiz-feedback--wrong",
                                    "Wrong. The answer is '{feedback.expected_word}'."
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                id: "quiz-next",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::Next),
                                "{advance_label}"
                            }
                        } else {
                            button {
                                class: "btn btn-primary",
                                id: "quiz-submit",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::Submit),
                                "Check answer"
                            }
                        }
                    } else {
                        p { "{ViewError::Unknown.message()}" }
                    }
                },
            }
        }
    }
}
