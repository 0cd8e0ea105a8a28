use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq, Eq)]
struct HomeData {
    word_count: usize,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_service();
    let source_label = ctx.source_label().to_string();
    let empty_message = ViewError::EmptySource.message();

    let mut resource = use_resource(move || {
        let quiz = quiz.clone();
        async move {
            let words = quiz
                .load_words()
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok::<_, ViewError>(HomeData {
                word_count: words.len(),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page home-page",
            h2 { "English Vocabulary Test" }
            p { class: "home-source", "Words from: {source_label}" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.word_count == 0 {
                        p { "{empty_message}" }
                    } else {
                        p { class: "home-count", "{data.word_count} words ready" }
                        p { "Each meaning is shown once, in a random order. Type the English word." }
                        Link { class: "btn btn-primary", to: Route::Quiz {}, "Start quiz" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
            }
        }
    }
}
