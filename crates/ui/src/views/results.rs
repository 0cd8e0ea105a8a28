use dioxus::prelude::*;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsPanel(results: ResultsVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        section { class: "results", id: "quiz-results",
            h3 { "Quiz finished" }
            div { class: "results__metric",
                span { class: "results__metric-label", "Score" }
                span { class: "results__metric-value", "{results.score_label}" }
                span { class: "results__metric-percent", "{results.percent_label}" }
            }
            p { class: "results__headline", "{results.headline}" }

            if results.has_mistakes() {
                h4 { "Words to review" }
                table { class: "results__mistakes",
                    thead {
                        tr {
                            th { "Meaning" }
                            th { "Answer" }
                            th { "Your answer" }
                        }
                    }
                    tbody {
                        for (idx, row) in results.mistakes.iter().enumerate() {
                            tr { key: "{idx}",
                                td { "{row.meaning}" }
                                td { class: "results__expected", "{row.expected_word}" }
                                td { class: "results__given", "{row.given_answer}" }
                            }
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Restart with a new order"
            }
        }
    }
}
