use std::sync::Arc;

use dioxus::prelude::*;

use super::test_harness::{
    FailingSource, ViewKind, drive_dom, setup_view_harness, setup_view_harness_with_source,
};
use crate::views::ResultsPanel;
use crate::vm::{MistakeRowVm, ResultsVm};

const DECK: &[(&str, &str)] = &[("dog", "개"), ("cat", "고양이")];

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_word_count() {
    let mut harness = setup_view_harness(ViewKind::Home, DECK);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("English Vocabulary Test"), "missing title in {html}");
    assert!(html.contains("2 words ready"), "missing count in {html}");
    assert!(html.contains("Words from: in-memory word list"), "missing source in {html}");
    assert!(html.contains("Start quiz"), "missing start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_source() {
    let mut harness = setup_view_harness(ViewKind::Home, &[]);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("No words found"), "missing empty state in {html}");
    assert!(!html.contains("Start quiz"), "start link should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, DECK);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "missing counter in {html}");
    assert!(html.contains("0 answered, 2 to go"), "missing tally in {html}");
    assert!(html.contains("개"), "missing meaning in {html}");
    assert!(html.contains("Show hint"), "missing hint button in {html}");
    assert!(html.contains("Check answer"), "missing submit button in {html}");
    assert!(!html.contains("Quiz finished"), "results shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_source() {
    let mut harness = setup_view_harness(ViewKind::Quiz, &[]);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("No words found"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_source_failure() {
    let mut harness = setup_view_harness_with_source(ViewKind::Quiz, Arc::new(FailingSource));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Could not load"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[component]
fn ResultsHarness(results: ResultsVm) -> Element {
    rsx! {
        ResultsPanel { results, on_restart: move |()| {} }
    }
}

#[test]
fn results_panel_smoke_renders_mistake_rows() {
    let results = ResultsVm {
        score_label: "1 / 2".to_string(),
        percent_label: "50%".to_string(),
        headline: "Good effort. Review the words below.",
        mistakes: vec![MistakeRowVm {
            meaning: "고양이".to_string(),
            expected_word: "cat".to_string(),
            given_answer: "dog".to_string(),
        }],
    };
    let mut dom = VirtualDom::new_with_props(ResultsHarness, ResultsHarnessProps { results });
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("1 / 2"), "missing score in {html}");
    assert!(html.contains("Your answer"), "missing table header in {html}");
    assert!(html.contains("고양이"), "missing meaning in {html}");
    assert!(html.contains("cat"), "missing expected word in {html}");
    assert!(html.contains("Restart with a new order"), "missing restart in {html}");
}
