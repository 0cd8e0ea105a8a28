use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, QuizService, Shuffle};
use sources::{SourceError, Sources, WordSource};
use vocab_core::WordEntry;
use vocab_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, QuizView};

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

/// Source that always fails, standing in for an unreachable sheet.
pub struct FailingSource;

#[async_trait]
impl WordSource for FailingSource {
    async fn load_words(&self) -> Result<Vec<WordEntry>, SourceError> {
        Err(SourceError::Unavailable("offline".to_string()))
    }

    fn describe(&self) -> String {
        "unreachable sheet".to_string()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz: Arc<QuizService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources resolve and re-render.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn entries(words: &[(&str, &str)]) -> Vec<WordEntry> {
    words
        .iter()
        .map(|(word, meaning)| WordEntry::new(word, meaning).expect("valid entry"))
        .collect()
}

pub fn setup_view_harness(view: ViewKind, words: &[(&str, &str)]) -> ViewHarness {
    let sources = Sources::in_memory(entries(words));
    setup_view_harness_with_source(view, Arc::clone(&sources.words))
}

pub fn setup_view_harness_with_source(view: ViewKind, source: Arc<dyn WordSource>) -> ViewHarness {
    let quiz = Arc::new(
        QuizService::new(Clock::fixed(fixed_now()), source).with_shuffle(Shuffle::Preserve),
    );
    let app = Arc::new(TestApp {
        quiz: Arc::clone(&quiz),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, quiz }
}
