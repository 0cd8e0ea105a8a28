use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Vocabulary Quiz" }
                nav {
                    Link { to: Route::Home {}, "Home" }
                    Link { to: Route::Quiz {}, "Quiz" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
