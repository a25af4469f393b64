use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{QuizView, ThemeToggle};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { class: "brand", "Quiz Generator" }
                ThemeToggle {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
