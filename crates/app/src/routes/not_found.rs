use dioxus::prelude::*;
use shared_ui::{Card, CardDescription, CardTitle};

use crate::routes::Route;

/// Fallback for paths the router doesn't know.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        main { class: "not-found-page",
            Card { class: "not-found-card",
                span { class: "not-found-code", "404" }
                CardTitle { "Nothing here" }
                CardDescription {
                    "No page lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::Dashboard {}, class: "not-found-link", "Return to the dashboard" }
            }
        }
    }
}
