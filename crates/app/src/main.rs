use dioxus::prelude::*;

mod auth;
mod config;
mod hooks;
mod routes;

use auth::{AuthClient, LocalSession};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load_config);

    use_context_provider(|| config.dashboard.clone());

    // The local session stands in for the external auth provider.
    let session = use_context_provider(|| LocalSession::new(config.session.initial_user()));
    use_context_provider(|| AuthClient::new(session));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
