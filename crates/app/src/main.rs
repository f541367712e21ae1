use dioxus::prelude::*;

mod api;
mod auth;
mod config;
mod credentials;
mod format_helpers;
mod nav;
mod notify;
mod optimistic;
mod routes;
mod session;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::theme::ThemeProvider {
            shared_ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
