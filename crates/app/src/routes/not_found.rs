use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div { class: "status-screen",
            h1 { "Page not found" }
            p { "No page exists at /{path}." }
            Link { to: Route::Home {},
                Button { variant: ButtonVariant::Secondary, "Back to home" }
            }
        }
    }
}
