use crate::api;
use dioxus::prelude::*;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageHeader, PageTitle, Skeleton, avatar_initials,
};

#[component]
pub fn OwnerProfilePanel() -> Element {
    let profile = use_resource(|| async move { api::owner::profile().await });

    rsx! {
        PageHeader {
            PageTitle { "Profile" }
        }

        match &*profile.read() {
            Some(Ok(body)) => rsx! {
                Card {
                    CardHeader {
                        div { class: "member-cell",
                            Avatar {
                                if let Some(pic) = body.owner.profile_pic.as_ref() {
                                    AvatarImage { src: pic.clone() }
                                }
                                AvatarFallback { {avatar_initials(&body.owner.name)} }
                            }
                            div {
                                CardTitle { "{body.owner.name}" }
                                CardDescription { "{body.owner.email}" }
                            }
                        }
                    }
                    CardContent {
                        p { class: "empty-note", "Platform owner account." }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    CardContent {
                        p { class: "empty-note", "{e.friendly_message()}" }
                    }
                }
            },
            None => rsx! {
                div { class: "loading",
                    Skeleton {}
                    Skeleton {}
                }
            },
        }
    }
}
