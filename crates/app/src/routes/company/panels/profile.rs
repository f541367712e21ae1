use crate::format_helpers::format_salary;
use crate::routes::company::dashboard::DashboardResource;
use dioxus::prelude::*;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, PageTitle, Skeleton, avatar_initials,
};

/// The signed-in member's own roster entry.
#[component]
pub fn ProfilePanel(data: DashboardResource, email: String) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "My Profile" }
        }

        match &*data.read() {
            Some(Ok(dash)) => match dash.member_by_email(&email) {
                Some(member) => {
                    let member = member.clone();
                    let role_label = member.role.map(|r| r.label()).unwrap_or("Member");
                    rsx! {
                        Card {
                            CardHeader {
                                div { class: "member-cell",
                                    Avatar {
                                        if let Some(pic) = member.profile_pic.as_ref() {
                                            AvatarImage { src: pic.clone() }
                                        }
                                        AvatarFallback { {avatar_initials(&member.name)} }
                                    }
                                    div {
                                        CardTitle { "{member.name}" }
                                        CardDescription { "{member.email}" }
                                    }
                                    Badge { variant: BadgeVariant::Info, "{role_label}" }
                                }
                            }
                            CardContent {
                                div { class: "profile-grid",
                                    if let Some(position) = member.position.as_ref() {
                                        div {
                                            span { class: "profile-field-label", "Position" }
                                            "{position}"
                                        }
                                    }
                                    if let Some(salary) = member.salary {
                                        div {
                                            span { class: "profile-field-label", "Salary" }
                                            {format_salary(salary)}
                                        }
                                    }
                                    if let Some(phone) = member.phone.as_ref() {
                                        div {
                                            span { class: "profile-field-label", "Phone" }
                                            "{phone}"
                                        }
                                    }
                                    if let Some(status) = member.status {
                                        div {
                                            span { class: "profile-field-label", "Status" }
                                            "{status.label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                None => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-note", "Your profile could not be found on the roster." }
                        }
                    }
                },
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
