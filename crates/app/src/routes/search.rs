use crate::api;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::Company;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Input, PageHeader, PageTitle, SearchBar, Skeleton, avatar_initials,
};

/// Public directory of active companies with a client-side name filter.
#[component]
pub fn CompanySearchPage() -> Element {
    let mut filter = use_signal(String::new);

    let data = use_resource(move || async move {
        match api::public::list_companies().await {
            Ok(body) => Some(body.companies),
            Err(_) => None,
        }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Find your company" }
            }

            SearchBar {
                Input {
                    value: filter.read().clone(),
                    placeholder: "Filter by company name...",
                    on_input: move |e: FormEvent| filter.set(e.value().to_string()),
                }
            }

            match &*data.read() {
                Some(Some(companies)) => {
                    let needle = filter.read().to_lowercase();
                    let visible: Vec<Company> = companies
                        .iter()
                        .filter(|c| c.is_active && c.name.to_lowercase().contains(&needle))
                        .cloned()
                        .collect();
                    rsx! {
                        if visible.is_empty() {
                            Card {
                                CardContent {
                                    p { class: "empty-note", "No companies match that name." }
                                }
                            }
                        } else {
                            div { class: "company-grid",
                                for company in visible {
                                    CompanyCard { company: company }
                                }
                            }
                        }
                    }
                }
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-note", "Could not load the company directory." }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

#[component]
fn CompanyCard(company: Company) -> Element {
    let slug = company.slug.clone();

    rsx! {
        Link { to: Route::CompanyGate { slug: slug },
            Card {
                CardHeader {
                    div { class: "member-cell",
                        Avatar {
                            if let Some(url) = company.logo_url.as_ref() {
                                AvatarImage { src: url.clone() }
                            }
                            AvatarFallback { {avatar_initials(&company.name)} }
                        }
                        div {
                            CardTitle { "{company.name}" }
                            CardDescription { "{company.industry}" }
                        }
                    }
                }
                CardContent {
                    Badge { variant: BadgeVariant::Info, "{company.slug}" }
                }
            }
        }
    }
}
