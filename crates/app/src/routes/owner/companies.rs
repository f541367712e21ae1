//! Company roster for the owner. The same panel backs the Companies and
//! Blocked tabs; the blocked view is a filter over the one list. Status
//! toggles apply optimistically and roll back on failure.

use super::StatsResource;
use crate::api;
use crate::notify;
use crate::optimistic;
use dioxus::prelude::*;
use shared_types::Company;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, Card,
    CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, DialogContent, DialogDescription, DialogRoot, DialogTitle, Input, PageHeader,
    PageTitle, SearchBar, Skeleton, avatar_initials, use_toast,
};

#[component]
pub fn CompaniesPanel(stats: StatsResource, blocked_only: bool) -> Element {
    let toast = use_toast();
    let mut rows = use_signal(|| None::<Vec<Company>>);
    let mut filter = use_signal(String::new);
    let mut delete_target = use_signal(|| None::<Company>);

    use_effect(move || {
        if let Some(Ok(body)) = &*stats.read() {
            rows.set(Some(body.companies.clone()));
        }
    });

    let toggle = move |company: Company| {
        let Some(current) = rows.read().clone() else {
            return;
        };
        let next_active = !company.is_active;
        let (next, snapshot) = optimistic::patched(
            &current,
            |c| c.slug == company.slug,
            |c| c.is_active = next_active,
        );
        rows.set(Some(next));

        spawn(async move {
            match api::owner::set_company_status(&company.slug, next_active).await {
                Ok(resp) => notify::success(toast, resp.message),
                Err(e) => {
                    rows.set(Some(snapshot));
                    notify::failure(toast, &e);
                }
            }
        });
    };

    let title = if blocked_only { "Blocked" } else { "Companies" };

    rsx! {
        PageHeader {
            PageTitle { "{title}" }
        }

        SearchBar {
            Input {
                value: filter.read().clone(),
                placeholder: "Search by name or slug...",
                on_input: move |e: FormEvent| filter.set(e.value().to_string()),
            }
        }

        match &*rows.read() {
            Some(list) => {
                let needle = filter.read().to_lowercase();
                let visible: Vec<Company> = list
                    .iter()
                    .filter(|c| !blocked_only || !c.is_active)
                    .filter(|c| {
                        c.name.to_lowercase().contains(&needle)
                            || c.slug.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect();
                rsx! {
                    if visible.is_empty() {
                        Card {
                            CardContent {
                                p { class: "empty-note",
                                    if blocked_only {
                                        "No blocked companies."
                                    } else {
                                        "No companies match."
                                    }
                                }
                            }
                        }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Company" }
                                DataTableColumn { "Industry" }
                                DataTableColumn { "Status" }
                                DataTableColumn { "Actions" }
                            }
                            DataTableBody {
                                for company in visible {
                                    CompanyRow {
                                        company: company.clone(),
                                        on_toggle: toggle,
                                        on_delete: move |c| delete_target.set(Some(c)),
                                    }
                                }
                            }
                        }
                    }
                }
            }
            None => match &*stats.read() {
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-note", "{e.friendly_message()}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: {
                                    let mut stats = stats;
                                    move |_| stats.restart()
                                },
                                "Retry"
                            }
                        }
                    }
                },
                _ => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            },
        }

        if let Some(company) = delete_target() {
            DeleteCompanyDialog {
                company: company,
                on_close: move |_| delete_target.set(None),
                on_deleted: {
                    let mut stats = stats;
                    move |_| stats.restart()
                },
            }
        }
    }
}

#[component]
fn CompanyRow(
    company: Company,
    on_toggle: EventHandler<Company>,
    on_delete: EventHandler<Company>,
) -> Element {
    let status_variant = if company.is_active {
        BadgeVariant::Success
    } else {
        BadgeVariant::Destructive
    };
    let status_label = if company.is_active { "Active" } else { "Blocked" };
    let toggle_label = if company.is_active { "Block" } else { "Unblock" };

    let for_toggle = company.clone();
    let for_delete = company.clone();

    rsx! {
        DataTableRow {
            DataTableCell { label: "Company",
                div { class: "member-cell",
                    Avatar {
                        if let Some(logo) = company.logo_url.as_ref() {
                            AvatarImage { src: logo.clone() }
                        }
                        AvatarFallback { {avatar_initials(&company.name)} }
                    }
                    div {
                        div { "{company.name}" }
                        div { class: "stat-label", "{company.slug}" }
                    }
                }
            }
            DataTableCell { label: "Industry", "{company.industry}" }
            DataTableCell { label: "Status",
                Badge { variant: status_variant, "{status_label}" }
            }
            DataTableCell { label: "Actions",
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_toggle.call(for_toggle.clone()),
                        "{toggle_label}"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_delete.call(for_delete.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteCompanyDialog(
    company: Company,
    on_close: EventHandler<()>,
    on_deleted: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut submitting = use_signal(|| false);

    let slug = company.slug.clone();
    let handle_confirm = move |_| {
        let slug = slug.clone();
        spawn(async move {
            submitting.set(true);
            match api::owner::delete_company(&slug).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    on_deleted.call(());
                    on_close.call(());
                }
                Err(e) => notify::failure(toast, &e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Delete {company.name}" }
                DialogDescription {
                    "The company and all of its members, attendance, and applications will be removed. This cannot be undone."
                }
                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: submitting(),
                        onclick: handle_confirm,
                        if submitting() { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
