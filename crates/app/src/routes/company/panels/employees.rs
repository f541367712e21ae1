use crate::api;
use crate::format_helpers::format_salary;
use crate::notify;
use crate::routes::company::dashboard::DashboardResource;
use dioxus::prelude::*;
use shared_types::{
    DashboardMember, MemberRole, MemberStatus, MemberStatusRequest, SalaryUpdateRequest,
};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, Card,
    CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, DialogContent, DialogDescription, DialogRoot, DialogTitle, Form, Input,
    PageHeader, PageTitle, SearchBar, Skeleton, avatar_initials, use_toast,
};

#[component]
pub fn EmployeesPanel(slug: String, data: DashboardResource, viewer_email: String) -> Element {
    let mut filter = use_signal(String::new);
    let mut salary_target = use_signal(|| None::<DashboardMember>);
    let mut status_target = use_signal(|| None::<DashboardMember>);
    let mut delete_target = use_signal(|| None::<DashboardMember>);

    rsx! {
        PageHeader {
            PageTitle { "Employees" }
        }

        SearchBar {
            Input {
                value: filter.read().clone(),
                placeholder: "Search by name or email...",
                on_input: move |e: FormEvent| filter.set(e.value().to_string()),
            }
        }

        match &*data.read() {
            Some(Ok(dash)) => {
                let needle = filter.read().to_lowercase();
                let rows: Vec<DashboardMember> = dash
                    .data
                    .users
                    .iter()
                    .filter(|m| {
                        m.name.to_lowercase().contains(&needle)
                            || m.email.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect();
                rsx! {
                    if rows.is_empty() {
                        Card {
                            CardContent {
                                p { class: "empty-note", "No members match." }
                            }
                        }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Member" }
                                DataTableColumn { "Role" }
                                DataTableColumn { "Position" }
                                DataTableColumn { "Salary" }
                                DataTableColumn { "Status" }
                                DataTableColumn { "Actions" }
                            }
                            DataTableBody {
                                for member in rows {
                                    MemberRow {
                                        member: member.clone(),
                                        editable: member.email != viewer_email
                                            && member.role != Some(MemberRole::Admin),
                                        on_salary: move |m| salary_target.set(Some(m)),
                                        on_status: move |m| status_target.set(Some(m)),
                                        on_delete: move |m| delete_target.set(Some(m)),
                                    }
                                }
                            }
                        }
                    }
                }
            }
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
                    Skeleton {}
                }
            },
        }

        if let Some(member) = salary_target() {
            SalaryDialog {
                slug: slug.clone(),
                member: member,
                on_close: move |_| salary_target.set(None),
                on_saved: {
                    let mut data = data;
                    move |_| data.restart()
                },
            }
        }
        if let Some(member) = status_target() {
            StatusDialog {
                slug: slug.clone(),
                member: member,
                on_close: move |_| status_target.set(None),
                on_saved: {
                    let mut data = data;
                    move |_| data.restart()
                },
            }
        }
        if let Some(member) = delete_target() {
            DeleteDialog {
                slug: slug.clone(),
                member: member,
                on_close: move |_| delete_target.set(None),
                on_saved: {
                    let mut data = data;
                    move |_| data.restart()
                },
            }
        }
    }
}

#[component]
fn MemberRow(
    member: DashboardMember,
    editable: bool,
    on_salary: EventHandler<DashboardMember>,
    on_status: EventHandler<DashboardMember>,
    on_delete: EventHandler<DashboardMember>,
) -> Element {
    let role_label = member.role.map(|r| r.label()).unwrap_or("Member");
    let position = member.position.clone().unwrap_or_else(|| "--".to_string());
    let salary = member
        .salary
        .map(format_salary)
        .unwrap_or_else(|| "--".to_string());
    let status = member.status.unwrap_or(MemberStatus::Active);
    let status_variant = match status {
        MemberStatus::Active => BadgeVariant::Success,
        MemberStatus::Terminated => BadgeVariant::Destructive,
    };
    let toggle_label = match status {
        MemberStatus::Active => "Terminate",
        MemberStatus::Terminated => "Reactivate",
    };

    let for_salary = member.clone();
    let for_status = member.clone();
    let for_delete = member.clone();

    rsx! {
        DataTableRow {
            DataTableCell { label: "Member",
                div { class: "member-cell",
                    Avatar {
                        if let Some(pic) = member.profile_pic.as_ref() {
                            AvatarImage { src: pic.clone() }
                        }
                        AvatarFallback { {avatar_initials(&member.name)} }
                    }
                    div {
                        div { "{member.name}" }
                        div { class: "stat-label", "{member.email}" }
                    }
                }
            }
            DataTableCell { label: "Role", "{role_label}" }
            DataTableCell { label: "Position", "{position}" }
            DataTableCell { label: "Salary", "{salary}" }
            DataTableCell { label: "Status",
                Badge { variant: status_variant, "{status.label()}" }
            }
            DataTableCell { label: "Actions",
                if editable {
                    div { class: "row-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_salary.call(for_salary.clone()),
                            "Salary"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_status.call(for_status.clone()),
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
}

#[component]
fn SalaryDialog(
    slug: String,
    member: DashboardMember,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut amount = use_signal(|| {
        member
            .salary
            .map(|s| format!("{s}"))
            .unwrap_or_default()
    });
    let mut submitting = use_signal(|| false);

    let email = member.email.clone();
    let submit_slug = slug.clone();
    let handle_submit = move |_: FormEvent| {
        let Ok(new_salary) = amount.read().trim().parse::<f64>() else {
            notify::error(toast, "Enter a valid amount.");
            return;
        };
        if new_salary < 0.0 {
            notify::error(toast, "Salary cannot be negative.");
            return;
        }

        let body = SalaryUpdateRequest {
            email: email.clone(),
            new_salary,
        };
        let slug = submit_slug.clone();
        spawn(async move {
            submitting.set(true);
            match api::tenant::update_salary(&slug, &body).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    on_saved.call(());
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
                DialogTitle { "Update salary" }
                DialogDescription { "New salary for {member.name}." }
                Form { onsubmit: handle_submit,
                    Input {
                        label: "Salary",
                        input_type: "number",
                        value: amount.read().clone(),
                        on_input: move |e: FormEvent| amount.set(e.value().to_string()),
                    }
                    div { class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: submitting(),
                            if submitting() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusDialog(
    slug: String,
    member: DashboardMember,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut submitting = use_signal(|| false);

    let current = member.status.unwrap_or(MemberStatus::Active);
    let next = match current {
        MemberStatus::Active => MemberStatus::Terminated,
        MemberStatus::Terminated => MemberStatus::Active,
    };
    let verb = match next {
        MemberStatus::Terminated => "terminate",
        MemberStatus::Active => "reactivate",
    };

    let email = member.email.clone();
    let submit_slug = slug.clone();
    let handle_confirm = move |_| {
        let body = MemberStatusRequest {
            email: email.clone(),
            status: next,
        };
        let slug = submit_slug.clone();
        spawn(async move {
            submitting.set(true);
            match api::tenant::update_member_status(&slug, &body).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    on_saved.call(());
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
                DialogTitle { "Confirm" }
                DialogDescription { "Are you sure you want to {verb} {member.name}?" }
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
                        if submitting() { "Working..." } else { "Confirm" }
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteDialog(
    slug: String,
    member: DashboardMember,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut submitting = use_signal(|| false);

    let email = member.email.clone();
    let submit_slug = slug.clone();
    let handle_confirm = move |_| {
        let email = email.clone();
        let slug = submit_slug.clone();
        spawn(async move {
            submitting.set(true);
            match api::tenant::delete_member(&slug, &email).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    on_saved.call(());
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
                DialogTitle { "Delete member" }
                DialogDescription {
                    "This permanently removes {member.name} and their history. It cannot be undone."
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
