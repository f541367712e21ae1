//! Applications tab: review queue for public job applications. The list is
//! held locally so clearing it does not require a refetch.

use crate::api;
use crate::config;
use crate::format_helpers::format_date_human;
use crate::notify;
use crate::routes::company::dashboard::DashboardResource;
use dioxus::prelude::*;
use shared_types::{ApplicationStatus, ApplicationStatusRequest, JobApplication, MemberRole};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DialogContent,
    DialogDescription, DialogRoot, DialogTitle, Form, FormSelect, PageActions, PageHeader,
    PageTitle, Skeleton, use_toast,
};

/// Uploaded files are served from the backend root, not under `/api`.
fn file_url(path: &str) -> String {
    let root = config::api_base().trim_end_matches('/');
    let root = root.strip_suffix("/api").unwrap_or(root);
    format!("{root}/{}", path.trim_start_matches('/'))
}

fn status_variant(status: ApplicationStatus) -> BadgeVariant {
    match status {
        ApplicationStatus::Pending => BadgeVariant::Warning,
        ApplicationStatus::Accepted => BadgeVariant::Success,
        ApplicationStatus::Rejected => BadgeVariant::Destructive,
        ApplicationStatus::Hired => BadgeVariant::Info,
    }
}

#[component]
pub fn ApplicationsPanel(slug: String, data: DashboardResource) -> Element {
    let toast = use_toast();
    let mut rows = use_signal(|| None::<Vec<JobApplication>>);
    let mut hire_target = use_signal(|| None::<JobApplication>);
    let mut resume_target = use_signal(|| None::<JobApplication>);
    let mut delete_target = use_signal(|| None::<JobApplication>);
    let mut confirm_clear = use_signal(|| false);
    let mut busy = use_signal(|| false);

    // Seed the local list from the aggregate fetch; later mutations only
    // touch the signal.
    use_effect(move || {
        if let Some(Ok(dash)) = &*data.read() {
            rows.set(Some(dash.data.applications.clone()));
        }
    });

    let decide = {
        let slug = slug.clone();
        move |app: JobApplication, status: ApplicationStatus| {
            let slug = slug.clone();
            let mut data = data;
            spawn(async move {
                busy.set(true);
                let body = ApplicationStatusRequest::transition(
                    app.email.clone(),
                    app.position.clone().unwrap_or_default(),
                    status,
                );
                match api::tenant::update_application_status(&slug, &body).await {
                    Ok(resp) => {
                        notify::success(toast, resp.message);
                        data.restart();
                    }
                    Err(e) => notify::failure(toast, &e),
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        PageHeader {
            PageTitle { "Applications" }
            PageActions {
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: rows.read().as_ref().is_none_or(|r| r.is_empty()),
                    onclick: move |_| confirm_clear.set(true),
                    "Delete all"
                }
            }
        }

        match &*rows.read() {
            Some(list) if list.is_empty() => rsx! {
                Card {
                    CardContent {
                        p { class: "empty-note", "No applications yet." }
                    }
                }
            },
            Some(list) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Applicant" }
                        DataTableColumn { "Position" }
                        DataTableColumn { "Applied" }
                        DataTableColumn { "Resume" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for app in list.clone() {
                            {
                                let position = app
                                    .position
                                    .clone()
                                    .unwrap_or_else(|| "--".to_string());
                                let applied = app
                                    .created_at
                                    .as_deref()
                                    .map(format_date_human)
                                    .unwrap_or_else(|| "--".to_string());
                                let chip = app.status.label().to_uppercase();
                                let accept = app.clone();
                                let reject = app.clone();
                                let hire = app.clone();
                                let preview = app.clone();
                                let remove = app.clone();
                                let decide_accept = decide.clone();
                                let decide_reject = decide.clone();
                                rsx! {
                                    DataTableRow {
                                        DataTableCell { label: "Applicant",
                                            div {
                                                div { "{app.name}" }
                                                div { class: "stat-label", "{app.email}" }
                                            }
                                        }
                                        DataTableCell { label: "Position", "{position}" }
                                        DataTableCell { label: "Applied", "{applied}" }
                                        DataTableCell { label: "Resume",
                                            if app.resume.is_some() {
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: move |_| resume_target.set(Some(preview.clone())),
                                                    "View"
                                                }
                                            } else {
                                                "--"
                                            }
                                        }
                                        DataTableCell { label: "Status",
                                            Badge {
                                                variant: status_variant(app.status),
                                                "{chip}"
                                            }
                                        }
                                        DataTableCell { label: "Actions",
                                            div { class: "row-actions",
                                                if app.status.can_decide() {
                                                    Button {
                                                        variant: ButtonVariant::Outline,
                                                        disabled: busy(),
                                                        onclick: move |_| decide_accept(
                                                            accept.clone(),
                                                            ApplicationStatus::Accepted,
                                                        ),
                                                        "Accept"
                                                    }
                                                    Button {
                                                        variant: ButtonVariant::Secondary,
                                                        disabled: busy(),
                                                        onclick: move |_| decide_reject(
                                                            reject.clone(),
                                                            ApplicationStatus::Rejected,
                                                        ),
                                                        "Reject"
                                                    }
                                                }
                                                if app.status.can_hire() {
                                                    Button {
                                                        variant: ButtonVariant::Primary,
                                                        disabled: busy(),
                                                        onclick: move |_| hire_target.set(Some(hire.clone())),
                                                        "Hire"
                                                    }
                                                }
                                                Button {
                                                    variant: ButtonVariant::Destructive,
                                                    disabled: busy(),
                                                    onclick: move |_| delete_target.set(Some(remove.clone())),
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
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

        if let Some(app) = resume_target() {
            ResumeDialog {
                application: app,
                on_close: move |_| resume_target.set(None),
            }
        }

        if let Some(app) = hire_target() {
            HireDialog {
                slug: slug.clone(),
                application: app,
                on_close: move |_| hire_target.set(None),
                on_hired: {
                    let mut data = data;
                    move |_| data.restart()
                },
            }
        }

        if let Some(app) = delete_target() {
            DeleteApplicationDialog {
                slug: slug.clone(),
                application: app,
                on_close: move |_| delete_target.set(None),
                on_deleted: {
                    let mut data = data;
                    move |_| data.restart()
                },
            }
        }

        if confirm_clear() {
            ClearAllDialog {
                slug: slug.clone(),
                on_close: move |_| confirm_clear.set(false),
                on_cleared: move |_| rows.set(Some(Vec::new())),
            }
        }
    }
}

#[component]
fn ResumeDialog(application: JobApplication, on_close: EventHandler<()>) -> Element {
    let url = application.resume.as_deref().map(file_url);

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Resume" }
                DialogDescription { "{application.name} ({application.email})" }
                if let Some(message) = application.message.as_ref() {
                    p { "{message}" }
                }
                if let Some(url) = url {
                    iframe { class: "resume-frame", src: url.clone() }
                    div { class: "dialog-actions",
                        a { href: url, target: "_blank",
                            Button { variant: ButtonVariant::Outline, "Open in new tab" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HireDialog(
    slug: String,
    application: JobApplication,
    on_close: EventHandler<()>,
    on_hired: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut role = use_signal(|| MemberRole::Employee);
    let mut submitting = use_signal(|| false);

    let submit_slug = slug.clone();
    let submit_app = application.clone();
    let handle_submit = move |_: FormEvent| {
        let slug = submit_slug.clone();
        let body = ApplicationStatusRequest::hire(
            submit_app.email.clone(),
            submit_app.position.clone().unwrap_or_default(),
            submit_app.name.clone(),
            role(),
        );
        spawn(async move {
            submitting.set(true);
            match api::tenant::update_application_status(&slug, &body).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    on_hired.call(());
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
                DialogTitle { "Hire {application.name}" }
                DialogDescription {
                    "Hiring creates the member record and closes the application."
                }
                Form { onsubmit: handle_submit,
                    FormSelect {
                        label: "Role",
                        value: role().as_str().to_string(),
                        onchange: move |e: Event<FormData>| {
                            role.set(match e.value().as_str() {
                                "hr" => MemberRole::Hr,
                                _ => MemberRole::Employee,
                            });
                        },
                        option { value: "employee", "Employee" }
                        option { value: "hr", "HR" }
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
                            if submitting() { "Hiring..." } else { "Hire" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteApplicationDialog(
    slug: String,
    application: JobApplication,
    on_close: EventHandler<()>,
    on_deleted: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut submitting = use_signal(|| false);

    let submit_slug = slug.clone();
    let id = application.id.clone();
    let handle_confirm = move |_| {
        let slug = submit_slug.clone();
        let id = id.clone();
        spawn(async move {
            submitting.set(true);
            match api::tenant::delete_application(&slug, &id).await {
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
                DialogTitle { "Delete application" }
                DialogDescription {
                    "Remove the application from {application.name}? This cannot be undone."
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

#[component]
fn ClearAllDialog(
    slug: String,
    on_close: EventHandler<()>,
    on_cleared: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut submitting = use_signal(|| false);

    let submit_slug = slug.clone();
    let handle_confirm = move |_| {
        let slug = submit_slug.clone();
        spawn(async move {
            submitting.set(true);
            match api::tenant::delete_all_applications(&slug).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    on_cleared.call(());
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
                DialogTitle { "Delete all applications" }
                DialogDescription { "Every application will be removed. This cannot be undone." }
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
                        if submitting() { "Deleting..." } else { "Delete all" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_urls_drop_the_api_prefix() {
        assert_eq!(
            file_url("/uploads/resume.pdf"),
            "http://localhost:5000/uploads/resume.pdf"
        );
        assert_eq!(
            file_url("uploads/resume.pdf"),
            "http://localhost:5000/uploads/resume.pdf"
        );
    }

    #[test]
    fn statuses_map_to_review_badges() {
        assert_eq!(
            status_variant(ApplicationStatus::Pending),
            BadgeVariant::Warning
        );
        assert_eq!(
            status_variant(ApplicationStatus::Accepted),
            BadgeVariant::Success
        );
        assert_eq!(
            status_variant(ApplicationStatus::Rejected),
            BadgeVariant::Destructive
        );
        assert_eq!(status_variant(ApplicationStatus::Hired), BadgeVariant::Info);
    }
}
