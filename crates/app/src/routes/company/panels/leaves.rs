//! Leave requests tab: the flattened reviewer table. Decisions address a
//! leave by owner email and position, deletions by owner email and id.

use crate::api;
use crate::format_helpers::format_date_human;
use crate::notify;
use dioxus::prelude::*;
use shared_types::{DeleteLeaveRequest, FlattenedLeave, LeaveDecisionRequest, LeaveStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DialogContent,
    DialogDescription, DialogRoot, DialogTitle, PageActions, PageHeader, PageTitle, Skeleton,
    use_toast,
};

fn status_variant(status: LeaveStatus) -> BadgeVariant {
    match status {
        LeaveStatus::Pending => BadgeVariant::Warning,
        LeaveStatus::Approved => BadgeVariant::Success,
        LeaveStatus::Rejected => BadgeVariant::Destructive,
    }
}

#[component]
pub fn LeavesPanel(slug: String) -> Element {
    let toast = use_toast();
    let mut rows = use_signal(|| None::<Vec<FlattenedLeave>>);
    let mut delete_target = use_signal(|| None::<FlattenedLeave>);
    let mut confirm_clear = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let fetch_slug = slug.clone();
    let leaves = use_resource(move || {
        let slug = fetch_slug.clone();
        async move { api::tenant::leaves_all(&slug).await }
    });

    use_effect(move || {
        if let Some(Ok(body)) = &*leaves.read() {
            rows.set(Some(body.flatten()));
        }
    });

    let decide = {
        let slug = slug.clone();
        move |row: FlattenedLeave, status: LeaveStatus| {
            let slug = slug.clone();
            let mut leaves = leaves;
            let body = LeaveDecisionRequest {
                user_email: row.owner_email.clone(),
                leave_index: row.leave_index,
                status,
            };
            spawn(async move {
                busy.set(true);
                match api::tenant::update_leave(&slug, &body).await {
                    Ok(resp) => {
                        notify::success(toast, resp.message);
                        leaves.restart();
                    }
                    Err(e) => notify::failure(toast, &e),
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        PageHeader {
            PageTitle { "Leave Requests" }
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
                        p { class: "empty-note", "No leave requests." }
                    }
                }
            },
            Some(list) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Member" }
                        DataTableColumn { "Type" }
                        DataTableColumn { "Dates" }
                        DataTableColumn { "Days" }
                        DataTableColumn { "Reason" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for row in list.clone() {
                            {
                                let dates = format!(
                                    "{} to {}",
                                    format_date_human(&row.leave.start_date),
                                    format_date_human(&row.leave.end_date),
                                );
                                let days = row
                                    .leave
                                    .duration_days()
                                    .map(|d| d.to_string())
                                    .unwrap_or_else(|| "--".to_string());
                                let approve = row.clone();
                                let reject = row.clone();
                                let remove = row.clone();
                                let decide_approve = decide.clone();
                                let decide_reject = decide.clone();
                                rsx! {
                                    DataTableRow {
                                        DataTableCell { label: "Member",
                                            div {
                                                div { "{row.owner_name}" }
                                                div { class: "stat-label", "{row.owner_email}" }
                                            }
                                        }
                                        DataTableCell { label: "Type", "{row.leave.leave_type.label()}" }
                                        DataTableCell { label: "Dates", "{dates}" }
                                        DataTableCell { label: "Days", "{days}" }
                                        DataTableCell { label: "Reason", "{row.leave.reason}" }
                                        DataTableCell { label: "Status",
                                            Badge {
                                                variant: status_variant(row.leave.status),
                                                "{row.leave.status.label()}"
                                            }
                                        }
                                        DataTableCell { label: "Actions",
                                            div { class: "row-actions",
                                                if row.leave.status.is_pending() {
                                                    Button {
                                                        variant: ButtonVariant::Outline,
                                                        disabled: busy(),
                                                        onclick: move |_| decide_approve(
                                                            approve.clone(),
                                                            LeaveStatus::Approved,
                                                        ),
                                                        "Approve"
                                                    }
                                                    Button {
                                                        variant: ButtonVariant::Secondary,
                                                        disabled: busy(),
                                                        onclick: move |_| decide_reject(
                                                            reject.clone(),
                                                            LeaveStatus::Rejected,
                                                        ),
                                                        "Reject"
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
            None => match &*leaves.read() {
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-note", "{e.friendly_message()}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: {
                                    let mut leaves = leaves;
                                    move |_| leaves.restart()
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

        if let Some(row) = delete_target() {
            DeleteLeaveDialog {
                slug: slug.clone(),
                row: row,
                on_close: move |_| delete_target.set(None),
                on_deleted: {
                    let mut leaves = leaves;
                    move |_| leaves.restart()
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
fn DeleteLeaveDialog(
    slug: String,
    row: FlattenedLeave,
    on_close: EventHandler<()>,
    on_deleted: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut submitting = use_signal(|| false);

    let submit_slug = slug.clone();
    let body = DeleteLeaveRequest {
        user_email: row.owner_email.clone(),
        leave_id: row.leave.id.clone(),
    };
    let handle_confirm = move |_| {
        let slug = submit_slug.clone();
        let body = body.clone();
        spawn(async move {
            submitting.set(true);
            match api::tenant::delete_leave(&slug, &body).await {
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
                DialogTitle { "Delete leave request" }
                DialogDescription {
                    "Remove the {row.leave.leave_type.label()} request from {row.owner_name}?"
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
            match api::tenant::delete_all_leaves(&slug).await {
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
                DialogTitle { "Delete all leave requests" }
                DialogDescription { "Every leave request will be removed. This cannot be undone." }
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
