//! Onboarding requests queue. Approval is two independent steps: record
//! the decision, then send the company invite. The invite can fail on its
//! own without undoing the recorded decision.

use crate::api;
use crate::format_helpers::format_date_human;
use crate::notify;
use crate::optimistic;
use dioxus::prelude::*;
use shared_types::{HandledStatus, InviteCompanyRequest, ServiceRequest};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DialogContent,
    DialogDescription, DialogRoot, DialogTitle, PageActions, PageHeader, PageTitle, Skeleton,
    use_toast,
};

#[component]
pub fn RequestsPanel() -> Element {
    let toast = use_toast();
    let mut rows = use_signal(|| None::<Vec<ServiceRequest>>);
    let mut delete_target = use_signal(|| None::<ServiceRequest>);
    let mut confirm_clear = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let queue = use_resource(|| async move { api::owner::requests().await });

    use_effect(move || {
        if let Some(Ok(body)) = &*queue.read() {
            rows.set(Some(body.requests.clone()));
        }
    });

    let decide = move |request: ServiceRequest, status: HandledStatus| {
        spawn(async move {
            busy.set(true);
            match api::owner::handle_request(&request.id, status).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    if let Some(current) = rows.read().clone() {
                        let (next, _) = optimistic::patched(
                            &current,
                            |r| r.id == request.id,
                            |r| {
                                r.is_handled = true;
                                r.handled_status = Some(status);
                            },
                        );
                        rows.set(Some(next));
                    }

                    // The invite is its own step with its own outcome.
                    if status == HandledStatus::Approved {
                        let invite = InviteCompanyRequest {
                            email: request.company_email.clone(),
                            company_name: request.company_name.clone(),
                            industry: request.industry.clone(),
                        };
                        match api::owner::invite_company(&invite).await {
                            Ok(resp) => notify::success(toast, resp.message),
                            Err(e) => notify::failure(toast, &e),
                        }
                    }
                }
                Err(e) => notify::failure(toast, &e),
            }
            busy.set(false);
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Requests" }
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
                        p { class: "empty-note", "No onboarding requests." }
                    }
                }
            },
            Some(list) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Company" }
                        DataTableColumn { "Contact" }
                        DataTableColumn { "Industry" }
                        DataTableColumn { "Received" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for request in list.clone() {
                            {
                                let received = request
                                    .created_at
                                    .as_deref()
                                    .map(format_date_human)
                                    .unwrap_or_else(|| "--".to_string());
                                let approve = request.clone();
                                let reject = request.clone();
                                let remove = request.clone();
                                rsx! {
                                    DataTableRow {
                                        DataTableCell { label: "Company",
                                            div {
                                                div { "{request.company_name}" }
                                                div { class: "stat-label", "{request.company_email}" }
                                            }
                                        }
                                        DataTableCell { label: "Contact", "{request.contact_person}" }
                                        DataTableCell { label: "Industry", "{request.industry}" }
                                        DataTableCell { label: "Received", "{received}" }
                                        DataTableCell { label: "Status",
                                            match request.handled_status {
                                                Some(HandledStatus::Approved) => rsx! {
                                                    Badge { variant: BadgeVariant::Success, "Approved" }
                                                },
                                                Some(HandledStatus::Rejected) => rsx! {
                                                    Badge { variant: BadgeVariant::Destructive, "Rejected" }
                                                },
                                                None => rsx! {
                                                    Badge { variant: BadgeVariant::Warning, "Pending" }
                                                },
                                            }
                                        }
                                        DataTableCell { label: "Actions",
                                            div { class: "row-actions",
                                                if !request.is_handled {
                                                    Button {
                                                        variant: ButtonVariant::Outline,
                                                        disabled: busy(),
                                                        onclick: move |_| decide(
                                                            approve.clone(),
                                                            HandledStatus::Approved,
                                                        ),
                                                        "Approve"
                                                    }
                                                    Button {
                                                        variant: ButtonVariant::Secondary,
                                                        disabled: busy(),
                                                        onclick: move |_| decide(
                                                            reject.clone(),
                                                            HandledStatus::Rejected,
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
            None => match &*queue.read() {
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-note", "{e.friendly_message()}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: {
                                    let mut queue = queue;
                                    move |_| queue.restart()
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

        if let Some(request) = delete_target() {
            DeleteRequestDialog {
                request: request,
                on_close: move |_| delete_target.set(None),
                on_deleted: {
                    let mut queue = queue;
                    move |_| queue.restart()
                },
            }
        }

        if confirm_clear() {
            ClearAllDialog {
                on_close: move |_| confirm_clear.set(false),
                on_cleared: move |_| rows.set(Some(Vec::new())),
            }
        }
    }
}

#[component]
fn DeleteRequestDialog(
    request: ServiceRequest,
    on_close: EventHandler<()>,
    on_deleted: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut submitting = use_signal(|| false);

    let id = request.id.clone();
    let handle_confirm = move |_| {
        let id = id.clone();
        spawn(async move {
            submitting.set(true);
            match api::owner::delete_request(&id).await {
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
                DialogTitle { "Delete request" }
                DialogDescription {
                    "Remove the request from {request.company_name}? This cannot be undone."
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
fn ClearAllDialog(on_close: EventHandler<()>, on_cleared: EventHandler<()>) -> Element {
    let toast = use_toast();
    let mut submitting = use_signal(|| false);

    let handle_confirm = move |_| {
        spawn(async move {
            submitting.set(true);
            match api::owner::delete_all_requests().await {
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
                DialogTitle { "Delete all requests" }
                DialogDescription { "Every onboarding request will be removed. This cannot be undone." }
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
