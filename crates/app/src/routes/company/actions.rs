//! Self-service dialogs mounted in the dashboard shell, so marking
//! attendance and applying for leave work from any tab.

use crate::api;
use crate::notify;
use dioxus::prelude::*;
use shared_types::{ApplyLeaveRequest, AttendanceStatus, LeaveType};
use shared_ui::{
    Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle, Form,
    FormSelect, Input, Textarea, use_toast,
};

#[component]
pub fn MarkAttendanceDialog(
    slug: String,
    open: bool,
    on_close: EventHandler<()>,
    on_marked: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut status = use_signal(|| AttendanceStatus::Present);
    let mut submitting = use_signal(|| false);

    let submit_slug = slug.clone();
    let handle_submit = move |_: FormEvent| {
        let slug = submit_slug.clone();
        spawn(async move {
            submitting.set(true);
            match api::tenant::mark_attendance(&slug, status()).await {
                Ok(body) => {
                    notify::success(toast, body.message);
                    on_marked.call(());
                    on_close.call(());
                }
                Err(e) => notify::failure(toast, &e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Mark today's attendance" }
                DialogDescription { "One mark per day; your first mark stands." }
                Form { onsubmit: handle_submit,
                    FormSelect {
                        label: "Status",
                        value: status().as_str().to_string(),
                        onchange: move |e: Event<FormData>| {
                            status.set(match e.value().as_str() {
                                "absent" => AttendanceStatus::Absent,
                                "leave" => AttendanceStatus::Leave,
                                _ => AttendanceStatus::Present,
                            });
                        },
                        option { value: "present", "Present" }
                        option { value: "absent", "Absent" }
                        option { value: "leave", "Leave" }
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
                            if submitting() { "Saving..." } else { "Mark" }
                        }
                    }
                }
            }
        }
    }
}

/// `None` when the form may be submitted.
fn validate_leave(start: &str, end: &str, reason: &str) -> Option<&'static str> {
    if start.is_empty() || end.is_empty() {
        return Some("Start and end dates are required.");
    }
    let start = chrono::NaiveDate::parse_from_str(start, "%Y-%m-%d").ok();
    let end = chrono::NaiveDate::parse_from_str(end, "%Y-%m-%d").ok();
    match (start, end) {
        (Some(start), Some(end)) if end >= start => {}
        (Some(_), Some(_)) => return Some("End date must not be before the start date."),
        _ => return Some("Dates must be valid."),
    }
    if reason.trim().is_empty() {
        return Some("A reason is required.");
    }
    None
}

#[component]
pub fn ApplyLeaveDialog(slug: String, open: bool, on_close: EventHandler<()>) -> Element {
    let toast = use_toast();
    let mut leave_type = use_signal(|| LeaveType::Casual);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut reason = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<&'static str>);
    let mut submitting = use_signal(|| false);

    let submit_slug = slug.clone();
    let handle_submit = move |_: FormEvent| {
        if let Some(problem) =
            validate_leave(&start_date.read(), &end_date.read(), &reason.read())
        {
            error_msg.set(Some(problem));
            return;
        }
        error_msg.set(None);

        let body = ApplyLeaveRequest {
            leave_type: leave_type(),
            start_date: start_date.read().clone(),
            end_date: end_date.read().clone(),
            reason: reason.read().trim().to_string(),
        };

        let slug = submit_slug.clone();
        spawn(async move {
            submitting.set(true);
            match api::tenant::apply_leave(&slug, &body).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    start_date.set(String::new());
                    end_date.set(String::new());
                    reason.set(String::new());
                    on_close.call(());
                }
                Err(e) => notify::failure(toast, &e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Apply for leave" }
                DialogDescription { "Your request goes to HR for review." }
                if let Some(problem) = error_msg() {
                    div { class: "alert alert-error", "{problem}" }
                }
                Form { onsubmit: handle_submit,
                    FormSelect {
                        label: "Leave type",
                        value: leave_type().as_str().to_string(),
                        onchange: move |e: Event<FormData>| {
                            if let Some(picked) = LeaveType::ALL
                                .iter()
                                .find(|t| t.as_str() == e.value())
                            {
                                leave_type.set(*picked);
                            }
                        },
                        for option_type in LeaveType::ALL.iter() {
                            option { value: option_type.as_str(), "{option_type.label()}" }
                        }
                    }
                    div { class: "form-row",
                        Input {
                            label: "Start date",
                            input_type: "date",
                            value: start_date.read().clone(),
                            on_input: move |e: FormEvent| start_date.set(e.value().to_string()),
                        }
                        Input {
                            label: "End date",
                            input_type: "date",
                            value: end_date.read().clone(),
                            on_input: move |e: FormEvent| end_date.set(e.value().to_string()),
                        }
                    }
                    Textarea {
                        label: "Reason",
                        value: reason.read().clone(),
                        on_input: move |e: FormEvent| reason.set(e.value().to_string()),
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
                            if submitting() { "Submitting..." } else { "Submit request" }
                        }
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
    fn leave_validation_accepts_an_inclusive_range() {
        assert_eq!(validate_leave("2026-09-01", "2026-09-03", "travel"), None);
        assert_eq!(validate_leave("2026-09-01", "2026-09-01", "sick"), None);
    }

    #[test]
    fn leave_validation_rejects_bad_input() {
        assert!(validate_leave("", "2026-09-03", "x").is_some());
        assert!(validate_leave("2026-09-05", "2026-09-03", "x").is_some());
        assert!(validate_leave("not-a-date", "2026-09-03", "x").is_some());
        assert!(validate_leave("2026-09-01", "2026-09-03", "   ").is_some());
    }
}
