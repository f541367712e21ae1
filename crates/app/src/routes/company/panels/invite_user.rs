use crate::api;
use crate::notify;
use dioxus::prelude::*;
use shared_types::{InviteUserRequest, MemberRole};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Form,
    FormSelect, Input, PageHeader, PageTitle, use_toast,
};

/// Sends a role-scoped invite email; the recipient finishes sign-up on the
/// member registration wizard.
#[component]
pub fn InviteUserPanel(slug: String) -> Element {
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| MemberRole::Employee);
    let mut submitting = use_signal(|| false);

    let submit_slug = slug.clone();
    let handle_submit = move |_: FormEvent| {
        let address = email.read().trim().to_string();
        if address.is_empty() || !address.contains('@') {
            notify::error(toast, "Enter a valid email address.");
            return;
        }

        let slug = submit_slug.clone();
        let body = InviteUserRequest {
            email: address,
            role: role(),
        };
        spawn(async move {
            submitting.set(true);
            match api::tenant::invite_member(&slug, &body).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    email.set(String::new());
                }
                Err(e) => notify::failure(toast, &e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Invite User" }
        }

        Card {
            CardHeader {
                CardTitle { "Invite a team member" }
                CardDescription {
                    "The invite link carries the email and role, so the wizard skips both."
                }
            }
            CardContent {
                Form { onsubmit: handle_submit,
                    Input {
                        label: "Email",
                        input_type: "email",
                        value: email.read().clone(),
                        placeholder: "person@company.com",
                        on_input: move |e: FormEvent| email.set(e.value().to_string()),
                    }
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
                    div { class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: submitting(),
                            if submitting() { "Sending..." } else { "Send invite" }
                        }
                    }
                }
            }
        }
    }
}
