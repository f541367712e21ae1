use crate::api;
use crate::notify;
use dioxus::prelude::*;
use shared_types::InviteCompanyRequest;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input,
    PageHeader, PageTitle, use_toast,
};

/// Direct company invite, outside the request queue. The invite link lands
/// on the company registration wizard with these fields prefilled.
#[component]
pub fn InviteCompanyPanel() -> Element {
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut company_name = use_signal(String::new);
    let mut industry = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let address = email.read().trim().to_string();
        let name = company_name.read().trim().to_string();
        let sector = industry.read().trim().to_string();
        if address.is_empty() || !address.contains('@') || name.is_empty() || sector.is_empty() {
            notify::error(toast, "Email, company name, and industry are required.");
            return;
        }

        let body = InviteCompanyRequest {
            email: address,
            company_name: name,
            industry: sector,
        };
        spawn(async move {
            submitting.set(true);
            match api::owner::invite_company(&body).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    email.set(String::new());
                    company_name.set(String::new());
                    industry.set(String::new());
                }
                Err(e) => notify::failure(toast, &e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Invite Company" }
        }

        Card {
            CardHeader {
                CardTitle { "Send a company invite" }
                CardDescription { "The recipient finishes sign-up on the registration wizard." }
            }
            CardContent {
                Form { onsubmit: handle_submit,
                    Input {
                        label: "Email",
                        input_type: "email",
                        value: email.read().clone(),
                        placeholder: "contact@company.com",
                        on_input: move |e: FormEvent| email.set(e.value().to_string()),
                    }
                    Input {
                        label: "Company name",
                        value: company_name.read().clone(),
                        on_input: move |e: FormEvent| company_name.set(e.value().to_string()),
                    }
                    Input {
                        label: "Industry",
                        value: industry.read().clone(),
                        on_input: move |e: FormEvent| industry.set(e.value().to_string()),
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
