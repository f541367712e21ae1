use crate::routes::Route;
use crate::session::{self, ActorClass};
use crate::{api, notify};
use dioxus::prelude::*;
use shared_types::{LoginRequest, ServiceRequestForm};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    DialogContent, DialogDescription, DialogRoot, DialogTitle, Form, Input, Textarea, use_toast,
};

/// Public landing page: hero, the service-request lead form, and the
/// owner login dialog.
#[component]
pub fn HomePage() -> Element {
    let toast = use_toast();
    let mut show_owner_login = use_signal(|| false);

    let mut company_name = use_signal(String::new);
    let mut company_email = use_signal(String::new);
    let mut industry = use_signal(String::new);
    let mut contact_person = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_request = move |_: FormEvent| {
        if company_name.read().trim().is_empty()
            || company_email.read().trim().is_empty()
            || industry.read().trim().is_empty()
            || contact_person.read().trim().is_empty()
        {
            notify::error(toast, "Please fill in company, email, industry, and contact person.");
            return;
        }

        let form = ServiceRequestForm {
            company_name: company_name.read().trim().to_string(),
            company_email: company_email.read().trim().to_string(),
            industry: industry.read().trim().to_string(),
            contact_person: contact_person.read().trim().to_string(),
            phone: phone.read().trim().to_string(),
            message: message.read().trim().to_string(),
        };

        spawn(async move {
            submitting.set(true);
            match api::public::request_service(&form).await {
                Ok(body) => {
                    notify::success(toast, body.message);
                    company_name.set(String::new());
                    company_email.set(String::new());
                    industry.set(String::new());
                    contact_person.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                }
                Err(e) => notify::failure(toast, &e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "hero",
            h1 { "Staffdeck" }
            p {
                "Attendance, leave, and hiring for every company on one platform. "
                "Find your company's workspace or request onboarding below."
            }
            div { class: "hero-actions",
                Link { to: Route::CompanySearch {},
                    Button { variant: ButtonVariant::Primary, "Find your company" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| show_owner_login.set(true),
                    "Platform owner login"
                }
            }
        }

        div { class: "section",
            Card {
                CardHeader {
                    CardTitle { "Request onboarding" }
                    CardDescription {
                        "Tell us about your company and the platform owner will review your request."
                    }
                }
                CardContent {
                    Form { onsubmit: handle_request,
                        div { class: "form-row",
                            Input {
                                label: "Company name *",
                                value: company_name.read().clone(),
                                on_input: move |e: FormEvent| company_name.set(e.value().to_string()),
                            }
                            Input {
                                label: "Company email *",
                                input_type: "email",
                                value: company_email.read().clone(),
                                on_input: move |e: FormEvent| company_email.set(e.value().to_string()),
                            }
                        }
                        div { class: "form-row",
                            Input {
                                label: "Industry *",
                                value: industry.read().clone(),
                                on_input: move |e: FormEvent| industry.set(e.value().to_string()),
                            }
                            Input {
                                label: "Contact person *",
                                value: contact_person.read().clone(),
                                on_input: move |e: FormEvent| contact_person.set(e.value().to_string()),
                            }
                        }
                        Input {
                            label: "Phone",
                            input_type: "tel",
                            value: phone.read().clone(),
                            on_input: move |e: FormEvent| phone.set(e.value().to_string()),
                        }
                        Textarea {
                            label: "Message",
                            placeholder: "Anything we should know?",
                            value: message.read().clone(),
                            on_input: move |e: FormEvent| message.set(e.value().to_string()),
                        }
                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: submitting(),
                                if submitting() { "Sending..." } else { "Send request" }
                            }
                        }
                    }
                }
            }
        }

        OwnerLoginDialog {
            open: show_owner_login(),
            on_close: move |_| show_owner_login.set(false),
        }
    }
}

#[component]
fn OwnerLoginDialog(open: bool, on_close: EventHandler<()>) -> Element {
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_login = move |_: FormEvent| {
        let body = LoginRequest {
            email: email.read().trim().to_string(),
            password: password.read().clone(),
        };
        if body.email.is_empty() || body.password.is_empty() {
            notify::error(toast, "Email and password are required.");
            return;
        }

        spawn(async move {
            submitting.set(true);
            match api::owner::login(&body).await {
                Ok(resp) => {
                    session::set_token(ActorClass::Owner, &resp.token);
                    navigator().push(Route::OwnerDashboard {});
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
                DialogTitle { "Owner login" }
                DialogDescription { "Sign in to the platform owner console." }
                Form { onsubmit: handle_login,
                    Input {
                        label: "Email",
                        input_type: "email",
                        value: email.read().clone(),
                        on_input: move |e: FormEvent| email.set(e.value().to_string()),
                    }
                    Input {
                        label: "Password",
                        input_type: "password",
                        value: password.read().clone(),
                        on_input: move |e: FormEvent| password.set(e.value().to_string()),
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
                            if submitting() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
