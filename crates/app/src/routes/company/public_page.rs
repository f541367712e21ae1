use crate::api::{self, FilePayload};
use crate::session::{self, ActorClass};
use crate::notify;
use dioxus::prelude::*;
use shared_types::{Company, LoginRequest};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, Card,
    CardContent, CardDescription, CardHeader, CardTitle, DialogContent, DialogDescription,
    DialogRoot, DialogTitle, Form, Input, Skeleton, Textarea, avatar_initials, use_toast,
};

/// A company's public face: profile, member login, and the job
/// application dialog. `on_login` tells the gate to re-probe.
#[component]
pub fn CompanyPublicPage(slug: String, on_login: EventHandler<()>) -> Element {
    let toast = use_toast();
    let mut show_apply = use_signal(|| false);

    let profile_slug = slug.clone();
    let company = use_resource(move || {
        let slug = profile_slug.clone();
        async move {
            match api::public::company_profile(&slug).await {
                Ok(company) => Some(company),
                Err(_) => None,
            }
        }
    });

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut signing_in = use_signal(|| false);

    let login_slug = slug.clone();
    let handle_login = move |_: FormEvent| {
        let body = LoginRequest {
            email: email.read().trim().to_string(),
            password: password.read().clone(),
        };
        if body.email.is_empty() || body.password.is_empty() {
            notify::error(toast, "Email and password are required.");
            return;
        }

        let slug = login_slug.clone();
        spawn(async move {
            signing_in.set(true);
            match api::public::tenant_login(&slug, &body).await {
                Ok(resp) => {
                    session::set_token(ActorClass::TenantUser, &resp.token);
                    notify::success(toast, "Signed in");
                    on_login.call(());
                }
                Err(e) => notify::failure(toast, &e),
            }
            signing_in.set(false);
        });
    };

    rsx! {
        div { class: "container",
            match &*company.read() {
                Some(Some(company)) => rsx! {
                    CompanyHeader { company: company.clone() }

                    div { class: "form-row",
                        Card {
                            CardHeader {
                                CardTitle { "Member sign in" }
                                CardDescription { "For employees, HR, and admins of this company." }
                            }
                            CardContent {
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
                                    div { class: "form-actions",
                                        Button {
                                            variant: ButtonVariant::Primary,
                                            disabled: signing_in(),
                                            if signing_in() { "Signing in..." } else { "Sign in" }
                                        }
                                    }
                                }
                            }
                        }

                        Card {
                            CardHeader {
                                CardTitle { "Work with us" }
                                CardDescription { "Apply for an open position at {company.name}." }
                            }
                            CardContent {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| show_apply.set(true),
                                    "Apply now"
                                }
                            }
                        }
                    }

                    ApplyDialog {
                        slug: slug.clone(),
                        open: show_apply(),
                        on_close: move |_| show_apply.set(false),
                    }
                },
                Some(None) => rsx! {
                    div { class: "status-screen",
                        h1 { "Company unavailable" }
                        p { "This company does not exist or is not accepting visitors." }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

#[component]
fn CompanyHeader(company: Company) -> Element {
    rsx! {
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
                    Badge { variant: BadgeVariant::Info, "{company.slug}" }
                }
            }
            CardContent {
                if let Some(description) = company.description.as_ref() {
                    p { "{description}" }
                }
                div { class: "profile-grid",
                    if let Some(website) = company.website.as_ref() {
                        div {
                            span { class: "profile-field-label", "Website" }
                            "{website}"
                        }
                    }
                    if let Some(phone) = company.phone.as_ref() {
                        div {
                            span { class: "profile-field-label", "Phone" }
                            "{phone}"
                        }
                    }
                    if let Some(address) = company.address.as_ref() {
                        div {
                            span { class: "profile-field-label", "Address" }
                            "{address}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ApplyDialog(slug: String, open: bool, on_close: EventHandler<()>) -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut resume = use_signal(|| None::<FilePayload>);
    let mut submitting = use_signal(|| false);

    let submit_slug = slug.clone();
    let handle_submit = move |_: FormEvent| {
        if name.read().trim().is_empty()
            || email.read().trim().is_empty()
            || position.read().trim().is_empty()
        {
            notify::error(toast, "Name, email, and position are required.");
            return;
        }
        let Some(file) = resume.read().clone() else {
            notify::error(toast, "Please attach your resume.");
            return;
        };

        let fields = vec![
            ("name", name.read().trim().to_string()),
            ("email", email.read().trim().to_string()),
            ("phone", phone.read().trim().to_string()),
            ("position", position.read().trim().to_string()),
            ("message", message.read().trim().to_string()),
        ];

        let slug = submit_slug.clone();
        spawn(async move {
            submitting.set(true);
            match api::public::apply(&slug, fields, file).await {
                Ok(body) => {
                    notify::success(toast, body.message);
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    position.set(String::new());
                    message.set(String::new());
                    resume.set(None);
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
                DialogTitle { "Job application" }
                DialogDescription { "Your application goes straight to the company's HR team." }
                Form { onsubmit: handle_submit,
                    Input {
                        label: "Full name *",
                        value: name.read().clone(),
                        on_input: move |e: FormEvent| name.set(e.value().to_string()),
                    }
                    Input {
                        label: "Email *",
                        input_type: "email",
                        value: email.read().clone(),
                        on_input: move |e: FormEvent| email.set(e.value().to_string()),
                    }
                    Input {
                        label: "Phone",
                        input_type: "tel",
                        value: phone.read().clone(),
                        on_input: move |e: FormEvent| phone.set(e.value().to_string()),
                    }
                    Input {
                        label: "Position *",
                        value: position.read().clone(),
                        on_input: move |e: FormEvent| position.set(e.value().to_string()),
                    }
                    Textarea {
                        label: "Cover message",
                        value: message.read().clone(),
                        on_input: move |e: FormEvent| message.set(e.value().to_string()),
                    }
                    label { class: "input-label", "Resume (PDF) *" }
                    input {
                        r#type: "file",
                        accept: ".pdf,.doc,.docx",
                        onchange: move |evt: FormEvent| async move {
                            let files = evt.files();
                            if let Some(file) = files.first() {
                                match file.read_bytes().await {
                                    Ok(bytes) => resume.set(Some(FilePayload {
                                        field: "resume",
                                        file_name: file.name(),
                                        bytes: bytes.to_vec(),
                                    })),
                                    Err(_) => notify::error(toast, "Could not read the selected file."),
                                }
                            }
                        },
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
                            if submitting() { "Submitting..." } else { "Submit application" }
                        }
                    }
                }
            }
        }
    }
}
