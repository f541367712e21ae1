//! Company onboarding wizard, reached from an invite link. Two phases on
//! submit: create the company, then its admin account. A phase-two failure
//! leaves the company in place and says so.

use crate::api;
use crate::credentials;
use crate::notify;
use crate::routes::Route;
use crate::api::FilePayload;
use dioxus::prelude::*;
use shared_types::Claims;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Form,
    FormSelect, Input, Stepper, Textarea, use_toast,
};

const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

#[derive(Clone, Default, PartialEq)]
struct CompanyFields {
    name: String,
    phone: String,
    address: String,
    website: String,
    description: String,
}

#[derive(Clone, Default, PartialEq)]
struct AdminFields {
    name: String,
    password: String,
    phone: String,
    gender: String,
    dob: String,
}

/// Per-field gate for Next and the final submit; every missing field is
/// reported at once. Back never validates.
#[derive(Clone, Copy, Default, PartialEq)]
struct CompanyStepErrors {
    name: Option<&'static str>,
    phone: Option<&'static str>,
    address: Option<&'static str>,
}

impl CompanyStepErrors {
    fn ok(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Copy, Default, PartialEq)]
struct AdminStepErrors {
    name: Option<&'static str>,
    password: Option<&'static str>,
    phone: Option<&'static str>,
    gender: Option<&'static str>,
    dob: Option<&'static str>,
}

impl AdminStepErrors {
    fn ok(&self) -> bool {
        *self == Self::default()
    }
}

fn validate_company_step(fields: &CompanyFields) -> CompanyStepErrors {
    CompanyStepErrors {
        name: fields
            .name
            .trim()
            .is_empty()
            .then_some("Company name is required."),
        phone: fields
            .phone
            .trim()
            .is_empty()
            .then_some("Phone number is required."),
        address: fields
            .address
            .trim()
            .is_empty()
            .then_some("Address is required."),
    }
}

fn validate_admin_step(fields: &AdminFields) -> AdminStepErrors {
    AdminStepErrors {
        name: fields
            .name
            .trim()
            .is_empty()
            .then_some("Administrator name is required."),
        password: fields.password.is_empty().then_some("Password is required."),
        phone: fields
            .phone
            .trim()
            .is_empty()
            .then_some("Phone number is required."),
        gender: fields.gender.is_empty().then_some("Gender is required."),
        dob: fields.dob.is_empty().then_some("Date of birth is required."),
    }
}

fn derive_slug(company_name: &str) -> String {
    company_name.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Wording shown when the company was created but the admin account was
/// not. The company survives; retrying the link re-runs only phase two.
fn phase_two_failure(message: &str) -> String {
    format!("Company registered, but admin creation failed: {message}")
}

/// A usable invite carries the lead's email; name and industry prefill.
fn invite_claims(token: Option<&str>) -> Option<Claims> {
    let claims = credentials::decode_claims(token?).ok()?;
    if claims.email.is_empty() {
        return None;
    }
    Some(claims)
}

#[component]
pub fn CompanyRegisterPage(token: Option<String>) -> Element {
    let toast = use_toast();
    let claims = use_hook(|| invite_claims(token.as_deref()));

    let usable = claims.is_some();
    use_effect(move || {
        if !usable {
            notify::error(toast, "Invalid or expired invitation link.");
            navigator().replace(Route::Home {});
        }
    });
    let Some(claims) = claims else {
        return rsx! {
            div { class: "status-screen",
                p { "Redirecting..." }
            }
        };
    };

    let invite_email = claims.email.clone();
    let invite_industry = claims.industry.clone().unwrap_or_default();

    let mut step = use_signal(|| 0usize);
    let mut company = use_signal(|| CompanyFields {
        name: claims.company_name.clone().unwrap_or_default(),
        ..CompanyFields::default()
    });
    let mut admin = use_signal(AdminFields::default);
    let mut logo = use_signal(|| None::<FilePayload>);
    let mut company_errors = use_signal(CompanyStepErrors::default);
    let mut admin_errors = use_signal(AdminStepErrors::default);
    let mut submitting = use_signal(|| false);

    let handle_next = move |_| {
        let errors = validate_company_step(&company.read());
        company_errors.set(errors);
        if errors.ok() {
            step.set(1);
        }
    };

    let handle_back = move |_| {
        admin_errors.set(AdminStepErrors::default());
        step.set(0);
    };

    let submit_email = invite_email.clone();
    let submit_industry = invite_industry.clone();
    let handle_submit = move |_: FormEvent| {
        let admin_fields = admin.read().clone();
        let errors = validate_admin_step(&admin_fields);
        admin_errors.set(errors);
        if !errors.ok() {
            return;
        }

        let company_fields = company.read().clone();
        let email = submit_email.clone();
        let industry = submit_industry.clone();
        let logo_file = logo.read().clone();

        spawn(async move {
            submitting.set(true);

            let fields = vec![
                ("name", company_fields.name.clone()),
                ("slug", derive_slug(&company_fields.name)),
                ("email", email.clone()),
                ("industry", industry),
                ("website", company_fields.website),
                ("phone", company_fields.phone),
                ("address", company_fields.address),
                ("description", company_fields.description),
            ];
            let registered = match api::public::register_company(fields, logo_file).await {
                Ok(body) => body,
                Err(e) => {
                    notify::failure(toast, &e);
                    submitting.set(false);
                    return;
                }
            };

            let slug = registered.company.slug.clone();
            let admin_form = vec![
                ("name", admin_fields.name),
                ("email", email),
                ("password", admin_fields.password),
                ("phone", admin_fields.phone),
                ("gender", admin_fields.gender),
                ("dob", admin_fields.dob),
                ("role", "admin".to_string()),
                ("companySlug", slug.clone()),
            ];
            match api::public::register_member(admin_form, None).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    navigator().push(Route::CompanyGate { slug });
                }
                Err(e) => {
                    notify::error(toast, phase_two_failure(&e.friendly_message()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "container",
            Card { class: "wizard",
                CardHeader {
                    CardTitle { "Register your company" }
                    CardDescription { "Invited as {invite_email}" }
                }
                CardContent {
                    Stepper {
                        steps: vec!["Company".to_string(), "Administrator".to_string()],
                        active: step(),
                    }

                    if step() == 0 {
                        div { class: "wizard-step-body",
                            Input {
                                label: "Company name",
                                value: company.read().name.clone(),
                                error: company_errors().name.unwrap_or_default().to_string(),
                                on_input: move |e: FormEvent| company.write().name = e.value().to_string(),
                            }
                            div { class: "form-row",
                                Input {
                                    label: "Phone",
                                    value: company.read().phone.clone(),
                                    error: company_errors().phone.unwrap_or_default().to_string(),
                                    on_input: move |e: FormEvent| company.write().phone = e.value().to_string(),
                                }
                                Input {
                                    label: "Website (optional)",
                                    value: company.read().website.clone(),
                                    on_input: move |e: FormEvent| company.write().website = e.value().to_string(),
                                }
                            }
                            Input {
                                label: "Address",
                                value: company.read().address.clone(),
                                error: company_errors().address.unwrap_or_default().to_string(),
                                on_input: move |e: FormEvent| company.write().address = e.value().to_string(),
                            }
                            Textarea {
                                label: "Description (optional)",
                                value: company.read().description.clone(),
                                on_input: move |e: FormEvent| company.write().description = e.value().to_string(),
                            }
                            label { class: "input-label", "Logo (optional)" }
                            input {
                                r#type: "file",
                                accept: "image/*",
                                onchange: move |evt: FormEvent| async move {
                                    let files = evt.files();
                                    if let Some(file) = files.first() {
                                        match file.read_bytes().await {
                                            Ok(bytes) => logo.set(Some(FilePayload {
                                                field: "logo",
                                                file_name: file.name(),
                                                bytes: bytes.to_vec(),
                                            })),
                                            Err(_) => notify::error(toast, "Could not read the selected file."),
                                        }
                                    }
                                },
                            }
                            div { class: "wizard-nav",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: handle_next,
                                    "Next"
                                }
                            }
                        }
                    } else {
                        Form { onsubmit: handle_submit,
                            div { class: "wizard-step-body",
                                Input {
                                    label: "Full name",
                                    value: admin.read().name.clone(),
                                    error: admin_errors().name.unwrap_or_default().to_string(),
                                    on_input: move |e: FormEvent| admin.write().name = e.value().to_string(),
                                }
                                Input {
                                    label: "Password",
                                    input_type: "password",
                                    value: admin.read().password.clone(),
                                    error: admin_errors().password.unwrap_or_default().to_string(),
                                    on_input: move |e: FormEvent| admin.write().password = e.value().to_string(),
                                }
                                div { class: "form-row",
                                    Input {
                                        label: "Phone",
                                        value: admin.read().phone.clone(),
                                        error: admin_errors().phone.unwrap_or_default().to_string(),
                                        on_input: move |e: FormEvent| admin.write().phone = e.value().to_string(),
                                    }
                                    Input {
                                        label: "Date of birth",
                                        input_type: "date",
                                        value: admin.read().dob.clone(),
                                        error: admin_errors().dob.unwrap_or_default().to_string(),
                                        on_input: move |e: FormEvent| admin.write().dob = e.value().to_string(),
                                    }
                                }
                                FormSelect {
                                    label: "Gender",
                                    value: admin.read().gender.clone(),
                                    error: admin_errors().gender.unwrap_or_default().to_string(),
                                    onchange: move |e: Event<FormData>| admin.write().gender = e.value().to_string(),
                                    option { value: "", "Select..." }
                                    for g in GENDERS {
                                        option { value: g, "{g}" }
                                    }
                                }
                                div { class: "wizard-nav",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: handle_back,
                                        "Back"
                                    }
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        disabled: submitting(),
                                        if submitting() { "Registering..." } else { "Register" }
                                    }
                                }
                            }
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

    fn company(name: &str, phone: &str, address: &str) -> CompanyFields {
        CompanyFields {
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            ..CompanyFields::default()
        }
    }

    #[test]
    fn company_step_flags_each_missing_field() {
        assert!(validate_company_step(&company("", "1", "a")).name.is_some());
        assert!(validate_company_step(&company("Acme", "", "a")).phone.is_some());
        assert!(validate_company_step(&company("Acme", "1", "")).address.is_some());
        assert!(validate_company_step(&company("Acme", "1", "HQ")).ok());
    }

    #[test]
    fn company_step_reports_every_gap_at_once() {
        let errors = validate_company_step(&company("", "", ""));
        assert!(errors.name.is_some());
        assert!(errors.phone.is_some());
        assert!(errors.address.is_some());
    }

    #[test]
    fn admin_step_requires_every_field() {
        let full = AdminFields {
            name: "Amira".into(),
            password: "secret".into(),
            phone: "123".into(),
            gender: "Female".into(),
            dob: "1990-01-01".into(),
        };
        assert!(validate_admin_step(&full).ok());

        let blanked = validate_admin_step(&AdminFields::default());
        assert!(blanked.name.is_some());
        assert!(blanked.password.is_some());
        assert!(blanked.phone.is_some());
        assert!(blanked.gender.is_some());
        assert!(blanked.dob.is_some());

        let mut only_dob = full.clone();
        only_dob.dob.clear();
        let errors = validate_admin_step(&only_dob);
        assert_eq!(errors.dob, Some("Date of birth is required."));
        assert!(errors.name.is_none());
    }

    #[test]
    fn slugs_are_lowercase_and_hyphenated() {
        assert_eq!(derive_slug("Initech Global"), "initech-global");
        assert_eq!(derive_slug("  Acme  Corp "), "acme-corp");
    }

    #[test]
    fn phase_two_failure_names_both_outcomes() {
        assert_eq!(
            phase_two_failure("email already in use"),
            "Company registered, but admin creation failed: email already in use"
        );
    }

    #[test]
    fn invites_without_email_are_unusable() {
        assert!(invite_claims(None).is_none());
        assert!(invite_claims(Some("not-a-token")).is_none());
    }
}
