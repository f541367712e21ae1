//! Member onboarding wizard, reached from a tenant invite. Email, role,
//! and company come from the token, so the form only collects personal
//! details, the password, and the profile picture.

use crate::api;
use crate::api::FilePayload;
use crate::credentials;
use crate::notify;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::Claims;
use shared_ui::{
    Avatar, AvatarFallback, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Form, FormSelect, Input, Stepper, avatar_initials, use_toast,
};

const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

#[derive(Clone, Default, PartialEq)]
struct MemberFields {
    name: String,
    phone: String,
    gender: String,
    dob: String,
    password: String,
    address: String,
}

/// Per-step, per-field gate for Next and the final submit; every missing
/// field on the current step is flagged at once. Back never validates.
#[derive(Clone, Copy, Default, PartialEq)]
struct StepErrors {
    dob: Option<&'static str>,
    gender: Option<&'static str>,
    phone: Option<&'static str>,
    password: Option<&'static str>,
    address: Option<&'static str>,
    picture: Option<&'static str>,
}

impl StepErrors {
    fn ok(&self) -> bool {
        *self == Self::default()
    }
}

fn validate_step(step: usize, fields: &MemberFields, has_picture: bool) -> StepErrors {
    let mut errors = StepErrors::default();
    match step {
        0 => {
            errors.dob = fields.dob.is_empty().then_some("Date of birth is required.");
            errors.gender = fields.gender.is_empty().then_some("Gender is required.");
            errors.phone = fields
                .phone
                .trim()
                .is_empty()
                .then_some("Phone number is required.");
        }
        1 => {
            errors.password = fields.password.is_empty().then_some("Password is required.");
            errors.address = fields
                .address
                .trim()
                .is_empty()
                .then_some("Address is required.");
        }
        _ => {
            errors.picture = (!has_picture).then_some("A profile picture is required.");
        }
    }
    errors
}

/// A usable invite names the member, their role, and the company.
fn invite_claims(token: Option<&str>) -> Option<Claims> {
    let claims = credentials::decode_claims(token?).ok()?;
    if claims.email.is_empty() || claims.role.is_none() || claims.company_slug.is_none() {
        return None;
    }
    Some(claims)
}

#[component]
pub fn MemberRegisterPage(token: Option<String>) -> Element {
    let toast = use_toast();
    let claims = use_hook(|| invite_claims(token.as_deref()));

    let usable = claims.is_some();
    use_effect(move || {
        if !usable {
            notify::error(toast, "Invalid or expired invite link.");
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
    let role = claims.role.unwrap_or(shared_types::MemberRole::Employee);
    let company_slug = claims.company_slug.clone().unwrap_or_default();
    let company_id = claims.company_id.clone().unwrap_or_default();

    let mut step = use_signal(|| 0usize);
    let mut fields = use_signal(|| MemberFields {
        name: claims.name.clone().unwrap_or_default(),
        ..MemberFields::default()
    });
    let mut picture = use_signal(|| None::<FilePayload>);
    let mut errors = use_signal(StepErrors::default);
    let mut submitting = use_signal(|| false);

    let handle_next = move |_| {
        let current = step();
        let found = validate_step(current, &fields.read(), picture.read().is_some());
        errors.set(found);
        if found.ok() {
            step.set(current + 1);
        }
    };

    let handle_back = move |_| {
        errors.set(StepErrors::default());
        step.set(step().saturating_sub(1));
    };

    let submit_email = invite_email.clone();
    let submit_slug = company_slug.clone();
    let submit_id = company_id.clone();
    let handle_submit = move |_: FormEvent| {
        let member = fields.read().clone();
        let pic = picture.read().clone();
        let found = validate_step(2, &member, pic.is_some());
        errors.set(found);
        if !found.ok() {
            return;
        }

        let email = submit_email.clone();
        let slug = submit_slug.clone();
        let id = submit_id.clone();
        spawn(async move {
            submitting.set(true);
            let form = vec![
                ("name", member.name),
                ("email", email),
                ("password", member.password),
                ("phone", member.phone),
                ("gender", member.gender),
                ("dob", member.dob),
                ("address", member.address),
                ("role", role.as_str().to_string()),
                ("companyId", id),
                ("companySlug", slug.clone()),
            ];
            match api::public::register_member(form, pic).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    navigator().push(Route::CompanyGate { slug });
                }
                Err(e) => notify::failure(toast, &e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "container",
            Card { class: "wizard",
                CardHeader {
                    CardTitle { "Join your team" }
                    CardDescription { "Invited as {invite_email} ({role.label()})" }
                }
                CardContent {
                    Stepper {
                        steps: vec![
                            "Personal Details".to_string(),
                            "Account Information".to_string(),
                            "Confirm & Submit".to_string(),
                        ],
                        active: step(),
                    }

                    if step() == 0 {
                        div { class: "wizard-step-body",
                            Input {
                                label: "Full name",
                                value: fields.read().name.clone(),
                                on_input: move |e: FormEvent| fields.write().name = e.value().to_string(),
                            }
                            div { class: "form-row",
                                Input {
                                    label: "Date of birth",
                                    input_type: "date",
                                    value: fields.read().dob.clone(),
                                    error: errors().dob.unwrap_or_default().to_string(),
                                    on_input: move |e: FormEvent| fields.write().dob = e.value().to_string(),
                                }
                                Input {
                                    label: "Phone",
                                    value: fields.read().phone.clone(),
                                    error: errors().phone.unwrap_or_default().to_string(),
                                    on_input: move |e: FormEvent| fields.write().phone = e.value().to_string(),
                                }
                            }
                            FormSelect {
                                label: "Gender",
                                value: fields.read().gender.clone(),
                                error: errors().gender.unwrap_or_default().to_string(),
                                onchange: move |e: Event<FormData>| fields.write().gender = e.value().to_string(),
                                option { value: "", "Select..." }
                                for g in GENDERS {
                                    option { value: g, "{g}" }
                                }
                            }
                            div { class: "wizard-nav",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: handle_next,
                                    "Next"
                                }
                            }
                        }
                    } else if step() == 1 {
                        div { class: "wizard-step-body",
                            Input {
                                label: "Password",
                                input_type: "password",
                                value: fields.read().password.clone(),
                                error: errors().password.unwrap_or_default().to_string(),
                                on_input: move |e: FormEvent| fields.write().password = e.value().to_string(),
                            }
                            Input {
                                label: "Address",
                                value: fields.read().address.clone(),
                                error: errors().address.unwrap_or_default().to_string(),
                                on_input: move |e: FormEvent| fields.write().address = e.value().to_string(),
                            }
                            div { class: "wizard-nav",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: handle_back,
                                    "Back"
                                }
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
                                div { class: "member-cell",
                                    Avatar {
                                        AvatarFallback {
                                            {avatar_initials(&fields.read().name)}
                                        }
                                    }
                                    div {
                                        div { "{fields.read().name}" }
                                        div { class: "stat-label", "{invite_email}" }
                                    }
                                }
                                label { class: "input-label", "Profile picture *" }
                                if let Some(pic) = picture.read().as_ref() {
                                    p { class: "stat-label", "Selected: {pic.file_name}" }
                                }
                                if let Some(problem) = errors().picture {
                                    span { class: "input-error", "{problem}" }
                                }
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    onchange: move |evt: FormEvent| async move {
                                        let files = evt.files();
                                        if let Some(file) = files.first() {
                                            match file.read_bytes().await {
                                                Ok(bytes) => picture.set(Some(FilePayload {
                                                    field: "profilePic",
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
                                        variant: ButtonVariant::Ghost,
                                        onclick: handle_back,
                                        "Back"
                                    }
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        disabled: submitting(),
                                        if submitting() { "Registering..." } else { "Finish" }
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

    fn filled() -> MemberFields {
        MemberFields {
            name: "Omar".into(),
            phone: "123".into(),
            gender: "Male".into(),
            dob: "1995-05-05".into(),
            password: "secret".into(),
            address: "HQ".into(),
        }
    }

    #[test]
    fn each_step_gates_its_own_fields() {
        let fields = filled();
        assert!(validate_step(0, &fields, false).ok());
        assert!(validate_step(1, &fields, false).ok());
        assert!(validate_step(2, &fields, false).picture.is_some());
        assert!(validate_step(2, &fields, true).ok());

        let mut no_dob = filled();
        no_dob.dob.clear();
        assert!(validate_step(0, &no_dob, true).dob.is_some());
        // A later-step gap does not gate an earlier step.
        let mut no_password = filled();
        no_password.password.clear();
        assert!(validate_step(0, &no_password, false).ok());
    }

    #[test]
    fn a_blocked_step_flags_every_gap_at_once() {
        let errors = validate_step(0, &MemberFields::default(), false);
        assert!(errors.dob.is_some());
        assert!(errors.gender.is_some());
        assert!(errors.phone.is_some());
        assert_eq!(errors.password, None);

        let errors = validate_step(1, &MemberFields::default(), false);
        assert!(errors.password.is_some());
        assert!(errors.address.is_some());
        assert_eq!(errors.dob, None);
    }

    #[test]
    fn invite_must_name_member_role_and_company() {
        assert!(invite_claims(None).is_none());
        assert!(invite_claims(Some("garbage")).is_none());
    }
}
