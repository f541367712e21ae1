//! Unauthenticated endpoints: the public directory, tenant login, the two
//! registration phases, and job applications.

use super::{ApiClient, FilePayload};
use shared_types::{
    ApiError, CompaniesResponse, Company, CompanyRegisteredResponse, LoginRequest,
    MessageResponse, ServiceRequestForm, TokenResponse,
};

pub async fn request_service(form: &ServiceRequestForm) -> Result<MessageResponse, ApiError> {
    ApiClient::public().post("request-service", form).await
}

pub async fn list_companies() -> Result<CompaniesResponse, ApiError> {
    ApiClient::public().get("company/get").await
}

pub async fn company_profile(slug: &str) -> Result<Company, ApiError> {
    ApiClient::public().get(&format!("public/{slug}")).await
}

pub async fn tenant_login(slug: &str, body: &LoginRequest) -> Result<TokenResponse, ApiError> {
    ApiClient::public().post(&format!("login/{slug}"), body).await
}

/// Phase one of company onboarding. Text fields plus an optional logo.
pub async fn register_company(
    fields: Vec<(&'static str, String)>,
    logo: Option<FilePayload>,
) -> Result<CompanyRegisteredResponse, ApiError> {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    if let Some(logo) = logo {
        form = logo.attach(form);
    }
    ApiClient::public().post_multipart("register/company", form).await
}

/// Phase two of company onboarding, and the whole of member onboarding.
pub async fn register_member(
    fields: Vec<(&'static str, String)>,
    profile_pic: Option<FilePayload>,
) -> Result<MessageResponse, ApiError> {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    if let Some(pic) = profile_pic {
        form = pic.attach(form);
    }
    ApiClient::public()
        .post_multipart("register/company-admin", form)
        .await
}

/// Job application from a company's public page; the résumé is required
/// by the backend.
pub async fn apply(
    slug: &str,
    fields: Vec<(&'static str, String)>,
    resume: FilePayload,
) -> Result<MessageResponse, ApiError> {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    form = resume.attach(form);
    ApiClient::public()
        .post_multipart(&format!("{slug}/apply"), form)
        .await
}
