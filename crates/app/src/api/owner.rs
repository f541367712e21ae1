//! Owner-scope endpoints. All but `login` send the owner slot's token.

use super::ApiClient;
use crate::session::ActorClass;
use shared_types::{
    ApiError, CompanyStatusRequest, HandleRequestBody, HandledStatus, InviteCompanyRequest,
    LoginRequest, MessageResponse, OwnerProfileResponse, OwnerStats, ServiceRequestsResponse,
    TokenResponse,
};

fn client() -> ApiClient {
    ApiClient::for_actor(ActorClass::Owner)
}

pub async fn login(body: &LoginRequest) -> Result<TokenResponse, ApiError> {
    ApiClient::public().post("owner/login", body).await
}

pub async fn profile() -> Result<OwnerProfileResponse, ApiError> {
    client().get("owner/profile").await
}

pub async fn stats() -> Result<OwnerStats, ApiError> {
    client().get("admin/stats").await
}

pub async fn set_company_status(slug: &str, is_active: bool) -> Result<MessageResponse, ApiError> {
    client()
        .patch(
            &format!("owner/company/{slug}/status"),
            &CompanyStatusRequest { is_active },
        )
        .await
}

pub async fn delete_company(slug: &str) -> Result<MessageResponse, ApiError> {
    client().delete(&format!("owner/company/{slug}")).await
}

pub async fn requests() -> Result<ServiceRequestsResponse, ApiError> {
    client().get("admin/requests").await
}

pub async fn handle_request(id: &str, status: HandledStatus) -> Result<MessageResponse, ApiError> {
    client()
        .patch(
            &format!("admin/request/{id}/handled"),
            &HandleRequestBody { status },
        )
        .await
}

pub async fn delete_request(id: &str) -> Result<MessageResponse, ApiError> {
    client().delete(&format!("admin/request/{id}")).await
}

pub async fn delete_all_requests() -> Result<MessageResponse, ApiError> {
    client().delete("admin/requests/delete-all").await
}

pub async fn invite_company(body: &InviteCompanyRequest) -> Result<MessageResponse, ApiError> {
    client().post("admin/invite-company", body).await
}
