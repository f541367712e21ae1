//! Tenant-scope endpoints, all under `/:slug/...` with the tenant slot's
//! token attached.

use super::ApiClient;
use crate::session::ActorClass;
use shared_types::{
    ApiError, ApplicationStatusRequest, ApplyLeaveRequest, AttendanceStatus, DashboardData,
    DeleteApplicationRequest, DeleteLeaveRequest, DeleteUserRequest, InviteUserRequest,
    LeaveDecisionRequest, LeavesAllResponse, ManualMarkRequest, MarkAttendanceRequest,
    MemberStatusRequest, MessageResponse, MonthlyAttendanceResponse, SalaryUpdateRequest,
    TodayAttendanceResponse,
};

fn client() -> ApiClient {
    ApiClient::for_actor(ActorClass::TenantUser)
}

pub async fn dashboard(slug: &str) -> Result<DashboardData, ApiError> {
    client().get(&format!("{slug}/dashboard")).await
}

// ── Applications ──

pub async fn update_application_status(
    slug: &str,
    body: &ApplicationStatusRequest,
) -> Result<MessageResponse, ApiError> {
    client()
        .patch(&format!("{slug}/applications/status"), body)
        .await
}

pub async fn delete_application(slug: &str, application_id: &str) -> Result<MessageResponse, ApiError> {
    client()
        .delete_with_body(
            &format!("{slug}/applications/delete"),
            &DeleteApplicationRequest {
                application_id: application_id.to_string(),
            },
        )
        .await
}

pub async fn delete_all_applications(slug: &str) -> Result<MessageResponse, ApiError> {
    client()
        .delete(&format!("{slug}/applications/delete-all"))
        .await
}

// ── Attendance ──

pub async fn mark_attendance(slug: &str, status: AttendanceStatus) -> Result<MessageResponse, ApiError> {
    client()
        .post(
            &format!("{slug}/attendance/mark"),
            &MarkAttendanceRequest { status },
        )
        .await
}

pub async fn manual_mark(slug: &str, body: &ManualMarkRequest) -> Result<MessageResponse, ApiError> {
    client()
        .post(&format!("{slug}/attendance/manual-mark"), body)
        .await
}

pub async fn mark_remaining_absent(slug: &str) -> Result<MessageResponse, ApiError> {
    client()
        .post(
            &format!("{slug}/attendance/mark-remaining-absent"),
            &serde_json::json!({}),
        )
        .await
}

pub async fn today_attendance(slug: &str) -> Result<TodayAttendanceResponse, ApiError> {
    client().get(&format!("{slug}/attendance/all-today")).await
}

/// `month` is `YYYY-MM`.
pub async fn monthly_attendance(
    slug: &str,
    user_id: &str,
    month: &str,
) -> Result<MonthlyAttendanceResponse, ApiError> {
    client()
        .get(&format!("{slug}/attendance/user/{user_id}?month={month}"))
        .await
}

// ── Leaves ──

pub async fn apply_leave(slug: &str, body: &ApplyLeaveRequest) -> Result<MessageResponse, ApiError> {
    client().post(&format!("{slug}/leave/apply"), body).await
}

pub async fn leaves_all(slug: &str) -> Result<LeavesAllResponse, ApiError> {
    client().get(&format!("{slug}/leaves/all")).await
}

pub async fn update_leave(slug: &str, body: &LeaveDecisionRequest) -> Result<MessageResponse, ApiError> {
    client().patch(&format!("{slug}/leaves/update"), body).await
}

pub async fn delete_leave(slug: &str, body: &DeleteLeaveRequest) -> Result<MessageResponse, ApiError> {
    client()
        .delete_with_body(&format!("{slug}/leaves/delete"), body)
        .await
}

pub async fn delete_all_leaves(slug: &str) -> Result<MessageResponse, ApiError> {
    client().delete(&format!("{slug}/leaves/delete-all")).await
}

// ── Members ──

pub async fn update_salary(slug: &str, body: &SalaryUpdateRequest) -> Result<MessageResponse, ApiError> {
    client().patch(&format!("{slug}/users/salary"), body).await
}

pub async fn update_member_status(
    slug: &str,
    body: &MemberStatusRequest,
) -> Result<MessageResponse, ApiError> {
    client().patch(&format!("{slug}/users/status"), body).await
}

pub async fn delete_member(slug: &str, email: &str) -> Result<MessageResponse, ApiError> {
    client()
        .delete_with_body(
            &format!("{slug}/users/delete"),
            &DeleteUserRequest {
                email: email.to_string(),
            },
        )
        .await
}

pub async fn invite_member(slug: &str, body: &InviteUserRequest) -> Result<MessageResponse, ApiError> {
    client().post(&format!("{slug}/invite/manual"), body).await
}
