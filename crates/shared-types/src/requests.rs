use crate::application::ApplicationStatus;
use crate::attendance::AttendanceStatus;
use crate::leave::{LeaveStatus, LeaveType};
use crate::member::{MemberRole, MemberStatus};
use crate::service_request::HandledStatus;
use serde::{Deserialize, Serialize};

/// Body for both `POST /owner/login` and `POST /login/:slug`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public lead form, `POST /request-service`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ServiceRequestForm {
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "companyEmail")]
    pub company_email: String,
    pub industry: String,
    #[serde(rename = "contactPerson")]
    pub contact_person: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// `PATCH /admin/request/:id/handled`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandleRequestBody {
    pub status: HandledStatus,
}

/// `POST /admin/invite-company`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InviteCompanyRequest {
    pub email: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub industry: String,
}

/// `PATCH /owner/company/:slug/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyStatusRequest {
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// `POST /:slug/attendance/mark`. Marks the caller; identity comes from
/// the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkAttendanceRequest {
    pub status: AttendanceStatus,
}

/// `POST /:slug/attendance/manual-mark`, reviewer override for one member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManualMarkRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub status: AttendanceStatus,
}

/// `PATCH /:slug/applications/status`. The applicant is identified by
/// email; the hire transition carries the fields needed to create the
/// member record in the same call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationStatusRequest {
    pub email: String,
    pub position: String,
    pub status: ApplicationStatus,
    #[serde(rename = "roleToAssign", skip_serializing_if = "Option::is_none")]
    pub role_to_assign: Option<MemberRole>,
    #[serde(default)]
    pub name: String,
}

impl ApplicationStatusRequest {
    pub fn transition(email: String, position: String, status: ApplicationStatus) -> Self {
        ApplicationStatusRequest {
            email,
            position,
            status,
            role_to_assign: None,
            name: String::new(),
        }
    }

    pub fn hire(email: String, position: String, name: String, role_to_assign: MemberRole) -> Self {
        ApplicationStatusRequest {
            email,
            position,
            status: ApplicationStatus::Hired,
            role_to_assign: Some(role_to_assign),
            name,
        }
    }
}

/// `DELETE /:slug/applications/delete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteApplicationRequest {
    #[serde(rename = "applicationId")]
    pub application_id: String,
}

/// `POST /:slug/leave/apply`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplyLeaveRequest {
    #[serde(rename = "leaveType")]
    pub leave_type: LeaveType,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub reason: String,
}

/// `PATCH /:slug/leaves/update`, reviewer decision. Leaves live embedded
/// in their owner's record, so the target is owner email plus index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveDecisionRequest {
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(rename = "leaveIndex")]
    pub leave_index: usize,
    pub status: LeaveStatus,
}

/// `DELETE /:slug/leaves/delete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteLeaveRequest {
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(rename = "leaveId")]
    pub leave_id: String,
}

/// `PATCH /:slug/users/salary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryUpdateRequest {
    pub email: String,
    #[serde(rename = "newSalary")]
    pub new_salary: f64,
}

/// `PATCH /:slug/users/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberStatusRequest {
    pub email: String,
    pub status: MemberStatus,
}

/// `DELETE /:slug/users/delete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteUserRequest {
    pub email: String,
}

/// `POST /:slug/invite/manual`, admin-only member invite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InviteUserRequest {
    pub email: String,
    pub role: MemberRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hire_body_matches_backend_contract() {
        let body = ApplicationStatusRequest::hire(
            "noor@mail.test".into(),
            "Backend Engineer".into(),
            "Noor".into(),
            MemberRole::Hr,
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "hired");
        assert_eq!(json["roleToAssign"], "hr");
        assert_eq!(json["email"], "noor@mail.test");
        assert_eq!(json["name"], "Noor");
    }

    #[test]
    fn plain_transition_omits_role() {
        let body = ApplicationStatusRequest::transition(
            "noor@mail.test".into(),
            "Backend Engineer".into(),
            ApplicationStatus::Accepted,
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "accepted");
        assert!(json.get("roleToAssign").is_none());
    }

    #[test]
    fn camel_case_wire_names() {
        let mark = ManualMarkRequest {
            user_id: "m1".into(),
            status: AttendanceStatus::Absent,
        };
        let json = serde_json::to_value(&mark).unwrap();
        assert_eq!(json["userId"], "m1");
        assert_eq!(json["status"], "absent");

        let decision = LeaveDecisionRequest {
            user_email: "amira@acme.test".into(),
            leave_index: 2,
            status: LeaveStatus::Approved,
        };
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["userEmail"], "amira@acme.test");
        assert_eq!(json["leaveIndex"], 2);

        let salary = SalaryUpdateRequest {
            email: "amira@acme.test".into(),
            new_salary: 95000.0,
        };
        assert_eq!(serde_json::to_value(&salary).unwrap()["newSalary"], 95000.0);
    }
}
