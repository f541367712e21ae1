use serde::{Deserialize, Serialize};

/// Outcome recorded when the owner handles an onboarding request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HandledStatus {
    Approved,
    Rejected,
}

impl HandledStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HandledStatus::Approved => "Approved",
            HandledStatus::Rejected => "Rejected",
        }
    }
}

/// A company onboarding request submitted from the public home page.
///
/// Approving one flips `is_handled` and then sends the company invite as a
/// separate, independently-failing step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceRequest {
    #[serde(default, rename = "_id")]
    pub id: String,
    #[serde(default, rename = "companyName")]
    pub company_name: String,
    #[serde(default, rename = "companyEmail")]
    pub company_email: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default, rename = "contactPerson")]
    pub contact_person: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "isHandled")]
    pub is_handled: bool,
    #[serde(default, rename = "handledStatus")]
    pub handled_status: Option<HandledStatus>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Body of `GET /admin/requests`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceRequestsResponse {
    #[serde(default)]
    pub requests: Vec<ServiceRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unhandled_request_parses_with_defaults() {
        let req: ServiceRequest = serde_json::from_str(
            r#"{"_id":"r1","companyName":"Initech","companyEmail":"ops@initech.test",
                "industry":"Software","contactPerson":"Omar"}"#,
        )
        .unwrap();
        assert!(!req.is_handled);
        assert_eq!(req.handled_status, None);
    }

    #[test]
    fn handled_request_carries_outcome() {
        let req: ServiceRequest = serde_json::from_str(
            r#"{"_id":"r2","companyName":"Initech","companyEmail":"ops@initech.test",
                "isHandled":true,"handledStatus":"approved"}"#,
        )
        .unwrap();
        assert!(req.is_handled);
        assert_eq!(req.handled_status, Some(HandledStatus::Approved));
    }

    #[test]
    fn list_body_unwraps_requests() {
        let body: ServiceRequestsResponse =
            serde_json::from_str(r#"{"requests":[]}"#).unwrap();
        assert!(body.requests.is_empty());
    }
}
