use serde::{Deserialize, Serialize};

/// Lifecycle of a public job application.
///
/// `Hired` is terminal and is only reached through the hire flow, which
/// also creates the member record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        }
    }

    /// Accept and reject are decisions on a pending application only.
    pub fn can_decide(&self) -> bool {
        matches!(self, ApplicationStatus::Pending)
    }

    /// Hiring requires a prior accept; it is the only exit from `Accepted`.
    pub fn can_hire(&self) -> bool {
        matches!(self, ApplicationStatus::Accepted)
    }

    /// Still in flight. `Rejected` and `Hired` are terminal.
    pub fn is_open(&self) -> bool {
        matches!(self, ApplicationStatus::Pending | ApplicationStatus::Accepted)
    }
}

/// A job application submitted from a company's public page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobApplication {
    #[serde(default, rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Server path of the uploaded résumé file.
    #[serde(default)]
    pub resume: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_round_trips_lowercase() {
        let status: ApplicationStatus = serde_json::from_str(r#""hired""#).unwrap();
        assert_eq!(status, ApplicationStatus::Hired);
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Pending).unwrap(),
            r#""pending""#
        );
    }

    #[test]
    fn decisions_only_apply_to_pending() {
        assert!(ApplicationStatus::Pending.can_decide());
        assert!(!ApplicationStatus::Accepted.can_decide());
        assert!(!ApplicationStatus::Rejected.can_decide());
        assert!(!ApplicationStatus::Hired.can_decide());
    }

    #[test]
    fn hiring_requires_a_prior_accept() {
        assert!(ApplicationStatus::Accepted.can_hire());
        assert!(!ApplicationStatus::Pending.can_hire());
        assert!(!ApplicationStatus::Rejected.can_hire());
        assert!(!ApplicationStatus::Hired.can_hire());
    }

    #[test]
    fn rejected_and_hired_are_terminal() {
        assert!(ApplicationStatus::Pending.is_open());
        assert!(ApplicationStatus::Accepted.is_open());
        assert!(!ApplicationStatus::Rejected.is_open());
        assert!(!ApplicationStatus::Hired.is_open());
    }

    #[test]
    fn application_parses_backend_shape() {
        let app: JobApplication = serde_json::from_str(
            r#"{"_id":"a1","name":"Noor","email":"noor@mail.test",
                "position":"Backend Engineer","status":"pending",
                "resume":"/uploads/resume.pdf"}"#,
        )
        .unwrap();
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.resume.as_deref(), Some("/uploads/resume.pdf"));
    }
}
