use crate::attendance::{AttendanceRecord, AttendanceStatus};
use crate::leave::LeaveRequest;
use crate::member::{Member, MemberRole, MemberStatus};
use serde::{Deserialize, Serialize};

/// A roster member as embedded in the dashboard aggregate, with the
/// member's attendance and leave history inlined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardMember {
    #[serde(default, rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<MemberRole>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<MemberStatus>,
    #[serde(default, rename = "profilePic")]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
}

impl DashboardMember {
    /// Present/absent/leave counts over the member's whole history,
    /// feeding the stat cards and the donut chart.
    pub fn attendance_summary(&self) -> PersonalAttendanceSummary {
        let mut summary = PersonalAttendanceSummary::default();
        for record in &self.attendance {
            match record.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Leave => summary.leave += 1,
                AttendanceStatus::NotMarked => {}
            }
        }
        summary.total = self.attendance.len() as u32;
        summary
    }

    pub fn as_member(&self) -> Member {
        Member {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            position: self.position.clone(),
            salary: self.salary,
            status: self.status,
            phone: self.phone.clone(),
            address: None,
            profile_pic: self.profile_pic.clone(),
            joined_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PersonalAttendanceSummary {
    pub present: u32,
    pub absent: u32,
    pub leave: u32,
    pub total: u32,
}

/// Nested payload of `GET /:slug/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardBody {
    #[serde(default)]
    pub users: Vec<DashboardMember>,
    #[serde(default)]
    pub applications: Vec<crate::application::JobApplication>,
}

/// Top-level dashboard aggregate, one fetch per visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(default, rename = "logoUrl")]
    pub logo_url: Option<String>,
    pub data: DashboardBody,
}

impl DashboardData {
    /// The signed-in member's own roster entry, matched by claim email.
    pub fn member_by_email(&self, email: &str) -> Option<&DashboardMember> {
        self.data.users.iter().find(|u| u.email == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> DashboardData {
        serde_json::from_str(
            r#"{"companyName":"Acme","logoUrl":null,"data":{"users":[
                {"_id":"m1","name":"Amira","email":"amira@acme.test","role":"employee",
                 "attendance":[
                    {"_id":"r1","date":"2026-08-01","status":"present"},
                    {"_id":"r2","date":"2026-08-02","status":"present"},
                    {"_id":"r3","date":"2026-08-03","status":"absent"},
                    {"_id":"r4","date":"2026-08-04","status":"leave"}]}
            ]}}"#,
        )
        .unwrap()
    }

    #[test]
    fn finds_current_member_by_claim_email() {
        let data = sample();
        assert!(data.member_by_email("amira@acme.test").is_some());
        assert!(data.member_by_email("nobody@acme.test").is_none());
    }

    #[test]
    fn summary_counts_by_status() {
        let data = sample();
        let summary = data.member_by_email("amira@acme.test").unwrap().attendance_summary();
        assert_eq!(summary.present, 2);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.leave, 1);
        assert_eq!(summary.total, 4);
    }
}
