use serde::{Deserialize, Serialize};

/// Per-day attendance state. `NotMarked` never comes back from the record
/// endpoints; it is the derived absence of a record for the day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
    #[serde(rename = "not-marked")]
    NotMarked,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
            AttendanceStatus::NotMarked => "not-marked",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::NotMarked => "Not marked",
        }
    }
}

/// One row of today's roster: every active member, with `not-marked`
/// standing in wherever no record exists yet for the day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodayAttendance {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "profilePic")]
    pub profile_pic: Option<String>,
    pub status: AttendanceStatus,
}

/// Body of `GET /:slug/attendance/all-today`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodayAttendanceResponse {
    #[serde(default)]
    pub data: Vec<TodayAttendance>,
}

/// A persisted attendance record, as listed by the monthly view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    #[serde(default, rename = "_id")]
    pub id: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub status: AttendanceStatus,
}

/// Body of `GET /:slug/attendance/user/:id?month=YYYY-MM`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAttendanceResponse {
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default, rename = "userName")]
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_marked_uses_hyphenated_wire_name() {
        let status: AttendanceStatus = serde_json::from_str(r#""not-marked""#).unwrap();
        assert_eq!(status, AttendanceStatus::NotMarked);
        assert_eq!(status.as_str(), "not-marked");
    }

    #[test]
    fn roster_parses_backend_shape() {
        let body: TodayAttendanceResponse = serde_json::from_str(
            r#"{"data":[{"userId":"m1","name":"Amira","email":"amira@acme.test","status":"present"},
                        {"userId":"m2","name":"Omar","email":"omar@acme.test","status":"not-marked"}]}"#,
        )
        .unwrap();
        assert_eq!(body.data.len(), 2);
        assert_eq!(body.data[1].status, AttendanceStatus::NotMarked);
    }

    #[test]
    fn monthly_body_parses() {
        let body: MonthlyAttendanceResponse = serde_json::from_str(
            r#"{"userName":"Amira","attendance":[{"_id":"r1","date":"2026-08-01","status":"leave"}]}"#,
        )
        .unwrap();
        assert_eq!(body.user_name, "Amira");
        assert_eq!(body.attendance[0].status, AttendanceStatus::Leave);
    }
}
