use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Sick,
    Casual,
    Annual,
    Unpaid,
}

impl LeaveType {
    pub const ALL: [LeaveType; 4] = [
        LeaveType::Sick,
        LeaveType::Casual,
        LeaveType::Annual,
        LeaveType::Unpaid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "sick",
            LeaveType::Casual => "casual",
            LeaveType::Annual => "annual",
            LeaveType::Unpaid => "unpaid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick",
            LeaveType::Casual => "Casual",
            LeaveType::Annual => "Annual",
            LeaveType::Unpaid => "Unpaid",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    /// Only pending requests show reviewer controls; decisions are terminal.
    pub fn is_pending(&self) -> bool {
        matches!(self, LeaveStatus::Pending)
    }
}

/// A leave request as embedded in its owner's member record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    #[serde(default, rename = "_id")]
    pub id: String,
    #[serde(rename = "leaveType")]
    pub leave_type: LeaveType,
    /// ISO dates, `YYYY-MM-DD`, inclusive on both ends.
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(default)]
    pub reason: String,
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Inclusive day count, `None` when either date fails to parse or the
    /// range is inverted.
    pub fn duration_days(&self) -> Option<i64> {
        let start = chrono::NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()?;
        let end = chrono::NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").ok()?;
        let days = (end - start).num_days() + 1;
        (days > 0).then_some(days)
    }
}

/// A member and their embedded leave history, as listed by
/// `GET /:slug/leaves/all`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveOwner {
    pub name: String,
    pub email: String,
    #[serde(default, rename = "profilePic")]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeavesAllResponse {
    #[serde(default)]
    pub data: Vec<LeaveOwner>,
}

/// One reviewer-table row: a leave joined with its owner and the index the
/// update endpoint addresses it by.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedLeave {
    pub leave: LeaveRequest,
    pub owner_name: String,
    pub owner_email: String,
    pub leave_index: usize,
}

impl LeavesAllResponse {
    /// Flatten the nested per-member lists into reviewer-table rows,
    /// keeping each leave's position within its owner's list.
    pub fn flatten(&self) -> Vec<FlattenedLeave> {
        self.data
            .iter()
            .flat_map(|owner| {
                owner.leaves.iter().enumerate().map(|(index, leave)| FlattenedLeave {
                    leave: leave.clone(),
                    owner_name: owner.name.clone(),
                    owner_email: owner.email.clone(),
                    leave_index: index,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flatten_keeps_per_owner_indices() {
        let body: LeavesAllResponse = serde_json::from_str(
            r#"{"data":[
                {"name":"Amira","email":"amira@acme.test","leaves":[
                    {"_id":"l1","leaveType":"sick","startDate":"2026-09-01","endDate":"2026-09-02","status":"pending"},
                    {"_id":"l2","leaveType":"annual","startDate":"2026-10-01","endDate":"2026-10-05","status":"approved"}]},
                {"name":"Omar","email":"omar@acme.test","leaves":[
                    {"_id":"l3","leaveType":"casual","startDate":"2026-09-10","endDate":"2026-09-10","status":"pending"}]}
            ]}"#,
        )
        .unwrap();

        let rows = body.flatten();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].leave_index, 1);
        assert_eq!(rows[1].owner_email, "amira@acme.test");
        assert_eq!(rows[2].leave_index, 0);
        assert_eq!(rows[2].owner_name, "Omar");
    }

    #[test]
    fn duration_is_inclusive() {
        let leave: LeaveRequest = serde_json::from_str(
            r#"{"_id":"l1","leaveType":"annual","startDate":"2026-09-01",
                "endDate":"2026-09-03","status":"approved"}"#,
        )
        .unwrap();
        assert_eq!(leave.duration_days(), Some(3));

        let inverted: LeaveRequest = serde_json::from_str(
            r#"{"_id":"l2","leaveType":"annual","startDate":"2026-09-05",
                "endDate":"2026-09-03","status":"pending"}"#,
        )
        .unwrap();
        assert_eq!(inverted.duration_days(), None);
    }

    #[test]
    fn only_pending_is_editable() {
        assert!(LeaveStatus::Pending.is_pending());
        assert!(!LeaveStatus::Approved.is_pending());
        assert!(!LeaveStatus::Rejected.is_pending());
    }
}
