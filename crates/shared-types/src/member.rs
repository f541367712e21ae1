use serde::{Deserialize, Serialize};

/// Tenant-scoped role carried in login tokens and member records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Hr,
    Employee,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Admin => "admin",
            MemberRole::Hr => "hr",
            MemberRole::Employee => "employee",
        }
    }

    /// Display label, capitalized, with the HR acronym kept uppercase.
    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Admin => "Admin",
            MemberRole::Hr => "HR",
            MemberRole::Employee => "Employee",
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Terminated,
}

impl MemberStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Terminated => "Terminated",
        }
    }
}

/// A company member as returned by the employee roster and profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
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
    pub status: Option<MemberStatus>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, rename = "profilePic")]
    pub profile_pic: Option<String>,
    #[serde(default, rename = "joinedAt")]
    pub joined_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn roles_use_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&MemberRole::Hr).unwrap(), r#""hr""#);
        let role: MemberRole = serde_json::from_str(r#""admin""#).unwrap();
        assert_eq!(role, MemberRole::Admin);
    }

    #[test]
    fn member_parses_with_sparse_fields() {
        let member: Member = serde_json::from_str(
            r#"{"_id":"m1","name":"Amira","email":"amira@acme.test","role":"employee","status":"active"}"#,
        )
        .unwrap();
        assert_eq!(member.role, Some(MemberRole::Employee));
        assert_eq!(member.status, Some(MemberStatus::Active));
        assert_eq!(member.salary, None);
    }
}
