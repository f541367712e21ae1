use crate::member::MemberRole;
use serde::{Deserialize, Serialize};

/// Claims embedded in a bearer token, decoded client-side without
/// signature verification.
///
/// Advisory only: these drive which UI to render and nothing else. Every
/// privileged request is re-authorized by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<MemberRole>,
    #[serde(default, rename = "companyId")]
    pub company_id: Option<String>,
    #[serde(default, rename = "companySlug")]
    pub company_slug: Option<String>,
    /// Industry carried by company invite tokens.
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, rename = "companyName")]
    pub company_name: Option<String>,
    /// Unix timestamp, seconds.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Whether the token's expiry has passed at `now` (unix seconds).
    /// Tokens without an `exp` claim are treated as unexpired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        matches!(self.exp, Some(exp) if exp <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_tenant_login_payload() {
        let claims: Claims = serde_json::from_str(
            r#"{"email":"amira@acme.test","role":"hr","companyId":"c1","companySlug":"acme","exp":1893456000}"#,
        )
        .unwrap();
        assert_eq!(claims.role, Some(MemberRole::Hr));
        assert_eq!(claims.company_slug.as_deref(), Some("acme"));
    }

    #[test]
    fn deserializes_company_invite_payload() {
        // Company invite tokens carry no role or slug, only the lead data.
        let claims: Claims = serde_json::from_str(
            r#"{"email":"ops@initech.test","companyName":"Initech","industry":"Software"}"#,
        )
        .unwrap();
        assert_eq!(claims.role, None);
        assert_eq!(claims.company_name.as_deref(), Some("Initech"));
    }

    #[test]
    fn expiry_semantics() {
        let mut claims: Claims = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert!(!claims.is_expired_at(i64::MAX));
        claims.exp = Some(100);
        assert!(claims.is_expired_at(100));
        assert!(claims.is_expired_at(101));
        assert!(!claims.is_expired_at(99));
    }
}
