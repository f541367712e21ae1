//! Unverified claim extraction from stored bearer tokens.
//!
//! The middle segment of the token is base64url-decoded and parsed as JSON.
//! No signature check happens here; the backend re-authorizes every request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use shared_types::{ApiError, Claims};

/// Decode the claims of a bearer token. Any structural problem, wrong
/// segment count, bad base64, or non-JSON payload, yields
/// `ApiError::MalformedCredential`.
pub fn decode_claims(token: &str) -> Result<Claims, ApiError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if segments.next().is_none() => payload,
        _ => return Err(ApiError::MalformedCredential),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| ApiError::MalformedCredential)?;
    serde_json::from_slice(&bytes).map_err(|_| ApiError::MalformedCredential)
}

/// Claims for the given slot, treating malformed or expired tokens as an
/// absent session.
pub fn current_claims(actor: crate::session::ActorClass) -> Option<Claims> {
    let token = crate::session::token(actor)?;
    let claims = decode_claims(&token).ok()?;
    if claims.is_expired_at(chrono::Utc::now().timestamp()) {
        tracing::debug!("stored credential expired, treating as absent");
        return None;
    }
    Some(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::MemberRole;

    fn forge(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn decodes_tenant_token() {
        let token = forge(serde_json::json!({
            "email": "amira@acme.test",
            "role": "admin",
            "companySlug": "acme",
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, Some(MemberRole::Admin));
        assert_eq!(claims.company_slug.as_deref(), Some("acme"));
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert_eq!(
            decode_claims("only-one-segment"),
            Err(ApiError::MalformedCredential)
        );
        assert_eq!(decode_claims("a.b"), Err(ApiError::MalformedCredential));
        assert_eq!(decode_claims("a.b.c.d"), Err(ApiError::MalformedCredential));
    }

    #[test]
    fn rejects_bad_base64_and_bad_json() {
        assert_eq!(
            decode_claims("head.!!not-base64!!.sig"),
            Err(ApiError::MalformedCredential)
        );
        let not_json = format!("head.{}.sig", URL_SAFE_NO_PAD.encode(b"plain text"));
        assert_eq!(
            decode_claims(&not_json),
            Err(ApiError::MalformedCredential)
        );
    }

    #[test]
    fn expired_token_reads_as_no_session() {
        use crate::session::{clear, set_token, ActorClass};

        let expired = forge(serde_json::json!({
            "email": "amira@acme.test",
            "exp": 1_000_000,
        }));
        set_token(ActorClass::TenantUser, &expired);
        assert_eq!(current_claims(ActorClass::TenantUser), None);
        clear(ActorClass::TenantUser);
    }
}
