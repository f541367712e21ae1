use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-side error taxonomy for calls against the HRMS backend.
///
/// Every panel converts one of these into a transient toast; nothing
/// propagates to a top-level crash boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. `message` is taken from
    /// the response body's `message` field when one is present.
    RequestFailed { status: u16, message: String },
    /// No response was received at all (DNS, refused connection, aborted).
    Network(String),
    /// The backend answered 2xx but the body did not match the expected shape.
    Decode(String),
    /// A stored bearer token could not be parsed into claims.
    MalformedCredential,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Message suitable for showing to the user. Transport and decode
    /// failures collapse to a generic fallback.
    pub fn friendly_message(&self) -> String {
        match self {
            ApiError::RequestFailed { message, .. } if !message.is_empty() => message.clone(),
            ApiError::MalformedCredential => "Your session is invalid. Please log in again.".into(),
            _ => "Something went wrong. Please try again.".into(),
        }
    }

    /// Extract the `message` field from an error response body, falling back
    /// to a generic message when the body is not JSON or has no message.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str().map(String::from)))
            .unwrap_or_default();
        ApiError::RequestFailed { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { status, message } => {
                write!(f, "request failed ({status}): {message}")
            }
            ApiError::Network(e) => write!(f, "network error: {e}"),
            ApiError::Decode(e) => write!(f, "decode error: {e}"),
            ApiError::MalformedCredential => write!(f, "malformed credential"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Standard body shape for every mutating endpoint: `{ "message": ... }`,
/// optionally echoing the updated resource alongside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_response_body_extracts_message() {
        let err = ApiError::from_response_body(409, r#"{"message":"Invite already sent"}"#);
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 409,
                message: "Invite already sent".into()
            }
        );
        assert_eq!(err.friendly_message(), "Invite already sent");
    }

    #[test]
    fn from_response_body_tolerates_garbage() {
        let err = ApiError::from_response_body(500, "<html>Internal Server Error</html>");
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.friendly_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn network_errors_get_generic_message() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(
            err.friendly_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn unauthorized_detection() {
        assert!(ApiError::from_response_body(401, "{}").is_unauthorized());
        assert!(ApiError::from_response_body(403, "{}").is_unauthorized());
        assert!(!ApiError::from_response_body(404, "{}").is_unauthorized());
        assert!(!ApiError::Network("x".into()).is_unauthorized());
    }
}
