use crate::credentials;
use crate::session::{self, ActorClass};
use dioxus::prelude::*;
use shared_types::{Claims, MemberRole};

/// Global tenant session state, derived from the stored bearer token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub claims: Signal<Option<Claims>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            claims: Signal::new(None),
        }
    }

    /// Re-derive claims from the stored token. Malformed or expired tokens
    /// read as no session.
    pub fn refresh(&mut self) {
        self.claims
            .set(credentials::current_claims(ActorClass::TenantUser));
    }

    pub fn sign_out(&mut self) {
        session::clear(ActorClass::TenantUser);
        self.claims.set(None);
    }

    pub fn role(&self) -> Option<MemberRole> {
        self.claims.read().as_ref().and_then(|c| c.role)
    }

    pub fn email(&self) -> Option<String> {
        self.claims.read().as_ref().map(|c| c.email.clone())
    }
}

/// Hook to access the tenant session state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
