//! Bearer token storage. Two independent slots: a platform owner session
//! and a tenant user session can coexist in the same browser without
//! evicting each other.

/// Which credential slot an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorClass {
    Owner,
    TenantUser,
}

impl ActorClass {
    fn storage_key(&self) -> &'static str {
        match self {
            ActorClass::Owner => "ownerToken",
            ActorClass::TenantUser => "token",
        }
    }
}

/// Store a bearer token for the given slot, replacing any previous one.
pub fn set_token(actor: ActorClass, token: &str) {
    backend::set(actor.storage_key(), token);
}

/// The stored token for the slot, if any.
pub fn token(actor: ActorClass) -> Option<String> {
    backend::get(actor.storage_key())
}

/// Remove the slot's token. The other slot is untouched.
pub fn clear(actor: ActorClass) {
    backend::remove(actor.storage_key());
}

#[cfg(target_arch = "wasm32")]
mod backend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn set(key: &str, value: &str) {
        if let Some(storage) = storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "failed to persist session token");
            }
        }
    }

    pub fn get(key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    pub fn remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// Host builds (tests) keep tokens in a thread-local map.
#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn set(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn get(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slots_are_independent() {
        clear(ActorClass::Owner);
        clear(ActorClass::TenantUser);

        set_token(ActorClass::Owner, "owner-jwt");
        set_token(ActorClass::TenantUser, "tenant-jwt");
        assert_eq!(token(ActorClass::Owner).as_deref(), Some("owner-jwt"));
        assert_eq!(token(ActorClass::TenantUser).as_deref(), Some("tenant-jwt"));

        clear(ActorClass::TenantUser);
        assert_eq!(token(ActorClass::TenantUser), None);
        assert_eq!(token(ActorClass::Owner).as_deref(), Some("owner-jwt"));
    }

    #[test]
    fn set_replaces_previous_token() {
        set_token(ActorClass::TenantUser, "first");
        set_token(ActorClass::TenantUser, "second");
        assert_eq!(token(ActorClass::TenantUser).as_deref(), Some("second"));
        clear(ActorClass::TenantUser);
    }
}
