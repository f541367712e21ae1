//! Access gate for everything under `/:slug`.
//!
//! Without a stored tenant credential the public page renders immediately,
//! with no network round trip. With one, a dashboard probe decides between
//! the dashboard shell and the public page. The public page's login form
//! toggles `refresh` to re-run the probe.

use crate::credentials;
use crate::session::{self, ActorClass};
use crate::{api, routes::company};
use dioxus::prelude::*;
use shared_ui::Skeleton;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ProbeOutcome {
    /// No stored credential; nothing was sent.
    NoCredential,
    Authorized,
    Refused,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum GateState {
    Checking,
    Granted,
    Denied,
}

fn resolve(probe: Option<ProbeOutcome>) -> GateState {
    match probe {
        None => GateState::Checking,
        Some(ProbeOutcome::Authorized) => GateState::Granted,
        Some(ProbeOutcome::NoCredential) | Some(ProbeOutcome::Refused) => GateState::Denied,
    }
}

#[component]
pub fn CompanyGatePage(slug: String) -> Element {
    let mut refresh = use_signal(|| false);

    let probe_slug = slug.clone();
    let probe = use_resource(move || {
        let slug = probe_slug.clone();
        let _tick = refresh();
        async move {
            if credentials::current_claims(ActorClass::TenantUser).is_none() {
                return ProbeOutcome::NoCredential;
            }
            match api::tenant::dashboard(&slug).await {
                Ok(_) => ProbeOutcome::Authorized,
                Err(e) => {
                    tracing::info!(%slug, "dashboard probe refused");
                    if e.is_unauthorized() {
                        session::clear(ActorClass::TenantUser);
                    }
                    ProbeOutcome::Refused
                }
            }
        }
    });

    match resolve(*probe.read()) {
        GateState::Checking => rsx! {
            div { class: "status-screen",
                Skeleton {}
                p { "Checking access..." }
            }
        },
        GateState::Granted => rsx! {
            company::dashboard::CompanyDashboard { slug: slug.clone() }
        },
        GateState::Denied => rsx! {
            company::public_page::CompanyPublicPage {
                slug: slug.clone(),
                on_login: move |_| {
                    let current = refresh();
                    refresh.set(!current);
                },
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_credential_denies_without_granting() {
        assert_eq!(resolve(Some(ProbeOutcome::NoCredential)), GateState::Denied);
    }

    #[test]
    fn probe_results_map_to_states() {
        assert_eq!(resolve(None), GateState::Checking);
        assert_eq!(resolve(Some(ProbeOutcome::Authorized)), GateState::Granted);
        assert_eq!(resolve(Some(ProbeOutcome::Refused)), GateState::Denied);
    }
}
