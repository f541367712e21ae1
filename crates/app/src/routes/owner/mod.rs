//! Platform owner console: one route, tab state held locally. Everything
//! here runs against the owner credential slot.

pub mod companies;
pub mod invite;
pub mod overview;
pub mod profile;
pub mod requests;

use crate::api;
use crate::credentials;
use crate::nav::OwnerTab;
use crate::routes::Route;
use crate::session::{self, ActorClass};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdFileText, LdLayoutDashboard, LdShield, LdUser, LdUserCheck,
};
use shared_types::{ApiError, OwnerStats};
use shared_ui::{
    Avatar, AvatarFallback, Button, ButtonVariant, Separator, Sidebar, SidebarContent,
    SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarSeparator, SidebarTrigger, avatar_initials,
};

pub type StatsResource = Resource<Result<OwnerStats, ApiError>>;

#[component]
pub fn OwnerDashboardPage() -> Element {
    let claims = use_hook(|| credentials::current_claims(ActorClass::Owner));

    // No owner session: bounce to the landing page.
    let signed_in = claims.is_some();
    use_effect(move || {
        if !signed_in {
            navigator().replace(Route::Home {});
        }
    });
    let Some(claims) = claims else {
        return rsx! {
            div { class: "status-screen",
                p { "Redirecting..." }
            }
        };
    };

    let display_name = claims.name.clone().unwrap_or_else(|| claims.email.clone());
    let mut active = use_signal(|| OwnerTab::Dashboard);

    let stats: StatsResource = use_resource(|| async move { api::owner::stats().await });

    rsx! {
        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "Staffdeck" }
                    }
                }
                SidebarSeparator {}
                SidebarContent {
                    SidebarMenu {
                        for item in OwnerTab::ALL.iter().copied() {
                            SidebarMenuItem {
                                SidebarMenuButton {
                                    active: active() == item,
                                    onclick: move |_| active.set(item),
                                    {tab_icon(item)}
                                    {item.label()}
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            session::clear(ActorClass::Owner);
                            navigator().push(Route::Home {});
                        },
                        "Sign out"
                    }
                }
            }

            SidebarInset {
                header { class: "shell-topbar",
                    SidebarTrigger {
                        span { "\u{2630}" }
                    }
                    Separator { }
                    span { class: "shell-topbar-title", "{active().label()}" }
                    div { class: "shell-topbar-spacer" }
                    Avatar {
                        AvatarFallback { {avatar_initials(&display_name)} }
                    }
                }

                div { class: "panel",
                    match active() {
                        OwnerTab::Dashboard => rsx! {
                            overview::OwnerOverviewPanel { stats: stats }
                        },
                        OwnerTab::Companies => rsx! {
                            companies::CompaniesPanel { stats: stats, blocked_only: false }
                        },
                        OwnerTab::Invite => rsx! {
                            invite::InviteCompanyPanel {}
                        },
                        OwnerTab::Requests => rsx! {
                            requests::RequestsPanel {}
                        },
                        OwnerTab::Blocked => rsx! {
                            companies::CompaniesPanel { stats: stats, blocked_only: true }
                        },
                        OwnerTab::Profile => rsx! {
                            profile::OwnerProfilePanel {}
                        },
                    }
                }
            }
        }
    }
}

fn tab_icon(tab: OwnerTab) -> Element {
    match tab {
        OwnerTab::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        OwnerTab::Companies => rsx! {
            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
        },
        OwnerTab::Invite => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
        OwnerTab::Requests => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
        },
        OwnerTab::Blocked => rsx! {
            Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
        },
        OwnerTab::Profile => rsx! {
            Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
        },
    }
}
