//! Tenant dashboard shell: sidebar from the navigation table, topbar, and
//! the active panel. One aggregate fetch feeds the panels that render from
//! dashboard data; the others fetch their own lists.

use crate::api;
use crate::auth::use_auth;
use crate::nav::TenantTab;
use crate::routes::Route;
use crate::routes::company::actions::{ApplyLeaveDialog, MarkAttendanceDialog};
use crate::routes::company::panels;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClock, LdFileText, LdLayoutDashboard, LdUser, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdCalendar;
use shared_types::{ApiError, DashboardData, MemberRole};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Button, ButtonVariant, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger, avatar_initials,
};

pub type DashboardResource = Resource<Result<DashboardData, ApiError>>;

#[component]
pub fn CompanyDashboard(slug: String) -> Element {
    let mut auth = use_auth();
    use_hook(move || auth.refresh());

    let role = auth.role().unwrap_or(MemberRole::Employee);
    let email = auth.email().unwrap_or_default();
    let display_name = auth
        .claims
        .read()
        .as_ref()
        .and_then(|c| c.name.clone())
        .unwrap_or_else(|| email.clone());

    let mut active = use_signal(|| TenantTab::Dashboard);
    let mut show_mark = use_signal(|| false);
    let mut show_leave = use_signal(|| false);

    let fetch_slug = slug.clone();
    let data: DashboardResource = use_resource(move || {
        let slug = fetch_slug.clone();
        async move { api::tenant::dashboard(&slug).await }
    });

    // Stale selections after a role change fall back to the dashboard.
    let tab = if active().is_visible(role) {
        active()
    } else {
        TenantTab::Dashboard
    };

    let company_name = match &*data.read() {
        Some(Ok(dash)) => dash.company_name.clone(),
        _ => "Staffdeck".to_string(),
    };

    rsx! {
        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "{company_name}" }
                    }
                }
                SidebarSeparator {}
                SidebarContent {
                    SidebarMenu {
                        for item in TenantTab::tabs_for(role).iter().copied() {
                            SidebarMenuItem {
                                SidebarMenuButton {
                                    active: tab == item,
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
                        onclick: {
                            let mut auth = auth;
                            move |_| {
                                auth.sign_out();
                                navigator().push(Route::Home {});
                            }
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
                    span { class: "shell-topbar-title", "{tab.label()}" }
                    div { class: "shell-topbar-spacer" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| show_mark.set(true),
                        "Mark attendance"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_leave.set(true),
                        "Apply for leave"
                    }
                    Avatar {
                        if let Some(pic) = member_pic(&data, &email) {
                            AvatarImage { src: pic }
                        }
                        AvatarFallback { {avatar_initials(&display_name)} }
                    }
                }

                div { class: "panel",
                    match tab {
                        TenantTab::Dashboard => rsx! {
                            panels::overview::OverviewPanel {
                                data: data,
                                email: email.clone(),
                            }
                        },
                        TenantTab::Profile => rsx! {
                            panels::profile::ProfilePanel { data: data, email: email.clone() }
                        },
                        TenantTab::Employees => rsx! {
                            panels::employees::EmployeesPanel {
                                slug: slug.clone(),
                                data: data,
                                viewer_email: email.clone(),
                            }
                        },
                        TenantTab::Attendance => rsx! {
                            panels::attendance::AttendancePanel { slug: slug.clone() }
                        },
                        TenantTab::LeaveRequests => rsx! {
                            panels::leaves::LeavesPanel { slug: slug.clone() }
                        },
                        TenantTab::Applications => rsx! {
                            panels::applications::ApplicationsPanel {
                                slug: slug.clone(),
                                data: data,
                            }
                        },
                        TenantTab::InviteUser => rsx! {
                            panels::invite_user::InviteUserPanel { slug: slug.clone() }
                        },
                    }
                }
            }

            MarkAttendanceDialog {
                slug: slug.clone(),
                open: show_mark(),
                on_close: move |_| show_mark.set(false),
                on_marked: {
                    let mut data = data;
                    move |_| data.restart()
                },
            }
            ApplyLeaveDialog {
                slug: slug.clone(),
                open: show_leave(),
                on_close: move |_| show_leave.set(false),
            }
        }
    }
}

fn member_pic(data: &DashboardResource, email: &str) -> Option<String> {
    match &*data.read() {
        Some(Ok(dash)) => dash
            .member_by_email(email)
            .and_then(|m| m.profile_pic.clone()),
        _ => None,
    }
}

fn tab_icon(tab: TenantTab) -> Element {
    match tab {
        TenantTab::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        TenantTab::Profile => rsx! {
            Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
        },
        TenantTab::Employees => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
        TenantTab::Attendance => rsx! {
            Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
        },
        TenantTab::LeaveRequests => rsx! {
            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
        },
        TenantTab::Applications => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
        },
        TenantTab::InviteUser => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
    }
}
