//! Role-based navigation model.
//!
//! One static table maps each role to its ordered tab list. The sidebar
//! renders from this table and the shell checks it again before mounting a
//! panel, so a stale selection after a role change falls back safely.

use shared_types::MemberRole;

/// Tabs available inside a tenant dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantTab {
    Dashboard,
    Profile,
    Employees,
    Attendance,
    LeaveRequests,
    Applications,
    InviteUser,
}

impl TenantTab {
    pub fn label(&self) -> &'static str {
        match self {
            TenantTab::Dashboard => "Dashboard",
            TenantTab::Profile => "My Profile",
            TenantTab::Employees => "Employees",
            TenantTab::Attendance => "Attendance",
            TenantTab::LeaveRequests => "Leave Requests",
            TenantTab::Applications => "Applications",
            TenantTab::InviteUser => "Invite User",
        }
    }

    /// Ordered tabs for a tenant role. Admin sees everything, HR loses the
    /// invite tab, employees get only their own pages.
    pub fn tabs_for(role: MemberRole) -> &'static [TenantTab] {
        match role {
            MemberRole::Admin => &[
                TenantTab::Dashboard,
                TenantTab::Profile,
                TenantTab::Employees,
                TenantTab::Attendance,
                TenantTab::LeaveRequests,
                TenantTab::Applications,
                TenantTab::InviteUser,
            ],
            MemberRole::Hr => &[
                TenantTab::Dashboard,
                TenantTab::Profile,
                TenantTab::Employees,
                TenantTab::Attendance,
                TenantTab::LeaveRequests,
                TenantTab::Applications,
            ],
            MemberRole::Employee => &[TenantTab::Dashboard, TenantTab::Profile],
        }
    }

    pub fn is_visible(&self, role: MemberRole) -> bool {
        TenantTab::tabs_for(role).contains(self)
    }
}

/// Tabs in the platform owner dashboard. Same set for the single owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerTab {
    Dashboard,
    Companies,
    Invite,
    Requests,
    Blocked,
    Profile,
}

impl OwnerTab {
    pub const ALL: [OwnerTab; 6] = [
        OwnerTab::Dashboard,
        OwnerTab::Companies,
        OwnerTab::Invite,
        OwnerTab::Requests,
        OwnerTab::Blocked,
        OwnerTab::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OwnerTab::Dashboard => "Dashboard",
            OwnerTab::Companies => "Companies",
            OwnerTab::Invite => "Invite Company",
            OwnerTab::Requests => "Requests",
            OwnerTab::Blocked => "Blocked",
            OwnerTab::Profile => "Profile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn admin_sees_every_tab() {
        let tabs = TenantTab::tabs_for(MemberRole::Admin);
        assert_eq!(tabs.len(), 7);
        assert!(tabs.contains(&TenantTab::InviteUser));
    }

    #[test]
    fn hr_matches_admin_minus_invite() {
        let admin = TenantTab::tabs_for(MemberRole::Admin);
        let hr = TenantTab::tabs_for(MemberRole::Hr);
        assert!(!hr.contains(&TenantTab::InviteUser));
        let admin_without_invite: Vec<_> = admin
            .iter()
            .copied()
            .filter(|t| *t != TenantTab::InviteUser)
            .collect();
        assert_eq!(hr.to_vec(), admin_without_invite);
    }

    #[test]
    fn employee_gets_only_personal_tabs() {
        assert_eq!(
            TenantTab::tabs_for(MemberRole::Employee),
            &[TenantTab::Dashboard, TenantTab::Profile]
        );
    }

    #[test]
    fn visibility_agrees_with_the_table() {
        for role in [MemberRole::Admin, MemberRole::Hr, MemberRole::Employee] {
            for tab in [
                TenantTab::Dashboard,
                TenantTab::Profile,
                TenantTab::Employees,
                TenantTab::Attendance,
                TenantTab::LeaveRequests,
                TenantTab::Applications,
                TenantTab::InviteUser,
            ] {
                assert_eq!(tab.is_visible(role), TenantTab::tabs_for(role).contains(&tab));
            }
        }
        assert!(!TenantTab::Employees.is_visible(MemberRole::Employee));
        assert!(!TenantTab::InviteUser.is_visible(MemberRole::Hr));
    }

    #[test]
    fn owner_tab_order_is_stable() {
        assert_eq!(OwnerTab::ALL[0], OwnerTab::Dashboard);
        assert_eq!(OwnerTab::ALL.len(), 6);
    }
}
