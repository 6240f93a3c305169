//! Permission predicates.
//!
//! Each predicate is a total function over `Option<&Subject>`: `None`
//! always denies, and every `match` is exhaustive over [`Role`] so
//! that adding or removing a role is a compile-time-checked change to
//! the decision table rather than a string-literal hunt.

use portal_core::models::user::{Role, Subject};

fn role_of(subject: Option<&Subject>) -> Option<Role> {
    subject.map(|s| s.role)
}

// ---------------------------------------------------------------------------
// Role checks
// ---------------------------------------------------------------------------

pub fn is_portal_admin(subject: Option<&Subject>) -> bool {
    role_of(subject) == Some(Role::PortalAdmin)
}

pub fn is_pam(subject: Option<&Subject>) -> bool {
    role_of(subject) == Some(Role::Pam)
}

pub fn is_spoc_admin(subject: Option<&Subject>) -> bool {
    role_of(subject) == Some(Role::SpocAdmin)
}

pub fn is_team_member(subject: Option<&Subject>) -> bool {
    role_of(subject) == Some(Role::TeamMember)
}

pub fn is_viewer(subject: Option<&Subject>) -> bool {
    role_of(subject) == Some(Role::Viewer)
}

// ---------------------------------------------------------------------------
// Feature permissions
// ---------------------------------------------------------------------------

pub fn can_view_analytics(subject: Option<&Subject>) -> bool {
    match role_of(subject) {
        Some(Role::PortalAdmin | Role::Pam | Role::Viewer) => true,
        Some(Role::SpocAdmin | Role::TeamMember) | None => false,
    }
}

/// Aggregate revenue/deal numbers on the dashboard are admin-only.
pub fn can_view_dashboard_numbers(subject: Option<&Subject>) -> bool {
    is_portal_admin(subject)
}

pub fn can_add_company(subject: Option<&Subject>) -> bool {
    match role_of(subject) {
        Some(Role::PortalAdmin | Role::Pam) => true,
        Some(Role::SpocAdmin | Role::TeamMember | Role::Viewer) | None => false,
    }
}

pub fn can_manage_users(subject: Option<&Subject>) -> bool {
    is_portal_admin(subject)
}

pub fn can_add_targets(subject: Option<&Subject>) -> bool {
    is_portal_admin(subject)
}

pub fn can_view_payouts(subject: Option<&Subject>) -> bool {
    match role_of(subject) {
        Some(Role::PortalAdmin | Role::SpocAdmin) => true,
        Some(Role::Pam | Role::TeamMember | Role::Viewer) | None => false,
    }
}

pub fn can_add_deals(subject: Option<&Subject>) -> bool {
    match role_of(subject) {
        Some(Role::PortalAdmin | Role::Pam | Role::SpocAdmin | Role::TeamMember) => true,
        Some(Role::Viewer) | None => false,
    }
}

pub fn can_edit_deals(subject: Option<&Subject>) -> bool {
    match role_of(subject) {
        Some(Role::PortalAdmin | Role::Pam | Role::SpocAdmin) => true,
        Some(Role::TeamMember | Role::Viewer) | None => false,
    }
}

pub fn can_view_companies(subject: Option<&Subject>) -> bool {
    match role_of(subject) {
        Some(Role::PortalAdmin | Role::Pam | Role::SpocAdmin) => true,
        Some(Role::TeamMember | Role::Viewer) | None => false,
    }
}

/// Edit rights on a specific company: admins everywhere, PAMs and
/// SPOC admins only on their own company.
pub fn can_edit_company(subject: Option<&Subject>, company_id: i64) -> bool {
    let Some(subject) = subject else { return false };
    match subject.role {
        Role::PortalAdmin => true,
        Role::Pam | Role::SpocAdmin => subject.company_id == Some(company_id),
        Role::TeamMember | Role::Viewer => false,
    }
}

/// Read access to a specific company: like [`can_edit_company`] but
/// team members may also see their own company.
pub fn can_access_company(subject: Option<&Subject>, company_id: i64) -> bool {
    let Some(subject) = subject else { return false };
    match subject.role {
        Role::PortalAdmin => true,
        Role::Pam | Role::SpocAdmin | Role::TeamMember => subject.company_id == Some(company_id),
        Role::Viewer => false,
    }
}

pub fn can_view_pam_assignments(subject: Option<&Subject>) -> bool {
    is_portal_admin(subject)
}

pub fn can_manage_pam_assignments(subject: Option<&Subject>) -> bool {
    is_portal_admin(subject)
}

// ---------------------------------------------------------------------------
// Page access (navigation / routes)
// ---------------------------------------------------------------------------

/// Any authenticated subject may open the dashboard. This is the only
/// predicate where `Some` alone is enough.
pub fn can_access_dashboard(subject: Option<&Subject>) -> bool {
    subject.is_some()
}

pub fn can_access_analytics_page(subject: Option<&Subject>) -> bool {
    can_view_analytics(subject)
}

pub fn can_access_companies_page(subject: Option<&Subject>) -> bool {
    match role_of(subject) {
        Some(Role::PortalAdmin | Role::Pam) => true,
        Some(Role::SpocAdmin | Role::TeamMember | Role::Viewer) | None => false,
    }
}

/// All authenticated users may open the deals page; the list itself
/// is reduced by [`crate::filter::filter_deals_by_access`].
pub fn can_access_deals_page(subject: Option<&Subject>) -> bool {
    subject.is_some()
}

pub fn can_access_targets_page(subject: Option<&Subject>) -> bool {
    match role_of(subject) {
        Some(Role::PortalAdmin | Role::Pam) => true,
        Some(Role::SpocAdmin | Role::TeamMember | Role::Viewer) | None => false,
    }
}

pub fn can_access_users_page(subject: Option<&Subject>) -> bool {
    can_manage_users(subject)
}

pub fn can_access_payouts_page(subject: Option<&Subject>) -> bool {
    can_view_payouts(subject)
}

pub fn can_access_pam_assignments_page(subject: Option<&Subject>) -> bool {
    can_view_pam_assignments(subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(role: Role, company_id: Option<i64>) -> Subject {
        Subject {
            id: 1,
            role,
            company_id,
        }
    }

    /// Assert that a predicate allows exactly the listed roles.
    fn assert_allowed_roles(check: fn(Option<&Subject>) -> bool, allowed: &[Role]) {
        for role in Role::ALL {
            let s = subject(role, Some(1));
            assert_eq!(
                check(Some(&s)),
                allowed.contains(&role),
                "unexpected result for {role}"
            );
        }
        assert!(!check(None), "no subject must always deny");
    }

    #[test]
    fn feature_permission_allow_lists() {
        use Role::*;
        assert_allowed_roles(can_view_analytics, &[PortalAdmin, Pam, Viewer]);
        assert_allowed_roles(can_view_dashboard_numbers, &[PortalAdmin]);
        assert_allowed_roles(can_add_company, &[PortalAdmin, Pam]);
        assert_allowed_roles(can_manage_users, &[PortalAdmin]);
        assert_allowed_roles(can_add_targets, &[PortalAdmin]);
        assert_allowed_roles(can_view_payouts, &[PortalAdmin, SpocAdmin]);
        assert_allowed_roles(can_add_deals, &[PortalAdmin, Pam, SpocAdmin, TeamMember]);
        assert_allowed_roles(can_edit_deals, &[PortalAdmin, Pam, SpocAdmin]);
        assert_allowed_roles(can_view_companies, &[PortalAdmin, Pam, SpocAdmin]);
        assert_allowed_roles(can_view_pam_assignments, &[PortalAdmin]);
        assert_allowed_roles(can_manage_pam_assignments, &[PortalAdmin]);
    }

    #[test]
    fn page_access_allow_lists() {
        use Role::*;
        assert_allowed_roles(can_access_analytics_page, &[PortalAdmin, Pam, Viewer]);
        assert_allowed_roles(can_access_companies_page, &[PortalAdmin, Pam]);
        assert_allowed_roles(can_access_targets_page, &[PortalAdmin, Pam]);
        assert_allowed_roles(can_access_users_page, &[PortalAdmin]);
        assert_allowed_roles(can_access_payouts_page, &[PortalAdmin, SpocAdmin]);
        assert_allowed_roles(can_access_pam_assignments_page, &[PortalAdmin]);
        // Dashboard and deals are open to every authenticated role.
        assert_allowed_roles(can_access_dashboard, &Role::ALL);
        assert_allowed_roles(can_access_deals_page, &Role::ALL);
    }

    #[test]
    fn admin_edits_any_company() {
        let admin = subject(Role::PortalAdmin, None);
        assert!(can_edit_company(Some(&admin), 1));
        assert!(can_edit_company(Some(&admin), 999));
        assert!(can_access_company(Some(&admin), 999));
    }

    #[test]
    fn company_scoped_roles_need_matching_company() {
        for role in [Role::Pam, Role::SpocAdmin] {
            let s = subject(role, Some(1));
            assert!(can_edit_company(Some(&s), 1));
            assert!(!can_edit_company(Some(&s), 2));
        }

        // No assigned company means no access anywhere.
        let unassigned = subject(Role::Pam, None);
        assert!(!can_edit_company(Some(&unassigned), 1));
        assert!(!can_access_company(Some(&unassigned), 1));
    }

    #[test]
    fn team_member_accesses_but_never_edits_own_company() {
        let s = subject(Role::TeamMember, Some(3));
        assert!(can_access_company(Some(&s), 3));
        assert!(!can_access_company(Some(&s), 4));
        assert!(!can_edit_company(Some(&s), 3));
    }

    #[test]
    fn viewer_has_no_company_access() {
        let s = subject(Role::Viewer, Some(1));
        assert!(!can_access_company(Some(&s), 1));
        assert!(!can_edit_company(Some(&s), 1));
    }

    #[test]
    fn no_subject_denies_everything() {
        assert!(!can_access_dashboard(None));
        assert!(!can_access_deals_page(None));
        assert!(!can_edit_company(None, 1));
        assert!(!can_access_company(None, 1));
    }

    #[test]
    fn predicates_are_idempotent() {
        let s = subject(Role::SpocAdmin, Some(2));
        assert_eq!(can_view_payouts(Some(&s)), can_view_payouts(Some(&s)));
        assert_eq!(
            can_edit_company(Some(&s), 2),
            can_edit_company(Some(&s), 2)
        );
    }
}
