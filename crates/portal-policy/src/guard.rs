//! Request guards — the bridge from the pure predicates to an API
//! error a transport layer can map onto 401/403 responses.
//!
//! This is deliberately the only place a deny becomes an error; the
//! predicates and filters themselves never fail.

use portal_core::error::{PortalError, PortalResult};
use portal_core::models::user::{Role, Subject};

/// Require that the subject holds one of the listed roles.
///
/// `None` maps to [`PortalError::Unauthenticated`] (no credentials at
/// all), a present subject with a role outside `allowed` to
/// [`PortalError::AccessDenied`].
pub fn require_any(subject: Option<&Subject>, allowed: &[Role]) -> PortalResult<()> {
    let subject = subject.ok_or(PortalError::Unauthenticated)?;
    if allowed.contains(&subject.role) {
        Ok(())
    } else {
        Err(PortalError::AccessDenied {
            reason: format!("role {} is not permitted", subject.role),
        })
    }
}

/// Require that a permission predicate holds for the subject.
///
/// Lets request handlers reuse the exact UI-facing predicates, e.g.
/// `require(subject, access::can_edit_deals)`.
pub fn require(
    subject: Option<&Subject>,
    check: fn(Option<&Subject>) -> bool,
) -> PortalResult<()> {
    if subject.is_none() {
        return Err(PortalError::Unauthenticated);
    }
    if check(subject) {
        Ok(())
    } else {
        Err(PortalError::AccessDenied {
            reason: "action is not permitted for this role".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access;

    fn subject(role: Role) -> Subject {
        Subject {
            id: 1,
            role,
            company_id: None,
        }
    }

    #[test]
    fn listed_role_passes() {
        let s = subject(Role::Pam);
        assert!(require_any(Some(&s), &[Role::PortalAdmin, Role::Pam]).is_ok());
    }

    #[test]
    fn unlisted_role_is_denied() {
        let s = subject(Role::Viewer);
        let err = require_any(Some(&s), &[Role::PortalAdmin]).unwrap_err();
        assert!(matches!(err, PortalError::AccessDenied { .. }));
    }

    #[test]
    fn missing_subject_is_unauthenticated() {
        let err = require_any(None, &[Role::PortalAdmin]).unwrap_err();
        assert!(matches!(err, PortalError::Unauthenticated));

        let err = require(None, access::can_add_deals).unwrap_err();
        assert!(matches!(err, PortalError::Unauthenticated));
    }

    #[test]
    fn predicate_guard_matches_predicate() {
        let admin = subject(Role::PortalAdmin);
        let viewer = subject(Role::Viewer);

        assert!(require(Some(&admin), access::can_manage_users).is_ok());
        assert!(matches!(
            require(Some(&viewer), access::can_manage_users),
            Err(PortalError::AccessDenied { .. })
        ));
    }
}
