//! User domain model and the authenticated subject.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of portal roles.
///
/// Wire names match the role strings stored by the backend. Role
/// strings arriving from the identity service must go through
/// [`Role::parse`]; an unrecognized string yields `None`, and a
/// subject without a role holds no permissions at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Unrestricted role with full visibility and management rights.
    #[serde(rename = "Portal Administrator")]
    PortalAdmin,
    /// Partner Account Manager — manages a portfolio of partner
    /// companies, scoped by company assignment.
    #[serde(rename = "Partner Account Manager")]
    Pam,
    /// Single-point-of-contact administrator for one partner company.
    #[serde(rename = "Partner SPOC Admin")]
    SpocAdmin,
    /// Limited member of one partner company.
    #[serde(rename = "Partner Team Member")]
    TeamMember,
    /// Read-only role with analytics visibility only.
    Viewer,
}

impl Role {
    /// Every role, in declaration order. Used for exhaustive
    /// per-role coverage in tests.
    pub const ALL: [Role; 5] = [
        Role::PortalAdmin,
        Role::Pam,
        Role::SpocAdmin,
        Role::TeamMember,
        Role::Viewer,
    ];

    /// The backend's wire name for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PortalAdmin => "Portal Administrator",
            Role::Pam => "Partner Account Manager",
            Role::SpocAdmin => "Partner SPOC Admin",
            Role::TeamMember => "Partner Team Member",
            Role::Viewer => "Viewer",
        }
    }

    /// Parse a role string from the identity service.
    ///
    /// Returns `None` for anything outside the closed enumeration —
    /// callers must treat such subjects as unauthenticated rather
    /// than guessing at a default role.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "Portal Administrator" => Some(Role::PortalAdmin),
            "Partner Account Manager" => Some(Role::Pam),
            "Partner SPOC Admin" => Some(Role::SpocAdmin),
            "Partner Team Member" => Some(Role::TeamMember),
            "Viewer" => Some(Role::Viewer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated actor whose permissions are being evaluated.
///
/// Rehydrated once per session by the identity collaborator and passed
/// explicitly into every policy call — the engine never reads it from
/// ambient state. `company_id` is present only for roles scoped to a
/// single partner company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub role: Role,
    pub company_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub company_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The subject record used for permission evaluation.
    pub fn subject(&self) -> Subject {
        Subject {
            id: self.id,
            role: self.role,
            company_id: self.company_id,
        }
    }
}
