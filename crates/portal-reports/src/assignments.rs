//! PAM assignment views.
//!
//! The admin-only assignments screen shows which PAM manages which
//! partner company; this derives those rows from the user and company
//! lists.

use chrono::{DateTime, Utc};
use portal_core::models::company::Company;
use portal_core::models::user::{Role, User};
use serde::{Deserialize, Serialize};

/// One row on the PAM assignments screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PamAssignment {
    pub pam_id: i64,
    pub pam_name: String,
    pub pam_email: String,
    /// Assigned company, if any — unassigned PAMs still appear.
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One assignment row per PAM user, in user-list order.
pub fn pam_assignments(users: &[User], companies: &[Company]) -> Vec<PamAssignment> {
    users
        .iter()
        .filter(|u| u.role == Role::Pam)
        .map(|pam| {
            let company = pam
                .company_id
                .and_then(|id| companies.iter().find(|c| c.id == id));
            PamAssignment {
                pam_id: pam.id,
                pam_name: pam.username.clone(),
                pam_email: pam.email.clone(),
                company_id: pam.company_id,
                company_name: company.map(|c| c.name.clone()),
                created_at: pam.created_at,
            }
        })
        .collect()
}
