//! Company domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A partner company.
///
/// Every other resource in the portal carries an owning reference to a
/// company; data visibility is decided by matching that reference
/// against the subject's `company_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    /// The Partner Account Manager assigned to this company, if any.
    pub pam_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Per-company commission rate for payout calculation.
    /// `0.0` means "use the portal default".
    #[serde(default)]
    pub payout_percentage: f64,
    pub created_at: DateTime<Utc>,
}
