//! Payout domain model.
//!
//! Payouts are not stored — they are derived from won deals by the
//! reporting layer and carry denormalized company fields for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutStatus {
    Pending,
    Approved,
    Rejected,
}

/// A commission payout owed to a partner company for a won deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub id: i64,
    pub deal_id: i64,
    pub company_id: i64,
    pub company_name: String,
    pub customer_company: String,
    pub revenue_arr: f64,
    pub payout_amount: f64,
    pub status: PayoutStatus,
    pub created_at: DateTime<Utc>,
}
