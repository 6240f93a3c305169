//! Deal domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Won,
    Lost,
}

impl DealStatus {
    /// Archived deals are closed one way or the other.
    pub fn is_archived(&self) -> bool {
        matches!(self, DealStatus::Won | DealStatus::Lost)
    }

    /// Active deals still count toward the pipeline.
    pub fn is_active(&self) -> bool {
        matches!(self, DealStatus::Open | DealStatus::InProgress)
    }
}

/// A deal registered by a partner company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    /// The partner company that owns this deal.
    pub company_id: i64,
    pub customer_company: String,
    pub customer_company_url: Option<String>,
    pub customer_spoc: String,
    pub customer_spoc_email: String,
    pub customer_spoc_phone: Option<String>,
    /// Projected annual recurring revenue.
    pub revenue_arr: f64,
    /// Revenue actually recognized once the deal closes, if recorded.
    pub revenue_actual: Option<f64>,
    pub status: DealStatus,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deal {
    /// The revenue figure reporting should use: actual when recorded,
    /// projected ARR otherwise.
    pub fn realized_revenue(&self) -> f64 {
        self.revenue_actual.unwrap_or(self.revenue_arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names() {
        assert_eq!(
            serde_json::to_string(&DealStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(serde_json::to_string(&DealStatus::Won).unwrap(), "\"Won\"");
    }

    #[test]
    fn archived_and_active_partition_the_statuses() {
        for status in [
            DealStatus::Open,
            DealStatus::InProgress,
            DealStatus::Won,
            DealStatus::Lost,
        ] {
            assert_ne!(status.is_archived(), status.is_active());
        }
    }
}
