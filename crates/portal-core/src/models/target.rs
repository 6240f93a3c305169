//! Target domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of entity a target is set for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    #[serde(rename = "PAM")]
    Pam,
    Company,
    #[serde(rename = "SPOC")]
    Spoc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMetric {
    DealsCount,
    Revenue,
    WonDeals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPeriod {
    Monthly,
    Quarterly,
    Yearly,
}

/// A performance target set by a portal administrator.
///
/// `target_entity_id` points at a PAM user, a company, or a SPOC user
/// depending on `target_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: i64,
    pub target_type: TargetType,
    pub target_entity_id: i64,
    pub target_metric: TargetMetric,
    pub target_value: f64,
    pub target_period: TargetPeriod,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}
