//! Dashboard statistics and per-partner performance.

use portal_core::models::company::Company;
use portal_core::models::deal::{Deal, DealStatus};
use portal_core::models::user::User;
use serde::{Deserialize, Serialize};

/// Portal-wide totals shown on the dashboard.
///
/// Revenue counts won deals only, preferring recorded actual revenue
/// over projected ARR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_companies: u64,
    pub total_deals: u64,
    pub won_deals: u64,
    /// Open + In Progress.
    pub active_deals: u64,
    pub total_revenue: f64,
}

pub fn dashboard_stats(companies: &[Company], deals: &[Deal]) -> DashboardStats {
    let won: Vec<&Deal> = deals.iter().filter(|d| d.status == DealStatus::Won).collect();

    DashboardStats {
        total_companies: companies.len() as u64,
        total_deals: deals.len() as u64,
        won_deals: won.len() as u64,
        active_deals: deals.iter().filter(|d| d.status.is_active()).count() as u64,
        total_revenue: won.iter().map(|d| d.realized_revenue()).sum(),
    }
}

/// Performance metrics for one partner company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerPerformance {
    pub company_id: i64,
    pub company_name: String,
    /// Username of the assigned PAM, if one is assigned and known.
    pub pam_name: Option<String>,
    pub total_deals: u64,
    pub won_deals: u64,
    pub total_revenue: f64,
    pub tags: Vec<String>,
}

/// Per-company performance rows, one per company in input order.
pub fn partner_performance(
    companies: &[Company],
    deals: &[Deal],
    users: &[User],
) -> Vec<PartnerPerformance> {
    companies
        .iter()
        .map(|company| {
            let company_deals: Vec<&Deal> =
                deals.iter().filter(|d| d.company_id == company.id).collect();
            let won: Vec<&&Deal> = company_deals
                .iter()
                .filter(|d| d.status == DealStatus::Won)
                .collect();

            let pam_name = company
                .pam_id
                .and_then(|pam_id| users.iter().find(|u| u.id == pam_id))
                .map(|u| u.username.clone());

            PartnerPerformance {
                company_id: company.id,
                company_name: company.name.clone(),
                pam_name,
                total_deals: company_deals.len() as u64,
                won_deals: won.len() as u64,
                total_revenue: won.iter().map(|d| d.realized_revenue()).sum(),
                tags: company.tags.clone(),
            }
        })
        .collect()
}
