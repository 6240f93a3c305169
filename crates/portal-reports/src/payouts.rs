//! Payout calculation.
//!
//! Payouts are derived, not stored: one pending payout per won deal,
//! using the owning company's commission rate when it has one and the
//! configured default otherwise.

use portal_core::models::company::Company;
use portal_core::models::deal::{Deal, DealStatus};
use portal_core::models::payout::{Payout, PayoutStatus};
use tracing::debug;

use crate::config::PayoutConfig;

/// Compute pending payouts for every won deal.
///
/// Deals referencing a company that is not in `companies` are skipped
/// rather than reported — the deal list and company list come from
/// the same snapshot, so a miss means the company was deleted.
pub fn compute_payouts(deals: &[Deal], companies: &[Company], config: &PayoutConfig) -> Vec<Payout> {
    deals
        .iter()
        .filter(|d| d.status == DealStatus::Won)
        .filter_map(|deal| {
            let Some(company) = companies.iter().find(|c| c.id == deal.company_id) else {
                debug!(
                    deal_id = deal.id,
                    company_id = deal.company_id,
                    "skipping payout for deal with unknown company"
                );
                return None;
            };

            let rate = if company.payout_percentage > 0.0 {
                company.payout_percentage
            } else {
                config.default_commission_rate
            };

            Some(Payout {
                id: deal.id,
                deal_id: deal.id,
                company_id: deal.company_id,
                company_name: company.name.clone(),
                customer_company: deal.customer_company.clone(),
                revenue_arr: deal.revenue_arr,
                payout_amount: deal.revenue_arr * rate,
                status: PayoutStatus::Pending,
                created_at: deal.created_at,
            })
        })
        .collect()
}

/// Sum of all payout amounts.
pub fn total_payout_amount(payouts: &[Payout]) -> f64 {
    payouts.iter().map(|p| p.payout_amount).sum()
}
