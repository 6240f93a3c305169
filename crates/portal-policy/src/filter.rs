//! Data-visibility filters.
//!
//! Each filter reduces an already-fetched entity list to the subset
//! the subject may see. Filters never mutate their input, preserve
//! relative order (they back list displays), and return an empty
//! vector for any subject that holds no visibility — including `None`
//! and subjects without an assigned company.

use portal_core::models::company::Company;
use portal_core::models::deal::Deal;
use portal_core::models::payout::Payout;
use portal_core::models::target::{Target, TargetType};
use portal_core::models::user::{Role, Subject};

/// Companies: admins see all, company-scoped roles see their own.
pub fn filter_companies_by_access(companies: &[Company], subject: Option<&Subject>) -> Vec<Company> {
    let Some(subject) = subject else {
        return Vec::new();
    };
    if subject.role == Role::PortalAdmin {
        return companies.to_vec();
    }
    let Some(company_id) = subject.company_id else {
        return Vec::new();
    };
    companies
        .iter()
        .filter(|c| c.id == company_id)
        .cloned()
        .collect()
}

/// Deals: admins see all, everyone else sees their company's deals.
pub fn filter_deals_by_access(deals: &[Deal], subject: Option<&Subject>) -> Vec<Deal> {
    let Some(subject) = subject else {
        return Vec::new();
    };
    if subject.role == Role::PortalAdmin {
        return deals.to_vec();
    }
    let Some(company_id) = subject.company_id else {
        return Vec::new();
    };
    deals
        .iter()
        .filter(|d| d.company_id == company_id)
        .cloned()
        .collect()
}

/// Targets: admins see all; a PAM sees only company-type targets for
/// their assigned company; every other role sees none.
pub fn filter_targets_by_access(targets: &[Target], subject: Option<&Subject>) -> Vec<Target> {
    let Some(subject) = subject else {
        return Vec::new();
    };
    match (subject.role, subject.company_id) {
        (Role::PortalAdmin, _) => targets.to_vec(),
        (Role::Pam, Some(company_id)) => targets
            .iter()
            .filter(|t| t.target_type == TargetType::Company && t.target_entity_id == company_id)
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

/// Payouts: admins see all; a SPOC admin sees their company's
/// payouts; every other role sees none.
pub fn filter_payouts_by_access(payouts: &[Payout], subject: Option<&Subject>) -> Vec<Payout> {
    let Some(subject) = subject else {
        return Vec::new();
    };
    match (subject.role, subject.company_id) {
        (Role::PortalAdmin, _) => payouts.to_vec(),
        (Role::SpocAdmin, Some(company_id)) => payouts
            .iter()
            .filter(|p| p.company_id == company_id)
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}
