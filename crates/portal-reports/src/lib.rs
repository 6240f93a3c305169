//! Portal Reports — pure derivations over already-fetched entity
//! lists.
//!
//! Nothing here touches storage or the network: the data-fetch
//! collaborator hands in entity slices, and each function computes a
//! display-ready projection. Results are filtered for visibility by
//! the caller via `portal-policy` before rendering.

pub mod analytics;
pub mod assignments;
pub mod config;
pub mod payouts;

pub use analytics::{DashboardStats, PartnerPerformance};
pub use assignments::PamAssignment;
pub use config::PayoutConfig;
