//! Portal Core — shared domain models and error types for the partner
//! portal.
//!
//! These are the core types shared across all crates: the role
//! enumeration, the authenticated subject, and the resource models
//! (companies, users, deals, targets, payouts) that the policy and
//! reporting layers operate on.

pub mod error;
pub mod models;

pub use error::{PortalError, PortalResult};
