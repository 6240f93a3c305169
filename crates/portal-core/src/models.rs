//! Domain models for the partner portal.
//!
//! Field and enum wire names are pinned to the live backend schema via
//! serde renames, so these types serialize interchangeably with the
//! existing REST payloads.

pub mod company;
pub mod deal;
pub mod payout;
pub mod target;
pub mod user;
