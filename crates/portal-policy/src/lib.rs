//! Portal Policy — role-based access control and data-visibility
//! filtering.
//!
//! This crate is the single source of truth for who may see and do
//! what in the partner portal. Every operation is a pure, total
//! function of the subject and the resource's owning company:
//!
//! - [`access`] — boolean permission predicates, one per action or
//!   page, used by the UI to hide controls and by request guards to
//!   short-circuit mutations.
//! - [`filter`] — visibility filters that reduce fetched entity lists
//!   to the subset the subject may see, preserving input order.
//! - [`guard`] — the only place a deny becomes an error, for API
//!   layers that want to translate it into a 401/403 response.
//!
//! Absence of permission degrades to `false` or an empty list, never
//! a panic or an error. A missing subject (`None`) is the
//! unauthenticated, least-privileged caller, and a role string the
//! portal does not recognize must be rejected at the identity
//! boundary ([`portal_core::models::user::Role::parse`]) so it never
//! reaches the engine — the permission tables here are allow-lists,
//! and anything unlisted is denied.

pub mod access;
pub mod filter;
pub mod guard;
