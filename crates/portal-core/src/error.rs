//! Error types for the partner portal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    /// No subject is present — maps to HTTP 401 at the API boundary.
    #[error("authentication required")]
    Unauthenticated,

    /// The subject's role does not permit the requested action — maps
    /// to HTTP 403 at the API boundary.
    #[error("permission denied: {reason}")]
    AccessDenied { reason: String },

    #[error("validation error: {message}")]
    Validation { message: String },
}

pub type PortalResult<T> = Result<T, PortalError>;
