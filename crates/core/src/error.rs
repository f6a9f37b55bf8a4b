//! Domain error taxonomy shared by the engine and the HTTP surface.
//!
//! The HTTP layer owns the status-code mapping; this enum only names the
//! failure class. Uniqueness conflicts surface as `sqlx` constraint errors
//! and are classified at the API boundary, so there is no variant for them
//! here.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller-supplied input failed a domain rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but the role policy denies the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
