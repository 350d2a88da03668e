//! Store error model and sqlx error mapping.
//!
//! SQLx errors are surfaced as follows:
//!
//! | SQLx Error | PostgreSQL Error Code | Mapped To | Scenario |
//! |------------|----------------------|-----------|----------|
//! | Database (foreign key violation) | `23503` on DELETE | `DomainError::Conflict` | Deleting a customer/product still referenced by orders |
//! | Database (other) | Any other | `StoreError::Database` | Constraint violations, connection failures |
//! | RowNotFound et al. | N/A | `StoreError::Database` | Driver-level failures |
//!
//! Row lookups that legitimately miss are mapped to `DomainError::NotFound`
//! by the repositories themselves (via `fetch_optional`/`rows_affected`),
//! never through the driver error path.

use thiserror::Error;

use storefront_core::DomainError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A domain rule failed (not found, missing products, conflict).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The store itself failed; recovered at the handler boundary as a
    /// generic server error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// True when the error is a Postgres foreign-key violation (SQLSTATE 23503).
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"))
}
