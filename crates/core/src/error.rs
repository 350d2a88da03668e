//! Domain error model.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Field-level validation failures, keyed by payload field name.
///
/// A field can accumulate more than one message; validation collects every
/// failing field before returning, never just the first.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// referential rules, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A payload failed validation; carries the per-field messages.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// A requested entity was not found.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Order creation referenced product ids that do not exist.
    ///
    /// Carries **every** missing id, not just the first encountered.
    #[error("products with ids {0:?} not found")]
    MissingProducts(Vec<ProductId>),

    /// The operation conflicts with existing referencing rows.
    #[error("conflict: {0}")]
    Conflict(&'static str),
}

impl DomainError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn missing_products(ids: Vec<ProductId>) -> Self {
        Self::MissingProducts(ids)
    }

    pub fn conflict(msg: &'static str) -> Self {
        Self::Conflict(msg)
    }
}
