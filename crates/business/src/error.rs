//! Consistency service errors.
//!
//! Callers pattern-match on the kind; storage detail never leaks except
//! through the opaque `Store` variant.

use rebank_core::EntityKind;
use rebank_persistence::PersistenceError;
use rebank_validation::ValidationReport;
use thiserror::Error;

/// Errors returned by the consistency service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with id {id} was not found!")]
    NotFound { entity: EntityKind, id: i64 },

    /// Deletion blocked because dependent records still reference the
    /// target.
    #[error("{entity} with id {id} has associated accounts. Delete accounts before deleting customer.")]
    ReferentialIntegrity { entity: EntityKind, id: i64 },

    /// One or more field validators failed; every violation is carried.
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    /// Opaque storage failure not otherwise classified.
    #[error("Storage error: {0}")]
    Store(#[from] PersistenceError),
}

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn customer_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: EntityKind::Customer,
            id,
        }
    }

    pub fn account_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: EntityKind::Account,
            id,
        }
    }

    pub fn customer_has_accounts(id: i64) -> Self {
        Self::ReferentialIntegrity {
            entity: EntityKind::Customer,
            id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
