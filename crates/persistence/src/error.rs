//! # Persistence Errors
//!
//! Error types for the record store. Constraint violations are their own
//! variants so callers can pattern-match on the violation category.

use rebank_core::EntityKind;
use thiserror::Error;

/// Record store errors.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Unclassified database failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: EntityKind, id: i64 },

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    // === Conversion errors ===
    #[error("Invalid decimal value: {0}")]
    InvalidDecimal(String),

    // === Configuration errors ===
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

impl PersistenceError {
    /// Create a NotFound error.
    pub fn not_found(entity: EntityKind, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Classify a sqlx failure by its violation category.
    ///
    /// Foreign-key and unique violations become their own variants so the
    /// service layer can translate them; everything else stays an opaque
    /// `Database` error.
    pub fn classify(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return Self::ForeignKeyViolation(db_err.message().to_string());
                }
                sqlx::error::ErrorKind::UniqueViolation => {
                    return Self::UniqueViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        Self::Database(err)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, Self::ForeignKeyViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = PersistenceError::not_found(EntityKind::Customer, 7);
        assert_eq!(err.to_string(), "Record not found: Customer with id 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_violation_predicates() {
        let err = PersistenceError::ForeignKeyViolation("accounts.customer_id".to_string());
        assert!(err.is_foreign_key_violation());
        assert!(!err.is_not_found());
    }
}
