//! Rebank Business - the consistency service
//!
//! `CustomerService` and `AccountService` orchestrate the field
//! validators, the referential-integrity checks and the record store.
//! Validation always runs to completion before the first store call;
//! store-level constraint violations are translated into domain errors by
//! category.

pub mod account;
pub mod customer;
pub mod error;

pub use account::AccountService;
pub use customer::CustomerService;
pub use error::{ServiceError, ServiceResult};
