//! Rebank Validation - stateless field validators and the eager pipeline
//!
//! Every field validator is a pure predicate: `None`/absent input is
//! invalid, never a panic or an error. Entity-level pipelines evaluate an
//! explicit rule list eagerly and collect every finding into a
//! [`ValidationReport`] - a single bad input can carry several violations.

pub mod account;
pub mod checksum;
pub mod currency;
pub mod customer;
pub mod phone;
pub mod report;
pub mod ssn;

pub use account::AccountValidator;
pub use checksum::is_valid_checksum;
pub use currency::CurrencySet;
pub use customer::CustomerValidator;
pub use phone::is_valid_phone_number;
pub use report::{FieldError, ValidationReport};
pub use ssn::is_valid_ssn;
