//! Rebank Core - Domain types
//!
//! This crate contains the fundamental types used across Rebank:
//! - `Customer`: account-owning party with contact and identity details
//! - `Account`: a bank account referencing exactly one owning customer
//! - `CustomerDraft` / `AccountDraft`: inbound shapes with every field
//!   optional, validated before they become domain values
//! - `merge_account`: the field-by-field partial-update merge

pub mod account;
pub mod customer;
pub mod entity;

pub use account::{merge_account, Account, AccountDraft};
pub use customer::{Customer, CustomerDraft};
pub use entity::EntityKind;
