//! # Customer Module
//!
//! A `Customer` owns zero or more accounts. The identifier is assigned by
//! the record store on insert and never changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned identifier
    pub id: i64,
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    /// National identity number (SSN-style, `AAA-GG-SSSS`)
    pub ssn: String,
}

/// Inbound customer shape with every field optional.
///
/// Drafts are validated by the validation pipeline before they are turned
/// into a [`Customer`]; a missing field is a validation finding, not a panic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub ssn: Option<String>,
}

impl CustomerDraft {
    /// Explicit field-by-field conversion into a domain record.
    ///
    /// Callers must have run the customer validation pipeline first; this
    /// returns `None` when any required field is still absent.
    pub fn into_customer(self, id: i64) -> Option<Customer> {
        Some(Customer {
            id,
            full_name: self.full_name?,
            address: self.address?,
            phone_number: self.phone_number?,
            ssn: self.ssn?,
        })
    }
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        Self {
            id: Some(customer.id),
            full_name: Some(customer.full_name.clone()),
            address: Some(customer.address.clone()),
            phone_number: Some(customer.phone_number.clone()),
            ssn: Some(customer.ssn.clone()),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer {} ({})", self.id, self.full_name)
    }
}
