//! Schema and row types for sqlx mapping.
//!
//! Decimals are stored as TEXT; dates as ISO-8601 TEXT. The foreign key
//! from `accounts.customer_id` to `customer.id` is declared RESTRICT so
//! the database surfaces the violation instead of cascading.

use crate::error::{PersistenceError, PersistenceResult};
use chrono::NaiveDate;
use rebank_core::{Account, Customer};
use rust_decimal::Decimal;
use std::str::FromStr;

pub(crate) const CREATE_CUSTOMER_TABLE: &str = "
CREATE TABLE IF NOT EXISTS customer (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name    TEXT NOT NULL,
    address      TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    ssn          TEXT NOT NULL
)";

pub(crate) const CREATE_ACCOUNTS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS accounts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    iban        TEXT NOT NULL,
    currency    TEXT NOT NULL,
    amount      TEXT NOT NULL,
    customer_id INTEGER NOT NULL
                REFERENCES customer(id) ON DELETE RESTRICT,
    issued_at   TEXT NOT NULL
)";

/// Row type for the `customer` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct CustomerRow {
    pub id: i64,
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    pub ssn: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            full_name: row.full_name,
            address: row.address,
            phone_number: row.phone_number,
            ssn: row.ssn,
        }
    }
}

/// Row type for the `accounts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct AccountRow {
    pub id: i64,
    pub iban: String,
    pub currency: String,
    pub amount: String, // Decimal stored as TEXT
    pub customer_id: i64,
    pub issued_at: NaiveDate,
}

impl AccountRow {
    pub fn into_account(self) -> PersistenceResult<Account> {
        let amount = Decimal::from_str(&self.amount)
            .map_err(|e| PersistenceError::InvalidDecimal(e.to_string()))?;
        Ok(Account {
            id: self.id,
            iban: self.iban,
            currency: self.currency,
            amount,
            customer_id: self.customer_id,
            issued_at: self.issued_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_row_conversion() {
        let row = AccountRow {
            id: 3,
            iban: "GB82WEST12345698765432".to_string(),
            currency: "EUR".to_string(),
            amount: "123.45".to_string(),
            customer_id: 1,
            issued_at: NaiveDate::from_ymd_opt(2022, 5, 7).unwrap(),
        };
        let account = row.into_account().unwrap();
        assert_eq!(account.amount.to_string(), "123.45");
        assert_eq!(account.customer_id, 1);
    }

    #[test]
    fn test_bad_decimal_is_reported() {
        let row = AccountRow {
            id: 3,
            iban: "GB82WEST12345698765432".to_string(),
            currency: "EUR".to_string(),
            amount: "not-a-number".to_string(),
            customer_id: 1,
            issued_at: NaiveDate::from_ymd_opt(2022, 5, 7).unwrap(),
        };
        assert!(matches!(
            row.into_account(),
            Err(PersistenceError::InvalidDecimal(_))
        ));
    }
}
