//! # Account Module
//!
//! An `Account` references exactly one owning [`Customer`] through
//! `customer_id`. The same draft shape serves both full submissions and
//! partial patches; [`merge_account`] implements the patch merge.
//!
//! [`Customer`]: crate::Customer

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier
    pub id: i64,
    /// IBAN-style account number, checksum-validated on the way in
    pub iban: String,
    /// Currency code from the configured closed set
    pub currency: String,
    /// Balance, never negative
    pub amount: Decimal,
    /// Owning customer (foreign key)
    pub customer_id: i64,
    pub issued_at: NaiveDate,
}

/// Inbound account shape with every field optional.
///
/// Used both for create/update submissions (validated first) and as the
/// patch shape for partial updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDraft {
    pub id: Option<i64>,
    pub iban: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<Decimal>,
    pub customer_id: Option<i64>,
    pub issued_at: Option<NaiveDate>,
}

impl AccountDraft {
    /// Explicit field-by-field conversion into a domain record.
    ///
    /// Callers must have run the account validation pipeline first; this
    /// returns `None` when any required field is still absent.
    pub fn into_account(self, id: i64) -> Option<Account> {
        Some(Account {
            id,
            iban: self.iban?,
            currency: self.currency?,
            amount: self.amount?,
            customer_id: self.customer_id?,
            issued_at: self.issued_at?,
        })
    }
}

impl From<&Account> for AccountDraft {
    fn from(account: &Account) -> Self {
        Self {
            id: Some(account.id),
            iban: Some(account.iban.clone()),
            currency: Some(account.currency.clone()),
            amount: Some(account.amount),
            customer_id: Some(account.customer_id),
            issued_at: Some(account.issued_at),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} ({} {} {}, owner: {})",
            self.id, self.iban, self.amount, self.currency, self.customer_id
        )
    }
}

/// Apply a partial update to a stored account.
///
/// Per field: a supplied value that differs from the stored one replaces
/// it, anything else is retained. The identifier is always taken from
/// `current`, never from the patch. Cross-field invariants (owner
/// existence in particular) are the service's concern, not the merge's.
pub fn merge_account(current: &Account, patch: &AccountDraft) -> Account {
    fn pick<T: Clone + PartialEq>(stored: &T, patched: Option<&T>) -> T {
        match patched {
            Some(value) if value != stored => value.clone(),
            _ => stored.clone(),
        }
    }

    Account {
        id: current.id,
        iban: pick(&current.iban, patch.iban.as_ref()),
        currency: pick(&current.currency, patch.currency.as_ref()),
        amount: pick(&current.amount, patch.amount.as_ref()),
        customer_id: pick(&current.customer_id, patch.customer_id.as_ref()),
        issued_at: pick(&current.issued_at, patch.issued_at.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stored() -> Account {
        Account {
            id: 1,
            iban: "GB82WEST12345698765432".to_string(),
            currency: "EUR".to_string(),
            amount: dec!(20.0),
            customer_id: 1,
            issued_at: NaiveDate::from_ymd_opt(2022, 5, 7).unwrap(),
        }
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let merged = merge_account(&stored(), &AccountDraft::default());
        assert_eq!(merged, stored());
    }

    #[test]
    fn test_single_field_patch() {
        let patch = AccountDraft {
            id: Some(1),
            currency: Some("RON".to_string()),
            ..Default::default()
        };
        let merged = merge_account(&stored(), &patch);

        assert_eq!(merged.currency, "RON");
        // Everything else untouched
        assert_eq!(merged.id, 1);
        assert_eq!(merged.iban, stored().iban);
        assert_eq!(merged.amount, stored().amount);
        assert_eq!(merged.customer_id, stored().customer_id);
        assert_eq!(merged.issued_at, stored().issued_at);
    }

    #[test]
    fn test_full_patch_replaces_all_but_id() {
        let patch = AccountDraft {
            id: Some(99),
            iban: Some("GB82WEST12345698760000".to_string()),
            currency: Some("RON".to_string()),
            amount: Some(dec!(250.0)),
            customer_id: Some(15),
            issued_at: NaiveDate::from_ymd_opt(2021, 5, 7),
        };
        let merged = merge_account(&stored(), &patch);

        assert_eq!(merged.id, 1, "patch must never change the identifier");
        assert_eq!(merged.iban, "GB82WEST12345698760000");
        assert_eq!(merged.currency, "RON");
        assert_eq!(merged.amount, dec!(250.0));
        assert_eq!(merged.customer_id, 15);
        assert_eq!(merged.issued_at, NaiveDate::from_ymd_opt(2021, 5, 7).unwrap());
    }

    #[test]
    fn test_patch_with_equal_values_keeps_stored() {
        let patch = AccountDraft::from(&stored());
        let merged = merge_account(&stored(), &patch);
        assert_eq!(merged, stored());
    }

    #[test]
    fn test_draft_into_account() {
        let draft = AccountDraft::from(&stored());
        let account = draft.into_account(1).unwrap();
        assert_eq!(account, stored());
    }

    #[test]
    fn test_draft_missing_field_is_none() {
        let mut draft = AccountDraft::from(&stored());
        draft.issued_at = None;
        assert!(draft.into_account(1).is_none());
    }
}
