//! Account validation pipeline.

use crate::checksum::is_valid_checksum;
use crate::currency::CurrencySet;
use crate::report::ValidationReport;
use rebank_core::AccountDraft;
use rust_decimal::Decimal;

/// Validates account submissions against the configured currency set.
#[derive(Debug, Clone, Default)]
pub struct AccountValidator {
    currencies: CurrencySet,
}

impl AccountValidator {
    pub fn new(currencies: CurrencySet) -> Self {
        Self { currencies }
    }

    pub fn currencies(&self) -> &CurrencySet {
        &self.currencies
    }

    /// Run every rule and collect all findings.
    ///
    /// The checksum and currency rules treat an absent value as a
    /// mismatch; the negative-balance rule only fires when an amount is
    /// present. Amount, owner id and issue date are required here because
    /// a stored account always carries them.
    pub fn validate(&self, draft: &AccountDraft) -> ValidationReport {
        ValidationReport::evaluate([
            ("iban", "Iban can not be null", draft.iban.is_some()),
            (
                "iban",
                "Invalid iban",
                is_valid_checksum(draft.iban.as_deref()),
            ),
            (
                "currency",
                "Invalid currency",
                self.currencies.is_valid(draft.currency.as_deref()),
            ),
            (
                "amount",
                "Balance can not be negative",
                draft.amount.map_or(true, |a| a >= Decimal::ZERO),
            ),
            ("amount", "Amount can not be null", draft.amount.is_some()),
            (
                "customer_id",
                "Customer id can not be null",
                draft.customer_id.is_some(),
            ),
            (
                "issued_at",
                "Issue date can not be null",
                draft.issued_at.is_some(),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn valid_draft() -> AccountDraft {
        AccountDraft {
            id: None,
            iban: Some("GB82WEST12345698765432".to_string()),
            currency: Some("EUR".to_string()),
            amount: Some(dec!(400)),
            customer_id: Some(1),
            issued_at: NaiveDate::from_ymd_opt(2022, 5, 7),
        }
    }

    fn validator() -> AccountValidator {
        AccountValidator::new(CurrencySet::default())
    }

    #[test]
    fn test_valid_account_passes() {
        let report = validator().validate(&valid_draft());
        assert!(report.is_empty(), "unexpected: {report}");
    }

    #[test]
    fn test_bad_iban_and_currency_collected_together() {
        let mut draft = valid_draft();
        draft.iban = Some("WHAAT".to_string());
        draft.currency = Some("DDD".to_string());
        let report = validator().validate(&draft);

        assert_eq!(
            report.sorted_messages(),
            vec!["Invalid currency", "Invalid iban"]
        );
    }

    #[test]
    fn test_missing_iban_fires_both_rules() {
        let mut draft = valid_draft();
        draft.iban = None;
        let report = validator().validate(&draft);

        assert_eq!(
            report.sorted_messages(),
            vec!["Iban can not be null", "Invalid iban"]
        );
    }

    #[test]
    fn test_negative_amount() {
        let mut draft = valid_draft();
        draft.amount = Some(dec!(-1));
        let report = validator().validate(&draft);

        assert_eq!(report.sorted_messages(), vec!["Balance can not be negative"]);
    }

    #[test]
    fn test_required_fields() {
        let mut draft = valid_draft();
        draft.amount = None;
        draft.customer_id = None;
        draft.issued_at = None;
        let report = validator().validate(&draft);

        assert_eq!(
            report.sorted_messages(),
            vec![
                "Amount can not be null",
                "Customer id can not be null",
                "Issue date can not be null"
            ]
        );
    }

    #[test]
    fn test_spaced_iban_accepted() {
        let mut draft = valid_draft();
        draft.iban = Some("GB82 WEST 1234 5698 7654 32".to_string());
        assert!(validator().validate(&draft).is_empty());
    }
}
