//! Customer validation pipeline.

use crate::phone::is_valid_phone_number;
use crate::report::ValidationReport;
use crate::ssn::is_valid_ssn;
use rebank_core::CustomerDraft;

/// Validates customer submissions.
///
/// A constructed value object handed to the service at construction time;
/// holds no mutable state.
#[derive(Debug, Clone, Default)]
pub struct CustomerValidator;

impl CustomerValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run every rule and collect all findings.
    ///
    /// Size rules only fire when the field is present; the pattern rules
    /// for phone and SSN treat an absent value as a mismatch, so a missing
    /// field can carry both a "can not be null" and a pattern finding.
    pub fn validate(&self, draft: &CustomerDraft) -> ValidationReport {
        let name_len = draft.full_name.as_deref().map(|s| s.chars().count());
        let address_len = draft.address.as_deref().map(|s| s.chars().count());

        ValidationReport::evaluate([
            (
                "full_name",
                "Full name can not be null",
                draft.full_name.is_some(),
            ),
            (
                "full_name",
                "Full name must be in range (5, 20) characters",
                name_len.map_or(true, |n| (5..=20).contains(&n)),
            ),
            (
                "address",
                "Address can not be null",
                draft.address.is_some(),
            ),
            (
                "address",
                "Address must be in range (3, 50) characters",
                address_len.map_or(true, |n| (3..=50).contains(&n)),
            ),
            (
                "phone_number",
                "Phone number can not be null",
                draft.phone_number.is_some(),
            ),
            (
                "phone_number",
                "Invalid phone number",
                is_valid_phone_number(draft.phone_number.as_deref()),
            ),
            ("ssn", "Ssn can not be null", draft.ssn.is_some()),
            (
                "ssn",
                "Invalid ssn information",
                is_valid_ssn(draft.ssn.as_deref()),
            ),
        ])
    }
}
