//! Phone number validation.
//!
//! Three accepted shapes, each with an optional `+` country code of 1-3
//! digits: the formatted 10-digit form (`(123) 456-7890`, separators
//! optional), a flat `123 456 789` grouping, and a `123 45 67 89`
//! grouping.

use regex::Regex;
use std::sync::OnceLock;

static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(\+\d{1,3}( )?)?((\(\d{3}\))|\d{3})[- .]?\d{3}[- .]?\d{4}$",
            r"|^(\+\d{1,3}( )?)?(\d{3}[ ]?){2}\d{3}$",
            r"|^(\+\d{1,3}( )?)?(\d{3}[ ]?)(\d{2}[ ]?){2}\d{2}$",
        ))
        .expect("phone pattern is a valid regex")
    })
}

/// Validate a phone number against the accepted shapes. Absent input is
/// invalid.
pub fn is_valid_phone_number(value: Option<&str>) -> bool {
    match value {
        Some(value) => phone_re().is_match(value),
        None => false,
    }
}
