//! IBAN-style mod-97 checksum (ISO 7064).
//!
//! The accumulator is reduced mod 97 whenever it grows past 999,999,999
//! instead of being computed over a big integer. The incremental reduction
//! is part of the contract: it changes the outcome for some malformed
//! inputs and must match the reference behavior exactly.

const MIN_LEN: usize = 15;
const MAX_LEN: usize = 34;
const REDUCE_ABOVE: u64 = 999_999_999;
const MODULUS: u64 = 97;

/// Validate an IBAN-style account number.
///
/// Spaces are stripped before checking, so `"GB82 WEST 1234 5698 7654 32"`
/// and `"GB82WEST12345698765432"` are equivalent. Absent input is invalid.
pub fn is_valid_checksum(iban: Option<&str>) -> bool {
    let Some(iban) = iban else {
        return false;
    };

    let stripped: String = iban.trim().chars().filter(|c| *c != ' ').collect();
    if stripped.len() < MIN_LEN || stripped.len() > MAX_LEN {
        return false;
    }

    // Move the leading country/check block to the end: rest + first4
    let reformatted: String = stripped
        .chars()
        .skip(4)
        .chain(stripped.chars().take(4))
        .collect();

    let mut total: u64 = 0;
    for c in reformatted.chars() {
        // Base-36: '0'..'9' -> 0..9, 'a'/'A'..'z'/'Z' -> 10..35
        let Some(value) = c.to_digit(36) else {
            return false;
        };
        let value = u64::from(value);

        total = if value > 9 { total * 100 } else { total * 10 } + value;

        if total > REDUCE_ABOVE {
            total %= MODULUS;
        }
    }

    total % MODULUS == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_good_iban() {
        assert!(is_valid_checksum(Some("GB82WEST12345698765432")));
        assert!(is_valid_checksum(Some("GB91BARC20031863198927")));
    }

    #[test]
    fn test_spaces_are_ignored() {
        assert!(is_valid_checksum(Some("GB82 WEST 1234 5698 7654 32")));
        assert!(is_valid_checksum(Some("  GB82WEST12345698765432  ")));
    }

    #[test]
    fn test_lowercase_accepted() {
        assert!(is_valid_checksum(Some("gb82west12345698765432")));
    }

    #[test]
    fn test_too_short() {
        assert!(!is_valid_checksum(Some("WHAAT")));
        assert!(!is_valid_checksum(Some("GB82WEST123456")));
    }

    #[test]
    fn test_too_long() {
        let long = "G".repeat(35);
        assert!(!is_valid_checksum(Some(&long)));
    }

    #[test]
    fn test_bad_check_digits() {
        assert!(!is_valid_checksum(Some("GB82WEST12345698765433")));
        assert!(!is_valid_checksum(Some("GB00WEST12345698765432")));
    }

    #[test]
    fn test_non_alphanumeric_rejected() {
        assert!(!is_valid_checksum(Some("GB82-WEST-1234-5698-7654")));
        assert!(!is_valid_checksum(Some("GB82WEST1234569876543!")));
    }

    #[test]
    fn test_none_is_invalid() {
        assert!(!is_valid_checksum(None));
    }

    #[test]
    fn test_deterministic() {
        let inputs = [
            "GB82WEST12345698765432",
            "RO49AAAA1B31007593840000",
            "ZZZZ9999ZZZZ9999ZZZ",
            "123456789012345",
        ];
        for input in inputs {
            let first = is_valid_checksum(Some(input));
            let second = is_valid_checksum(Some(input));
            assert_eq!(first, second, "checksum must be deterministic: {input}");
        }
    }
}
