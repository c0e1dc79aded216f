//! SSN-style identity number validation.
//!
//! Shape is `AAA-GG-SSSS` with excluded blocks: the area may not start
//! with 000 or 666 and stays in 000-899, the group may not be 00, the
//! serial may not be 0000. The reference expressed the exclusions as
//! regex lookaheads; here the shape check and the exclusions are explicit.

/// Validate a national identity number. Absent input is invalid.
pub fn is_valid_ssn(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };

    let parts: Vec<&str> = value.split('-').collect();
    let [area, group, serial] = parts.as_slice() else {
        return false;
    };

    let shape_ok = area.len() == 3
        && group.len() == 2
        && serial.len() == 4
        && area.bytes().all(|b| b.is_ascii_digit())
        && group.bytes().all(|b| b.is_ascii_digit())
        && serial.bytes().all(|b| b.is_ascii_digit());
    if !shape_ok {
        return false;
    }

    // Area 000-899, excluding 000 and 666
    if !(b'0'..=b'8').contains(&area.as_bytes()[0]) {
        return false;
    }
    if *area == "000" || *area == "666" {
        return false;
    }
    if *group == "00" {
        return false;
    }
    if *serial == "0000" {
        return false;
    }

    true
}
