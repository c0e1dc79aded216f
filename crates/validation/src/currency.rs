//! Currency validation against a configured closed set.
//!
//! The accepted codes are injected as configuration rather than
//! hard-coded, so deployments can tune the set without recompiling.
//! Matching is exact and case-sensitive.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The closed set of accepted currency codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySet {
    #[serde(default = "default_codes")]
    codes: BTreeSet<String>,
}

fn default_codes() -> BTreeSet<String> {
    ["EUR", "USD", "GBP", "CHF", "RON"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl CurrencySet {
    /// Build a set from explicit codes.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership check. Absent input is invalid.
    pub fn is_valid(&self, value: Option<&str>) -> bool {
        match value {
            Some(code) => self.codes.contains(code),
            None => false,
        }
    }

    /// Accepted codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl Default for CurrencySet {
    fn default() -> Self {
        Self {
            codes: default_codes(),
        }
    }
}
