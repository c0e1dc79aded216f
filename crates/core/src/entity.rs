//! Entity kinds stored in the record store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two record kinds the engine manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Customer,
    Account,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Customer => "Customer",
            EntityKind::Account => "Account",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(EntityKind::Customer.to_string(), "Customer");
        assert_eq!(EntityKind::Account.to_string(), "Account");
    }
}
