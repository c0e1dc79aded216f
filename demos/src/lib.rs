//! Shared setup for the demo walkthroughs.

use rebank_business::{AccountService, CustomerService};
use rebank_persistence::MemoryStore;
use rebank_validation::{AccountValidator, CurrencySet, CustomerValidator};
use std::sync::Arc;

/// Both services wired over a shared in-memory store.
pub fn open_services() -> (CustomerService, AccountService) {
    let store = Arc::new(MemoryStore::new());
    let customers = CustomerService::new(store.clone(), CustomerValidator::new());
    let accounts = AccountService::new(
        store.clone(),
        store,
        AccountValidator::new(CurrencySet::default()),
    );
    (customers, accounts)
}

/// Console-friendly tracing output for the demos.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();
}
