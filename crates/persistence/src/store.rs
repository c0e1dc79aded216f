//! Abstract record store traits.
//!
//! The consistency service only sees these seams. `insert` ignores any
//! identifier on the way in and returns the stored record with the
//! store-assigned one; `update` fails with `NotFound` when the id does not
//! exist and with `ForeignKeyViolation` when a reference constraint is
//! violated; `delete_by_id` reports the removed-row count instead of
//! failing on absence.

use crate::error::PersistenceResult;
use async_trait::async_trait;
use rebank_core::{Account, Customer};

/// Storage for customer records.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All customers, store-native order.
    async fn find_all(&self) -> PersistenceResult<Vec<Customer>>;

    async fn find_by_id(&self, id: i64) -> PersistenceResult<Option<Customer>>;

    /// Insert and return the stored record with its assigned identifier.
    async fn insert(&self, customer: &Customer) -> PersistenceResult<Customer>;

    /// Full overwrite of an existing record.
    async fn update(&self, customer: &Customer) -> PersistenceResult<Customer>;

    /// Returns the number of rows removed (0 when absent).
    async fn delete_by_id(&self, id: i64) -> PersistenceResult<u64>;
}

/// Storage for account records.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// All accounts, store-native order.
    async fn find_all(&self) -> PersistenceResult<Vec<Account>>;

    async fn find_by_id(&self, id: i64) -> PersistenceResult<Option<Account>>;

    /// All accounts owned by the given customer.
    async fn find_by_customer(&self, customer_id: i64) -> PersistenceResult<Vec<Account>>;

    /// Insert and return the stored record with its assigned identifier.
    async fn insert(&self, account: &Account) -> PersistenceResult<Account>;

    /// Full overwrite of an existing record.
    async fn update(&self, account: &Account) -> PersistenceResult<Account>;

    /// Returns the number of rows removed (0 when absent).
    async fn delete_by_id(&self, id: i64) -> PersistenceResult<u64>;
}
