//! In-memory record store.
//!
//! Mirrors the SQLite implementation's constraint semantics: inserting or
//! updating an account whose owner does not exist fails with a
//! foreign-key violation, and deleting a customer that still owns
//! accounts does too. Used by unit tests and demos.

use crate::error::{PersistenceError, PersistenceResult};
use crate::store::{AccountStore, CustomerStore};
use async_trait::async_trait;
use rebank_core::{Account, Customer, EntityKind};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    customers: BTreeMap<i64, Customer>,
    accounts: BTreeMap<i64, Account>,
    next_customer_id: i64,
    next_account_id: i64,
}

/// Shared in-memory store implementing both record store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_customer_id: 1,
                next_account_id: 1,
                ..Inner::default()
            }),
        }
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn find_all(&self) -> PersistenceResult<Vec<Customer>> {
        let inner = self.inner.read().await;
        Ok(inner.customers.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> PersistenceResult<Option<Customer>> {
        let inner = self.inner.read().await;
        Ok(inner.customers.get(&id).cloned())
    }

    async fn insert(&self, customer: &Customer) -> PersistenceResult<Customer> {
        let mut inner = self.inner.write().await;
        let id = inner.next_customer_id;
        inner.next_customer_id += 1;

        let stored = Customer {
            id,
            ..customer.clone()
        };
        inner.customers.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, customer: &Customer) -> PersistenceResult<Customer> {
        let mut inner = self.inner.write().await;
        if !inner.customers.contains_key(&customer.id) {
            return Err(PersistenceError::not_found(EntityKind::Customer, customer.id));
        }
        inner.customers.insert(customer.id, customer.clone());
        Ok(customer.clone())
    }

    async fn delete_by_id(&self, id: i64) -> PersistenceResult<u64> {
        let mut inner = self.inner.write().await;
        if inner.accounts.values().any(|a| a.customer_id == id) {
            return Err(PersistenceError::ForeignKeyViolation(format!(
                "accounts reference customer {id}"
            )));
        }
        Ok(u64::from(inner.customers.remove(&id).is_some()))
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_all(&self) -> PersistenceResult<Vec<Account>> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> PersistenceResult<Option<Account>> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.get(&id).cloned())
    }

    async fn find_by_customer(&self, customer_id: i64) -> PersistenceResult<Vec<Account>> {
        let inner = self.inner.read().await;
        Ok(inner
            .accounts
            .values()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, account: &Account) -> PersistenceResult<Account> {
        let mut inner = self.inner.write().await;
        if !inner.customers.contains_key(&account.customer_id) {
            return Err(PersistenceError::ForeignKeyViolation(format!(
                "no customer {} for account",
                account.customer_id
            )));
        }

        let id = inner.next_account_id;
        inner.next_account_id += 1;

        let stored = Account {
            id,
            ..account.clone()
        };
        inner.accounts.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, account: &Account) -> PersistenceResult<Account> {
        let mut inner = self.inner.write().await;
        if !inner.accounts.contains_key(&account.id) {
            return Err(PersistenceError::not_found(EntityKind::Account, account.id));
        }
        if !inner.customers.contains_key(&account.customer_id) {
            return Err(PersistenceError::ForeignKeyViolation(format!(
                "no customer {} for account",
                account.customer_id
            )));
        }
        inner.accounts.insert(account.id, account.clone());
        Ok(account.clone())
    }

    async fn delete_by_id(&self, id: i64) -> PersistenceResult<u64> {
        let mut inner = self.inner.write().await;
        Ok(u64::from(inner.accounts.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn customer() -> Customer {
        Customer {
            id: 0,
            full_name: "Jane Milton".to_string(),
            address: "12 Acacia Ave".to_string(),
            phone_number: "123-456-7890".to_string(),
            ssn: "123-45-6789".to_string(),
        }
    }

    fn account(customer_id: i64) -> Account {
        Account {
            id: 0,
            iban: "GB82WEST12345698765432".to_string(),
            currency: "EUR".to_string(),
            amount: dec!(400),
            customer_id,
            issued_at: NaiveDate::from_ymd_opt(2022, 5, 7).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = CustomerStore::insert(&store, &customer()).await.unwrap();
        let second = CustomerStore::insert(&store, &customer()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_account_insert_requires_owner() {
        let store = MemoryStore::new();
        let err = AccountStore::insert(&store, &account(99)).await.unwrap_err();
        assert!(err.is_foreign_key_violation());
    }

    #[tokio::test]
    async fn test_customer_delete_blocked_by_accounts() {
        let store = MemoryStore::new();
        let owner = CustomerStore::insert(&store, &customer()).await.unwrap();
        AccountStore::insert(&store, &account(owner.id)).await.unwrap();

        let err = CustomerStore::delete_by_id(&store, owner.id)
            .await
            .unwrap_err();
        assert!(err.is_foreign_key_violation());
    }

    #[tokio::test]
    async fn test_delete_counts() {
        let store = MemoryStore::new();
        let owner = CustomerStore::insert(&store, &customer()).await.unwrap();
        let stored = AccountStore::insert(&store, &account(owner.id)).await.unwrap();

        assert_eq!(AccountStore::delete_by_id(&store, stored.id).await.unwrap(), 1);
        assert_eq!(AccountStore::delete_by_id(&store, stored.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = CustomerStore::update(&store, &Customer { id: 5, ..customer() })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_by_customer_filters() {
        let store = MemoryStore::new();
        let alice = CustomerStore::insert(&store, &customer()).await.unwrap();
        let bob = CustomerStore::insert(&store, &customer()).await.unwrap();
        AccountStore::insert(&store, &account(alice.id)).await.unwrap();
        AccountStore::insert(&store, &account(bob.id)).await.unwrap();
        AccountStore::insert(&store, &account(alice.id)).await.unwrap();

        let owned = store.find_by_customer(alice.id).await.unwrap();
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|a| a.customer_id == alice.id));
    }
}
