//! sqlx-backed store implementation.

use crate::error::{PersistenceError, PersistenceResult};
use crate::sqlite::schema::{
    AccountRow, CustomerRow, CREATE_ACCOUNTS_TABLE, CREATE_CUSTOMER_TABLE,
};
use crate::store::{AccountStore, CustomerStore};
use async_trait::async_trait;
use rebank_core::{Account, Customer, EntityKind};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::str::FromStr;

/// SQLite record store holding a shared connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) a database, enable foreign key
    /// enforcement and bootstrap the schema.
    pub async fn connect(database_url: &str) -> PersistenceResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(PersistenceError::classify)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(PersistenceError::classify)?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Wrap an existing pool. The schema is assumed to be in place and
    /// foreign keys enabled.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn init_schema(&self) -> PersistenceResult<()> {
        sqlx::query(CREATE_CUSTOMER_TABLE)
            .execute(&self.pool)
            .await
            .map_err(PersistenceError::classify)?;
        sqlx::query(CREATE_ACCOUNTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(PersistenceError::classify)?;
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for SqliteStore {
    async fn find_all(&self) -> PersistenceResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>("SELECT * FROM customer")
            .fetch_all(&self.pool)
            .await
            .map_err(PersistenceError::classify)?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> PersistenceResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>("SELECT * FROM customer WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(PersistenceError::classify)?;
        Ok(row.map(Customer::from))
    }

    async fn insert(&self, customer: &Customer) -> PersistenceResult<Customer> {
        let result = sqlx::query(
            "INSERT INTO customer (full_name, address, phone_number, ssn) VALUES (?, ?, ?, ?)",
        )
        .bind(&customer.full_name)
        .bind(&customer.address)
        .bind(&customer.phone_number)
        .bind(&customer.ssn)
        .execute(&self.pool)
        .await
        .map_err(PersistenceError::classify)?;

        Ok(Customer {
            id: result.last_insert_rowid(),
            ..customer.clone()
        })
    }

    async fn update(&self, customer: &Customer) -> PersistenceResult<Customer> {
        let result = sqlx::query(
            "UPDATE customer SET full_name = ?, address = ?, phone_number = ?, ssn = ? WHERE id = ?",
        )
        .bind(&customer.full_name)
        .bind(&customer.address)
        .bind(&customer.phone_number)
        .bind(&customer.ssn)
        .bind(customer.id)
        .execute(&self.pool)
        .await
        .map_err(PersistenceError::classify)?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::not_found(EntityKind::Customer, customer.id));
        }
        Ok(customer.clone())
    }

    async fn delete_by_id(&self, id: i64) -> PersistenceResult<u64> {
        let result = sqlx::query("DELETE FROM customer WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(PersistenceError::classify)?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl AccountStore for SqliteStore {
    async fn find_all(&self) -> PersistenceResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts")
            .fetch_all(&self.pool)
            .await
            .map_err(PersistenceError::classify)?;
        rows.into_iter().map(AccountRow::into_account).collect()
    }

    async fn find_by_id(&self, id: i64) -> PersistenceResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(PersistenceError::classify)?;
        row.map(AccountRow::into_account).transpose()
    }

    async fn find_by_customer(&self, customer_id: i64) -> PersistenceResult<Vec<Account>> {
        let rows =
            sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts WHERE customer_id = ?")
                .bind(customer_id)
                .fetch_all(&self.pool)
                .await
                .map_err(PersistenceError::classify)?;
        rows.into_iter().map(AccountRow::into_account).collect()
    }

    async fn insert(&self, account: &Account) -> PersistenceResult<Account> {
        let result = sqlx::query(
            "INSERT INTO accounts (iban, currency, amount, customer_id, issued_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&account.iban)
        .bind(&account.currency)
        .bind(account.amount.to_string())
        .bind(account.customer_id)
        .bind(account.issued_at)
        .execute(&self.pool)
        .await
        .map_err(PersistenceError::classify)?;

        Ok(Account {
            id: result.last_insert_rowid(),
            ..account.clone()
        })
    }

    async fn update(&self, account: &Account) -> PersistenceResult<Account> {
        let result = sqlx::query(
            "UPDATE accounts SET iban = ?, currency = ?, amount = ?, customer_id = ?, \
             issued_at = ? WHERE id = ?",
        )
        .bind(&account.iban)
        .bind(&account.currency)
        .bind(account.amount.to_string())
        .bind(account.customer_id)
        .bind(account.issued_at)
        .bind(account.id)
        .execute(&self.pool)
        .await
        .map_err(PersistenceError::classify)?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::not_found(EntityKind::Account, account.id));
        }
        Ok(account.clone())
    }

    async fn delete_by_id(&self, id: i64) -> PersistenceResult<u64> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(PersistenceError::classify)?;
        Ok(result.rows_affected())
    }
}
