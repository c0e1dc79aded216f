//! Account operations.
//!
//! AccountService implements create/read/update/patch/delete for
//! accounts. Creating or replacing an account checks that the owning
//! customer exists before the write; the check and the write are not
//! atomic, so a concurrent owner deletion can still surface as a
//! classified constraint violation from the store.

use crate::error::{ServiceError, ServiceResult};
use rebank_core::{merge_account, Account, AccountDraft};
use rebank_persistence::{AccountStore, CustomerStore, PersistenceError};
use rebank_validation::{AccountValidator, ValidationReport};
use std::sync::Arc;

/// Account consistency service.
pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
    customers: Arc<dyn CustomerStore>,
    validator: AccountValidator,
}

impl AccountService {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        customers: Arc<dyn CustomerStore>,
        validator: AccountValidator,
    ) -> Self {
        Self {
            accounts,
            customers,
            validator,
        }
    }

    /// All stored accounts, store-native order.
    pub async fn get_all(&self) -> ServiceResult<Vec<Account>> {
        Ok(self.accounts.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Account> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::account_not_found(id))
    }

    /// Delete an account; absence is not an error, the removed-row count
    /// says what happened.
    pub async fn delete_by_id(&self, id: i64) -> ServiceResult<u64> {
        let removed = self.accounts.delete_by_id(id).await?;
        tracing::debug!(account_id = id, removed, "Deleted account");
        Ok(removed)
    }

    /// All accounts owned by the given customer; the customer must exist.
    pub async fn get_for_customer(&self, customer_id: i64) -> ServiceResult<Vec<Account>> {
        if self.customers.find_by_id(customer_id).await?.is_none() {
            return Err(ServiceError::customer_not_found(customer_id));
        }
        Ok(self.accounts.find_by_customer(customer_id).await?)
    }

    /// Validate fully, confirm the owner exists, then insert.
    pub async fn create(&self, draft: AccountDraft) -> ServiceResult<Account> {
        let report = self.validator.validate(&draft);
        let account = match draft.into_account(0) {
            Some(account) if report.is_empty() => account,
            _ => {
                tracing::warn!(violations = report.len(), "Account submission rejected");
                return Err(ServiceError::Validation(report));
            }
        };

        // Owner existence strictly precedes the insert
        if self.customers.find_by_id(account.customer_id).await?.is_none() {
            return Err(ServiceError::customer_not_found(account.customer_id));
        }

        let stored = self.accounts.insert(&account).await.map_err(|err| match err {
            // Owner vanished between the check and the write
            PersistenceError::ForeignKeyViolation(_) => {
                ServiceError::customer_not_found(account.customer_id)
            }
            other => ServiceError::Store(other),
        })?;
        tracing::debug!(account_id = stored.id, customer_id = stored.customer_id, "Created account");
        Ok(stored)
    }

    /// Full replace of an existing account.
    ///
    /// A classified foreign-key failure means the submitted owner does
    /// not exist; a missing row means the submitted account id does not;
    /// anything else passes through as a storage error.
    pub async fn update(&self, draft: AccountDraft) -> ServiceResult<Account> {
        let Some(id) = draft.id else {
            return Err(ServiceError::Validation(ValidationReport::single(
                "id",
                "Id can not be null",
            )));
        };

        let report = self.validator.validate(&draft);
        let account = match draft.into_account(id) {
            Some(account) if report.is_empty() => account,
            _ => {
                tracing::warn!(violations = report.len(), "Account submission rejected");
                return Err(ServiceError::Validation(report));
            }
        };

        let stored = self.accounts.update(&account).await.map_err(|err| match err {
            PersistenceError::ForeignKeyViolation(_) => {
                ServiceError::customer_not_found(account.customer_id)
            }
            PersistenceError::NotFound { .. } => ServiceError::account_not_found(id),
            other => ServiceError::Store(other),
        })?;
        tracing::debug!(account_id = id, "Updated account");
        Ok(stored)
    }

    /// Partial update: load the current record, merge the supplied
    /// fields, write back.
    ///
    /// Changed fields are not re-run through the field validators and a
    /// changed owner id is not re-checked here; the store's constraint
    /// still applies on the write.
    pub async fn patch(&self, draft: AccountDraft) -> ServiceResult<Account> {
        let Some(id) = draft.id else {
            return Err(ServiceError::Validation(ValidationReport::single(
                "id",
                "Id can not be null",
            )));
        };

        let Some(current) = self.accounts.find_by_id(id).await? else {
            return Err(ServiceError::account_not_found(id));
        };

        let merged = merge_account(&current, &draft);
        let stored = self.accounts.update(&merged).await.map_err(|err| match err {
            PersistenceError::ForeignKeyViolation(_) => {
                ServiceError::customer_not_found(merged.customer_id)
            }
            PersistenceError::NotFound { .. } => ServiceError::account_not_found(id),
            other => ServiceError::Store(other),
        })?;
        tracing::debug!(account_id = id, "Patched account");
        Ok(stored)
    }
}
