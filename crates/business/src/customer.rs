//! Customer operations.
//!
//! CustomerService implements create/read/update/delete for customers.
//! A customer has no parent to validate against, but deletion is blocked
//! while accounts still reference it.

use crate::error::{ServiceError, ServiceResult};
use rebank_core::{Customer, CustomerDraft};
use rebank_persistence::{CustomerStore, PersistenceError};
use rebank_validation::{CustomerValidator, ValidationReport};
use std::sync::Arc;

/// Customer consistency service.
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
    validator: CustomerValidator,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>, validator: CustomerValidator) -> Self {
        Self { store, validator }
    }

    /// All stored customers, store-native order.
    pub async fn get_all(&self) -> ServiceResult<Vec<Customer>> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Customer> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::customer_not_found(id))
    }

    /// Validate fully, then insert. The store assigns the identifier.
    pub async fn create(&self, draft: CustomerDraft) -> ServiceResult<Customer> {
        let report = self.validator.validate(&draft);
        match draft.into_customer(0) {
            Some(customer) if report.is_empty() => {
                let stored = self.store.insert(&customer).await?;
                tracing::debug!(customer_id = stored.id, "Created customer");
                Ok(stored)
            }
            _ => {
                tracing::warn!(violations = report.len(), "Customer submission rejected");
                Err(ServiceError::Validation(report))
            }
        }
    }

    /// Full replace of an existing customer.
    pub async fn update(&self, draft: CustomerDraft) -> ServiceResult<Customer> {
        let Some(id) = draft.id else {
            return Err(ServiceError::Validation(ValidationReport::single(
                "id",
                "Id can not be null",
            )));
        };

        let report = self.validator.validate(&draft);
        let customer = match draft.into_customer(id) {
            Some(customer) if report.is_empty() => customer,
            _ => {
                tracing::warn!(violations = report.len(), "Customer submission rejected");
                return Err(ServiceError::Validation(report));
            }
        };

        if self.store.find_by_id(id).await?.is_none() {
            return Err(ServiceError::customer_not_found(id));
        }

        let stored = self.store.update(&customer).await.map_err(|err| match err {
            PersistenceError::NotFound { .. } => ServiceError::customer_not_found(id),
            other => ServiceError::Store(other),
        })?;
        tracing::debug!(customer_id = id, "Updated customer");
        Ok(stored)
    }

    /// Delete a customer and return the removed record.
    ///
    /// Fails with NotFound when absent and with a referential-integrity
    /// error while accounts still reference the customer; the latter is
    /// derived from the store's classified constraint violation, not from
    /// a separate count query.
    pub async fn delete_by_id(&self, id: i64) -> ServiceResult<Customer> {
        let Some(customer) = self.store.find_by_id(id).await? else {
            return Err(ServiceError::customer_not_found(id));
        };

        match self.store.delete_by_id(id).await {
            Ok(_) => {
                tracing::debug!(customer_id = id, "Deleted customer");
                Ok(customer)
            }
            Err(PersistenceError::ForeignKeyViolation(_)) => {
                tracing::warn!(customer_id = id, "Delete blocked by referencing accounts");
                Err(ServiceError::customer_has_accounts(id))
            }
            Err(other) => Err(ServiceError::Store(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rebank_persistence::MemoryStore;

    fn service() -> (Arc<MemoryStore>, CustomerService) {
        let store = Arc::new(MemoryStore::new());
        let service = CustomerService::new(store.clone(), CustomerValidator::new());
        (store, service)
    }

    fn draft() -> CustomerDraft {
        CustomerDraft {
            id: None,
            full_name: Some("Jane Milton".to_string()),
            address: Some("12 Acacia Ave".to_string()),
            phone_number: Some("123-456-7890".to_string()),
            ssn: Some("123-45-6789".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let (_, service) = service();
        let stored = service.create(draft()).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.full_name, "Jane Milton");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let (_, service) = service();
        let mut bad = draft();
        bad.ssn = Some("000-12-3456".to_string());
        bad.full_name = Some("Jo".to_string());

        let err = service.create(bad).await.unwrap_err();
        let ServiceError::Validation(report) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            report.sorted_messages(),
            vec![
                "Full name must be in range (5, 20) characters",
                "Invalid ssn information"
            ]
        );
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let (_, service) = service();
        let err = service.get_by_id(14).await.unwrap_err();
        assert_eq!(err.to_string(), "Customer with id 14 was not found!");
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let (_, service) = service();
        let stored = service.create(draft()).await.unwrap();

        let mut changed = draft();
        changed.id = Some(stored.id);
        changed.address = Some("99 Elm Street".to_string());
        let updated = service.update(changed).await.unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.address, "99 Elm Street");
        assert_eq!(service.get_by_id(stored.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_customer() {
        let (_, service) = service();
        let mut absent = draft();
        absent.id = Some(123);
        let err = service.update(absent).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected() {
        let (_, service) = service();
        let err = service.update(draft()).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let (_, service) = service();
        let stored = service.create(draft()).await.unwrap();

        let removed = service.delete_by_id(stored.id).await.unwrap();
        assert_eq!(removed, stored);
        assert!(service.get_by_id(stored.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_customer() {
        let (_, service) = service();
        let err = service.delete_by_id(5).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_all_in_store_order() {
        let (_, service) = service();
        service.create(draft()).await.unwrap();
        let mut second = draft();
        second.full_name = Some("Bobby Tables".to_string());
        service.create(second).await.unwrap();

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
    }
}
