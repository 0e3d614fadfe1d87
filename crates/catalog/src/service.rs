//! Product business service.
//!
//! Applies business rules and maps between layer models. The service never
//! constructs an `Outcome` and never validates input shape — both are the
//! facade's job. Port faults are propagated untouched: a failure to persist
//! is a failure to complete the operation.

use thiserror::Error;

use cuppa_core::DomainError;

use crate::port::{ProductStore, StoreError};
use crate::product::{NewProduct, ProductDraft, ProductId, ProductView};

/// Failure of a business operation: either a recognizable domain outcome or
/// a storage fault passing through unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Business orchestration over one storage port.
///
/// Stateless; construct one per request flow around a shared port handle.
pub struct ProductService<S> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a product. Names are unique (case-insensitive) across the
    /// catalog; a duplicate is a conflict, not a validation failure.
    pub async fn create(&self, draft: ProductDraft) -> Result<ProductView, ServiceError> {
        let input = NewProduct::from_draft(&draft);

        let existing = self.store.list().await?;
        if existing
            .iter()
            .any(|r| r.name().eq_ignore_ascii_case(&input.name))
        {
            return Err(DomainError::conflict(format!(
                "product '{}' already exists",
                input.name
            ))
            .into());
        }

        let record = self.store.create(input).await?;
        Ok(record.into())
    }

    pub async fn get(&self, id: ProductId) -> Result<ProductView, ServiceError> {
        match self.store.get(id).await? {
            Some(record) => Ok(record.into()),
            None => Err(DomainError::not_found().into()),
        }
    }

    pub async fn update(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<ProductView, ServiceError> {
        let input = NewProduct::from_draft(&draft);
        match self.store.update(id, input).await? {
            Some(record) => Ok(record.into()),
            None => Err(DomainError::not_found().into()),
        }
    }

    pub async fn delete(&self, id: ProductId) -> Result<ProductId, ServiceError> {
        if self.store.delete(id).await? {
            Ok(id)
        } else {
            Err(DomainError::not_found().into())
        }
    }

    pub async fn list(&self) -> Result<Vec<ProductView>, ServiceError> {
        let records = self.store.list().await?;
        Ok(records.into_iter().map(ProductView::from).collect())
    }
}
