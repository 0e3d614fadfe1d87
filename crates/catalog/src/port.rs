//! Storage port consumed by the catalog business layer.
//!
//! The port defines what the domain needs from persistence; adapters (see
//! `cuppa-infra`) decide how it is stored. "Not found" is signalled in-band
//! (`Option` / `bool`) so the business layer can treat it as a recognized
//! domain outcome; `StoreError` is reserved for genuine backend faults and
//! is never translated into a business error kind.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::product::{NewProduct, ProductId, ProductRecord};

/// Storage operation fault (unexpected by definition).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store failed or was unreachable.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Product persistence capability.
///
/// Adapters exclusively own identity, timestamp and document-type
/// assignment; no caller may set those fields.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product, assigning a fresh identity and both
    /// timestamps (`created_at <= modified_at`, both set).
    async fn create(&self, input: NewProduct) -> Result<ProductRecord, StoreError>;

    /// Fetch one product; `None` when no record has this id.
    async fn get(&self, id: ProductId) -> Result<Option<ProductRecord>, StoreError>;

    /// Replace the stored field values of an existing product, preserving
    /// `created_at` and bumping `modified_at`. `None` when no record has
    /// this id.
    async fn update(
        &self,
        id: ProductId,
        input: NewProduct,
    ) -> Result<Option<ProductRecord>, StoreError>;

    /// Remove a product; `false` when no record had this id.
    async fn delete(&self, id: ProductId) -> Result<bool, StoreError>;

    /// All products, ordered by creation time.
    async fn list(&self) -> Result<Vec<ProductRecord>, StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn create(&self, input: NewProduct) -> Result<ProductRecord, StoreError> {
        (**self).create(input).await
    }

    async fn get(&self, id: ProductId) -> Result<Option<ProductRecord>, StoreError> {
        (**self).get(id).await
    }

    async fn update(
        &self,
        id: ProductId,
        input: NewProduct,
    ) -> Result<Option<ProductRecord>, StoreError> {
        (**self).update(id, input).await
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        (**self).delete(id).await
    }

    async fn list(&self) -> Result<Vec<ProductRecord>, StoreError> {
        (**self).list().await
    }
}
