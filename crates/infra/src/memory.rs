//! In-memory product store for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use cuppa_catalog::{NewProduct, ProductId, ProductRecord, ProductStore, StoreError};

/// In-memory, internally synchronized product store.
///
/// Identity, document type and timestamps are assigned here and nowhere
/// else. A single lock guards every mutation, so one request's write is
/// never observed half-applied by another request's read.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, ProductRecord>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, input: NewProduct) -> Result<ProductRecord, StoreError> {
        // One clock read: created_at == modified_at on a fresh record.
        let now = Utc::now();
        let record = ProductRecord::stored(
            ProductId::new(),
            input.name,
            input.price_cents,
            now,
            now,
        );

        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("product store lock poisoned"))?;
        map.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn get(&self, id: ProductId) -> Result<Option<ProductRecord>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("product store lock poisoned"))?;
        Ok(map.get(&id).cloned())
    }

    async fn update(
        &self,
        id: ProductId,
        input: NewProduct,
    ) -> Result<Option<ProductRecord>, StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("product store lock poisoned"))?;

        let Some(existing) = map.get(&id) else {
            return Ok(None);
        };

        let updated = ProductRecord::stored(
            existing.id(),
            input.name,
            input.price_cents,
            existing.created_at(),
            Utc::now(),
        );
        map.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("product store lock poisoned"))?;
        Ok(map.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("product store lock poisoned"))?;
        let mut records: Vec<ProductRecord> = map.values().cloned().collect();
        records.sort_by_key(|r| (r.created_at(), r.id()));
        Ok(records)
    }
}
