//! Product models at the three layer boundaries.
//!
//! One logical entity, three representations:
//! - `ProductDraft`: untrusted inbound shape, validated by the facade and
//!   discarded after mapping;
//! - `ProductRecord`: stored representation, owned by the storage layer
//!   (identity, timestamps and document type are assigned there and only
//!   there);
//! - `ProductView`: outbound shape with persistence-only fields stripped.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cuppa_core::{DomainError, Entity};

/// Stored-type discriminator written on every persisted product record.
pub const PRODUCT_DOC_TYPE: &str = "catalog.product";

/// Product identifier.
///
/// Ordering follows the underlying UUIDv7, i.e. creation time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Untrusted inbound product shape (per-request, pre-validation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price_cents: i64,
}

/// Validated field values handed to the storage layer.
///
/// Carries no identity and no timestamps; the storage adapter assigns those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price_cents: i64,
}

impl NewProduct {
    /// Map a validated draft into storage input (name is trimmed here so
    /// stored names never carry accidental whitespace).
    pub fn from_draft(draft: &ProductDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            price_cents: draft.price_cents,
        }
    }
}

/// Stored product representation.
///
/// Fields are private: identity, timestamps and the document type are set
/// once by a storage adapter via [`ProductRecord::stored`] and cannot be
/// reassigned afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    id: ProductId,
    doc_type: String,
    name: String,
    price_cents: i64,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Assemble a record as created or loaded by a storage adapter.
    pub fn stored(
        id: ProductId,
        name: String,
        price_cents: i64,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            doc_type: PRODUCT_DOC_TYPE.to_string(),
            name,
            price_cents,
            created_at,
            modified_at,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Outbound product shape, derived from a record with persistence-only
/// fields (document type, timestamps) stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price_cents: i64,
}

impl From<ProductRecord> for ProductView {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price_cents: record.price_cents,
        }
    }
}
