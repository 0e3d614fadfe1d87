use serde::Deserialize;

use cuppa_catalog::ProductDraft;

// -------------------------
// Request DTOs
// -------------------------

/// Inbound product payload (create and update share the shape).
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price_cents: i64,
}

impl ProductRequest {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            price_cents: self.price_cents,
        }
    }
}
