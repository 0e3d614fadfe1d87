//! Product facade: the boundary where outcomes are made.
//!
//! Each operation runs validation first, then dispatches to the business
//! service. Validation failures and recognized domain faults become failure
//! outcomes *here and only here*; anything else (storage faults in
//! particular) is returned as an opaque fault for the HTTP safety net.
//! The recognized fault set is declared per operation — there is no
//! universal fault-to-kind table.

use cuppa_core::{DomainError, ErrorKind, Outcome, Violation};

use crate::port::ProductStore;
use crate::product::{ProductDraft, ProductId, ProductView};
use crate::service::{ProductService, ServiceError};
use crate::validate;

/// An unexpected fault escaping the outcome pipeline.
pub type Fault = anyhow::Error;

/// What a facade operation hands the transport layer: a modeled outcome,
/// or a fault for the safety net.
pub type FacadeResult<T> = Result<Outcome<T>, Fault>;

/// Per-request entry point to the catalog core.
///
/// Holds no state beyond the port handle; concurrent requests never observe
/// each other through it.
pub struct ProductFacade<S> {
    service: ProductService<S>,
}

impl<S: ProductStore> ProductFacade<S> {
    pub fn new(store: S) -> Self {
        Self {
            service: ProductService::new(store),
        }
    }

    pub async fn create(&self, draft: ProductDraft) -> FacadeResult<ProductView> {
        let violations = validate::product_draft().validate(&draft);
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "create rejected by validation");
            return Ok(invalid_input(violations));
        }

        match self.service.create(draft).await {
            Ok(view) => Ok(Outcome::success(view)),
            Err(ServiceError::Domain(err @ DomainError::Conflict(_))) => Ok(recognized(err)),
            Err(other) => Err(other.into()),
        }
    }

    pub async fn get(&self, id: &str) -> FacadeResult<ProductView> {
        let id = match parse_id(id) {
            Ok(id) => id,
            Err(outcome) => return Ok(outcome),
        };

        match self.service.get(id).await {
            Ok(view) => Ok(Outcome::success(view)),
            Err(ServiceError::Domain(err @ DomainError::NotFound)) => Ok(recognized(err)),
            Err(other) => Err(other.into()),
        }
    }

    pub async fn update(&self, id: &str, draft: ProductDraft) -> FacadeResult<ProductView> {
        let id = match parse_id(id) {
            Ok(id) => id,
            Err(outcome) => return Ok(outcome),
        };

        let violations = validate::product_draft().validate(&draft);
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "update rejected by validation");
            return Ok(invalid_input(violations));
        }

        match self.service.update(id, draft).await {
            Ok(view) => Ok(Outcome::success(view)),
            Err(ServiceError::Domain(err @ DomainError::NotFound)) => Ok(recognized(err)),
            Err(other) => Err(other.into()),
        }
    }

    pub async fn delete(&self, id: &str) -> FacadeResult<ProductId> {
        let id = match parse_id(id) {
            Ok(id) => id,
            Err(outcome) => return Ok(outcome),
        };

        match self.service.delete(id).await {
            Ok(deleted) => Ok(Outcome::success(deleted)),
            Err(ServiceError::Domain(err @ DomainError::NotFound)) => Ok(recognized(err)),
            Err(other) => Err(other.into()),
        }
    }

    pub async fn list(&self) -> FacadeResult<Vec<ProductView>> {
        match self.service.list().await {
            Ok(views) => Ok(Outcome::success(views)),
            Err(other) => Err(other.into()),
        }
    }
}

fn invalid_input<T>(violations: Vec<Violation>) -> Outcome<T> {
    Outcome::failure(
        ErrorKind::InvalidInput,
        violations.into_iter().map(|v| v.message).collect(),
    )
}

fn recognized<T>(err: DomainError) -> Outcome<T> {
    Outcome::failure(err.kind(), vec![err.to_string()])
}

/// Identifier parsing is part of input validation and resolved locally.
fn parse_id<T>(raw: &str) -> Result<ProductId, Outcome<T>> {
    raw.parse::<ProductId>()
        .map_err(|err| Outcome::failure(ErrorKind::InvalidInput, vec![err.to_string()]))
}
