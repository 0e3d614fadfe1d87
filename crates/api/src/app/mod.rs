//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and mapping into domain drafts
//! - `translate.rs`: outcome → HTTP response translation
//! - `fault.rs`: last-resort fault and panic responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use cuppa_catalog::ProductStore;

pub mod dto;
pub mod fault;
pub mod routes;
pub mod translate;

/// Shared storage handle injected into every handler.
pub type SharedStore = Arc<dyn ProductStore>;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests, which inject their own store).
///
/// The panic interceptor is layered outermost, once, here — nothing else
/// writes a response after it fires.
pub fn build_app(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(fault::panic_layer())
                .layer(Extension(store)),
        )
}
