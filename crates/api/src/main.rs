use std::sync::Arc;

use cuppa_api::app::{self, SharedStore};
use cuppa_infra::InMemoryProductStore;

#[tokio::main]
async fn main() {
    cuppa_observability::init();

    let bind_addr = std::env::var("CUPPA_BIND_ADDR").unwrap_or_else(|_| {
        tracing::warn!("CUPPA_BIND_ADDR not set; using 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let store: SharedStore = Arc::new(InMemoryProductStore::new());
    let app = app::build_app(store);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
