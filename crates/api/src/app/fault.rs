//! Boundary-of-last-resort fault handling.
//!
//! Faults are failures the outcome pipeline does not model: storage
//! outages, bugs, panics. They reach exactly one place — this module —
//! which logs them and emits a fixed problem shape that is deliberately
//! *not* the outcome envelope.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use cuppa_catalog::Fault;

/// Emit the problem response for a fault that escaped the outcome pipeline.
///
/// Logs first, then responds; the response is produced regardless of what
/// happens to the log line.
pub fn respond(path: &str, fault: &Fault) -> Response {
    tracing::error!(path, fault = %fault, "unhandled fault reached the safety net");
    problem(fault.to_string(), json!(path))
}

/// Panic interceptor, layered outermost once at app build.
pub fn panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_response as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let title = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "request handler panicked".to_string()
    };
    tracing::error!(panic = %title, "panic reached the safety net");
    // The request path is gone by the time a panic is caught.
    problem(title, serde_json::Value::Null)
}

fn problem(title: String, instance: serde_json::Value) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "status": 500,
            "title": title,
            "instance": instance,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn fault_response_is_the_problem_shape() {
        let fault: Fault = anyhow!("storage backend failure: simulated outage");
        let response = respond("/products", &fault);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 500);
        assert_eq!(body["instance"], "/products");
        assert_eq!(body["title"], "storage backend failure: simulated outage");
    }
}
