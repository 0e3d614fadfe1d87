//! Single translation point from outcome to HTTP response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use cuppa_catalog::FacadeResult;
use cuppa_core::{ErrorKind, Outcome};

use crate::app::fault;

/// Translate an outcome into its HTTP response.
///
/// Total over the taxonomy: the match is exhaustive, so adding an error
/// kind does not compile until a status is chosen for it here. Pure apart
/// from the drift log on `Internal`.
pub fn respond<T: Serialize>(outcome: &Outcome<T>) -> Response {
    let status = match outcome.error() {
        None => StatusCode::OK,
        Some(ErrorKind::InvalidInput) => StatusCode::BAD_REQUEST,
        Some(ErrorKind::Unauthorized) => StatusCode::UNAUTHORIZED,
        // Forbidden intentionally carries no body.
        Some(ErrorKind::Forbidden) => return StatusCode::FORBIDDEN.into_response(),
        Some(ErrorKind::NotFound) => StatusCode::NOT_FOUND,
        Some(ErrorKind::Conflict) => StatusCode::CONFLICT,
        Some(ErrorKind::Internal) => {
            tracing::error!(
                messages = ?outcome.messages(),
                "internal error kind reached the translator"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(outcome)).into_response()
}

/// Route choke point: translate a modeled outcome, or hand the fault to the
/// safety net. Every handler returns through here exactly once.
pub fn reply<T: Serialize>(path: &str, result: FacadeResult<T>) -> Response {
    match result {
        Ok(outcome) => respond(&outcome),
        Err(fault) => fault::respond(path, &fault),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn expected_status(kind: ErrorKind) -> StatusCode {
        match kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[test]
    fn every_kind_has_a_distinct_status() {
        let mut statuses: Vec<StatusCode> = ErrorKind::all()
            .iter()
            .map(|kind| {
                let outcome: Outcome<()> = Outcome::failure(*kind, vec![]);
                respond(&outcome).status()
            })
            .collect();
        for (kind, status) in ErrorKind::all().iter().zip(&statuses) {
            assert_eq!(*status, expected_status(*kind), "{kind}");
        }
        statuses.sort_by_key(|s| s.as_u16());
        statuses.dedup();
        assert_eq!(statuses.len(), ErrorKind::all().len());
    }

    #[tokio::test]
    async fn success_is_200_with_the_envelope() {
        let outcome = Outcome::success(serde_json::json!({"id": 1}));
        let response = respond(&outcome);
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["error"], "none");
        assert_eq!(body["messages"], serde_json::json!([]));
        assert_eq!(body["data"]["id"], 1);
    }

    #[tokio::test]
    async fn failure_body_carries_kind_and_messages() {
        let outcome: Outcome<()> = Outcome::failure(
            ErrorKind::InvalidInput,
            vec!["Name is required.".to_string()],
        );
        let response = respond(&outcome);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid_input");
        assert_eq!(body["messages"], serde_json::json!(["Name is required."]));
        assert_eq!(body["data"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn forbidden_has_no_body() {
        let outcome: Outcome<()> = Outcome::failure(ErrorKind::Forbidden, vec![]);
        let response = respond(&outcome);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn translation_is_idempotent() {
        let outcome: Outcome<i32> =
            Outcome::failure(ErrorKind::Conflict, vec!["taken".to_string()]);

        let first = respond(&outcome);
        let second = respond(&outcome);

        assert_eq!(first.status(), second.status());
        let first_body = axum::body::to_bytes(first.into_body(), usize::MAX)
            .await
            .unwrap();
        let second_body = axum::body::to_bytes(second.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(first_body, second_body);
    }
}
