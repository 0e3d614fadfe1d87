//! Outcome container: success-with-payload or failure-with-kind-and-messages.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::ErrorKind;

/// Result of a facade operation, in a shape every endpoint shares.
///
/// An outcome is exactly one of:
/// - success: payload present, no error kind, no messages;
/// - failure: error kind + human-readable messages, no payload.
///
/// Fields are private and there is no mutation after construction; the two
/// factory functions are the only way to build one, so the success/failure
/// invariant cannot be violated by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    data: Option<T>,
    error: Option<ErrorKind>,
    messages: Vec<String>,
}

impl<T> Outcome<T> {
    /// Build a successful outcome carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            messages: Vec::new(),
        }
    }

    /// Build a failed outcome with an error kind and its messages.
    ///
    /// Message order is preserved; it is user-visible.
    pub fn failure(kind: ErrorKind, messages: Vec<String>) -> Self {
        Self {
            data: None,
            error: Some(kind),
            messages,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Error kind of a failed outcome; `None` exactly when successful.
    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Messages of a failed outcome; empty for a success.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    /// Envelope shape is identical for success and failure:
    /// `{"data": ..., "error": "...", "messages": [...]}` with `"none"` as
    /// the error name of a success.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Outcome", 3)?;
        s.serialize_field("data", &self.data)?;
        let error = self.error.map(|k| k.as_str()).unwrap_or("none");
        s.serialize_field("error", error)?;
        s.serialize_field("messages", &self.messages)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_data_and_no_error() {
        let outcome = Outcome::success(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.error(), None);
        assert!(outcome.messages().is_empty());
        assert_eq!(outcome.data(), Some(&42));
    }

    #[test]
    fn failure_has_kind_and_no_data() {
        let outcome: Outcome<i32> = Outcome::failure(
            ErrorKind::NotFound,
            vec!["not found".to_string()],
        );
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
        assert_eq!(outcome.error(), Some(ErrorKind::NotFound));
        assert_eq!(outcome.messages(), ["not found".to_string()]);
        assert_eq!(outcome.data(), None);
    }

    #[test]
    fn failure_may_carry_empty_messages() {
        let outcome: Outcome<()> = Outcome::failure(ErrorKind::Forbidden, vec![]);
        assert!(outcome.is_failure());
        assert!(outcome.messages().is_empty());
    }

    #[test]
    fn success_serializes_as_envelope() {
        let outcome = Outcome::success(7);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"data": 7, "error": "none", "messages": []})
        );
    }

    #[test]
    fn failure_serializes_as_envelope() {
        let outcome: Outcome<i32> = Outcome::failure(
            ErrorKind::InvalidInput,
            vec!["Name is required.".to_string()],
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": null,
                "error": "invalid_input",
                "messages": ["Name is required."],
            })
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_kind() -> impl Strategy<Value = ErrorKind> {
            proptest::sample::select(ErrorKind::all().to_vec())
        }

        proptest! {
            /// `is_success` and `is_failure` are mutually exclusive and total,
            /// and `error()` is `None` exactly on success.
            #[test]
            fn success_failure_are_exclusive(
                kind in any_kind(),
                messages in proptest::collection::vec(".*", 0..4),
                payload in any::<i64>(),
            ) {
                let ok = Outcome::success(payload);
                prop_assert!(ok.is_success() ^ ok.is_failure());
                prop_assert!(ok.error().is_none());

                let err: Outcome<i64> = Outcome::failure(kind, messages.clone());
                prop_assert!(err.is_success() ^ err.is_failure());
                prop_assert_eq!(err.error(), Some(kind));
                prop_assert_eq!(err.messages(), messages.as_slice());
            }
        }
    }
}
