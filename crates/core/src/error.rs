//! Domain error model.

use thiserror::Error;

/// Reason a failed outcome failed.
///
/// Closed set: the HTTP boundary maps each kind to exactly one status code,
/// and the compiler forces that mapping to stay exhaustive. A successful
/// outcome carries no kind at all (`Outcome::error()` returns `None`), so
/// "no error" cannot be attached to a failure by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Unauthorized,
    Forbidden,
    Conflict,
    Internal,
}

impl ErrorKind {
    /// Stable wire name used in response envelopes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Internal => "internal",
        }
    }

    /// All kinds. Used by exhaustiveness tests.
    pub fn all() -> [ErrorKind; 6] {
        [
            ErrorKind::NotFound,
            ErrorKind::InvalidInput,
            ErrorKind::Unauthorized,
            ErrorKind::Forbidden,
            ErrorKind::Conflict,
            ErrorKind::Internal,
        ]
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, recognizable business failures
/// (missing records, conflicts, rejected identifiers). Storage and transport
/// faults are a different channel and never appear here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested record does not exist.
    #[error("not found")]
    NotFound,

    /// The operation collides with existing state (e.g. duplicate record).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Input was rejected by a business rule after shape validation passed.
    #[error("{0}")]
    InvalidInput(String),

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The caller is not authenticated.
    #[error("unauthorized")]
    Unauthorized,

    /// The caller is authenticated but not allowed.
    #[error("forbidden")]
    Forbidden,
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The taxonomy kind this error carries across the facade boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound => ErrorKind::NotFound,
            DomainError::Conflict(_) => ErrorKind::Conflict,
            DomainError::InvalidInput(_) => ErrorKind::InvalidInput,
            DomainError::InvalidId(_) => ErrorKind::InvalidInput,
            DomainError::Unauthorized => ErrorKind::Unauthorized,
            DomainError::Forbidden => ErrorKind::Forbidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_every_variant() {
        assert_eq!(DomainError::not_found().kind(), ErrorKind::NotFound);
        assert_eq!(DomainError::conflict("dup").kind(), ErrorKind::Conflict);
        assert_eq!(
            DomainError::invalid_input("bad").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            DomainError::invalid_id("not a uuid").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(DomainError::Unauthorized.kind(), ErrorKind::Unauthorized);
        assert_eq!(DomainError::Forbidden.kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn wire_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            ErrorKind::all().iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), ErrorKind::all().len());
    }
}
