//! View-layer error types.
//!
//! Every variant is unrecoverable at the point of detection: the view layer
//! performs single, non-partial memory accesses, so nothing is caught or
//! retried internally. A binding layer converts these into the host
//! runtime's fatal-error call; `error_type()` strings are the stable
//! identifiers that conversion relies on.

use crate::types::ObjectKind;

/// Result type for view operations.
pub type ViewResult<T> = Result<T, RovError>;

/// Error type for view operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RovError {
    /// Index or position outside the view's cached extent.
    #[error("{what}: index {index} out of bounds (len {len})")]
    OutOfBounds {
        /// The access being performed, e.g. `"VectorView::get"`.
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A required named slot is absent from a list.
    #[error("could not find list element named '{key}'")]
    KeyNotFound { key: String },

    /// A list view was constructed over a non-list object.
    #[error("cannot build a list view over a {kind} object")]
    NotAList { kind: ObjectKind },

    /// An object was converted to a typed view of an incompatible kind.
    #[error("type mismatch: expected a {expected} object, found {found}")]
    TypeMismatch {
        expected: ObjectKind,
        found: ObjectKind,
    },
}

impl RovError {
    /// Get the error type as a string (for host-runtime interop).
    ///
    /// These strings are stable and must not change to maintain
    /// compatibility with binding layers.
    pub fn error_type(&self) -> &'static str {
        match self {
            RovError::OutOfBounds { .. } => "out_of_bounds",
            RovError::KeyNotFound { .. } => "key_not_found",
            RovError::NotAList { .. } => "not_a_list",
            RovError::TypeMismatch { .. } => "type_mismatch",
        }
    }

    /// Create an "out of bounds" error for the given access.
    pub fn out_of_bounds(what: &'static str, index: usize, len: usize) -> Self {
        RovError::OutOfBounds { what, index, len }
    }

    /// Create a "key not found" error.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        RovError::KeyNotFound { key: key.into() }
    }

    /// Create a "not a list" error.
    pub fn not_a_list(kind: ObjectKind) -> Self {
        RovError::NotAList { kind }
    }

    /// Create a "type mismatch" error.
    pub fn type_mismatch(expected: ObjectKind, found: ObjectKind) -> Self {
        RovError::TypeMismatch { expected, found }
    }

    /// Check if this is an OutOfBounds error.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, RovError::OutOfBounds { .. })
    }

    /// Check if this is a KeyNotFound error.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, RovError::KeyNotFound { .. })
    }

    /// Check if this is a TypeMismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, RovError::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_strings_are_stable() {
        assert_eq!(
            RovError::out_of_bounds("VectorView::get", 5, 5).error_type(),
            "out_of_bounds"
        );
        assert_eq!(RovError::key_not_found("beta").error_type(), "key_not_found");
        assert_eq!(
            RovError::not_a_list(ObjectKind::Real).error_type(),
            "not_a_list"
        );
        assert_eq!(
            RovError::type_mismatch(ObjectKind::Int, ObjectKind::Str).error_type(),
            "type_mismatch"
        );
    }

    #[test]
    fn test_display_carries_context() {
        let e = RovError::out_of_bounds("VectorView::get", 5, 5);
        assert_eq!(e.to_string(), "VectorView::get: index 5 out of bounds (len 5)");

        let e = RovError::key_not_found("beta");
        assert_eq!(e.to_string(), "could not find list element named 'beta'");
    }
}
