//! Store operation errors.
//!
//! All store mutations return `Result<_, StoreError>`. A failed operation
//! has no effect on state; validation always precedes mutation.

use thiserror::Error;

/// Errors from store mutation operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The operation referenced an id absent from the relevant collection.
    #[error("not found: {0}")]
    NotFound(String),

    /// A catalog insert would duplicate an existing product id.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// An input was outside its allowed domain (quantity, rating, margin).
    #[error("validation error: {0}")]
    Validation(String),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("product ali-7".to_string());
        assert_eq!(err.to_string(), "not found: product ali-7");

        let err = StoreError::DuplicateId("ali-1".to_string());
        assert_eq!(err.to_string(), "duplicate product id: ali-1");

        let err = StoreError::Validation("quantity must be at least 1".to_string());
        assert_eq!(err.to_string(), "validation error: quantity must be at least 1");
    }
}
