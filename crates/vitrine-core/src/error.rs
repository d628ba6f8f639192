//! # Error Types
//!
//! Catalog-boundary error types for vitrine-core.
//!
//! ## Where Errors Can (and Cannot) Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                               │
//! │                                                                     │
//! │  Catalog construction (this file)                                   │
//! │  ├── CatalogError       - duplicate ids, malformed supplier JSON    │
//! │  └── ValidationError    - bad product fields                        │
//! │                                                                     │
//! │  Everything downstream of a valid catalog is total:                 │
//! │  filtering, sorting, and every cart operation are defined for all   │
//! │  inputs - unmatched filters yield empty results, absent cart ids    │
//! │  are silent no-ops. None of those paths return Result.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised while constructing a catalog from supplier data.
///
/// These are the only errors in the crate: once a catalog exists, every
/// operation over it is total.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products in the supplier list share an id.
    #[error("duplicate product id: {id}")]
    DuplicateId { id: ProductId },

    /// The supplier's JSON payload could not be parsed.
    #[error("invalid catalog payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// A product field failed validation (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product field validation errors.
///
/// These occur when supplier data doesn't meet requirements.
/// Used for early validation before a catalog is built.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// A monetary field is negative.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::DuplicateId { id: ProductId(4) };
        assert_eq!(err.to_string(), "duplicate product id: 4");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "category",
            max: 50,
        };
        assert_eq!(err.to_string(), "category must be at most 50 characters");
    }

    #[test]
    fn test_validation_converts_to_catalog_error() {
        let validation_err = ValidationError::Negative { field: "price" };
        let catalog_err: CatalogError = validation_err.into();
        assert!(matches!(catalog_err, CatalogError::Validation(_)));
    }
}
