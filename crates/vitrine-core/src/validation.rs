//! # Validation Module
//!
//! Product field validation, applied once at the catalog boundary.
//!
//! After construction the catalog is immutable, so nothing downstream needs
//! to re-check these rules: filters, sorts, and cart operations can assume
//! well-formed products.
//!
//! ## Usage
//! ```rust
//! use vitrine_core::validation::{validate_category_name, validate_product_name};
//!
//! assert!(validate_product_name("Laptop").is_ok());
//! assert!(validate_product_name("   ").is_err());
//! assert!(validate_category_name("Electronics").is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CATEGORY_NAME_LEN, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_PRODUCT_NAME_LEN`] characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a category name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_CATEGORY_NAME_LEN`] characters
pub fn validate_category_name(category: &str) -> ValidationResult<()> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required { field: "category" });
    }

    if category.len() > MAX_CATEGORY_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "category",
            max: MAX_CATEGORY_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
