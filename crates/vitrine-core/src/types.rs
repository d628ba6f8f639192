//! # Domain Types
//!
//! Core domain types used throughout Vitrine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │   ProductId    │   │    ImageRef    │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id            │   │  u32 newtype   │   │  opaque asset  │      │
//! │  │  name          │   │  cart map key  │   │  handle, never │      │
//! │  │  category      │   │                │   │  dereferenced  │      │
//! │  │  price (Money) │   │                │   │  by the core   │      │
//! │  │  image         │   │                │   │                │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are created once at startup from the supplier's static list and
//! never mutated or deleted afterwards. Everything downstream (filter
//! results, cart entries) shares them via `Arc` rather than copying.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Unique product identifier.
///
/// The supplier assigns these; the catalog rejects duplicates. Used as the
/// cart ledger's map key, so it is `Copy + Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Image Reference
// =============================================================================

/// Opaque handle to a product image.
///
/// The core never loads or inspects the asset; the presentation layer
/// resolves the handle however it likes (bundled file, CDN URL, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageRef(String);

impl ImageRef {
    /// Creates an image reference from any string-like handle.
    pub fn new(handle: impl Into<String>) -> Self {
        ImageRef(handle.into())
    }

    /// Returns the raw handle.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront.
///
/// Immutable after catalog construction. `category` is free-form text from
/// the supplier; the catalog derives the distinct set for the category tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier assigned by the supplier.
    pub id: ProductId,

    /// Display name shown in the grid and the cart.
    pub name: String,

    /// Category this product belongs to (one of a small fixed set).
    pub category: String,

    /// Price in cents (smallest currency unit).
    pub price: Money,

    /// Opaque image handle for the presentation layer.
    pub image: ImageRef,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId(42).to_string(), "42");
    }

    #[test]
    fn test_image_ref_is_opaque_passthrough() {
        let img = ImageRef::new("assets/laptop.webp");
        assert_eq!(img.as_str(), "assets/laptop.webp");
        assert_eq!(img.to_string(), "assets/laptop.webp");
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": 1,
            "name": "Laptop",
            "category": "Electronics",
            "price": 120000,
            "image": "assets/laptop.webp"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.price, Money::from_cents(120_000));
        assert_eq!(product.image.as_str(), "assets/laptop.webp");
    }
}
