//! # vitrine-core: Pure View-State Logic for Vitrine
//!
//! This crate is the **heart** of Vitrine, a catalog browser with a shopping
//! cart. It contains every derivation the storefront needs - filtering,
//! sorting, cart totals - as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Vitrine Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                   Presentation Layer                          │  │
//! │  │    Category tabs ──► Search box ──► Product grid ──► Cart     │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │ in-process calls                  │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               ★ vitrine-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────────┐ ┌─────────────┐     │  │
//! │  │   │ catalog │ │ filter/ │ │    cart    │ │   session   │     │  │
//! │  │   │ Product │ │  sort   │ │ CartLedger │ │ FilterState │     │  │
//! │  │   └─────────┘ └─────────┘ └────────────┘ └─────────────┘     │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO RENDERING • PURE FUNCTIONS                      │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, ImageRef)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The immutable product catalog and its category tabs
//! - [`filter`] - Category + free-text filtering
//! - [`sort`] - Stable ordering by price or name
//! - [`cart`] - The immutable cart ledger and its totals
//! - [`view`] - Filter state and the displayed-products derivation
//! - [`session`] - Stateful coordinator consumed by the presentation layer
//! - [`error`] - Catalog-boundary error types
//! - [`validation`] - Product field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic - same input = same output
//! 2. **Whole-Value State**: Mutations return a new ledger; nothing is edited in place
//! 3. **Integer Money**: All prices are in cents (i64) to avoid float errors
//! 4. **No Failure Taxonomy**: Out-of-range input is a silent no-op, never an error
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::{Catalog, CartLedger, FilterState, Product, ProductId};
//! use vitrine_core::money::Money;
//! use vitrine_core::types::ImageRef;
//!
//! let catalog = Catalog::new(vec![Product {
//!     id: ProductId(1),
//!     name: "Laptop".into(),
//!     category: "Electronics".into(),
//!     price: Money::from_cents(120_000), // $1200.00
//!     image: ImageRef::new("assets/laptop.webp"),
//! }])
//! .unwrap();
//!
//! let cart = CartLedger::new().add(&catalog.products()[0]);
//! assert_eq!(cart.total(), Money::from_cents(120_000));
//!
//! let visible = vitrine_core::displayed_products(&catalog, &FilterState::default());
//! assert_eq!(visible.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod money;
pub mod session;
pub mod sort;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Catalog` instead of
// `use vitrine_core::catalog::Catalog`

pub use cart::{CartEntry, CartLedger, CartSummary};
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult, ValidationError};
pub use filter::{filter, CategoryFilter};
pub use money::Money;
pub use session::Session;
pub use sort::{sort, SortKey};
pub use types::{Product, ProductId};
pub use view::{displayed_products, FilterState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, enforced at catalog construction.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a category name, enforced at catalog construction.
pub const MAX_CATEGORY_NAME_LEN: usize = 50;
