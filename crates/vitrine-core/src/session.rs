//! # Session
//!
//! The stateful coordinator the presentation layer talks to.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Session Lifecycle                             │
//! │                                                                     │
//! │  Frontend Action         Session Call          State Change         │
//! │  ───────────────         ────────────          ────────────         │
//! │                                                                     │
//! │  Click category tab ───► set_category() ─────► filters.category     │
//! │  Type in search box ───► set_search() ───────► filters.search       │
//! │  Pick sort option ─────► set_sort() ─────────► filters.sort         │
//! │  Click "Clear" ────────► clear_filters() ────► filters = default    │
//! │                                                                     │
//! │  Click "Add to Cart" ──► add_to_cart() ──────► cart = cart.add(p)   │
//! │  Click "-" / "+" ──────► change_qty() ───────► cart = cart.change.. │
//! │  Click "Remove" ───────► remove_from_cart() ─► cart = cart.remove.. │
//! │                                                                     │
//! │  Render grid ──────────► displayed_products() (read only)           │
//! │  Render cart panel ────► line_items(), total() (read only)          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session owns the current `FilterState` and `CartLedger` *values* and
//! replaces them wholesale on each event. Everything is synchronous and
//! single-threaded, so there is no lock - unlike a multi-window app state,
//! nothing else can observe the value mid-transition.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::cart::{CartEntry, CartLedger, CartSummary};
use crate::catalog::Catalog;
use crate::filter::CategoryFilter;
use crate::money::Money;
use crate::sort::SortKey;
use crate::types::{Product, ProductId};
use crate::view::{displayed_products, FilterState};

/// A browsing session over one catalog: current filters plus current cart.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    filters: FilterState,
    cart: CartLedger,
}

impl Session {
    /// Starts a session with default filters and an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        debug!(products = catalog.len(), "session started");
        Session {
            catalog,
            filters: FilterState::default(),
            cart: CartLedger::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current filter criteria.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The current cart ledger.
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// Category tab labels ("All" first).
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// The product list the grid should display right now.
    pub fn displayed_products(&self) -> Vec<Arc<Product>> {
        displayed_products(&self.catalog, &self.filters)
    }

    /// The cart lines, in ascending product-id order.
    pub fn line_items(&self) -> impl Iterator<Item = &CartEntry> {
        self.cart.line_items()
    }

    /// The cart's grand total.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Cart snapshot (lines + total) for rendering the cart panel.
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    // -------------------------------------------------------------------------
    // Filter transitions
    // -------------------------------------------------------------------------

    /// Selects a category tab.
    pub fn set_category(&mut self, category: CategoryFilter) {
        debug!(%category, "set_category");
        self.filters.category = category;
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        debug!(search = %search, "set_search");
        self.filters.search = search;
    }

    /// Selects a sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        debug!(?sort, "set_sort");
        self.filters.sort = sort;
    }

    /// Resets category, search, and sort to their defaults.
    pub fn clear_filters(&mut self) {
        debug!("clear_filters");
        self.filters = FilterState::default();
    }

    // -------------------------------------------------------------------------
    // Cart transitions
    // -------------------------------------------------------------------------

    /// Adds one unit of the identified product to the cart.
    ///
    /// An id that is not in the catalog is ignored (logged at warn level);
    /// the presentation layer can only produce ids it was handed, so this
    /// only fires on a stale or buggy caller.
    pub fn add_to_cart(&mut self, id: ProductId) {
        match self.catalog.get(id) {
            Some(product) => {
                debug!(%id, name = %product.name, "add_to_cart");
                self.cart = self.cart.add(product);
            }
            None => warn!(%id, "add_to_cart: id not in catalog, ignoring"),
        }
    }

    /// Removes the identified product's line from the cart (no-op if absent).
    pub fn remove_from_cart(&mut self, id: ProductId) {
        debug!(%id, "remove_from_cart");
        self.cart = self.cart.remove(id);
    }

    /// Adjusts the identified line's quantity by `delta` (typically ±1).
    pub fn change_qty(&mut self, id: ProductId, delta: i64) {
        debug!(%id, delta, "change_qty");
        self.cart = self.cart.change_qty(id, delta);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
