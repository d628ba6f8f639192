//! # Cart Ledger
//!
//! The shopping cart as an immutable value.
//!
//! ## Value Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cart Ledger Operations                          │
//! │                                                                     │
//! │  User Action              Operation              Result             │
//! │  ───────────              ─────────              ──────             │
//! │                                                                     │
//! │  Click "Add to Cart" ───► ledger.add(p) ───────► new ledger,        │
//! │                                                  qty+1 or insert    │
//! │                                                                     │
//! │  Click "-" / "+" ───────► ledger.change_qty() ─► new ledger; entry  │
//! │                                                  removed at qty<=0  │
//! │                                                                     │
//! │  Click "Remove" ────────► ledger.remove(id) ───► new ledger         │
//! │                                                                     │
//! │  Every operation returns a NEW ledger. The caller replaces its      │
//! │  current value wholesale - nothing is ever edited in place, so      │
//! │  there is no shared-mutation hazard and no locking discipline.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entries are unique by product id
//! - `qty >= 1` always; an operation that would drop it to 0 or below
//!   removes the entry instead
//! - Entries hold `Arc` references into the catalog, never product copies,
//!   so cloning a ledger is cheap
//! - Enumeration order is ascending product id: deterministic, and stable
//!   for a given ledger value

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Entry
// =============================================================================

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartEntry {
    /// Shared reference to the catalog product; never a copy.
    pub product: Arc<Product>,

    /// Quantity in the cart. Always >= 1.
    pub qty: u32,
}

impl CartEntry {
    /// Line total: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(i64::from(self.qty))
    }
}

// =============================================================================
// Cart Ledger
// =============================================================================

/// The cart's mapping from product id to quantity entry.
///
/// Created empty; changed only through [`add`](CartLedger::add),
/// [`remove`](CartLedger::remove), and [`change_qty`](CartLedger::change_qty),
/// each of which returns a new ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    entries: BTreeMap<ProductId, CartEntry>,
}

impl CartLedger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        CartLedger {
            entries: BTreeMap::new(),
        }
    }

    /// Adds one unit of `product`.
    ///
    /// If the product is already in the cart its quantity increases by one;
    /// otherwise a new entry with qty 1 is inserted.
    #[must_use]
    pub fn add(&self, product: &Arc<Product>) -> Self {
        let mut next = self.clone();

        match next.entries.get_mut(&product.id) {
            Some(entry) => entry.qty += 1,
            None => {
                next.entries.insert(
                    product.id,
                    CartEntry {
                        product: Arc::clone(product),
                        qty: 1,
                    },
                );
            }
        }

        next
    }

    /// Removes the entry for `id`, if present.
    ///
    /// Removing an absent id is a silent no-op: the returned ledger equals
    /// `self`.
    #[must_use]
    pub fn remove(&self, id: ProductId) -> Self {
        let mut next = self.clone();
        next.entries.remove(&id);
        next
    }

    /// Adjusts the quantity for `id` by `delta` (any integer).
    ///
    /// - Absent id: no-op
    /// - New quantity <= 0: the entry is removed
    /// - Otherwise: the entry's quantity becomes the new value
    #[must_use]
    pub fn change_qty(&self, id: ProductId, delta: i64) -> Self {
        let current = match self.entries.get(&id) {
            Some(entry) => i64::from(entry.qty),
            None => return self.clone(),
        };

        let mut next = self.clone();
        // Saturating: any i64 delta is legal, and a quantity can never leave
        // the 1..=u32::MAX range without removing the entry.
        let new_qty = current.saturating_add(delta);

        if new_qty <= 0 {
            next.entries.remove(&id);
        } else if let Some(entry) = next.entries.get_mut(&id) {
            entry.qty = u32::try_from(new_qty).unwrap_or(u32::MAX);
        }

        next
    }

    /// Sum of `price × qty` over all entries. Empty ledger totals zero.
    pub fn total(&self) -> Money {
        self.entries.values().map(CartEntry::line_total).sum()
    }

    /// The cart lines, in ascending product-id order.
    pub fn line_items(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Quantity of `id` in the cart, if present.
    pub fn qty_of(&self, id: ProductId) -> Option<u32> {
        self.entries.get(&id).map(|entry| entry.qty)
    }

    /// Whether `id` is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of distinct product lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of lines and grand total for the presentation layer.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.entries.values().cloned().collect(),
            total: self.total(),
        }
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Cart snapshot for the presentation layer: lines plus grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    pub items: Vec<CartEntry>,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
