//! # Filter Engine
//!
//! Narrows the catalog to the products matching the current category tab and
//! search text. Pure: the catalog is untouched, relative order is preserved,
//! and an empty result is a valid value, not an error.

use std::fmt;
use std::sync::Arc;

use crate::types::Product;

// =============================================================================
// Category Filter
// =============================================================================

/// The category criterion selected in the tab row.
///
/// `All` is the synthetic tab that disables category filtering; the engine
/// models it as a variant rather than a magic string so an exact-match
/// category named "All" can never be confused with the sentinel internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction (the default tab).
    All,
    /// Restrict to products whose category equals this value exactly.
    Only(String),
}

impl CategoryFilter {
    /// Label the presentation layer shows for the `All` tab.
    pub const ALL_LABEL: &'static str = "All";

    /// Maps a tab label back to a filter; `"All"` yields [`CategoryFilter::All`].
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// Whether the given product passes this category criterion.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_LABEL),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Filters products by category, then by search text.
///
/// The search text is trimmed first; if anything remains it must appear in
/// the product name as a case-insensitive substring. An empty (or
/// whitespace-only) search applies no text filter at all.
pub fn filter(
    products: &[Arc<Product>],
    category: &CategoryFilter,
    search: &str,
) -> Vec<Arc<Product>> {
    let needle = search.trim().to_lowercase();

    products
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
