//! # View-State Derivation
//!
//! The filter criteria as one value, and the single pure function that turns
//! (catalog, criteria) into the product list the grid displays.
//!
//! The original reactive formulation ("recompute whenever category, search,
//! or sort change") becomes an explicit call: the caller invokes
//! [`displayed_products`] after every state transition. Memoization would be
//! an optimization, not a correctness requirement - the function is pure.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::filter::{filter, CategoryFilter};
use crate::sort::{sort, SortKey};
use crate::types::Product;

/// The user-selected browse criteria.
///
/// Defaults to the "show everything" state: the `All` tab, no search text,
/// no sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected category tab.
    pub category: CategoryFilter,

    /// Free-text search input, stored as typed; trimming happens at filter
    /// time so the text box round-trips exactly.
    pub search: String,

    /// Selected sort dropdown value.
    pub sort: SortKey,
}

/// The product list the grid displays: filter, then sort.
pub fn displayed_products(catalog: &Catalog, filters: &FilterState) -> Vec<Arc<Product>> {
    sort(
        &filter(catalog.products(), &filters.category, &filters.search),
        filters.sort,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{ImageRef, ProductId};

    fn sample_catalog() -> Catalog {
        let product = |id: u32, name: &str, category: &str, cents: i64| Product {
            id: ProductId(id),
            name: name.to_string(),
            category: category.to_string(),
            price: Money::from_cents(cents),
            image: ImageRef::new("assets/placeholder.webp"),
        };

        Catalog::new(vec![
            product(1, "Laptop", "Electronics", 120_000),
            product(2, "T-Shirt", "Clothing", 2_500),
            product(3, "Wardrobe", "Furniture", 1_500),
            product(4, "Smartphone", "Electronics", 80_000),
            product(5, "Jeans", "Clothing", 5_000),
            product(6, "Diningtable", "Furniture", 2_000),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_state_shows_whole_catalog() {
        let catalog = sample_catalog();
        let shown = displayed_products(&catalog, &FilterState::default());
        assert_eq!(shown, catalog.products());
    }

    #[test]
    fn test_filter_then_sort_composition() {
        let catalog = sample_catalog();
        let state = FilterState {
            category: CategoryFilter::from_label("Electronics"),
            search: String::new(),
            sort: SortKey::PriceAsc,
        };

        let shown = displayed_products(&catalog, &state);
        let names: Vec<&str> = shown.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Smartphone", "Laptop"]);
    }

    #[test]
    fn test_same_inputs_same_outputs() {
        let catalog = sample_catalog();
        let state = FilterState {
            category: CategoryFilter::All,
            search: "a".to_string(),
            sort: SortKey::NameDesc,
        };

        assert_eq!(
            displayed_products(&catalog, &state),
            displayed_products(&catalog, &state)
        );
    }
}
