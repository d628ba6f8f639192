//! # Sort Engine
//!
//! Orders a product sequence by the user-selected sort key. Always returns a
//! new vector; the input is never mutated. All sorts are stable, so products
//! with equal keys keep their relative input order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Sort Key
// =============================================================================

/// The ordering selected in the sort dropdown.
///
/// Wire names match the dropdown's option values (`"none"`, `"price-asc"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Input order preserved (identity).
    None,
    /// Numeric ascending by price.
    PriceAsc,
    /// Numeric descending by price.
    PriceDesc,
    /// Case-insensitive ascending by name.
    NameAsc,
    /// Case-insensitive descending by name.
    NameDesc,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::None
    }
}

// =============================================================================
// Sort
// =============================================================================

/// Returns a new vector ordered by `key`.
///
/// `Vec::sort_by` is stable, which gives the tie-breaking rule for free:
/// equal prices (or names) stay in input order, and re-sorting an already
/// sorted sequence with the same key is a no-op.
pub fn sort(products: &[Arc<Product>], key: SortKey) -> Vec<Arc<Product>> {
    let mut ordered: Vec<Arc<Product>> = products.to_vec();

    match key {
        SortKey::None => {}
        SortKey::PriceAsc => ordered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => ordered.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::NameAsc => ordered.sort_by(|a, b| name_cmp(&a.name, &b.name)),
        SortKey::NameDesc => ordered.sort_by(|a, b| name_cmp(&b.name, &a.name)),
    }

    ordered
}

/// Case-insensitive name comparison via Unicode lowercase folding.
///
/// Stand-in for locale-aware collation; no collation library is carried, so
/// ordering within a case-folded equivalence class is left to the stable
/// sort (input order).
fn name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{ImageRef, ProductId};

    fn product(id: u32, name: &str, cents: i64) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId(id),
            name: name.to_string(),
            category: "Test".to_string(),
            price: Money::from_cents(cents),
            image: ImageRef::new("assets/placeholder.webp"),
        })
    }

    fn ids(products: &[Arc<Product>]) -> Vec<u32> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_none_is_identity() {
        let input = vec![product(3, "C", 300), product(1, "A", 100)];
        assert_eq!(sort(&input, SortKey::None), input);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let input = vec![product(2, "B", 200), product(1, "A", 100)];
        let _ = sort(&input, SortKey::PriceAsc);
        assert_eq!(ids(&input), vec![2, 1]);
    }

    #[test]
    fn test_price_asc_and_desc() {
        let input = vec![
            product(1, "Laptop", 120_000),
            product(2, "T-Shirt", 2_500),
            product(4, "Smartphone", 80_000),
        ];

        assert_eq!(ids(&sort(&input, SortKey::PriceAsc)), vec![2, 4, 1]);
        assert_eq!(ids(&sort(&input, SortKey::PriceDesc)), vec![1, 4, 2]);
    }

    #[test]
    fn test_price_desc_is_reverse_of_asc_without_ties() {
        let input = vec![
            product(1, "A", 300),
            product(2, "B", 100),
            product(3, "C", 200),
        ];

        let mut asc = sort(&input, SortKey::PriceAsc);
        asc.reverse();
        assert_eq!(asc, sort(&input, SortKey::PriceDesc));
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let input = vec![
            product(1, "banana", 100),
            product(2, "Apple", 100),
            product(3, "cherry", 100),
        ];

        assert_eq!(ids(&sort(&input, SortKey::NameAsc)), vec![2, 1, 3]);
        assert_eq!(ids(&sort(&input, SortKey::NameDesc)), vec![3, 1, 2]);
    }

    #[test]
    fn test_stability_breaks_price_ties_by_input_order() {
        let input = vec![
            product(5, "First", 100),
            product(2, "Second", 100),
            product(9, "Third", 100),
        ];

        assert_eq!(ids(&sort(&input, SortKey::PriceAsc)), vec![5, 2, 9]);
        assert_eq!(ids(&sort(&input, SortKey::PriceDesc)), vec![5, 2, 9]);
    }

    #[test]
    fn test_resorting_is_idempotent() {
        let input = vec![
            product(1, "Laptop", 120_000),
            product(2, "T-Shirt", 2_500),
            product(3, "Wardrobe", 1_500),
            product(4, "Smartphone", 80_000),
        ];

        for key in [
            SortKey::None,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
        ] {
            let once = sort(&input, key);
            let twice = sort(&once, key);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_wire_names_match_dropdown_values() {
        assert_eq!(serde_json::to_string(&SortKey::None).unwrap(), r#""none""#);
        assert_eq!(
            serde_json::to_string(&SortKey::PriceAsc).unwrap(),
            r#""price-asc""#
        );
        assert_eq!(
            serde_json::to_string(&SortKey::NameDesc).unwrap(),
            r#""name-desc""#
        );
        let key: SortKey = serde_json::from_str(r#""price-desc""#).unwrap();
        assert_eq!(key, SortKey::PriceDesc);
    }
}
