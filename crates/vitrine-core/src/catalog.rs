//! # Catalog Store
//!
//! The immutable product catalog and the derivations that belong to it.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Lifecycle                             │
//! │                                                                     │
//! │  Supplier JSON ──► Catalog::from_json ──► validation ──► Catalog    │
//! │                                                            │        │
//! │                         read-only forever after            │        │
//! │                                                            ▼        │
//! │           categories() · products() · get(id) · filter/sort         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog exclusively owns the product list. Filter results and cart
//! entries share individual products via `Arc` - a product is allocated once
//! and never copied.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::filter::CategoryFilter;
use crate::types::{Product, ProductId};
use crate::validation::{validate_category_name, validate_price, validate_product_name};

/// The static, ordered collection of all available products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Builds a catalog from the supplier's product list.
    ///
    /// Validates every product (non-empty name and category, non-negative
    /// price) and rejects duplicate ids. Supplier order is preserved; it is
    /// the relative order every unsorted view shows.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = BTreeSet::new();

        for product in &products {
            validate_product_name(&product.name)?;
            validate_category_name(&product.category)?;
            validate_price(product.price)?;

            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId { id: product.id });
            }
        }

        Ok(Catalog {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parses the supplier's static JSON product list and builds a catalog.
    ///
    /// Expected shape (price in cents):
    /// ```json
    /// [{ "id": 1, "name": "Laptop", "category": "Electronics",
    ///    "price": 120000, "image": "assets/laptop.webp" }]
    /// ```
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products, in supplier order.
    #[inline]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Looks up a product by id.
    ///
    /// Linear scan: the catalog is a small static list, not an index.
    pub fn get(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The category tab labels, in first-occurrence order.
    ///
    /// Always begins with the synthetic "All" label, followed by each
    /// distinct category found in the catalog, no duplicates.
    pub fn categories(&self) -> Vec<String> {
        let mut labels = vec![CategoryFilter::ALL_LABEL.to_string()];

        for product in &self.products {
            if !labels.contains(&product.category) {
                labels.push(product.category.clone());
            }
        }

        labels
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ImageRef;

    fn product(id: u32, name: &str, category: &str, cents: i64) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            category: category.to_string(),
            price: Money::from_cents(cents),
            image: ImageRef::new(format!("assets/{}.webp", name.to_lowercase())),
        }
    }

    fn sample_catalog() -> Catalog {
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
    fn test_categories_start_with_all_in_first_occurrence_order() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.categories(),
            vec!["All", "Electronics", "Clothing", "Furniture"]
        );
    }

    #[test]
    fn test_categories_have_no_duplicates() {
        let catalog = Catalog::new(vec![
            product(1, "Laptop", "Electronics", 120_000),
            product(2, "Smartphone", "Electronics", 80_000),
        ])
        .unwrap();

        assert_eq!(catalog.categories(), vec!["All", "Electronics"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get(ProductId(4)).unwrap().name, "Smartphone");
        assert!(catalog.get(ProductId(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            product(1, "Laptop", "Electronics", 120_000),
            product(1, "Smartphone", "Electronics", 80_000),
        ]);

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { id: ProductId(1) })
        ));
    }

    #[test]
    fn test_invalid_fields_rejected() {
        assert!(Catalog::new(vec![product(1, "", "Electronics", 100)]).is_err());
        assert!(Catalog::new(vec![product(1, "Laptop", "", 100)]).is_err());
        assert!(Catalog::new(vec![product(1, "Laptop", "Electronics", -100)]).is_err());
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[
                { "id": 1, "name": "Laptop", "category": "Electronics",
                  "price": 120000, "image": "assets/laptop.webp" },
                { "id": 2, "name": "T-Shirt", "category": "Clothing",
                  "price": 2500, "image": "assets/tshirt.avif" }
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].name, "Laptop");
    }

    #[test]
    fn test_from_json_rejects_malformed_payload() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
