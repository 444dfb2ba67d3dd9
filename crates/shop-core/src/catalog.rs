//! # Product Catalog
//!
//! The fixed list of products the storefront sells.
//!
//! | sku      | name           | price  |
//! |----------|----------------|--------|
//! | item0001 | Widget         | $9.99  |
//! | item0002 | Premium Widget | $19.99 |
//! | item0003 | Deluxe Widget  | $29.99 |
//!
//! A `Catalog` never changes after construction. There is no setter.

use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::types::Product;
use crate::validation::validate_products;

/// The built-in product list.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("item0001", "Widget", 999),
        Product::new("item0002", "Premium Widget", 1999),
        Product::new("item0003", "Deluxe Widget", 2999),
    ]
}

/// An immutable, validated list of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting malformed products and duplicate skus.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Catalog, Product};
    ///
    /// let catalog = Catalog::new(vec![Product::new("item0100", "Gizmo", 450)]).unwrap();
    /// assert_eq!(catalog.len(), 1);
    ///
    /// let dup = vec![Product::new("a0001", "A", 1), Product::new("a0001", "B", 2)];
    /// assert!(Catalog::new(dup).is_err());
    /// ```
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        validate_products(&products)?;
        Ok(Catalog { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.sku == sku)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The built-in catalog.
impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            products: default_products(),
        }
    }
}
