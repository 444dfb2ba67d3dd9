//! # Catalog Store
//!
//! Read-only access to the product list. Built once, never mutated.

use serde::Serialize;
use shop_core::{Catalog, Product};
use tracing::debug;
use ts_rs::TS;

/// What a product list widget renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CatalogView {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Catalog,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        debug!(products = catalog.len(), "catalog loaded");
        CatalogStore { catalog }
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn find(&self, sku: &str) -> Option<&Product> {
        self.catalog.find(sku)
    }

    pub fn view(&self) -> CatalogView {
        CatalogView {
            products: self.products().to_vec(),
        }
    }
}
