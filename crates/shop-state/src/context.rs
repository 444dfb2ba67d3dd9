//! # Shop Context
//!
//! Builds the stores once at startup and hands out references to them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ShopContext::new(config)                             │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartStore   │  │ CatalogStore │  │   ShopConfig     │              │
//! │  │              │  │              │  │                  │              │
//! │  │  CartState   │  │  Catalog     │  │  log filter      │              │
//! │  │  (&mut for   │  │  (read only) │  │  currency        │              │
//! │  │   dispatch)  │  │              │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  The stores do not know about each other. Moving a product into the     │
//! │  cart is the caller's job: read it from the catalog, dispatch an ADD.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shop_core::Catalog;
use tracing::info;

use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::config::ShopConfig;

#[derive(Debug)]
pub struct ShopContext {
    config: ShopConfig,
    cart: CartStore,
    catalog: CatalogStore,
}

impl ShopContext {
    /// Creates an empty cart and the built-in catalog.
    pub fn new(config: ShopConfig) -> Self {
        Self::with_catalog(config, Catalog::default())
    }

    pub fn with_catalog(config: ShopConfig, catalog: Catalog) -> Self {
        let cart = CartStore::with_currency(config.currency.clone());
        let catalog = CatalogStore::new(catalog);
        info!(currency = %config.currency.code, "shop context initialized");

        ShopContext {
            config,
            cart,
            catalog,
        }
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }
}

impl Default for ShopContext {
    fn default() -> Self {
        Self::new(ShopConfig::default())
    }
}
