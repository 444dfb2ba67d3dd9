//! # shop-state: Store Layer for Widget Shop
//!
//! Holds the state a storefront UI reads from and dispatches into.
//!
//! ## Module Organization
//! ```text
//! shop_state/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── cart.rs         ◄─── CartStore: dispatch + derived reads
//! ├── catalog.rs      ◄─── CatalogStore: fixed product list
//! ├── context.rs      ◄─── ShopContext: builds and owns both stores
//! ├── config.rs       ◄─── ShopConfig: file + environment settings
//! ├── telemetry.rs    ◄─── tracing subscriber setup
//! └── error.rs        ◄─── StateError
//! ```
//!
//! ## Why Separate Stores?
//! The cart and the catalog share nothing. Each consumer asks only for the
//! store it needs, and tests can build either one on its own.
//!
//! ## Example
//! ```rust
//! use shop_core::CartAction;
//! use shop_state::ShopContext;
//!
//! let mut shop = ShopContext::default();
//! let widget = shop.catalog().find("item0001").unwrap().clone();
//!
//! shop.cart_mut().dispatch(CartAction::add_product(&widget)).unwrap();
//! shop.cart_mut().dispatch(CartAction::add_product(&widget)).unwrap();
//!
//! let view = shop.cart().view();
//! assert_eq!(view.total_items, 2);
//! assert_eq!(view.total_price, "$19.98");
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod telemetry;

pub use cart::{CartStore, CartView};
pub use catalog::{CatalogStore, CatalogView};
pub use config::ShopConfig;
pub use context::ShopContext;
pub use error::{StateError, StateResult};
