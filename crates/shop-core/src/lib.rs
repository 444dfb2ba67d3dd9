//! # shop-core: Pure Business Logic for Widget Shop
//!
//! This crate holds the cart reducer, its derived totals and the fixed
//! product catalog, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Widget Shop Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI                                │   │
//! │  │    Product list ──► Add button ──► Cart list ──► Checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch / read                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shop-state (stores)                          │   │
//! │  │    CartStore, CatalogStore, ShopContext                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ action  │ │  cart   │ │ totals  │ │ catalog │ │  money  │  │   │
//! │  │   │ Cart-   │ │ reduce  │ │ Σ qty   │ │ fixed   │ │ cents + │  │   │
//! │  │   │ Action  │ │         │ │ Σ price │ │ list    │ │ format  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`action`] - Typed `CartAction` and the raw tag + payload form
//! - [`cart`] - `CartState` and the reducer
//! - [`totals`] - Derived aggregates (item count, price, display order)
//! - [`sku`] - Sort key extraction from sku suffixes
//! - [`catalog`] - The fixed product list
//! - [`types`] - `Product` and `LineItem`
//! - [`money`] - Integer cents and currency formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Product validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{CartAction, CartState, Catalog};
//!
//! let catalog = Catalog::default();
//! let widget = catalog.find("item0001").unwrap();
//!
//! let cart = CartState::new()
//!     .reduce(&CartAction::add_product(widget))
//!     .unwrap();
//!
//! assert_eq!(cart.total_items(), 1);
//! assert_eq!(cart.total_price(), "$9.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod sku;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use action::{ActionKind, ActionPayload, CartAction, RawAction};
pub use cart::{reduce, CartState};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{CurrencyFormat, Money};
pub use totals::CartTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a sku accepted into a catalog.
pub const MAX_SKU_LENGTH: usize = 50;

/// Maximum length of a product name accepted into a catalog.
pub const MAX_NAME_LENGTH: usize = 200;
