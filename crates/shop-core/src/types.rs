//! # Domain Types
//!
//! The two records the storefront deals in.
//!
//! ```text
//! ┌─────────────────┐                 ┌─────────────────────┐
//! │    Product      │  from_product   │     LineItem        │
//! │  ─────────────  │ ──────────────► │  ─────────────────  │
//! │  sku            │                 │  sku (unique key)   │
//! │  name           │                 │  name               │
//! │  price_cents    │                 │  unit_price_cents   │
//! └─────────────────┘                 │  quantity           │
//!   fixed catalog                     └─────────────────────┘
//!                                       one per sku in a cart
//! ```
//!
//! Both are plain values. A `LineItem` snapshots the product's name and
//! price at the moment it is built; the cart never looks the product up
//! again.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit, unique within the catalog.
    pub sku: String,

    /// Display name.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            sku: sku.into(),
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// An entry in the cart.
///
/// ## Invariants
/// - At most one `LineItem` per `sku` in a cart (enforced by the reducer)
/// - `quantity` is whatever the last transition set; a quantity update may
///   leave it at zero or below
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub sku: String,

    pub name: String,

    /// Price in cents at the time the item was last added
    pub unit_price_cents: i64,

    pub quantity: i64,
}

impl LineItem {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        LineItem {
            sku: sku.into(),
            name: name.into(),
            unit_price_cents: unit_price.cents(),
            quantity,
        }
    }

    /// Creates a line item from a catalog product.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{LineItem, Product};
    ///
    /// let widget = Product::new("item0001", "Widget", 999);
    /// let item = LineItem::from_product(&widget, 2);
    /// assert_eq!(item.line_total().cents(), 1998);
    /// ```
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            sku: product.sku.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
        }
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Returns a copy with the quantity replaced.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        LineItem {
            quantity,
            ..self.clone()
        }
    }
}
