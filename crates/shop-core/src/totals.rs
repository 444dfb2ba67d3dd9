//! # Derived Aggregates
//!
//! Values computed from the cart's items on every read. Nothing here is
//! stored, so none of it can drift out of sync with the items.
//!
//! ```text
//!   items ──┬──► total_items   Σ quantity
//!           ├──► total_amount  Σ quantity × unit price      (Money)
//!           ├──► total_price   total_amount, "$1,234.50"   (String)
//!           └──► display_order sorted by sku sort key
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{CurrencyFormat, Money};
use crate::sku::compare_skus;
use crate::types::LineItem;

/// Sum of quantities. Empty → 0.
pub fn total_items(items: &[LineItem]) -> i64 {
    items.iter().map(|item| item.quantity).sum()
}

/// Sum of line totals. Empty → zero.
pub fn total_amount(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::line_total).sum()
}

/// Sum of line totals formatted as US dollars.
pub fn total_price(items: &[LineItem]) -> String {
    total_price_with(items, &CurrencyFormat::usd())
}

/// Sum of line totals formatted with `format`.
pub fn total_price_with(items: &[LineItem], format: &CurrencyFormat) -> String {
    format.format(total_amount(items))
}

/// Items sorted ascending by sku sort key.
///
/// The sort is stable, so skus with equal keys (or no key) keep their
/// storage order relative to each other.
pub fn display_order(items: &[LineItem]) -> Vec<LineItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_skus(&a.sku, &b.sku));
    sorted
}

/// Both numeric aggregates at once.
///
/// The reducer only accepts a transition whose totals pass
/// [`CartTotals::checked`], so the plain sums above never overflow for a
/// cart built through `reduce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub total_items: i64,
    pub total_amount: Money,
}

impl CartTotals {
    /// Computes both aggregates with overflow checks on every line total
    /// and on both sums. `None` if any of them does not fit in an `i64`.
    pub fn checked(items: &[LineItem]) -> Option<CartTotals> {
        let mut totals = CartTotals {
            total_items: 0,
            total_amount: Money::zero(),
        };

        for item in items {
            let line_total = item.unit_price().checked_mul(item.quantity)?;
            totals.total_items = totals.total_items.checked_add(item.quantity)?;
            totals.total_amount = totals.total_amount.checked_add(line_total)?;
        }

        Some(totals)
    }
}

impl From<&[LineItem]> for CartTotals {
    fn from(items: &[LineItem]) -> Self {
        CartTotals {
            total_items: total_items(items),
            total_amount: total_amount(items),
        }
    }
}
