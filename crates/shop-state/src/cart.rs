//! # Cart Store
//!
//! Owns the current cart and is the single place cart mutations go through.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Event               Store Call                  State Change        │
//! │  ────────               ──────────                  ────────────        │
//! │                                                                         │
//! │  Click "Add" ──────────► dispatch(Add) ───────────► qty + 1 / insert    │
//! │                                                                         │
//! │  Pick quantity ────────► dispatch(SetQuantity) ───► qty = n             │
//! │                                                                         │
//! │  Click "Remove" ───────► dispatch(Remove) ────────► line dropped        │
//! │                                                                         │
//! │  Click "Place Order" ──► dispatch(Submit) ────────► cart emptied        │
//! │                                                                         │
//! │  Render ───────────────► view() / items() ────────► (read only)         │
//! │                                                                         │
//! │  Every dispatch computes a new CartState and swaps it in only on        │
//! │  success. A rejected action leaves the previous state in place.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is single-owner: dispatch takes `&mut self`, reads take `&self`.

use serde::{Deserialize, Serialize};
use shop_core::{CartAction, CartState, CoreResult, CurrencyFormat, LineItem, RawAction};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::StateResult;

/// Everything a cart widget renders, recomputed on each call to
/// [`CartStore::view`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    /// Lines in display order
    pub items: Vec<LineItem>,
    pub total_items: i64,
    /// Formatted, e.g. "$49.95"
    pub total_price: String,
}

/// The cart container.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
    currency: CurrencyFormat,
}

impl CartStore {
    /// Creates an empty cart that formats prices as US dollars.
    pub fn new() -> Self {
        Self::with_currency(CurrencyFormat::usd())
    }

    /// Creates an empty cart with a custom price format.
    pub fn with_currency(currency: CurrencyFormat) -> Self {
        CartStore {
            state: CartState::new(),
            currency,
        }
    }

    /// Applies a typed action.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{CartAction, Money};
    /// use shop_state::CartStore;
    ///
    /// let mut cart = CartStore::new();
    /// cart.dispatch(CartAction::add("item0001", "Widget", Money::from_cents(999))).unwrap();
    /// assert_eq!(cart.total_price(), "$9.99");
    ///
    /// // Quantity updates need an existing line
    /// assert!(cart.dispatch(CartAction::set_quantity("item0002", 3)).is_err());
    /// assert_eq!(cart.total_items(), 1);
    /// ```
    pub fn dispatch(&mut self, action: CartAction) -> CoreResult<()> {
        let kind = action.kind();

        let next = self.state.reduce(&action).map_err(|err| {
            warn!(action = %kind, sku = ?action.sku(), error = %err, "cart action rejected");
            err
        })?;

        if let CartAction::SetQuantity { sku, qty } = &action {
            if *qty <= 0 {
                debug!(sku = %sku, qty = *qty, "quantity set to a non-positive value");
            }
        }

        debug!(
            action = %kind,
            sku = ?action.sku(),
            lines = next.len(),
            total_items = next.total_items(),
            "cart action applied"
        );

        self.state = next;
        Ok(())
    }

    /// Applies a string-tagged action with an optional payload.
    pub fn dispatch_raw(&mut self, raw: RawAction) -> CoreResult<()> {
        let action = CartAction::try_from(raw).map_err(|err| {
            warn!(error = %err, "raw cart action rejected");
            err
        })?;
        self.dispatch(action)
    }

    /// Parses a JSON `{ "type": ..., "payload": ... }` action and applies it.
    pub fn dispatch_json(&mut self, json: &str) -> StateResult<()> {
        let raw: RawAction = serde_json::from_str(json)?;
        self.dispatch_raw(raw)?;
        Ok(())
    }

    /// The authoritative state, in storage order.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Lines in display order.
    pub fn items(&self) -> Vec<LineItem> {
        self.state.display_items()
    }

    pub fn total_items(&self) -> i64 {
        self.state.total_items()
    }

    /// Cart total formatted with this store's currency format.
    pub fn total_price(&self) -> String {
        self.currency.format(self.state.total_amount())
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn view(&self) -> CartView {
        let totals = self.state.totals();
        CartView {
            items: self.items(),
            total_items: totals.total_items,
            total_price: self.currency.format(totals.total_amount),
        }
    }
}
