//! # Cart State & Reducer
//!
//! The cart is a list of line items plus one pure transition function.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    reduce(&state, &action) -> state'                    │
//! │                                                                         │
//! │  ADD(sku, name, price)                                                  │
//! │    qty' = existing.qty + 1, or 1 if absent                              │
//! │    items' = items without sku ++ [{sku, name, price, qty'}]             │
//! │                                                                         │
//! │  REMOVE(sku)                                                            │
//! │    items' = items without sku              (absent sku: same content)   │
//! │                                                                         │
//! │  QUANTITY(sku, qty)                                                     │
//! │    absent sku ──► Err(ItemNotFound), state untouched                    │
//! │    items' = items without sku ++ [existing with qty]                    │
//! │                                                                         │
//! │  SUBMIT                                                                 │
//! │    items' = []                                                          │
//! │                                                                         │
//! │  Any qty', line total or cart total past i64 ──► Err(QuantityOverflow)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `reduce` borrows the current state and returns a fresh one, so a failed
//! transition cannot leave a half-applied cart behind. Storage order is
//! insertion order (a touched line moves to the end); display order is
//! derived in [`crate::totals`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::action::{CartAction, RawAction};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::totals::{self, CartTotals};
use crate::types::LineItem;

/// The authoritative cart contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartState { items: Vec::new() }
    }

    /// Items in storage (insertion) order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn find(&self, sku: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Applies `action` and returns the resulting state.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{CartAction, CartState, Money};
    ///
    /// let add = CartAction::add("item0001", "Widget", Money::from_cents(999));
    /// let cart = CartState::new().reduce(&add).unwrap();
    /// let cart = cart.reduce(&add).unwrap();
    ///
    /// assert_eq!(cart.find("item0001").unwrap().quantity, 2);
    /// assert_eq!(cart.total_price(), "$19.98");
    /// ```
    pub fn reduce(&self, action: &CartAction) -> CoreResult<CartState> {
        let items = match action {
            CartAction::Add { sku, name, price } => {
                let quantity = match self.find(sku) {
                    Some(existing) => existing.quantity.checked_add(1).ok_or_else(|| {
                        CoreError::QuantityOverflow { sku: sku.clone() }
                    })?,
                    None => 1,
                };
                let mut items = self.without(sku);
                items.push(LineItem::new(sku.clone(), name.clone(), *price, quantity));
                items
            }
            CartAction::Remove { sku } => self.without(sku),
            CartAction::SetQuantity { sku, qty } => {
                let existing = self
                    .find(sku)
                    .ok_or_else(|| CoreError::ItemNotFound { sku: sku.clone() })?;
                let updated = existing.with_quantity(*qty);
                let mut items = self.without(sku);
                items.push(updated);
                items
            }
            CartAction::Submit => Vec::new(),
        };

        if let Some(sku) = action.sku() {
            if CartTotals::checked(&items).is_none() {
                return Err(CoreError::QuantityOverflow {
                    sku: sku.to_string(),
                });
            }
        }

        Ok(CartState { items })
    }

    /// Converts a raw action and applies it.
    pub fn reduce_raw(&self, raw: RawAction) -> CoreResult<CartState> {
        self.reduce(&CartAction::try_from(raw)?)
    }

    /// Item count and total amount together.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self.items())
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        totals::total_items(&self.items)
    }

    /// Sum of line totals.
    pub fn total_amount(&self) -> Money {
        totals::total_amount(&self.items)
    }

    /// Sum of line totals, US-dollar formatted.
    pub fn total_price(&self) -> String {
        totals::total_price(&self.items)
    }

    /// Items sorted by sku sort key.
    pub fn display_items(&self) -> Vec<LineItem> {
        totals::display_order(&self.items)
    }

    fn without(&self, sku: &str) -> Vec<LineItem> {
        self.items
            .iter()
            .filter(|item| item.sku != sku)
            .cloned()
            .collect()
    }
}

impl FromIterator<LineItem> for CartState {
    /// Collects items as-is; the caller is responsible for sku uniqueness.
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        CartState {
            items: iter.into_iter().collect(),
        }
    }
}

/// Free-function form of [`CartState::reduce`].
pub fn reduce(state: &CartState, action: &CartAction) -> CoreResult<CartState> {
    state.reduce(action)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionKind, ActionPayload};

    fn add(sku: &str, name: &str, cents: i64) -> CartAction {
        CartAction::add(sku, name, Money::from_cents(cents))
    }

    fn cart_with(items: &[(&str, i64)]) -> CartState {
        items
            .iter()
            .map(|(sku, qty)| LineItem::new(*sku, format!("Product {sku}"), Money::from_cents(100), *qty))
            .collect()
    }

    #[test]
    fn test_add_new_sku_inserts_at_quantity_one() {
        let before = cart_with(&[("item0002", 3)]);
        let after = before.reduce(&add("item0001", "Widget", 999)).unwrap();

        assert_eq!(after.len(), 2);
        assert_eq!(after.find("item0001").unwrap().quantity, 1);
        assert_eq!(after.find("item0002"), before.find("item0002"));
    }

    #[test]
    fn test_add_existing_sku_increments() {
        let before = cart_with(&[("item0001", 4), ("item0002", 1)]);
        let after = before.reduce(&add("item0001", "Widget", 100)).unwrap();

        assert_eq!(after.len(), 2);
        assert_eq!(after.find("item0001").unwrap().quantity, 5);
        assert_eq!(after.find("item0002"), before.find("item0002"));
    }

    #[test]
    fn test_add_takes_latest_name_and_price() {
        let cart = CartState::new()
            .reduce(&add("item0001", "Widget", 999))
            .unwrap()
            .reduce(&add("item0001", "Widget v2", 1099))
            .unwrap();

        let item = cart.find("item0001").unwrap();
        assert_eq!(item.name, "Widget v2");
        assert_eq!(item.unit_price_cents, 1099);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_touched_line_moves_to_end_of_storage() {
        let before = cart_with(&[("item0001", 1), ("item0002", 1)]);
        let after = before.reduce(&add("item0001", "Widget", 100)).unwrap();

        let skus: Vec<&str> = after.items().iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, ["item0002", "item0001"]);
    }

    #[test]
    fn test_remove() {
        let before = cart_with(&[("item0001", 2), ("item0002", 1)]);
        let after = before.reduce(&CartAction::remove("item0001")).unwrap();

        assert!(after.find("item0001").is_none());
        assert_eq!(after.find("item0002"), before.find("item0002"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let before = cart_with(&[("item0001", 2)]);
        let after = before.reduce(&CartAction::remove("item0009")).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_set_quantity() {
        let before = cart_with(&[("item0001", 2), ("item0002", 1)]);
        let after = before
            .reduce(&CartAction::set_quantity("item0001", 7))
            .unwrap();

        assert_eq!(after.find("item0001").unwrap().quantity, 7);
        assert_eq!(after.find("item0002"), before.find("item0002"));
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_set_quantity_absent_fails_and_leaves_state() {
        let before = cart_with(&[("item0001", 2)]);
        let snapshot = before.clone();

        let err = before
            .reduce(&CartAction::set_quantity("item0002", 3))
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::ItemNotFound {
                sku: "item0002".to_string()
            }
        );
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_set_quantity_accepts_zero_and_negative() {
        let cart = cart_with(&[("item0001", 2)]);

        let zero = cart.reduce(&CartAction::set_quantity("item0001", 0)).unwrap();
        assert_eq!(zero.find("item0001").unwrap().quantity, 0);
        assert_eq!(zero.total_items(), 0);

        let negative = cart.reduce(&CartAction::set_quantity("item0001", -3)).unwrap();
        assert_eq!(negative.find("item0001").unwrap().quantity, -3);
        assert_eq!(negative.total_price(), "-$3.00");
    }

    #[test]
    fn test_submit_always_empties() {
        for cart in [CartState::new(), cart_with(&[("item0001", 2), ("item0002", 9)])] {
            let after = cart.reduce(&CartAction::submit()).unwrap();
            assert!(after.is_empty());
            assert_eq!(after.total_items(), 0);
            assert_eq!(after.total_price(), "$0.00");
        }
    }

    #[test]
    fn test_reduce_is_deterministic() {
        let cart = cart_with(&[("item0003", 1), ("item0001", 2)]);
        let action = add("item0003", "Deluxe Widget", 2999);
        assert_eq!(cart.reduce(&action).unwrap(), cart.reduce(&action).unwrap());
    }

    #[test]
    fn test_checkout_walkthrough() {
        let widget = add("item0001", "Widget", 999);

        let cart = CartState::new().reduce(&widget).unwrap();
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), "$9.99");

        let cart = cart.reduce(&widget).unwrap();
        assert_eq!(cart.find("item0001").unwrap().quantity, 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), "$19.98");

        let cart = cart.reduce(&CartAction::set_quantity("item0001", 5)).unwrap();
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), "$49.95");

        let cart = cart.reduce(&CartAction::remove("item0001")).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), "$0.00");
    }

    #[test]
    fn test_display_order_ignores_insertion_order() {
        let cart = reduce(&CartState::new(), &add("item0002", "Premium Widget", 1999))
            .and_then(|c| reduce(&c, &add("item0001", "Widget", 999)))
            .unwrap();

        let skus: Vec<String> = cart.display_items().into_iter().map(|i| i.sku).collect();
        assert_eq!(skus, ["item0001", "item0002"]);
        // storage order is untouched by reading the display order
        assert_eq!(cart.items()[0].sku, "item0002");
    }

    #[test]
    fn test_set_quantity_overflowing_total_is_rejected() {
        let cart = CartState::new().reduce(&add("item0001", "Widget", 999)).unwrap();
        let snapshot = cart.clone();

        let err = cart
            .reduce(&CartAction::set_quantity("item0001", i64::MAX / 10))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::QuantityOverflow {
                sku: "item0001".to_string()
            }
        );
        assert_eq!(cart, snapshot);
        assert_eq!(cart.total_price(), "$9.99");
    }

    #[test]
    fn test_add_past_max_quantity_is_rejected() {
        let cart = cart_with(&[("item0001", 1)]);
        // a one-cent line can hold i64::MAX units without overflowing the total
        let cart = cart
            .reduce(&add("item0001", "Penny Widget", 1))
            .and_then(|c| c.reduce(&CartAction::set_quantity("item0001", i64::MAX)))
            .unwrap();
        assert_eq!(cart.total_items(), i64::MAX);

        let err = cart.reduce(&add("item0001", "Penny Widget", 1)).unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow { sku } if sku == "item0001"));
        assert_eq!(cart.find("item0001").unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_add_rejected_when_cart_total_would_overflow() {
        let cart = CartState::new()
            .reduce(&add("item0001", "Penny Widget", 1))
            .and_then(|c| c.reduce(&CartAction::set_quantity("item0001", i64::MAX)))
            .unwrap();

        let err = cart.reduce(&add("item0002", "Premium Widget", 1999)).unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow { sku } if sku == "item0002"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals() {
        let cart = cart_with(&[("item0001", 2), ("item0002", 3)]);
        let totals = cart.totals();
        assert_eq!(totals.total_items, 5);
        assert_eq!(totals.total_amount, Money::from_cents(500));
    }

    #[test]
    fn test_reduce_raw() {
        let cart = cart_with(&[("item0001", 1)]);

        let err = cart
            .reduce_raw(RawAction::new("QUANTITY", None))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidAction {
                action: ActionKind::SetQuantity,
                field: "payload"
            }
        );

        let err = cart.reduce_raw(RawAction::new("REMOTE", None)).unwrap_err();
        assert!(matches!(err, CoreError::UnknownAction(tag) if tag == "REMOTE"));

        let payload = ActionPayload {
            sku: Some("item0001".to_string()),
            qty: Some(3),
            ..Default::default()
        };
        let cart = cart
            .reduce_raw(RawAction::new("QUANTITY", Some(payload)))
            .unwrap();
        assert_eq!(cart.total_items(), 3);
    }

    // -------------------------------------------------------------------------
    // Properties over arbitrary action sequences
    // -------------------------------------------------------------------------

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        const SKUS: [&str; 5] = ["item0001", "item0002", "item0003", "item0042", "gadget"];

        fn sku_strategy() -> impl Strategy<Value = String> {
            prop::sample::select(SKUS.to_vec()).prop_map(str::to_string)
        }

        fn action_strategy() -> impl Strategy<Value = CartAction> {
            prop_oneof![
                4 => (sku_strategy(), 0i64..10_000)
                    .prop_map(|(sku, cents)| CartAction::add(sku.clone(), format!("Product {sku}"), Money::from_cents(cents))),
                2 => sku_strategy().prop_map(CartAction::remove),
                3 => (sku_strategy(), -5i64..100).prop_map(|(sku, qty)| CartAction::set_quantity(sku, qty)),
                1 => Just(CartAction::submit()),
            ]
        }

        fn assert_one_line_per_sku(cart: &CartState) {
            let skus: HashSet<&str> = cart.items().iter().map(|i| i.sku.as_str()).collect();
            assert_eq!(skus.len(), cart.len(), "duplicate sku lines in {cart:?}");
        }

        proptest! {
            #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

            #[test]
            fn reduce_keeps_invariants(actions in prop::collection::vec(action_strategy(), 0..40)) {
                let mut cart = CartState::new();

                for action in &actions {
                    match cart.reduce(action) {
                        Ok(next) => cart = next,
                        Err(err) => {
                            // only a quantity update on an absent line can fail here
                            let absent = matches!(action, CartAction::SetQuantity { sku, .. } if cart.find(sku).is_none());
                            prop_assert!(absent, "unexpected {err:?} for {action:?}");
                        }
                    }

                    assert_one_line_per_sku(&cart);

                    let items: i64 = cart.items().iter().map(|i| i.quantity).sum();
                    let cents: i64 = cart.items().iter().map(|i| i.unit_price_cents * i.quantity).sum();
                    prop_assert_eq!(cart.total_items(), items);
                    prop_assert_eq!(cart.total_amount().cents(), cents);
                    prop_assert_eq!(cart.total_price(), Money::from_cents(cents).to_string());
                    prop_assert_eq!(cart.display_items().len(), cart.len());
                }
            }

            #[test]
            fn add_bumps_only_its_own_line(
                actions in prop::collection::vec(action_strategy(), 0..20),
                sku in sku_strategy(),
            ) {
                let cart = actions
                    .iter()
                    .fold(CartState::new(), |cart, action| cart.reduce(action).unwrap_or(cart));
                let before = cart.find(&sku).map_or(0, |item| item.quantity);

                let after = cart.reduce(&CartAction::add(sku.clone(), "Widget", Money::from_cents(999))).unwrap();

                prop_assert_eq!(after.find(&sku).map(|item| item.quantity), Some(before + 1));
                for item in cart.items().iter().filter(|item| item.sku != sku) {
                    prop_assert_eq!(after.find(&item.sku), Some(item));
                }
            }

            #[test]
            fn remove_and_submit(
                actions in prop::collection::vec(action_strategy(), 0..20),
                sku in sku_strategy(),
            ) {
                let cart = actions
                    .iter()
                    .fold(CartState::new(), |cart, action| cart.reduce(action).unwrap_or(cart));

                let removed = cart.reduce(&CartAction::remove(sku.clone())).unwrap();
                prop_assert!(removed.find(&sku).is_none());
                prop_assert_eq!(removed.len(), cart.len() - usize::from(cart.find(&sku).is_some()));

                let submitted = cart.reduce(&CartAction::submit()).unwrap();
                prop_assert!(submitted.is_empty());
                prop_assert_eq!(submitted.total_price(), "$0.00");
            }

            #[test]
            fn set_quantity_is_exact_or_not_found(
                actions in prop::collection::vec(action_strategy(), 0..20),
                sku in sku_strategy(),
                qty in -5i64..1_000,
            ) {
                let cart = actions
                    .iter()
                    .fold(CartState::new(), |cart, action| cart.reduce(action).unwrap_or(cart));

                match cart.reduce(&CartAction::set_quantity(sku.clone(), qty)) {
                    Ok(after) => prop_assert_eq!(after.find(&sku).map(|item| item.quantity), Some(qty)),
                    Err(err) => {
                        prop_assert!(cart.find(&sku).is_none());
                        prop_assert_eq!(err, CoreError::ItemNotFound { sku });
                    }
                }
            }
        }
    }
}
