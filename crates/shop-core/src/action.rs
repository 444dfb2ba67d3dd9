//! # Cart Actions
//!
//! Everything that can be dispatched into a cart.
//!
//! ## Two Shapes, One Meaning
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  RawAction (boundary)                 CartAction (typed)                │
//! │  ─────────────────────                ──────────────────                │
//! │  { type: "ADD",                        Add { sku, name, price }         │
//! │    payload?: { sku?, name?,     ───►   Remove { sku }                   │
//! │                price?, qty? } }        SetQuantity { sku, qty }         │
//! │                                        Submit                           │
//! │         │                                                               │
//! │         └── TryFrom fails with:                                         │
//! │             • UnknownAction  (tag not ADD/REMOVE/QUANTITY/SUBMIT)       │
//! │             • InvalidAction  (payload or a required field missing)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In-process callers build `CartAction` directly, so the only way a typed
//! dispatch can fail is a quantity update on an absent sku. `RawAction`
//! exists for callers that still speak the tag + optional payload dialect
//! (JSON from a UI layer, scripted flows).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, Product};

// =============================================================================
// Action Kind
// =============================================================================

/// The tag of an action, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ActionKind {
    #[serde(rename = "ADD")]
    Add,
    #[serde(rename = "REMOVE")]
    Remove,
    #[serde(rename = "QUANTITY")]
    SetQuantity,
    #[serde(rename = "SUBMIT")]
    Submit,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Add,
        ActionKind::Remove,
        ActionKind::SetQuantity,
        ActionKind::Submit,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Add => "ADD",
            ActionKind::Remove => "REMOVE",
            ActionKind::SetQuantity => "QUANTITY",
            ActionKind::Submit => "SUBMIT",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags are matched exactly; `add` or `REMOTE` are unknown.
impl FromStr for ActionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownAction(s.to_string()))
    }
}

// =============================================================================
// Typed Action
// =============================================================================

/// A cart transition request.
///
/// Each variant carries exactly the fields its transition reads.
///
/// ## Example
/// ```rust
/// use shop_core::{CartAction, Money};
///
/// let add = CartAction::add("item0001", "Widget", Money::from_cents(999));
/// let json = serde_json::to_string(&CartAction::submit()).unwrap();
/// assert_eq!(json, r#"{"type":"SUBMIT"}"#);
/// # let _ = add;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload")]
#[ts(export)]
pub enum CartAction {
    /// Insert at quantity 1, or bump an existing line by one.
    #[serde(rename = "ADD")]
    Add {
        sku: String,
        name: String,
        /// Dollars on the wire (`9.99`), cents in memory.
        #[serde(with = "crate::money::serde_dollars")]
        #[ts(type = "number")]
        price: Money,
    },

    /// Drop the line for `sku`, if any.
    #[serde(rename = "REMOVE")]
    Remove { sku: String },

    /// Overwrite the quantity of an existing line.
    #[serde(rename = "QUANTITY")]
    SetQuantity { sku: String, qty: i64 },

    /// Checkout: empty the cart.
    #[serde(rename = "SUBMIT")]
    Submit,
}

impl CartAction {
    pub fn add(sku: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        CartAction::Add {
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }

    /// Builds the ADD a product tile dispatches when clicked.
    pub fn add_product(product: &Product) -> Self {
        CartAction::add(product.sku.clone(), product.name.clone(), product.price())
    }

    pub fn remove(sku: impl Into<String>) -> Self {
        CartAction::Remove { sku: sku.into() }
    }

    pub fn set_quantity(sku: impl Into<String>, qty: i64) -> Self {
        CartAction::SetQuantity {
            sku: sku.into(),
            qty,
        }
    }

    pub fn submit() -> Self {
        CartAction::Submit
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            CartAction::Add { .. } => ActionKind::Add,
            CartAction::Remove { .. } => ActionKind::Remove,
            CartAction::SetQuantity { .. } => ActionKind::SetQuantity,
            CartAction::Submit => ActionKind::Submit,
        }
    }

    /// The sku this action targets, if it targets one.
    pub fn sku(&self) -> Option<&str> {
        match self {
            CartAction::Add { sku, .. }
            | CartAction::Remove { sku }
            | CartAction::SetQuantity { sku, .. } => Some(sku),
            CartAction::Submit => None,
        }
    }
}

// =============================================================================
// Raw Action
// =============================================================================

/// Line-item shaped payload where every field is optional.
///
/// `price` is a dollar number such as `9.99`; it is rounded to the nearest
/// cent when the payload is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ActionPayload {
    pub sku: Option<String>,
    pub name: Option<String>,
    #[serde(with = "crate::money::serde_dollars::option")]
    #[ts(type = "number | null")]
    pub price: Option<Money>,
    pub qty: Option<i64>,
}

impl From<&LineItem> for ActionPayload {
    fn from(item: &LineItem) -> Self {
        ActionPayload {
            sku: Some(item.sku.clone()),
            name: Some(item.name.clone()),
            price: Some(item.unit_price()),
            qty: Some(item.quantity),
        }
    }
}

/// A string-tagged action with an optional payload.
///
/// ## Example
/// ```rust
/// use shop_core::{CartAction, RawAction};
///
/// let raw: RawAction = serde_json::from_str(
///     r#"{"type":"QUANTITY","payload":{"sku":"item0001","qty":5}}"#,
/// ).unwrap();
/// assert_eq!(
///     CartAction::try_from(raw).unwrap(),
///     CartAction::set_quantity("item0001", 5),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub payload: Option<ActionPayload>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>, payload: Option<ActionPayload>) -> Self {
        RawAction {
            kind: kind.into(),
            payload,
        }
    }
}

fn require<T>(value: Option<T>, action: ActionKind, field: &'static str) -> CoreResult<T> {
    value.ok_or(CoreError::InvalidAction { action, field })
}

impl TryFrom<RawAction> for CartAction {
    type Error = CoreError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let kind: ActionKind = raw.kind.parse()?;

        if kind == ActionKind::Submit {
            return Ok(CartAction::Submit);
        }

        let payload = require(raw.payload, kind, "payload")?;
        let sku = require(payload.sku, kind, "sku")?;

        let action = match kind {
            ActionKind::Add => CartAction::Add {
                sku,
                name: require(payload.name, kind, "name")?,
                price: require(payload.price, kind, "price")?,
            },
            ActionKind::Remove => CartAction::Remove { sku },
            ActionKind::SetQuantity => CartAction::SetQuantity {
                sku,
                qty: require(payload.qty, kind, "qty")?,
            },
            ActionKind::Submit => CartAction::Submit,
        };

        Ok(action)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_payload() -> ActionPayload {
        ActionPayload {
            sku: Some("item0001".to_string()),
            name: Some("Widget".to_string()),
            price: Some(Money::from_cents(999)),
            qty: None,
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("ADD".parse::<ActionKind>().unwrap(), ActionKind::Add);
        assert_eq!("REMOVE".parse::<ActionKind>().unwrap(), ActionKind::Remove);
        assert_eq!(
            "QUANTITY".parse::<ActionKind>().unwrap(),
            ActionKind::SetQuantity
        );
        assert_eq!("SUBMIT".parse::<ActionKind>().unwrap(), ActionKind::Submit);

        for tag in ["add", "REMOTE", "SET_QUANTITY", ""] {
            assert_eq!(
                tag.parse::<ActionKind>(),
                Err(CoreError::UnknownAction(tag.to_string()))
            );
        }
    }

    #[test]
    fn test_raw_add() {
        let raw = RawAction::new("ADD", Some(widget_payload()));
        assert_eq!(
            CartAction::try_from(raw).unwrap(),
            CartAction::add("item0001", "Widget", Money::from_cents(999))
        );
    }

    #[test]
    fn test_raw_missing_payload() {
        for kind in [ActionKind::Add, ActionKind::Remove, ActionKind::SetQuantity] {
            let err = CartAction::try_from(RawAction::new(kind.as_str(), None)).unwrap_err();
            assert_eq!(
                err,
                CoreError::InvalidAction {
                    action: kind,
                    field: "payload"
                }
            );
        }
    }

    #[test]
    fn test_raw_missing_fields() {
        let mut payload = widget_payload();
        payload.price = None;
        let err = CartAction::try_from(RawAction::new("ADD", Some(payload))).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidAction {
                action: ActionKind::Add,
                field: "price"
            }
        );

        let err = CartAction::try_from(RawAction::new("QUANTITY", Some(widget_payload())))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidAction {
                action: ActionKind::SetQuantity,
                field: "qty"
            }
        );

        let err = CartAction::try_from(RawAction::new("REMOVE", Some(ActionPayload::default())))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidAction {
                action: ActionKind::Remove,
                field: "sku"
            }
        );
    }

    #[test]
    fn test_raw_remove_only_needs_sku() {
        let payload = ActionPayload {
            sku: Some("item0002".to_string()),
            ..Default::default()
        };
        assert_eq!(
            CartAction::try_from(RawAction::new("REMOVE", Some(payload))).unwrap(),
            CartAction::remove("item0002")
        );
    }

    #[test]
    fn test_raw_submit_ignores_payload() {
        assert_eq!(
            CartAction::try_from(RawAction::new("SUBMIT", None)).unwrap(),
            CartAction::Submit
        );
        assert_eq!(
            CartAction::try_from(RawAction::new("SUBMIT", Some(widget_payload()))).unwrap(),
            CartAction::Submit
        );
    }

    #[test]
    fn test_raw_unknown_tag_wins_over_missing_payload() {
        let err = CartAction::try_from(RawAction::new("CHECKOUT", None)).unwrap_err();
        assert_eq!(err, CoreError::UnknownAction("CHECKOUT".to_string()));
    }

    #[test]
    fn test_typed_json_shape() {
        let json = serde_json::to_value(CartAction::set_quantity("item0001", 5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "QUANTITY", "payload": { "sku": "item0001", "qty": 5 } })
        );

        let action: CartAction = serde_json::from_value(serde_json::json!({
            "type": "ADD",
            "payload": { "sku": "item0003", "name": "Deluxe Widget", "price": 29.99 }
        }))
        .unwrap();
        assert_eq!(
            action,
            CartAction::add("item0003", "Deluxe Widget", Money::from_cents(2999))
        );
    }

    #[test]
    fn test_raw_json_price_is_dollars() {
        let raw: RawAction = serde_json::from_str(
            r#"{"type":"ADD","payload":{"sku":"item0001","name":"Widget","price":9.99}}"#,
        )
        .unwrap();
        assert_eq!(
            CartAction::try_from(raw).unwrap(),
            CartAction::add("item0001", "Widget", Money::from_cents(999))
        );

        let raw: RawAction =
            serde_json::from_str(r#"{"type":"REMOVE","payload":{"sku":"item0001","price":null}}"#)
                .unwrap();
        assert_eq!(raw.payload.unwrap().price, None);

        assert!(serde_json::from_str::<RawAction>(
            r#"{"type":"ADD","payload":{"sku":"item0001","name":"Widget","price":"9.99"}}"#
        )
        .is_err());
    }

    #[test]
    fn test_typed_add_serializes_dollars() {
        let json = serde_json::to_value(CartAction::add("item0001", "Widget", Money::from_cents(999)))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "ADD",
                "payload": { "sku": "item0001", "name": "Widget", "price": 9.99 }
            })
        );
    }

    #[test]
    fn test_payload_from_line_item() {
        let item = LineItem::new("item0001", "Widget", Money::from_cents(999), 4);
        let payload = ActionPayload::from(&item);
        assert_eq!(payload.qty, Some(4));
        assert_eq!(payload.price, Some(Money::from_cents(999)));
    }

    #[test]
    fn test_action_accessors() {
        let add = CartAction::add_product(&Product::new("item0002", "Premium Widget", 1999));
        assert_eq!(add.kind(), ActionKind::Add);
        assert_eq!(add.sku(), Some("item0002"));
        assert_eq!(CartAction::submit().sku(), None);
    }
}
