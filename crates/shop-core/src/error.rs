//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── CoreError        - Rejected cart transitions                      │
//! │  └── ValidationError  - Malformed products / catalog entries           │
//! │                                                                         │
//! │  shop-state errors (separate crate)                                    │
//! │  └── StateError       - Config loading + wrapped CoreError             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StateError → UI                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `CoreError` returned from a transition means the transition did not
//! happen: the cart state the caller holds is exactly what it was before.

use thiserror::Error;

use crate::action::ActionKind;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A raw action is missing its payload or a required payload field.
    ///
    /// ## When This Occurs
    /// - `ADD` without a payload, or with no `sku` / `name` / `price`
    /// - `REMOVE` without a payload or `sku`
    /// - `QUANTITY` without a payload, `sku` or `qty`
    #[error("{field} missing in {action} action")]
    InvalidAction {
        action: ActionKind,
        field: &'static str,
    },

    /// A quantity update targeted a sku that is not in the cart.
    #[error("Item {sku} must exist in order to update quantity")]
    ItemNotFound { sku: String },

    /// The transition would push a quantity, a line total or a cart total
    /// past what an `i64` can hold.
    #[error("Quantity for {sku} is too large for the cart totals")]
    QuantityOverflow { sku: String },

    /// A raw action carried a tag that is not one of the known actions.
    #[error("Unidentified cart action type: {0}")]
    UnknownAction(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when building a catalog from products that break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate SKU).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
