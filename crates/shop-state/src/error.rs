//! # State Error Types
//!
//! Errors surfaced by the store layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StateError                                                             │
//! │  ├── Core             - rejected cart transition (from shop-core)       │
//! │  ├── MalformedAction  - dispatch_json input is not an action            │
//! │  ├── InvalidConfig    - config values that cannot be used               │
//! │  └── ConfigLoadFailed - config file unreadable or not valid TOML        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shop_core::CoreError;
use thiserror::Error;

/// Result type alias for store-layer operations.
pub type StateResult<T> = Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    /// The cart rejected a transition; the cart is unchanged.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON handed to `dispatch_json` did not parse as an action.
    #[error("Malformed action: {0}")]
    MalformedAction(#[from] serde_json::Error),

    /// Invalid shop configuration.
    #[error("Invalid shop configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),
}

impl From<std::io::Error> for StateError {
    fn from(err: std::io::Error) -> Self {
        StateError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StateError {
    fn from(err: toml::de::Error) -> Self {
        StateError::ConfigLoadFailed(err.to_string())
    }
}

impl StateError {
    /// Returns the underlying cart error, if this is one.
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            StateError::Core(err) => Some(err),
            _ => None,
        }
    }
}
