//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, and the
//! `CurrencyFormat` used to turn it into a display string.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    999 cents * 3 = 2997 cents = $29.97                                  │
//! │                                                                         │
//! │  Catalog prices, line totals and the cart total are all cents.          │
//! │  Only `CurrencyFormat::format` turns cents into "$29.97".               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! let price = Money::from_cents(999); // $9.99
//! let line_total = price * 5;         // $49.95
//! assert_eq!(line_total.to_string(), "$49.95");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: a cart total can go negative when a quantity is set
///   below zero, and that must still format correctly
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare integer
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──► LineItem.unit_price_cents ──► LineItem::line_total
///                                                              │
///                              totals::total_price ◄───────────┘
///                                      │
///                                      ▼
///                          CurrencyFormat::format ──► "$49.95"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(1999); // Represents $19.99
    /// assert_eq!(price.cents(), 1999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(999); // $9.99
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 1998); // $19.98
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Adds two amounts, or `None` if the sum does not fit in an `i64`.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies by a quantity, or `None` on overflow.
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(999).checked_mul(5), Some(Money::from_cents(4995)));
    /// assert_eq!(Money::from_cents(999).checked_mul(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_mul(self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Converts a decimal dollar amount to cents, rounding to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and amounts outside the `i64`
    /// cent range.
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(9.99), Some(Money::from_cents(999)));
    /// assert_eq!(Money::from_dollars(f64::NAN), None);
    /// ```
    pub fn from_dollars(dollars: f64) -> Option<Money> {
        let cents = (dollars * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
            Some(Money(cents as i64))
        } else {
            None
        }
    }

    /// The amount as a decimal dollar number, for the JSON boundary.
    pub fn to_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Dollar Serialization
// =============================================================================

/// Serde adapter that puts a `Money` on the wire as a dollar number
/// (`9.99`) instead of integer cents.
///
/// Use with `#[serde(with = "crate::money::serde_dollars")]`.
pub mod serde_dollars {
    use super::Money;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_dollars())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Money::from_dollars(dollars)
            .ok_or_else(|| D::Error::custom(format!("price {dollars} is not a representable amount")))
    }

    /// Same as the parent module, for `Option<Money>`.
    pub mod option {
        use super::Money;
        use serde::de::Error;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            money: &Option<Money>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match money {
                Some(money) => serializer.serialize_some(&money.to_dollars()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Money>, D::Error> {
            match Option::<f64>::deserialize(deserializer)? {
                Some(dollars) => Money::from_dollars(dollars).map(Some).ok_or_else(|| {
                    D::Error::custom(format!("price {dollars} is not a representable amount"))
                }),
                None => Ok(None),
            }
        }
    }
}

// =============================================================================
// Currency Format
// =============================================================================

/// How a `Money` value is rendered for display.
///
/// The default is US-dollar style: `$` prefix, `,` between thousands,
/// `.` before the two decimal places, and a leading `-` for negatives.
///
/// ```text
///   123456789 cents ──► "$1,234,567.89"
///        -550 cents ──► "-$5.50"
///           0 cents ──► "$0.00"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CurrencyFormat {
    /// ISO 4217 currency code (informational)
    pub code: String,

    /// Symbol placed before the amount
    pub symbol: String,

    /// Separator between groups of three integer digits
    pub thousands_separator: String,

    /// Separator between the integer and the two decimal digits
    pub decimal_separator: String,
}

impl CurrencyFormat {
    /// US-dollar formatting (`$1,234.50`).
    pub fn usd() -> Self {
        CurrencyFormat {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }

    /// Formats a money value according to this format.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::{CurrencyFormat, Money};
    ///
    /// let usd = CurrencyFormat::usd();
    /// assert_eq!(usd.format(Money::from_cents(123450)), "$1,234.50");
    /// ```
    pub fn format(&self, money: Money) -> String {
        let sign = if money.is_negative() { "-" } else { "" };
        let abs = money.cents().unsigned_abs();
        let whole = (abs / 100).to_string();
        let minor = abs % 100;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(digit);
        }

        format!(
            "{}{}{}{}{:02}",
            sign, self.symbol, grouped, self.decimal_separator, minor
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::usd()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders US-dollar style via `CurrencyFormat::usd`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CurrencyFormat::usd().format(*self))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
