//! # SKU Sort Keys
//!
//! Catalog skus end in a four digit sequence number (`item0001`,
//! `item0002`, ...). The cart is displayed in that numeric order, not in the
//! order items were added.
//!
//! ```text
//!   "item0042"  ──► Some(42)
//!   "SKU-1234"  ──► Some(1234)
//!   "widget"    ──► None
//!   "item42"    ──► None      (fewer than four trailing digits)
//! ```
//!
//! Skus without a key sort after every sku that has one. Equal keys are left
//! in their existing relative order by the (stable) display sort.

use std::cmp::Ordering;

/// Number of trailing characters that form the sort key.
pub const SORT_KEY_DIGITS: usize = 4;

/// Extracts the numeric sort key from the last four characters of a sku.
pub fn sort_key(sku: &str) -> Option<u32> {
    let bytes = sku.as_bytes();
    if bytes.len() < SORT_KEY_DIGITS {
        return None;
    }

    let tail = &bytes[bytes.len() - SORT_KEY_DIGITS..];
    if !tail.iter().all(u8::is_ascii_digit) {
        return None;
    }

    Some(
        tail.iter()
            .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0')),
    )
}

/// Display ordering between two skus.
pub fn compare_skus(a: &str, b: &str) -> Ordering {
    match (sort_key(a), sort_key(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
