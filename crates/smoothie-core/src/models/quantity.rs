// ABOUTME: Per-category ingredient counts used by the recipe generator
// ABOUTME: Every write is clamped to the allowed range instead of being rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryMap};
use crate::constants::limits::{
    DEFAULT_FRUIT_QUANTITY, DEFAULT_LIQUID_QUANTITY, DEFAULT_VEGGIE_QUANTITY, MAX_QUANTITY,
    MIN_QUANTITY,
};

/// How many ingredients of each category go into a generated recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantitySettings {
    counts: CategoryMap<u8>,
}

impl Default for QuantitySettings {
    fn default() -> Self {
        Self {
            counts: CategoryMap {
                fruits: DEFAULT_FRUIT_QUANTITY,
                veggies: DEFAULT_VEGGIE_QUANTITY,
                liquids: DEFAULT_LIQUID_QUANTITY,
            },
        }
    }
}

impl QuantitySettings {
    /// Clamp an arbitrary integer into `[MIN_QUANTITY, MAX_QUANTITY]`
    #[must_use]
    pub fn clamp(value: i64) -> u8 {
        // Bounded to 0..=5 before narrowing
        value.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY)) as u8
    }

    /// Current count for `category`
    #[must_use]
    pub const fn get(&self, category: Category) -> u8 {
        *self.counts.get(category)
    }

    /// Set the count for `category`, returning the clamped value that was stored
    pub fn set(&mut self, category: Category, value: i64) -> u8 {
        let clamped = Self::clamp(value);
        *self.counts.get_mut(category) = clamped;
        clamped
    }

    /// Add `delta` to the count for `category`, returning the clamped result
    pub fn adjust(&mut self, category: Category, delta: i64) -> u8 {
        let current = i64::from(self.get(category));
        self.set(category, current.saturating_add(delta))
    }

    /// Set from raw text input
    ///
    /// Reads the leading integer the way a form field does: `"3.5"` is 3,
    /// `"4abc"` is 4, and text without a leading number counts as 0.
    pub fn parse_and_set(&mut self, category: Category, raw: &str) -> u8 {
        self.set(category, leading_integer(raw).unwrap_or(0))
    }

    /// All counts keyed by category
    #[must_use]
    pub const fn counts(&self) -> &CategoryMap<u8> {
        &self.counts
    }
}

/// Integer prefix of `raw` after leading whitespace and an optional sign
///
/// A `0x` prefix switches to hexadecimal. Values too large for `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, body) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let digits_len = body
        .char_indices()
        .find(|&(_, c)| !c.is_digit(radix))
        .map_or(body.len(), |(index, _)| index);
    if digits_len == 0 {
        return None;
    }
    let digits = &body[..digits_len];
    let value = i64::from_str_radix(digits, radix).unwrap_or(i64::MAX);
    Some(if negative { value.saturating_neg() } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = QuantitySettings::default();
        assert_eq!(settings.get(Category::Fruits), 2);
        assert_eq!(settings.get(Category::Veggies), 1);
        assert_eq!(settings.get(Category::Liquids), 1);
    }

    #[test]
    fn test_set_clamps_to_bounds() {
        let mut settings = QuantitySettings::default();
        assert_eq!(settings.set(Category::Fruits, -1), 0);
        assert_eq!(settings.set(Category::Fruits, 6), 5);
        assert_eq!(settings.set(Category::Fruits, 3), 3);
    }

    #[test]
    fn test_adjust_stays_in_range() {
        let mut settings = QuantitySettings::default();
        assert_eq!(settings.adjust(Category::Veggies, -1), 0);
        assert_eq!(settings.adjust(Category::Veggies, -1), 0);
        for _ in 0..10 {
            settings.adjust(Category::Liquids, 1);
        }
        assert_eq!(settings.get(Category::Liquids), 5);
    }

    #[test]
    fn test_parse_and_set_treats_garbage_as_zero() {
        let mut settings = QuantitySettings::default();
        assert_eq!(settings.parse_and_set(Category::Fruits, "abc"), 0);
        assert_eq!(settings.parse_and_set(Category::Fruits, " 4 "), 4);
        assert_eq!(settings.parse_and_set(Category::Fruits, "99"), 5);
    }

    #[test]
    fn test_parse_and_set_reads_leading_integer() {
        let mut settings = QuantitySettings::default();
        assert_eq!(settings.parse_and_set(Category::Fruits, "3.5"), 3);
        assert_eq!(settings.parse_and_set(Category::Fruits, "4abc"), 4);
        assert_eq!(settings.parse_and_set(Category::Fruits, "  +2 items"), 2);
        assert_eq!(settings.parse_and_set(Category::Fruits, "-3"), 0);
        assert_eq!(settings.parse_and_set(Category::Fruits, "0x3"), 3);
        assert_eq!(settings.parse_and_set(Category::Fruits, "x3"), 0);
        assert_eq!(settings.parse_and_set(Category::Fruits, "-"), 0);
        assert_eq!(
            settings.parse_and_set(Category::Fruits, "99999999999999999999999"),
            5
        );
    }
}
