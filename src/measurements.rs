// ABOUTME: Static measurement lookup keyed by ingredient category and exact name
// ABOUTME: Unknown ingredients fall back to a per-category default amount
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::constants::measurements::{DEFAULT_LIQUID, DEFAULT_SOLID};
use crate::constants::{FRUIT_MEASUREMENTS, LIQUID_MEASUREMENTS, VEGGIE_MEASUREMENTS};
use crate::models::Category;

static MEASUREMENTS: LazyLock<HashMap<(Category, &'static str), &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        for (category, table) in [
            (Category::Fruits, FRUIT_MEASUREMENTS),
            (Category::Veggies, VEGGIE_MEASUREMENTS),
            (Category::Liquids, LIQUID_MEASUREMENTS),
        ] {
            for &(name, amount) in table {
                m.insert((category, name), amount);
            }
        }
        m
    });

/// Measurement listed for `name` in `category`, if the table has one
#[must_use]
pub fn lookup(category: Category, name: &str) -> Option<&'static str> {
    MEASUREMENTS.get(&(category, name)).copied()
}

/// Amount used when an ingredient is not in the table
#[must_use]
pub const fn default_measurement(category: Category) -> &'static str {
    if category.is_liquid() {
        DEFAULT_LIQUID
    } else {
        DEFAULT_SOLID
    }
}

/// Display measurement for an ingredient, never empty
#[must_use]
pub fn measurement_for(category: Category, name: &str) -> &'static str {
    lookup(category, name).unwrap_or_else(|| default_measurement(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_measurements() {
        assert_eq!(measurement_for(Category::Fruits, "バナナ"), "100g");
        assert_eq!(measurement_for(Category::Veggies, "しょうが"), "10g");
        assert_eq!(measurement_for(Category::Liquids, "ヨーグルト"), "150ml");
    }

    #[test]
    fn test_lookup_is_category_scoped() {
        assert_eq!(lookup(Category::Liquids, "バナナ"), None);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(measurement_for(Category::Fruits, "ドラゴンフルーツ"), "100g");
        assert_eq!(measurement_for(Category::Veggies, "アボカド"), "100g");
        assert_eq!(measurement_for(Category::Liquids, "ライスミルク"), "200ml");
    }
}
