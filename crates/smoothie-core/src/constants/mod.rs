// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Limits, storage keys, and built-in smoothie data for Smoothie Lab
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! Constants module
//!
//! Constants are grouped by domain: numeric limits, storage keys, and the
//! built-in ingredient data shipped with the application.

/// Built-in ingredient lists, recipe names, and measurement table
pub mod ingredients;

pub use ingredients::{
    DEFAULT_FRUITS, DEFAULT_LIQUIDS, DEFAULT_VEGGIES, FRUIT_MEASUREMENTS, LIQUID_MEASUREMENTS,
    RECIPE_NAMES, VEGGIE_MEASUREMENTS,
};

/// Numeric limits enforced by the domain models
pub mod limits {
    /// Largest per-category ingredient count a recipe may request
    pub const MAX_QUANTITY: u8 = 5;
    /// Smallest per-category ingredient count a recipe may request
    pub const MIN_QUANTITY: u8 = 0;
    /// Default number of fruits per recipe
    pub const DEFAULT_FRUIT_QUANTITY: u8 = 2;
    /// Default number of vegetables per recipe
    pub const DEFAULT_VEGGIE_QUANTITY: u8 = 1;
    /// Default number of liquids per recipe
    pub const DEFAULT_LIQUID_QUANTITY: u8 = 1;
    /// Maximum number of saved history entries; the oldest is evicted beyond this
    pub const MAX_HISTORY_ENTRIES: usize = 20;
    /// Highest star rating a history entry can carry
    pub const MAX_RATING: u8 = 5;
}

/// Keys of the persisted records
pub mod storage_keys {
    /// User-added ingredients, grouped by category
    pub const CUSTOM_INGREDIENTS: &str = "smoothieIngredients";
    /// Saved recipe history, most recent first
    pub const HISTORY: &str = "smoothieHistory";
}

/// Fallback measurements for ingredients missing from the lookup table
pub mod measurements {
    /// Default for fruits and vegetables
    pub const DEFAULT_SOLID: &str = "100g";
    /// Default for liquids
    pub const DEFAULT_LIQUID: &str = "200ml";
}

/// Timing defaults for the UI adapter
pub mod timing {
    /// Cosmetic delay before a requested recipe is shown
    pub const DEFAULT_GENERATION_DELAY_MS: u64 = 2_000;
    /// Time a notification stays visible before it is dismissed
    pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3_000;
}
