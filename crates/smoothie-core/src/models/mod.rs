// ABOUTME: Core data models for the Smoothie Lab recipe generator
// ABOUTME: Re-exports Category, CategoryMap, Recipe, HistoryEntry, and QuantitySettings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! # Data Models
//!
//! - `Category`: the closed set of ingredient groups (fruits, veggies, liquids)
//! - `CategoryMap`: one value per category for lists, counts, and selections
//! - `Recipe` / `RecipeIngredient`: a generated recipe with measurements
//! - `HistoryEntry`: a saved recipe with an optional star rating
//! - `QuantitySettings`: clamped per-category ingredient counts

mod category;
mod history;
mod quantity;
mod recipe;

pub use category::{Category, CategoryMap};
pub use history::HistoryEntry;
pub use quantity::QuantitySettings;
pub use recipe::{Recipe, RecipeIngredient};
