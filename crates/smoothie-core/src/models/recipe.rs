// ABOUTME: Generated recipe model with per-category ingredient selections
// ABOUTME: Each selected ingredient carries its display measurement string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryMap};

/// An ingredient selected into a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient display name
    pub name: String,
    /// Display measurement such as `100g` or `200ml`
    pub measurement: String,
}

impl RecipeIngredient {
    /// Create a recipe ingredient
    #[must_use]
    pub fn new(name: impl Into<String>, measurement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measurement: measurement.into(),
        }
    }
}

/// A generated smoothie recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Name drawn from the fixed recipe-name pool
    pub name: String,
    /// Selected ingredients per category, in selection order
    pub ingredients: CategoryMap<Vec<RecipeIngredient>>,
    /// When the recipe was generated
    pub generated_at: DateTime<Utc>,
}

impl Recipe {
    /// Every selected ingredient, fruits first, then veggies, then liquids
    pub fn all_ingredients(&self) -> impl Iterator<Item = (Category, &RecipeIngredient)> {
        self.ingredients
            .iter()
            .flat_map(|(category, items)| items.iter().map(move |item| (category, item)))
    }

    /// Total number of selected ingredients
    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.iter().map(|(_, items)| items.len()).sum()
    }
}
