// ABOUTME: In-memory application state owned by the controller
// ABOUTME: Groups ingredients, selection, quantities, history, and the current recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use crate::history::HistoryStore;
use crate::ingredients::{IngredientStore, SelectionState};
use crate::models::{QuantitySettings, Recipe};

/// Everything the user can see and change during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Default plus user-added ingredients
    pub ingredients: IngredientStore,
    /// Ingredients the user has toggled on
    pub selection: SelectionState,
    /// Ingredient counts per category
    pub quantities: QuantitySettings,
    /// Saved recipes
    pub history: HistoryStore,
    /// Most recently generated or restored recipe
    pub current_recipe: Option<Recipe>,
}

impl AppState {
    /// State built from loaded ingredients and history with default everything else
    #[must_use]
    pub fn new(ingredients: IngredientStore, history: HistoryStore) -> Self {
        Self {
            ingredients,
            history,
            ..Self::default()
        }
    }
}
