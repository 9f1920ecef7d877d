// ABOUTME: Random recipe generation from quantity settings and the ingredient store
// ABOUTME: Picks a name from a fixed pool and samples ingredients without replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! # Recipe Generator
//!
//! For each category the generator shuffles that category's ingredient list
//! and keeps the first `N`, where `N` is the configured quantity capped at the
//! list length. A recipe therefore never repeats an ingredient within a
//! category. The random source is injected so callers can seed it.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::constants::RECIPE_NAMES;
use crate::errors::{AppError, AppResult};
use crate::ingredients::IngredientStore;
use crate::measurements::measurement_for;
use crate::models::{CategoryMap, QuantitySettings, Recipe, RecipeIngredient};

/// Produces recipes from a pool of names
#[derive(Debug, Clone)]
pub struct RecipeGenerator {
    names: Vec<String>,
}

impl Default for RecipeGenerator {
    fn default() -> Self {
        Self {
            names: RECIPE_NAMES.iter().map(|&name| name.to_owned()).collect(),
        }
    }
}

impl RecipeGenerator {
    /// Generator drawing names from `names`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `names` is empty
    pub fn with_names(names: Vec<String>) -> AppResult<Self> {
        if names.is_empty() {
            return Err(AppError::invalid_input("recipe name pool must not be empty"));
        }
        Ok(Self { names })
    }

    /// Recipe names this generator draws from
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Generate a recipe stamped with the current time
    pub fn generate<R: Rng + ?Sized>(
        &self,
        settings: &QuantitySettings,
        store: &IngredientStore,
        rng: &mut R,
    ) -> Recipe {
        let name = self.pick_name(rng);
        let ingredients = CategoryMap::from_fn(|category| {
            let count = usize::from(settings.get(category));
            sample(store.list(category), count, rng)
                .into_iter()
                .map(|ingredient| {
                    let measurement = measurement_for(category, &ingredient);
                    RecipeIngredient::new(ingredient, measurement)
                })
                .collect()
        });

        let recipe = Recipe {
            name,
            ingredients,
            generated_at: Utc::now(),
        };
        info!(
            recipe = %recipe.name,
            ingredients = recipe.ingredient_count(),
            "Generated recipe"
        );
        recipe
    }

    fn pick_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.names.choose(rng).cloned().unwrap_or_default()
    }
}

/// Shuffle a copy of `pool` and keep the first `count` names
///
/// `count` larger than the pool yields the whole pool in shuffled order.
pub fn sample<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
