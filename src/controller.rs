// ABOUTME: Command handlers for every user action, owning state, storage, and the RNG
// ABOUTME: Mutations persist the affected record and raise a user-facing notification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! # Application Controller
//!
//! The UI adapter never mutates [`AppState`] directly. Each action is one
//! method here that validates input, updates state, writes the affected
//! record, and queues a notification describing the outcome.
//!
//! Generation is two-phase: [`AppController::request_generation`] starts a
//! cancellable delay and [`AppController::wait_generation`] produces the
//! recipe from the state at the moment the delay elapses.
//! [`AppController::generate_now`] skips the delay.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::generation::{GenerationTimer, TimerOutcome};
use crate::generator::RecipeGenerator;
use crate::models::{Category, CategoryMap, HistoryEntry, Recipe};
use crate::notifications::{Notification, NotificationCenter};
use crate::persistence::Persistence;
use crate::state::AppState;

/// Owns the application state and handles user actions
pub struct AppController {
    state: AppState,
    persistence: Persistence,
    generator: RecipeGenerator,
    notifications: NotificationCenter,
    rng: StdRng,
    generation_delay: Duration,
    pending: Option<GenerationTimer>,
}

impl AppController {
    /// Load persisted state and build a controller with an entropy-seeded RNG
    #[must_use]
    pub fn new(persistence: Persistence, config: &AppConfig) -> Self {
        let state = persistence.load_state();
        info!(
            ingredients = state.ingredients.len(),
            history = state.history.len(),
            "Loaded application state"
        );
        Self {
            state,
            persistence,
            generator: RecipeGenerator::default(),
            notifications: NotificationCenter::new(config.notification_ttl),
            rng: StdRng::from_entropy(),
            generation_delay: config.generation_delay,
            pending: None,
        }
    }

    /// Replace the RNG with a seeded one for reproducible recipes
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the recipe-name pool
    #[must_use]
    pub fn with_generator(mut self, generator: RecipeGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Read-only view of the application state
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Add an ingredient and persist the custom list
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty or duplicate names, or a storage
    /// error if the list cannot be written. A failed write leaves the list
    /// unchanged.
    pub fn add_ingredient(&mut self, category: Category, name: &str) -> AppResult<String> {
        let previous = self.state.ingredients.clone();
        match self.state.ingredients.add(category, name) {
            Ok(added) => {
                if let Err(e) = self.persist_ingredients() {
                    self.state.ingredients = previous;
                    return Err(e);
                }
                self.notifications.success(format!(
                    "{added}を{}に追加しました！",
                    category.display_name()
                ));
                Ok(added)
            }
            Err(e) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    self.notifications.error("材料名を入力してください");
                } else {
                    self.notifications.error(format!(
                        "{trimmed}は既に{}に存在します！",
                        category.display_name()
                    ));
                }
                Err(e)
            }
        }
    }

    /// Remove an ingredient, clear its selection, and persist the custom list
    ///
    /// Removing a name that is not present is a no-op that returns `false`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the list cannot be written; the ingredient
    /// and its selection are then kept
    pub fn remove_ingredient(&mut self, category: Category, name: &str) -> AppResult<bool> {
        let previous = self.state.ingredients.clone();
        if !self.state.ingredients.remove(category, name) {
            debug!(category = %category, name, "Ignoring removal of unknown ingredient");
            return Ok(false);
        }
        if let Err(e) = self.persist_ingredients() {
            self.state.ingredients = previous;
            return Err(e);
        }
        self.state.selection.deselect(category, name);
        self.notifications.success(format!("{name}を削除しました"));
        Ok(true)
    }

    /// Flip the selection flag of an ingredient, returning the new state
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `category` does not hold `name`
    pub fn toggle_selection(&mut self, category: Category, name: &str) -> AppResult<bool> {
        if !self.state.ingredients.contains(category, name) {
            self.notifications.error(format!(
                "{name}は{}にありません",
                category.display_name()
            ));
            return Err(AppError::not_found(format!(
                "ingredient '{name}' in {category}"
            )));
        }
        let selected = self.state.selection.toggle(category, name);
        debug!(category = %category, name, selected, "Toggled selection");
        Ok(selected)
    }

    /// Set a category's quantity, returning the clamped value
    pub fn set_quantity(&mut self, category: Category, value: i64) -> u8 {
        let stored = self.state.quantities.set(category, value);
        debug!(category = %category, requested = value, stored, "Set quantity");
        stored
    }

    /// Set a category's quantity from raw text; non-numeric input counts as 0
    pub fn set_quantity_from_input(&mut self, category: Category, raw: &str) -> u8 {
        let stored = self.state.quantities.parse_and_set(category, raw);
        debug!(category = %category, raw, stored, "Set quantity from input");
        stored
    }

    /// Step a category's quantity by `delta`, returning the clamped value
    pub fn adjust_quantity(&mut self, category: Category, delta: i64) -> u8 {
        let stored = self.state.quantities.adjust(category, delta);
        debug!(category = %category, delta, stored, "Adjusted quantity");
        stored
    }

    /// Ingredients whose names contain `term`, ignoring case
    #[must_use]
    pub fn filter_ingredients(&self, term: &str) -> CategoryMap<Vec<&str>> {
        self.state.ingredients.filter(term)
    }

    /// Generate a recipe immediately and make it current
    pub fn generate_now(&mut self) -> &Recipe {
        let recipe =
            self.generator
                .generate(&self.state.quantities, &self.state.ingredients, &mut self.rng);
        self.notifications.success("レシピが正常に生成されました！");
        self.state.current_recipe.insert(recipe)
    }

    /// Start the generation delay
    ///
    /// Must be called from inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` if a generation is already pending
    pub fn request_generation(&mut self) -> AppResult<()> {
        if self.pending.is_some() {
            self.notifications.error("レシピを生成中です");
            return Err(AppError::generation_in_progress());
        }
        debug!(delay_ms = self.generation_delay.as_millis(), "Generation requested");
        self.pending = Some(GenerationTimer::start(self.generation_delay));
        Ok(())
    }

    /// Abort a pending generation; returns whether one was pending
    pub fn cancel_generation(&mut self) -> bool {
        match self.pending.take() {
            Some(mut timer) => {
                timer.cancel();
                self.notifications.info("レシピ生成をキャンセルしました");
                info!("Generation cancelled");
                true
            }
            None => false,
        }
    }

    /// Whether a generation delay is pending
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the pending delay and generate the recipe
    ///
    /// Returns `None` when nothing is pending or the timer was cancelled.
    /// Cancel-safe: dropping the future keeps the generation pending.
    pub async fn wait_generation(&mut self) -> Option<Recipe> {
        let outcome = self.pending.as_mut()?.wait().await;
        self.pending = None;
        match outcome {
            TimerOutcome::Elapsed => Some(self.generate_now().clone()),
            TimerOutcome::Cancelled => None,
        }
    }

    /// Save the current recipe to history with an optional rating
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has been generated, or a
    /// storage error if history cannot be written. A failed write leaves
    /// history unchanged.
    pub fn save_current(&mut self, rating: Option<u8>) -> AppResult<&HistoryEntry> {
        let Some(recipe) = self.state.current_recipe.clone() else {
            self.notifications.error("保存するレシピがありません");
            return Err(AppError::no_current_recipe());
        };
        let previous = self.state.history.clone();
        self.state.history.save(recipe, rating);
        if let Err(e) = self.persist_history() {
            self.state.history = previous;
            return Err(e);
        }
        self.notifications.success("レシピを履歴に保存しました！");
        self.state.history.load(0)
    }

    /// Make a saved recipe current again
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `index` is out of range
    pub fn restore_from_history(&mut self, index: usize) -> AppResult<&Recipe> {
        let recipe = match self.state.history.load(index) {
            Ok(entry) => entry.recipe.clone(),
            Err(e) => {
                self.notifications.error("履歴が見つかりません");
                return Err(e);
            }
        };
        debug!(index, recipe = %recipe.name, "Restored recipe from history");
        Ok(&*self.state.current_recipe.insert(recipe))
    }

    /// Set or clear the rating of a saved recipe and persist history
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `index` is out of range, or a storage
    /// error if history cannot be written, in which case the previous rating
    /// is kept
    pub fn rate_history(&mut self, index: usize, rating: Option<u8>) -> AppResult<Option<u8>> {
        let previous = self.state.history.clone();
        let stored = match self.state.history.rate(index, rating) {
            Ok(entry) => entry.rating,
            Err(e) => {
                self.notifications.error("履歴が見つかりません");
                return Err(e);
            }
        };
        if let Err(e) = self.persist_history() {
            self.state.history = previous;
            return Err(e);
        }
        Ok(stored)
    }

    /// The recipe last generated or restored
    #[must_use]
    pub const fn current_recipe(&self) -> Option<&Recipe> {
        self.state.current_recipe.as_ref()
    }

    /// Take every unexpired notification
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    fn persist_ingredients(&mut self) -> AppResult<()> {
        self.persistence
            .save_ingredients(&self.state.ingredients)
            .inspect_err(|e| {
                error!(error = %e, "Failed to persist ingredients");
                self.notifications.error("材料の保存に失敗しました");
            })
    }

    fn persist_history(&mut self) -> AppResult<()> {
        self.persistence
            .save_history(&self.state.history)
            .inspect_err(|e| {
                error!(error = %e, "Failed to persist history");
                self.notifications.error("履歴の保存に失敗しました");
            })
    }
}
