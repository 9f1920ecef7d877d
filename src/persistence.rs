// ABOUTME: Explicit load/save boundary between application state and key-value storage
// ABOUTME: Malformed records are logged and replaced by defaults instead of failing startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! # Persistence
//!
//! Two independent records are kept:
//!
//! - `smoothieIngredients`: user-added ingredients per category
//! - `smoothieHistory`: saved recipes, newest first
//!
//! Every write replaces the whole record. Nothing else in the crate talks to
//! a [`KeyValueStore`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::constants::storage_keys::{CUSTOM_INGREDIENTS, HISTORY};
use crate::errors::AppResult;
use crate::history::HistoryStore;
use crate::ingredients::IngredientStore;
use crate::models::{CategoryMap, HistoryEntry};
use crate::state::AppState;
use crate::storage::KeyValueStore;

/// Reads and writes the persisted records
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
}

impl Persistence {
    /// Persistence over `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Built-in ingredients merged with any persisted custom entries
    #[must_use]
    pub fn load_ingredients(&self) -> IngredientStore {
        let mut ingredients = IngredientStore::with_defaults();
        if let Some(custom) = self.read_record::<CategoryMap<Vec<String>>>(CUSTOM_INGREDIENTS) {
            let merged = ingredients.merge_custom(custom);
            debug!(merged, "Loaded custom ingredients");
        }
        ingredients
    }

    /// Persist the non-default part of `ingredients`
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written
    pub fn save_ingredients(&self, ingredients: &IngredientStore) -> AppResult<()> {
        self.write_record(CUSTOM_INGREDIENTS, &ingredients.custom_entries())
    }

    /// Persisted history, or an empty one
    #[must_use]
    pub fn load_history(&self) -> HistoryStore {
        self.read_record::<Vec<HistoryEntry>>(HISTORY)
            .map_or_else(HistoryStore::default, HistoryStore::from_entries)
    }

    /// Persist every history entry
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written
    pub fn save_history(&self, history: &HistoryStore) -> AppResult<()> {
        self.write_record(HISTORY, history.entries())
    }

    /// Startup state: persisted ingredients and history, defaults for the rest
    #[must_use]
    pub fn load_state(&self) -> AppState {
        AppState::new(self.load_ingredients(), self.load_history())
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read persisted record, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed persisted record");
                None
            }
        }
    }

    fn write_record<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)?;
        info!(key, bytes = json.len(), "Persisted record");
        Ok(())
    }
}
