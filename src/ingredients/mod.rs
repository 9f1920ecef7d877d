// ABOUTME: Ingredient store holding the default and user-added names per category
// ABOUTME: Enforces trimmed, non-empty, unique names and exposes the persisted custom subset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! # Ingredient Store
//!
//! Each category is an ordered list: the built-in defaults first, then any
//! names the user added. Defaults are fixed when the store is created and are
//! never written to storage; [`IngredientStore::custom_entries`] returns the
//! part that is.

/// Cosmetic per-ingredient selection flags
pub mod selection;

pub use selection::SelectionState;

use tracing::debug;

use crate::constants::{DEFAULT_FRUITS, DEFAULT_LIQUIDS, DEFAULT_VEGGIES};
use crate::errors::{AppError, AppResult};
use crate::models::{Category, CategoryMap};

/// Ordered ingredient names per category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientStore {
    defaults: CategoryMap<Vec<String>>,
    lists: CategoryMap<Vec<String>>,
}

impl Default for IngredientStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl IngredientStore {
    /// Store seeded with the built-in ingredient lists
    #[must_use]
    pub fn with_defaults() -> Self {
        let defaults = CategoryMap::from_fn(|category| {
            let names: &[&str] = match category {
                Category::Fruits => DEFAULT_FRUITS,
                Category::Veggies => DEFAULT_VEGGIES,
                Category::Liquids => DEFAULT_LIQUIDS,
            };
            names.iter().map(|&name| name.to_owned()).collect()
        });
        Self::new(defaults)
    }

    /// Store seeded with an arbitrary default list
    ///
    /// Blank and repeated defaults are dropped so the uniqueness invariant
    /// holds from the start.
    #[must_use]
    pub fn new(defaults: CategoryMap<Vec<String>>) -> Self {
        let defaults = defaults.map(|_, names| {
            let mut unique: Vec<String> = Vec::with_capacity(names.len());
            for name in names {
                let name = name.trim();
                if !name.is_empty() && !unique.iter().any(|existing| existing == name) {
                    unique.push(name.to_owned());
                }
            }
            unique
        });
        Self {
            lists: defaults.clone(),
            defaults,
        }
    }

    /// Append persisted custom entries after the defaults
    ///
    /// Entries that are blank or already present are skipped. Returns how many
    /// names were added.
    pub fn merge_custom(&mut self, custom: CategoryMap<Vec<String>>) -> usize {
        let mut added = 0;
        for (category, names) in custom.iter() {
            for name in names {
                let name = name.trim();
                if name.is_empty() || self.contains(category, name) {
                    debug!(category = %category, name, "Skipping persisted ingredient");
                    continue;
                }
                self.lists.get_mut(category).push(name.to_owned());
                added += 1;
            }
        }
        added
    }

    /// Add a name to `category`, returning the trimmed name that was stored
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the trimmed name is empty and
    /// `ResourceAlreadyExists` if the category already holds it
    pub fn add(&mut self, category: Category, name: &str) -> AppResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::empty_ingredient_name(category));
        }
        if self.contains(category, name) {
            return Err(AppError::duplicate_ingredient(category, name));
        }
        self.lists.get_mut(category).push(name.to_owned());
        debug!(category = %category, name, "Added ingredient");
        Ok(name.to_owned())
    }

    /// Remove the first occurrence of `name`; returns whether anything was removed
    pub fn remove(&mut self, category: Category, name: &str) -> bool {
        let list = self.lists.get_mut(category);
        match list.iter().position(|existing| existing == name) {
            Some(index) => {
                list.remove(index);
                debug!(category = %category, name, "Removed ingredient");
                true
            }
            None => false,
        }
    }

    /// Whether `category` holds exactly `name`
    #[must_use]
    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.lists.get(category).iter().any(|existing| existing == name)
    }

    /// Names in `category`, in display order
    #[must_use]
    pub fn list(&self, category: Category) -> &[String] {
        self.lists.get(category)
    }

    /// All lists keyed by category
    #[must_use]
    pub const fn lists(&self) -> &CategoryMap<Vec<String>> {
        &self.lists
    }

    /// Whether `name` is one of the built-in defaults of `category`
    #[must_use]
    pub fn is_default(&self, category: Category, name: &str) -> bool {
        self.defaults.get(category).iter().any(|default| default == name)
    }

    /// Entries that are not built-in defaults; this is what gets persisted
    #[must_use]
    pub fn custom_entries(&self) -> CategoryMap<Vec<String>> {
        CategoryMap::from_fn(|category| {
            self.list(category)
                .iter()
                .filter(|name| !self.is_default(category, name))
                .cloned()
                .collect()
        })
    }

    /// Names containing `term`, ignoring case; an empty term matches everything
    #[must_use]
    pub fn filter(&self, term: &str) -> CategoryMap<Vec<&str>> {
        let needle = term.trim().to_lowercase();
        CategoryMap::from_fn(|category| {
            self.list(category)
                .iter()
                .map(String::as_str)
                .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
                .collect()
        })
    }

    /// Total number of ingredients across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.iter().map(|(_, names)| names.len()).sum()
    }

    /// Whether every category is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
