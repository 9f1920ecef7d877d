// ABOUTME: Per-category set of ingredients the user has toggled as selected
// ABOUTME: Selection is cosmetic and does not influence recipe generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use crate::models::{Category, CategoryMap};

/// Selected ingredient names per category, in the order they were selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: CategoryMap<Vec<String>>,
}

impl SelectionState {
    /// Nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection of `name`, returning the new state
    pub fn toggle(&mut self, category: Category, name: &str) -> bool {
        let selected = self.selected.get_mut(category);
        if let Some(index) = selected.iter().position(|existing| existing == name) {
            selected.remove(index);
            false
        } else {
            selected.push(name.to_owned());
            true
        }
    }

    /// Whether `name` is selected in `category`
    #[must_use]
    pub fn is_selected(&self, category: Category, name: &str) -> bool {
        self.selected.get(category).iter().any(|existing| existing == name)
    }

    /// Clear `name` from `category`; returns whether it was selected
    pub fn deselect(&mut self, category: Category, name: &str) -> bool {
        let selected = self.selected.get_mut(category);
        let before = selected.len();
        selected.retain(|existing| existing != name);
        selected.len() != before
    }

    /// Selected names in `category`
    #[must_use]
    pub fn selected(&self, category: Category) -> &[String] {
        self.selected.get(category)
    }

    /// Clear every selection
    pub fn clear(&mut self) {
        self.selected = CategoryMap::default();
    }
}
