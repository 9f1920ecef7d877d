// ABOUTME: Newest-first list of saved recipes capped at a fixed number of entries
// ABOUTME: Index lookups return not-found errors instead of panicking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use tracing::debug;

use crate::constants::limits::MAX_HISTORY_ENTRIES;
use crate::errors::{AppError, AppResult};
use crate::models::{HistoryEntry, Recipe};

/// Saved recipes, most recent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY_ENTRIES)
    }
}

impl HistoryStore {
    /// Empty history holding at most `capacity` entries; a capacity of 0 is raised to 1
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: if capacity == 0 { 1 } else { capacity },
        }
    }

    /// History restored from persisted entries, already ordered newest first
    ///
    /// Entries beyond the cap are dropped from the oldest end.
    #[must_use]
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(MAX_HISTORY_ENTRIES);
        for entry in &mut entries {
            let rating = entry.rating;
            entry.set_rating(rating);
        }
        Self {
            entries,
            capacity: MAX_HISTORY_ENTRIES,
        }
    }

    /// Prepend a recipe, evicting the oldest entry past the cap
    pub fn save(&mut self, recipe: Recipe, rating: Option<u8>) -> &HistoryEntry {
        self.entries.insert(0, HistoryEntry::new(recipe, rating));
        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            debug!(evicted, "Evicted oldest history entries");
        }
        &self.entries[0]
    }

    /// Entry at `index` (0 is the newest)
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `index` is out of range
    pub fn load(&self, index: usize) -> AppResult<&HistoryEntry> {
        self.entries
            .get(index)
            .ok_or_else(|| AppError::history_index_out_of_range(index, self.entries.len()))
    }

    /// Set or clear the rating of the entry at `index`; ratings above 5 are clamped
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `index` is out of range
    pub fn rate(&mut self, index: usize, rating: Option<u8>) -> AppResult<&HistoryEntry> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| AppError::history_index_out_of_range(index, len))?;
        entry.set_rating(rating);
        Ok(entry)
    }

    /// All entries, newest first
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of saved entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
