// ABOUTME: Saved recipe history entry with optional star rating
// ABOUTME: Ratings are clamped to the 0-5 star range on construction and update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recipe::Recipe;
use crate::constants::limits::MAX_RATING;

/// A recipe the user chose to keep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// The saved recipe
    pub recipe: Recipe,
    /// Star rating (0-5), if the user gave one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// When the entry was saved
    pub saved_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Wrap a recipe into a new history entry stamped with the current time
    #[must_use]
    pub fn new(recipe: Recipe, rating: Option<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe,
            rating: rating.map(Self::clamp_rating),
            saved_at: Utc::now(),
        }
    }

    /// Replace the rating; `None` clears it
    pub fn set_rating(&mut self, rating: Option<u8>) {
        self.rating = rating.map(Self::clamp_rating);
    }

    /// Clamp a rating to the star range
    #[must_use]
    pub fn clamp_rating(rating: u8) -> u8 {
        rating.min(MAX_RATING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryMap;

    fn recipe() -> Recipe {
        Recipe {
            name: "グリーンマシン".to_owned(),
            ingredients: CategoryMap::default(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_rating_clamped() {
        let mut entry = HistoryEntry::new(recipe(), Some(8));
        assert_eq!(entry.rating, Some(5));
        entry.set_rating(Some(2));
        assert_eq!(entry.rating, Some(2));
        entry.set_rating(None);
        assert_eq!(entry.rating, None);
    }

    #[test]
    fn test_missing_rating_deserializes() {
        let entry = HistoryEntry::new(recipe(), None);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("rating"));
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
