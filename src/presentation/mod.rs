// ABOUTME: Plain-text rendering of ingredients, recipes, history, and notifications
// ABOUTME: Pure functions over state; the CLI decides where the text goes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! # Presentation
//!
//! Everything here returns a `String`. Functions that show dates come in two
//! forms: one using the local time zone and an `_in` variant taking an
//! explicit zone so output is reproducible.

/// Japanese calendar date formatting
pub mod date;

pub use date::format_japanese_date;

use std::fmt::Write as _;

use chrono::{Local, TimeZone};

use crate::constants::limits::MAX_RATING;
use crate::ingredients::{IngredientStore, SelectionState};
use crate::models::{Category, HistoryEntry, QuantitySettings, Recipe};
use crate::notifications::{Notification, NotificationLevel};

/// Tag marker for selected ingredients
const SELECTED_MARK: &str = "[x]";
/// Tag marker for unselected ingredients
const UNSELECTED_MARK: &str = "[ ]";

/// Ingredient tags grouped by category, optionally filtered by a search term
#[must_use]
pub fn render_ingredient_tags(
    store: &IngredientStore,
    selection: &SelectionState,
    search: Option<&str>,
) -> String {
    let visible = store.filter(search.unwrap_or_default());
    let mut out = String::new();
    for (category, names) in visible.iter() {
        let _ = writeln!(
            out,
            "{} ({}) {}/{}",
            category.display_name(),
            category,
            names.len(),
            store.list(category).len()
        );
        if names.is_empty() {
            out.push_str("  (該当なし)\n");
            continue;
        }
        let tags: Vec<String> = names
            .iter()
            .map(|name| {
                let mark = if selection.is_selected(category, name) {
                    SELECTED_MARK
                } else {
                    UNSELECTED_MARK
                };
                format!("{mark} {name}")
            })
            .collect();
        let _ = writeln!(out, "  {}", tags.join("  "));
    }
    out
}

/// Current quantity per category on one line
#[must_use]
pub fn render_quantities(settings: &QuantitySettings) -> String {
    Category::ALL
        .iter()
        .map(|&category| format!("{}: {}", category.display_name(), settings.get(category)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Recipe card dated in the local time zone
#[must_use]
pub fn render_recipe(recipe: &Recipe) -> String {
    render_recipe_in(recipe, &Local)
}

/// Recipe card dated in `tz`
#[must_use]
pub fn render_recipe_in<Tz: TimeZone>(recipe: &Recipe, tz: &Tz) -> String {
    let date = recipe.generated_at.with_timezone(tz).date_naive();
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.name);
    let _ = writeln!(out, "{}", format_japanese_date(date));
    for (category, ingredients) in recipe.ingredients.iter() {
        if ingredients.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", category.display_name());
        for ingredient in ingredients {
            let _ = writeln!(out, "  - {} {}", ingredient.name, ingredient.measurement);
        }
    }
    out
}

/// Filled and empty stars for a rating; no rating shows all empty
#[must_use]
pub fn render_stars(rating: Option<u8>) -> String {
    let filled = usize::from(rating.unwrap_or(0).min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Numbered history list dated in the local time zone
#[must_use]
pub fn render_history(entries: &[HistoryEntry]) -> String {
    render_history_in(entries, &Local)
}

/// Numbered history list dated in `tz`
#[must_use]
pub fn render_history_in<Tz: TimeZone>(entries: &[HistoryEntry], tz: &Tz) -> String {
    if entries.is_empty() {
        return "履歴はまだありません\n".to_owned();
    }
    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let date = entry.saved_at.with_timezone(tz).date_naive();
        let _ = writeln!(
            out,
            "{index:>2}. {}  {}  {}",
            entry.recipe.name,
            render_stars(entry.rating),
            format_japanese_date(date)
        );
    }
    out
}

/// One notification with a level marker
#[must_use]
pub fn render_notification(notification: &Notification) -> String {
    let marker = match notification.level {
        NotificationLevel::Success => "✔",
        NotificationLevel::Error => "✖",
        NotificationLevel::Info => "ℹ",
    };
    format!("{marker} {}", notification.message)
}
