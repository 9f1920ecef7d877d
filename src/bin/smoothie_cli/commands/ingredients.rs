// ABOUTME: Ingredient commands for smoothie-cli
// ABOUTME: Handles list, add, and remove operations on the ingredient store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use smoothie_lab::{
    controller::AppController, errors::AppResult, models::Category,
    presentation::render_ingredient_tags,
};

type Result<T> = AppResult<T>;

use crate::helpers::display::flush_notifications;

/// Print ingredients per category, optionally filtered
pub fn list(controller: &AppController, search: Option<&str>) {
    let state = controller.state();
    print!(
        "{}",
        render_ingredient_tags(&state.ingredients, &state.selection, search)
    );
}

/// Add a custom ingredient
pub fn add(controller: &mut AppController, category: Category, name: &str) -> Result<()> {
    let result = controller.add_ingredient(category, name);
    flush_notifications(controller);
    result.map(|_| ())
}

/// Remove an ingredient
pub fn remove(controller: &mut AppController, category: Category, name: &str) -> Result<()> {
    let removed = controller.remove_ingredient(category, name);
    flush_notifications(controller);
    if !removed? {
        println!("{name} は {} にありません", category.display_name());
    }
    Ok(())
}
