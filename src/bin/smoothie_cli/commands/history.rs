// ABOUTME: History commands for smoothie-cli
// ABOUTME: Lists, shows, and rates saved recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use smoothie_lab::{
    controller::AppController,
    errors::AppResult,
    presentation::{render_history, render_stars},
};

type Result<T> = AppResult<T>;

use crate::helpers::display::{display_recipe, flush_notifications};

/// Print every saved recipe
pub fn list(controller: &AppController) {
    print!("{}", render_history(controller.state().history.entries()));
}

/// Print one saved recipe
pub fn show(controller: &mut AppController, index: usize) -> Result<()> {
    let recipe = controller.restore_from_history(index).cloned();
    flush_notifications(controller);
    display_recipe(&recipe?);
    Ok(())
}

/// Set or clear a saved recipe's rating
pub fn rate(controller: &mut AppController, index: usize, rating: Option<u8>) -> Result<()> {
    let stored = controller.rate_history(index, rating);
    flush_notifications(controller);
    println!("{index}: {}", render_stars(stored?));
    Ok(())
}
