// ABOUTME: Output helpers for smoothie-cli
// ABOUTME: Prints notifications and recipe cards to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use smoothie_lab::{
    controller::AppController,
    models::Recipe,
    presentation::{render_notification, render_recipe},
};

/// Print and clear every pending notification
pub fn flush_notifications(controller: &mut AppController) {
    for notification in controller.drain_notifications() {
        println!("{}", render_notification(&notification));
    }
}

/// Print a recipe card framed by rules
pub fn display_recipe(recipe: &Recipe) {
    println!("{}", "=".repeat(40));
    print!("{}", render_recipe(recipe));
    println!("{}", "=".repeat(40));
}
