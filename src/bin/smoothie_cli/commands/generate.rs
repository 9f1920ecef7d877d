// ABOUTME: Recipe generation command for smoothie-cli
// ABOUTME: Applies quantity overrides, waits out the generation delay, and optionally saves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use smoothie_lab::{
    controller::AppController, errors::AppResult, models::Category,
    presentation::render_quantities,
};
use tracing::debug;

type Result<T> = AppResult<T>;

use crate::helpers::display::{display_recipe, flush_notifications};

/// Flags accepted by `generate`
pub struct GenerateOptions {
    /// Fruit count override
    pub fruits: Option<i64>,
    /// Vegetable count override
    pub veggies: Option<i64>,
    /// Liquid count override
    pub liquids: Option<i64>,
    /// Save the result to history
    pub save: bool,
    /// Rating stored with the saved recipe
    pub rating: Option<u8>,
    /// Skip the generation delay
    pub no_delay: bool,
}

/// Generate one recipe and print it
pub async fn run(controller: &mut AppController, options: &GenerateOptions) -> Result<()> {
    for (category, value) in [
        (Category::Fruits, options.fruits),
        (Category::Veggies, options.veggies),
        (Category::Liquids, options.liquids),
    ] {
        if let Some(value) = value {
            controller.set_quantity(category, value);
        }
    }
    println!("{}", render_quantities(&controller.state().quantities));

    let recipe = if options.no_delay {
        controller.generate_now().clone()
    } else {
        controller.request_generation()?;
        println!("レシピを生成中...");
        match controller.wait_generation().await {
            Some(recipe) => recipe,
            None => {
                debug!("Generation finished without a recipe");
                flush_notifications(controller);
                return Ok(());
            }
        }
    };
    display_recipe(&recipe);

    if options.save {
        let saved = controller.save_current(options.rating).map(|_| ());
        flush_notifications(controller);
        return saved;
    }
    flush_notifications(controller);
    Ok(())
}
