// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, in-memory controllers, and recipe fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `smoothie_lab`

use std::path::Path;
use std::sync::{Arc, Once};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use smoothie_lab::{
    config::{AppConfig, Environment},
    controller::AppController,
    models::{CategoryMap, Recipe, RecipeIngredient},
    persistence::Persistence,
    storage::{FileStore, MemoryStore},
};

static INIT_LOGGER: Once = Once::new();

/// Seed used wherever a test needs reproducible recipes
pub const TEST_SEED: u64 = 42;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration with a short generation delay for timer tests
pub fn test_config(generation_delay: Duration) -> AppConfig {
    AppConfig {
        generation_delay,
        notification_ttl: Duration::from_secs(3),
        environment: Environment::Testing,
        ..AppConfig::default()
    }
}

/// Controller over a fresh in-memory store, returning the store for inspection
pub fn memory_controller(generation_delay: Duration) -> (AppController, Arc<MemoryStore>) {
    init_test_logging();
    let store = Arc::new(MemoryStore::new());
    let controller = controller_over(&store, generation_delay);
    (controller, store)
}

/// Controller over an existing in-memory store, as if the app restarted
pub fn controller_over(store: &Arc<MemoryStore>, generation_delay: Duration) -> AppController {
    let persistence = Persistence::new(store.clone());
    AppController::new(persistence, &test_config(generation_delay)).with_seed(TEST_SEED)
}

/// Controller whose records live as JSON files under `data_dir`
pub fn file_controller(data_dir: &Path) -> AppController {
    init_test_logging();
    let persistence = Persistence::new(Arc::new(FileStore::new(data_dir)));
    AppController::new(persistence, &test_config(Duration::ZERO)).with_seed(TEST_SEED)
}

/// Turn `data_dir` into a regular file so every later write fails
pub fn break_data_dir(data_dir: &Path) {
    if data_dir.exists() {
        std::fs::remove_dir_all(data_dir).unwrap();
    }
    std::fs::write(data_dir, "not a directory").unwrap();
}

/// Recipe with fixed contents and a fixed timestamp
pub fn fixed_recipe(name: &str) -> Recipe {
    Recipe {
        name: name.to_owned(),
        ingredients: CategoryMap {
            fruits: vec![RecipeIngredient::new("バナナ", "100g")],
            veggies: vec![RecipeIngredient::new("しょうが", "10g")],
            liquids: vec![RecipeIngredient::new("ヨーグルト", "150ml")],
        },
        generated_at: Utc.with_ymd_and_hms(2025, 10, 18, 3, 0, 0).unwrap(),
    }
}
