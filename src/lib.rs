// ABOUTME: Main library entry point for the Smoothie Lab recipe generator
// ABOUTME: Wires ingredient curation, recipe generation, history, and persistence together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

#![deny(unsafe_code)]

//! # Smoothie Lab
//!
//! Curate lists of smoothie ingredients, choose how many of each category
//! go into a drink, and generate randomized recipes with display
//! measurements. Custom ingredients and saved recipes live in a small
//! key-value store on disk.
//!
//! ## Architecture
//!
//! - **Ingredients**: per-category ingredient lists and the cosmetic selection state
//! - **Generator**: random recipe names and sampling without replacement
//! - **History**: newest-first saved recipes with star ratings
//! - **Storage / Persistence**: key-value records standing in for browser storage
//! - **Controller**: one method per user action, owning all application state
//! - **Presentation**: plain-text rendering used by the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use smoothie_lab::config::AppConfig;
//! use smoothie_lab::controller::AppController;
//! use smoothie_lab::persistence::Persistence;
//! use smoothie_lab::storage::MemoryStore;
//!
//! let persistence = Persistence::new(Arc::new(MemoryStore::new()));
//! let mut controller = AppController::new(persistence, &AppConfig::default());
//! let recipe = controller.generate_now();
//! println!("{}", recipe.name);
//! ```

/// Environment-driven application configuration
pub mod config;

/// Command handlers owning the application state
pub mod controller;

/// Cancellable delay before a requested recipe is produced
pub mod generation;

/// Random recipe generation
pub mod generator;

/// Saved recipe history
pub mod history;

/// Ingredient lists and selection state
pub mod ingredients;

/// Structured logging setup
pub mod logging;

/// Display measurement lookup
pub mod measurements;

/// Transient user-facing notices
pub mod notifications;

/// Load/save boundary between state and storage
pub mod persistence;

/// Plain-text rendering
pub mod presentation;

/// In-memory application state
pub mod state;

/// Key-value storage backends
pub mod storage;

pub use smoothie_core::constants;
pub use smoothie_core::errors;
pub use smoothie_core::models;
