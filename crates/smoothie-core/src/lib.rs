// ABOUTME: Core types and constants for the Smoothie Lab recipe generator
// ABOUTME: Foundation crate with error handling, built-in ingredient data, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

#![deny(unsafe_code)]

//! # Smoothie Core
//!
//! Foundation crate providing shared types and constants for Smoothie Lab.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Built-in ingredient lists, recipe names, measurements, and limits
//! - **models**: Categories, recipes, history entries, and quantity settings

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and built-in data organized by domain
pub mod constants;

/// Core data models (`Category`, `Recipe`, `HistoryEntry`, etc.)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
