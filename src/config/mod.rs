// ABOUTME: Configuration module for Smoothie Lab runtime settings
// ABOUTME: Re-exports the environment-driven AppConfig and Environment types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! Configuration module
//!
//! Settings come from environment variables with compiled-in defaults; the
//! CLI overrides individual fields from its flags after loading.

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{AppConfig, Environment};
