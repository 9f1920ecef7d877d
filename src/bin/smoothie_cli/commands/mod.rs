// ABOUTME: Re-exports command modules for smoothie-cli
// ABOUTME: Provides ingredient, generation, history, and interactive shell commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

pub mod generate;
pub mod history;
pub mod ingredients;
pub mod shell;
