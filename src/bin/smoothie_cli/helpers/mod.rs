// ABOUTME: Re-exports helper modules for smoothie-cli
// ABOUTME: Provides display helpers shared by the one-shot and shell commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

pub mod display;
