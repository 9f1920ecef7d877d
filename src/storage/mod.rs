// ABOUTME: Key-value storage abstraction standing in for browser local storage
// ABOUTME: Records are opaque strings addressed by a key; backends are file or memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! # Storage Backends
//!
//! Persistence never touches the filesystem directly. It reads and writes
//! whole records through [`KeyValueStore`], so tests can swap in
//! [`MemoryStore`] while the CLI uses [`FileStore`].

/// One JSON document per key inside a data directory
pub mod file;
/// Process-local store for tests and ephemeral sessions
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::{AppError, AppResult};

/// Whole-record key-value storage
///
/// Writes replace the previous value entirely; there is no partial update and
/// no coordination between writers.
pub trait KeyValueStore: Send + Sync {
    /// Read the record stored under `key`, or `None` if it was never written
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the record stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete the record stored under `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Reject keys that could escape a directory or collide after mapping to a file name
///
/// # Errors
///
/// Returns `InvalidInput` for empty keys or keys with characters outside `[A-Za-z0-9_-]`
pub fn validate_key(key: &str) -> AppResult<()> {
    if key.is_empty() {
        return Err(AppError::invalid_input("storage key must not be empty"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::invalid_input(format!(
            "storage key '{key}' contains unsupported characters"
        )));
    }
    Ok(())
}
