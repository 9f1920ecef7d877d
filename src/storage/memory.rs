// ABOUTME: In-memory key-value store backed by a concurrent map
// ABOUTME: Used by tests and by sessions that should not touch the disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use dashmap::DashMap;

use super::{validate_key, KeyValueStore};
use crate::errors::AppResult;

/// Records kept in process memory; dropped with the store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        Ok(self.records.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        self.records.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        validate_key(key)?;
        self.records.remove(key);
        Ok(())
    }
}
