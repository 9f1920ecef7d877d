// ABOUTME: Unified error handling with standard error codes for Smoothie Lab
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Validation
//! failures (empty or duplicate ingredient names, saving without a recipe)
//! carry a stable [`ErrorCode`] so the UI adapter can decide how to surface
//! them without matching on message text.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Category;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The provided input is invalid
    InvalidInput = 3000,
    /// A required field is missing or empty
    MissingRequiredField = 3001,
    /// The data format is invalid
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    /// The requested resource was not found
    ResourceNotFound = 4000,
    /// A resource with this identifier already exists
    ResourceAlreadyExists = 4001,
    /// The resource is busy and cannot accept the request
    ResourceLocked = 4002,

    // Configuration (6000-6999)
    /// Configuration is invalid
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// An internal error occurred
    InternalError = 9000,
    /// Persistent storage failed
    StorageError = 9002,
    /// Data serialization/deserialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required value is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "The resource already exists",
            Self::ResourceLocked => "The resource is busy",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether this code represents a user-correctable validation problem
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::MissingRequiredField
                | Self::InvalidFormat
                | Self::ResourceNotFound
                | Self::ResourceAlreadyExists
                | Self::ResourceLocked
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Ingredient name was empty after trimming
    #[must_use]
    pub fn empty_ingredient_name(category: Category) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("ingredient name for {} must not be empty", category.as_str()),
        )
    }

    /// Ingredient already present in its category
    #[must_use]
    pub fn duplicate_ingredient(category: Category, name: &str) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("'{name}' already exists in {}", category.as_str()),
        )
    }

    /// Save requested before any recipe was generated
    #[must_use]
    pub fn no_current_recipe() -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            "no recipe has been generated yet",
        )
    }

    /// History lookup outside `0..len`
    #[must_use]
    pub fn history_index_out_of_range(index: usize, len: usize) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("history entry {index} not found ({len} entries saved)"),
        )
    }

    /// A generation request is already pending
    #[must_use]
    pub fn generation_in_progress() -> Self {
        Self::new(
            ErrorCode::ResourceLocked,
            "a recipe is already being generated",
        )
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
