// ABOUTME: Unified error handling for the fitgoal planner
// ABOUTME: Defines error codes, the AppError type, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! # Unified Error Handling
//!
//! Centralized error types used across survey validation, configuration
//! loading, and the webhook provider. The plan projection core itself has no
//! error taxonomy: every lookup it performs is total with a fallback arm.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (1000-1999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 1000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 1001,
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 1002,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 1003,

    // External services (2000-2999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 2000,
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 2001,

    // Configuration (3000-3999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 3000,
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 3001,

    // Internal (5000-5999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 5000,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 5001,
}

impl ErrorCode {
    /// Get the HTTP status code a response carrying this error would use
    pub const fn http_status(&self) -> u16 {
        match self {
            ErrorCode::InvalidInput
            | ErrorCode::MissingRequiredField
            | ErrorCode::InvalidFormat
            | ErrorCode::ValueOutOfRange => 400,

            ErrorCode::ExternalServiceError => 502,
            ErrorCode::ExternalServiceUnavailable => 503,

            ErrorCode::ConfigError
            | ErrorCode::ConfigInvalid
            | ErrorCode::InternalError
            | ErrorCode::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    pub const fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "The provided input is invalid",
            ErrorCode::MissingRequiredField => "A required field is missing from the request",
            ErrorCode::InvalidFormat => "The data format is invalid",
            ErrorCode::ValueOutOfRange => "The provided value is outside the acceptable range",
            ErrorCode::ExternalServiceError => "An external service encountered an error",
            ErrorCode::ExternalServiceUnavailable => {
                "An external service is currently unavailable"
            }
            ErrorCode::ConfigError => "Configuration error encountered",
            ErrorCode::ConfigInvalid => "Configuration is invalid",
            ErrorCode::InternalError => "An internal error occurred",
            ErrorCode::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required field error
    pub fn missing_field(field: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Please fill in the required field: {field}"),
        )
    }

    /// Value out of range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Invalid format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// External service error
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceError, message)
    }

    /// External service unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceUnavailable, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Invalid configuration error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_description_and_message() {
        let err = AppError::invalid_input("weight must be positive");
        assert_eq!(
            err.to_string(),
            "The provided input is invalid: weight must be positive"
        );
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(AppError::out_of_range("age").http_status(), 400);
        assert_eq!(AppError::external_service("webhook").http_status(), 502);
        assert_eq!(AppError::config("missing url").http_status(), 500);
    }
}
