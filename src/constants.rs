// ABOUTME: Application-wide constants, defaults, and environment variable names
// ABOUTME: Centralizes limits and configuration keys so they are defined once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! Centralized constants for configuration, defaults, and validation limits

/// Environment variable names for runtime configuration
pub mod env_config {
    /// Overrides the plan-generation webhook endpoint
    pub const WEBHOOK_URL: &str = "FITGOAL_WEBHOOK_URL";
    /// HTTP request timeout in seconds for the webhook call
    pub const HTTP_TIMEOUT_SECS: &str = "FITGOAL_HTTP_TIMEOUT_SECS";
    /// Log level (error, warn, info, debug, trace)
    pub const LOG_LEVEL: &str = "FITGOAL_LOG_LEVEL";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "FITGOAL_LOG_FORMAT";
}

/// Default values applied when configuration or profile fields are absent
pub mod defaults {
    /// Plan duration when the profile does not specify one (days)
    pub const DURATION_DAYS: u32 = 60;
    /// Monthly budget when the profile does not specify one
    pub const BUDGET: f64 = 0.0;
    /// Display currency when the profile does not specify one
    pub const CURRENCY: &str = "USD";
    /// Plan-generation webhook endpoint
    pub const WEBHOOK_URL: &str =
        "https://n8n.wolvesandcompany.in/webhook/gg-nutritional-calculator";
    /// Webhook request timeout (seconds)
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Service name used in structured log output
    pub const SERVICE_NAME: &str = "fitgoal";
}

/// Validation limits for manual survey input
pub mod limits {
    /// Minimum accepted age (years)
    pub const MIN_AGE: u32 = 10;
    /// Maximum accepted age (years)
    pub const MAX_AGE: u32 = 100;
    /// Minimum accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum accepted weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Maximum accepted weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum target duration (months)
    pub const MIN_DURATION_MONTHS: u32 = 1;
    /// Maximum target duration (months)
    pub const MAX_DURATION_MONTHS: u32 = 6;
    /// Minimum workout days per week when provided
    pub const MIN_WORKOUT_DAYS: u32 = 1;
    /// Maximum workout days per week when provided
    pub const MAX_WORKOUT_DAYS: u32 = 7;
    /// Required phone number length (digits)
    pub const PHONE_DIGITS: usize = 10;
}
