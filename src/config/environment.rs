// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! Environment-based configuration management

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;
use url::Url;

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Runtime configuration for the planner
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Plan-generation webhook endpoint
    pub webhook_url: String,
    /// HTTP request timeout for the webhook call (seconds)
    pub http_timeout_secs: u64,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            webhook_url: defaults::WEBHOOK_URL.to_string(),
            http_timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            log_level: LogLevel::Info,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from the environment, applying defaults
    ///
    /// Fails when an override is present but unusable (malformed URL or
    /// non-numeric timeout); absent variables fall back silently.
    pub fn from_env() -> AppResult<Self> {
        let webhook_url = match env::var(env_config::WEBHOOK_URL) {
            Ok(raw) => {
                Url::parse(&raw).map_err(|e| {
                    AppError::config_invalid(format!(
                        "{} is not a valid URL: {raw}",
                        env_config::WEBHOOK_URL
                    ))
                    .with_source(e)
                })?;
                raw
            }
            Err(_) => defaults::WEBHOOK_URL.to_string(),
        };

        let http_timeout_secs = match env::var(env_config::HTTP_TIMEOUT_SECS) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::config_invalid(format!(
                    "{} must be a positive integer: {raw}",
                    env_config::HTTP_TIMEOUT_SECS
                ))
                .with_source(e)
            })?,
            Err(_) => defaults::HTTP_TIMEOUT_SECS,
        };
        if http_timeout_secs == 0 {
            warn!(
                "{} is 0; webhook calls will fail immediately",
                env_config::HTTP_TIMEOUT_SECS
            );
        }

        let log_level = env::var(env_config::LOG_LEVEL)
            .map(|raw| LogLevel::from_str_or_default(&raw))
            .unwrap_or_default();

        Ok(Self {
            webhook_url,
            http_timeout_secs,
            log_level,
        })
    }
}
