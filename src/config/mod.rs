// ABOUTME: Configuration module for runtime settings
// ABOUTME: Re-exports the environment-based configuration loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! Runtime configuration

/// Environment-based configuration management
pub mod environment;

pub use environment::{LogLevel, PlannerConfig};
