// ABOUTME: Main library entry point for the fitgoal planning engine
// ABOUTME: Exposes plan projection, survey intake, and the webhook plan provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

#![deny(unsafe_code)]

//! # Fitgoal
//!
//! A budget-aware fitness goal planner. Given a user's biometrics and goal,
//! the crate produces a deterministic plan projection (weekly plan,
//! milestones, cost outlook, feasibility verdict) and can forward a manual
//! survey to the remote plan-generation webhook for a full generated plan.
//!
//! ## Architecture
//!
//! - **Models**: profile, survey, and plan data structures
//! - **Intelligence**: the pure plan projection engine and its lookup tables
//! - **Providers**: the remote plan-generation webhook client
//! - **Config**: environment-based runtime configuration
//!
//! ## Example
//!
//! ```rust
//! use fitgoal::intelligence::PlanProjector;
//! use fitgoal::models::{FitnessGoal, FitnessProfile};
//!
//! let profile = FitnessProfile {
//!     weight_kg: 92.0,
//!     target_weight_kg: Some(80.0),
//!     bmi: 29.7,
//!     goal: Some(FitnessGoal::WeightLoss),
//!     duration_days: Some(90),
//!     budget: Some(150.0),
//!     currency: Some("INR".to_string()),
//! };
//!
//! let projection = PlanProjector::new().project(&profile);
//! assert!(projection.feasible);
//! ```

/// Environment-based configuration management
pub mod config;

/// Application-wide constants and environment variable names
pub mod constants;

/// Unified error handling (`AppError`, `ErrorCode`, `AppResult`)
pub mod errors;

/// Plan projection engine and fitness lookup tables
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data structures: profiles, plans, BMI reports
pub mod models;

/// Remote plan-generation providers
pub mod providers;

/// Manual-input survey types and validation
pub mod survey;
