// ABOUTME: Intelligence module for deterministic fitness plan projection
// ABOUTME: Re-exports the projector engine and its tuning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! # Intelligence Module
//!
//! The deterministic plan projection engine: feasibility evaluation, weekly
//! plan building, milestone interpolation, and summary composition over a
//! normalized fitness profile.

/// Safe-rate thresholds and budget bands
pub mod plan_constants;
/// The plan projection engine
pub mod plan_projector;

pub use plan_projector::{
    diet_tips, estimated_monthly_cost, motivational_quote, workout_recommendations, PlanProjector,
};
