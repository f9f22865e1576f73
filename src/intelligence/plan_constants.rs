// ABOUTME: Tuning constants for the plan projection engine
// ABOUTME: Safe weight-change rates, budget bands, and milestone limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! Constants used by the plan projection engine
//!
//! The safe-rate factors intentionally scale with the raw day count rather
//! than the week count; the resulting thresholds are the planner's
//! long-standing behavior and downstream copy depends on them.

/// Safe weight-change thresholds
pub mod safe_rates {
    /// Multiplied by the plan duration in days to get the maximum safe
    /// total loss in kg over the whole period
    pub const MAX_LOSS_FACTOR: f64 = 0.5;

    /// Multiplied by the plan duration in days to get the maximum safe
    /// total gain in kg over the whole period
    pub const MAX_GAIN_FACTOR: f64 = 0.25;
}

/// Budget thresholds for the goal-table tiers
pub mod budget_tiers {
    /// Budgets above this are the high tier
    pub const HIGH_THRESHOLD: f64 = 200.0;

    /// Budgets above this (and at most the high threshold) are the medium tier
    pub const MEDIUM_THRESHOLD: f64 = 100.0;
}

/// Budget bands for the standalone workout recommendation
pub mod recommendation_bands {
    /// Below this, recommend free options only
    pub const FREE_BAND: f64 = 50.0;

    /// Below this, recommend a basic membership; at or above, coaching
    pub const BASIC_BAND: f64 = 150.0;
}

/// Milestone interpolation limits
pub mod milestones {
    /// Maximum number of progress checkpoints in a projection
    pub const MAX_MILESTONES: u32 = 4;
}

/// Motivational quotes; one is selected uniformly per projection
pub const MOTIVATIONAL_QUOTES: [&str; 5] = [
    "The only bad workout is the one that didn't happen.",
    "Small daily improvements add up to big results.",
    "Discipline outlasts motivation.",
    "Your body can stand almost anything; it's your mind you have to convince.",
    "Consistency beats intensity every time.",
];
