// ABOUTME: Core data structures for fitness profiles, projections, and generated plans
// ABOUTME: Defines the typed wire shapes shared by the projector, providers, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! Core data models
//!
//! All entities here are constructed fresh per invocation and never mutate
//! after creation; the only stateful piece in the crate is the webhook
//! provider's HTTP client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Fitness goal selected by the user
///
/// The projector's lookup tables cover `WeightLoss`, `MuscleGain`, and
/// `Toning`; every other goal takes the generic fallback arm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Reduce body weight
    WeightLoss,
    /// Increase muscle mass
    MuscleGain,
    /// Improve muscle definition without large weight change
    Toning,
    /// Hold current weight while improving fitness
    Maintenance,
    /// Improve cardiovascular endurance
    Endurance,
}

/// Budget tier derived from the monthly budget via fixed thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Budget of 100 or less
    Low,
    /// Budget above 100 up to 200
    Medium,
    /// Budget above 200
    High,
}

impl BudgetTier {
    /// Classify a monthly budget into a tier
    pub fn from_budget(budget: f64) -> Self {
        use crate::intelligence::plan_constants::budget_tiers;
        if budget > budget_tiers::HIGH_THRESHOLD {
            Self::High
        } else if budget > budget_tiers::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Biometric and lifestyle input to the plan projector
///
/// Absent optional fields are never invalid; the projector fills defaults
/// (`target_weight_kg = weight_kg`, `duration_days = 60`, `budget = 0`,
/// `currency = "USD"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessProfile {
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Target weight in kilograms; defaults to the current weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Body Mass Index
    pub bmi: f64,
    /// Fitness goal, if the user selected one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    /// Plan duration in days; must be positive, defaults to 60
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    /// Monthly budget in the profile currency; defaults to 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// ISO-ish display currency code; defaults to "USD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// One week of the projected plan, in chronological order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekEntry {
    /// Week number, starting at 1
    pub week: u32,
    /// Weekly weight-change label, e.g. "Lose 0.9kg"
    pub goal_label: String,
    /// Diet description for the week
    pub diet: String,
    /// Workout description for the week
    pub workout: String,
}

/// Complete output of the plan projector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanProjection {
    /// Natural-language overview of the plan
    pub summary: String,
    /// One entry per week of the plan duration
    pub weekly_plan: Vec<WeekEntry>,
    /// Budget-band workout recommendation
    pub workout_recommendations: String,
    /// Goal-direction diet guidance
    pub diet_tips: String,
    /// Monthly cost narrative with currency symbol
    pub estimated_monthly_cost: String,
    /// Up to 4 evenly spaced weight checkpoints
    pub milestones: Vec<String>,
    /// Whether the requested change is within safe-rate bounds
    pub feasible: bool,
    /// Randomly selected quote (the only non-deterministic field)
    pub motivational_quote: String,
}

/// Biometric data extracted from an uploaded BMI report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiReport {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body Mass Index as printed on the report
    pub bmi: f64,
    /// Body fat percentage
    pub body_fat_pct: f64,
    /// Muscle mass in kilograms
    pub muscle_mass_kg: f64,
    /// Body water percentage
    pub water_pct: f64,
    /// Timestamp of the report
    pub report_date: DateTime<Utc>,
    /// Where the data came from, e.g. "pdf"
    pub source: String,
}

impl From<BmiReport> for FitnessProfile {
    /// Build a profile from report biometrics, leaving goal and budget unset
    fn from(report: BmiReport) -> Self {
        Self {
            weight_kg: report.weight_kg,
            target_weight_kg: None,
            bmi: report.bmi,
            goal: None,
            duration_days: None,
            budget: None,
            currency: None,
        }
    }
}

/// Compute Body Mass Index from weight and height, rounded to 1 decimal
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    ((weight_kg / (height_m * height_m)) * 10.0).round() / 10.0
}

// ── Webhook plan contract ───────────────────────────────────────────────
// The remote collaborator returns `summary`, `workout_plan`, `diet_plan`.
// Schema validation happens once, here, via typed decoding: `summary` is
// required, the two plan arrays default to empty when absent.

/// A single exercise within a workout day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Repetition scheme, e.g. "3x12"; "N/A" is treated as absent by UIs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<String>,
    /// Duration in minutes for time-based exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Number of sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Exercise category
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
}

/// One day of the generated workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutDay {
    /// Day label, e.g. "Monday"
    pub day: String,
    /// Exercises scheduled for the day
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// Meals for one day of the generated diet plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DietMeals {
    #[serde(default)]
    pub breakfast: String,
    #[serde(default)]
    pub lunch: String,
    #[serde(default)]
    pub snacks: String,
    #[serde(default)]
    pub dinner: String,
}

/// One day of the generated diet plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietDay {
    /// Day label, e.g. "Day 1"
    pub day: String,
    /// Meals for the day
    #[serde(default)]
    pub meals: DietMeals,
}

/// Plan returned by the remote plan-generation webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Natural-language plan summary (required)
    pub summary: String,
    /// Weekly workout schedule; may be empty when details are mailed instead
    #[serde(default)]
    pub workout_plan: Vec<WorkoutDay>,
    /// Sample 7-day diet plan; may be empty when details are mailed instead
    #[serde(default)]
    pub diet_plan: Vec<DietDay>,
}

impl GeneratedPlan {
    /// Whether the plan carries full workout and diet details
    ///
    /// The webhook may return a summary-only payload (full details are
    /// delivered out of band); both plans must be non-empty for the detail
    /// sections to unlock.
    pub fn has_plan_details(&self) -> bool {
        !self.workout_plan.is_empty() && !self.diet_plan.is_empty()
    }
}

impl FitnessProfile {
    /// Display currency for this profile, falling back to the default
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(defaults::CURRENCY)
    }
}
