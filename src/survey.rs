// ABOUTME: Manual-input survey types matching the plan-generation wire contract
// ABOUTME: Validates biometric ranges and contact details before submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! Manual survey intake
//!
//! The typed survey a user fills in when no BMI report is available. Field
//! names and enum spellings are the webhook's wire contract; validation
//! mirrors the ranges enforced at intake (age 10-100, height 50-300 cm,
//! weight 20-300 kg, duration 1-6 months, non-negative budget).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Gender as submitted on the survey
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Self-reported weekly activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    LightlyActive,
    /// 3-5 days/week
    ModeratelyActive,
    /// 6-7 days/week
    VeryActive,
    /// Very hard exercise
    ExtraActive,
}

/// Goal options exposed on the survey form
///
/// This is the webhook's goal vocabulary; it is broader than the projector's
/// [`FitnessGoal`](crate::models::FitnessGoal) table axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SurveyGoal {
    WeightLoss,
    MuscleGain,
    MaintainFitness,
    ImproveStamina,
    ImproveFlexibility,
}

/// Dietary preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
    Eggetarian,
}

/// Preferred time of day for workouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Complete manual survey answers for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyUser {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: SurveyGoal,
    pub diet_preference: DietPreference,
    /// Comma-separated on the form, split into entries here
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_workout_time: Option<WorkoutTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_days_per_week: Option<u32>,
    pub target_duration_months: u32,
    pub monthly_budget_inr: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SurveyUser {
    /// Validate biometric and plan fields against the intake ranges
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if self.age < limits::MIN_AGE || self.age > limits::MAX_AGE {
            return Err(AppError::out_of_range(format!(
                "Age must be between {} and {}",
                limits::MIN_AGE,
                limits::MAX_AGE
            )));
        }
        if self.height_cm < limits::MIN_HEIGHT_CM || self.height_cm > limits::MAX_HEIGHT_CM {
            return Err(AppError::out_of_range(format!(
                "Height must be between {} and {} cm",
                limits::MIN_HEIGHT_CM,
                limits::MAX_HEIGHT_CM
            )));
        }
        if self.weight_kg < limits::MIN_WEIGHT_KG || self.weight_kg > limits::MAX_WEIGHT_KG {
            return Err(AppError::out_of_range(format!(
                "Weight must be between {} and {} kg",
                limits::MIN_WEIGHT_KG,
                limits::MAX_WEIGHT_KG
            )));
        }
        if self.target_duration_months < limits::MIN_DURATION_MONTHS
            || self.target_duration_months > limits::MAX_DURATION_MONTHS
        {
            return Err(AppError::out_of_range(format!(
                "Target duration must be between {} and {} months",
                limits::MIN_DURATION_MONTHS,
                limits::MAX_DURATION_MONTHS
            )));
        }
        if self.monthly_budget_inr < 0.0 {
            return Err(AppError::out_of_range("Monthly budget must be 0 or more"));
        }
        if let Some(days) = self.workout_days_per_week {
            if !(limits::MIN_WORKOUT_DAYS..=limits::MAX_WORKOUT_DAYS).contains(&days) {
                return Err(AppError::out_of_range(format!(
                    "Workout days per week must be between {} and {}",
                    limits::MIN_WORKOUT_DAYS,
                    limits::MAX_WORKOUT_DAYS
                )));
            }
        }
        Ok(())
    }

    /// Validate the contact details collected before submission
    pub fn validate_contact(&self) -> AppResult<()> {
        let phone = self
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::missing_field("phone"))?;
        if phone.len() != limits::PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::invalid_format(format!(
                "Phone number must be {} digits",
                limits::PHONE_DIGITS
            )));
        }

        let email = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::missing_field("email"))?;
        if !EMAIL_RE.is_match(email) {
            return Err(AppError::invalid_format(
                "Please enter a valid email address",
            ));
        }

        Ok(())
    }

    /// Split a comma-separated form field into trimmed, non-empty entries
    pub fn parse_list_field(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Envelope posted to the plan-generation webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Input channel; manual survey submissions use "manual"
    pub input_type: String,
    /// The survey answers
    pub user: SurveyUser,
}

impl PlanRequest {
    /// Wrap survey answers as a manual submission
    pub fn manual(user: SurveyUser) -> Self {
        Self {
            input_type: "manual".to_string(),
            user,
        }
    }

    /// Validate everything required before the webhook call
    pub fn validate(&self) -> AppResult<()> {
        self.user.validate()?;
        self.user.validate_contact()
    }
}
