// ABOUTME: Integration tests for the plan projection engine
// ABOUTME: Covers defaults, boundary durations, and the serialized output shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

use fitgoal::intelligence::PlanProjector;
use fitgoal::models::{FitnessGoal, FitnessProfile};

fn bare_profile(weight_kg: f64) -> FitnessProfile {
    FitnessProfile {
        weight_kg,
        target_weight_kg: None,
        bmi: 24.0,
        goal: None,
        duration_days: None,
        budget: None,
        currency: None,
    }
}

#[test]
fn defaults_produce_a_sixty_day_maintenance_plan() {
    let projection = PlanProjector::new().project(&bare_profile(70.0));

    // 60 days -> 9 weeks, all maintenance
    assert_eq!(projection.weekly_plan.len(), 9);
    assert!(projection
        .weekly_plan
        .iter()
        .all(|w| w.goal_label == "Maintain current weight"));
    assert!(projection.feasible);
    // Default currency is USD
    assert!(projection.estimated_monthly_cost.contains('$'));
    assert!(projection
        .summary
        .contains("maintain your current weight"));
}

#[test]
fn week_entries_are_chronological_and_start_at_one() {
    let projection = PlanProjector::new().project(&bare_profile(70.0));
    for (index, entry) in projection.weekly_plan.iter().enumerate() {
        assert_eq!(entry.week as usize, index + 1);
    }
}

#[test]
fn zero_duration_yields_empty_plan_and_milestones() {
    // duration_days = 0 violates the documented invariant; the projector
    // degrades to an empty plan rather than dividing by zero.
    let mut profile = bare_profile(70.0);
    profile.duration_days = Some(0);
    profile.target_weight_kg = Some(65.0);

    let projection = PlanProjector::new().project(&profile);
    assert!(projection.weekly_plan.is_empty());
    assert!(projection.milestones.is_empty());
    // A zero-length period has a zero safe-change allowance
    assert!(!projection.feasible);

    profile.target_weight_kg = Some(70.0);
    let projection = PlanProjector::new().project(&profile);
    assert!(projection.feasible);
}

#[test]
fn fourteen_day_plan_gets_exactly_one_milestone() {
    let mut profile = bare_profile(80.0);
    profile.target_weight_kg = Some(78.0);
    profile.duration_days = Some(14);

    let projection = PlanProjector::new().project(&profile);
    assert_eq!(projection.weekly_plan.len(), 2);
    assert_eq!(projection.milestones.len(), 1);
    assert_eq!(projection.milestones[0], "Week 2: 78.0kg target");
}

#[test]
fn gain_goal_labels_carry_the_weekly_rate() {
    let mut profile = bare_profile(60.0);
    profile.target_weight_kg = Some(63.0);
    profile.duration_days = Some(84); // 12 weeks; 3kg -> 0.25/week -> 0.3 rounded
    profile.goal = Some(FitnessGoal::MuscleGain);

    let projection = PlanProjector::new().project(&profile);
    assert_eq!(projection.weekly_plan[0].goal_label, "Gain 0.3kg");
    assert!(projection.feasible);
}

#[test]
fn projection_serializes_with_stable_field_names() {
    let projection = PlanProjector::new().project(&bare_profile(70.0));
    let value = serde_json::to_value(&projection).unwrap();

    for field in [
        "summary",
        "weekly_plan",
        "workout_recommendations",
        "diet_tips",
        "estimated_monthly_cost",
        "milestones",
        "feasible",
        "motivational_quote",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }

    let first_week = &value["weekly_plan"][0];
    assert_eq!(first_week["week"], 1);
    assert!(first_week.get("goal_label").is_some());
    assert!(first_week.get("diet").is_some());
    assert!(first_week.get("workout").is_some());
}

#[test]
fn profile_deserializes_with_optional_fields_absent() {
    let profile: FitnessProfile =
        serde_json::from_str(r#"{"weight_kg": 92.0, "bmi": 29.7}"#).unwrap();
    assert!(profile.target_weight_kg.is_none());
    assert!(profile.goal.is_none());

    let projection = PlanProjector::new().project(&profile);
    assert!(projection.feasible);
}
