// ABOUTME: Deterministic fitness plan projection engine
// ABOUTME: Normalizes a profile, evaluates feasibility, and builds the weekly plan and milestones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

//! Plan projection engine
//!
//! A pure, synchronous pipeline over a [`FitnessProfile`]:
//! normalization, feasibility evaluation, weekly plan and milestone
//! building (independent), then summary composition. The single
//! non-deterministic step is the motivational quote, drawn from an
//! injected [`Rng`] so tests can pin it.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::constants::defaults;
use crate::intelligence::plan_constants::{
    milestones, recommendation_bands, safe_rates, MOTIVATIONAL_QUOTES,
};
use crate::models::{BudgetTier, FitnessGoal, FitnessProfile, PlanProjection, WeekEntry};

/// Plan projection engine with an injectable randomness source
///
/// Every call to [`project`](Self::project) operates solely on its input and
/// return value; the engine holds no state beyond the RNG.
pub struct PlanProjector<R: Rng = ThreadRng> {
    rng: R,
}

impl PlanProjector {
    /// Create a projector backed by the thread-local RNG
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PlanProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PlanProjector<R> {
    /// Create a projector with a caller-provided randomness source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Project a complete plan from a fitness profile
    pub fn project(&mut self, profile: &FitnessProfile) -> PlanProjection {
        let normalized = NormalizedProfile::from_profile(profile);
        let feasibility = Feasibility::evaluate(&normalized);

        let weekly_plan = build_weekly_plan(&normalized, &feasibility);
        let milestone_labels = build_milestones(&normalized, &feasibility);

        PlanProjection {
            summary: compose_summary(&normalized, &feasibility),
            weekly_plan,
            workout_recommendations: workout_recommendations(normalized.budget).to_string(),
            diet_tips: diet_tips(feasibility.is_loss, feasibility.is_gain),
            estimated_monthly_cost: estimated_monthly_cost(
                normalized.budget,
                &normalized.currency,
            ),
            milestones: milestone_labels,
            feasible: feasibility.feasible,
            motivational_quote: motivational_quote(&mut self.rng).to_string(),
        }
    }
}

/// Profile with defaults filled in
///
/// Absent optional fields are never invalid: the target weight defaults to
/// the current weight, the duration to 60 days, the budget to 0, and the
/// currency to USD.
struct NormalizedProfile {
    weight_kg: f64,
    target_weight_kg: f64,
    bmi: f64,
    goal: Option<FitnessGoal>,
    duration_days: u32,
    budget: f64,
    currency: String,
}

impl NormalizedProfile {
    fn from_profile(profile: &FitnessProfile) -> Self {
        Self {
            weight_kg: profile.weight_kg,
            target_weight_kg: profile.target_weight_kg.unwrap_or(profile.weight_kg),
            bmi: profile.bmi,
            goal: profile.goal,
            duration_days: profile.duration_days.unwrap_or(defaults::DURATION_DAYS),
            budget: profile.budget.unwrap_or(defaults::BUDGET),
            currency: profile
                .currency
                .clone()
                .unwrap_or_else(|| defaults::CURRENCY.to_string()),
        }
    }
}

/// Outcome of the safe-rate evaluation
struct Feasibility {
    weight_difference: f64,
    is_loss: bool,
    is_gain: bool,
    /// kg per week, rounded to 1 decimal; 0 for a zero-length plan
    weekly_change: f64,
    weeks: u32,
    feasible: bool,
}

impl Feasibility {
    fn evaluate(profile: &NormalizedProfile) -> Self {
        let weight_difference = profile.target_weight_kg - profile.weight_kg;
        let is_loss = weight_difference < 0.0;
        let is_gain = weight_difference > 0.0;

        let duration = f64::from(profile.duration_days);
        // A zero-length plan has no weekly rate; everything downstream
        // (weeks, milestones) collapses to empty.
        let weekly_change = if profile.duration_days == 0 {
            0.0
        } else {
            round_to_tenth(weight_difference / (duration / 7.0))
        };

        // The thresholds scale with the raw day count. See plan_constants.
        let max_safe = if is_loss {
            duration * safe_rates::MAX_LOSS_FACTOR
        } else {
            duration * safe_rates::MAX_GAIN_FACTOR
        };
        let feasible = weight_difference.abs() <= max_safe;

        Self {
            weight_difference,
            is_loss,
            is_gain,
            weekly_change,
            weeks: profile.duration_days.div_ceil(7),
            feasible,
        }
    }
}

/// One entry per 7-day period, identical within a goal/budget tier
fn build_weekly_plan(profile: &NormalizedProfile, feasibility: &Feasibility) -> Vec<WeekEntry> {
    let tier = BudgetTier::from_budget(profile.budget);
    let goal_label = if feasibility.is_loss {
        format!("Lose {}kg", feasibility.weekly_change.abs())
    } else if feasibility.is_gain {
        format!("Gain {}kg", feasibility.weekly_change)
    } else {
        "Maintain current weight".to_string()
    };

    (1..=feasibility.weeks)
        .map(|week| WeekEntry {
            week,
            goal_label: goal_label.clone(),
            diet: diet_for(profile.goal, tier).to_string(),
            workout: workout_for(profile.goal, tier).to_string(),
        })
        .collect()
}

/// Up to 4 evenly spaced checkpoints interpolating current to target weight
///
/// Plans shorter than two weeks produce no milestones.
fn build_milestones(profile: &NormalizedProfile, feasibility: &Feasibility) -> Vec<String> {
    let count = milestones::MAX_MILESTONES.min(feasibility.weeks / 2);
    (1..=count)
        .map(|i| {
            let fraction = f64::from(i) / f64::from(count);
            let week_number =
                ((f64::from(feasibility.weeks) / f64::from(count)) * f64::from(i)).floor();
            let expected_weight = profile.weight_kg + feasibility.weight_difference * fraction;
            format!("Week {week_number}: {expected_weight:.1}kg target")
        })
        .collect()
}

/// Single-paragraph plan overview
fn compose_summary(profile: &NormalizedProfile, feasibility: &Feasibility) -> String {
    let mut summary = format!(
        "You currently weigh {}kg with a BMI of {}. ",
        profile.weight_kg, profile.bmi
    );

    if feasibility.is_loss {
        summary.push_str(&format!(
            "Your goal is to lose {}kg over the next {} days. ",
            feasibility.weight_difference.abs(),
            profile.duration_days
        ));
    } else if feasibility.is_gain {
        summary.push_str(&format!(
            "Your goal is to gain {}kg over the next {} days. ",
            feasibility.weight_difference, profile.duration_days
        ));
    } else {
        summary.push_str(
            "Your goal is to maintain your current weight while improving overall fitness. ",
        );
    }

    if feasibility.feasible {
        summary.push_str("This pace is within safe guidelines, so the target is realistic.");
    } else {
        summary.push_str(
            "This pace exceeds safe weight-change guidelines; consider a longer timeline.",
        );
    }

    summary
}

const GENERIC_DIET: &str =
    "Balanced diet with whole grains, lean proteins, vegetables, and consistent hydration";

const GENERIC_WORKOUT: &str =
    "A mix of moderate cardio and full-body strength training, 3-4 sessions per week";

/// Diet description keyed by goal and budget tier
fn diet_for(goal: Option<FitnessGoal>, tier: BudgetTier) -> &'static str {
    match (goal, tier) {
        (Some(FitnessGoal::WeightLoss), BudgetTier::Low) => {
            "Home-cooked high-protein meals: lentils, eggs, seasonal vegetables, and portion-controlled grains"
        }
        (Some(FitnessGoal::WeightLoss), BudgetTier::Medium) => {
            "Lean proteins like chicken breast and fish with fresh produce and a calorie-tracking app"
        }
        (Some(FitnessGoal::WeightLoss), BudgetTier::High) => {
            "Macro-balanced meal delivery with lean proteins, complex carbs, and built-in portion control"
        }
        (Some(FitnessGoal::MuscleGain), BudgetTier::Low) => {
            "Eggs, peanut butter, oats, and milk; a whole-food caloric surplus on a budget"
        }
        (Some(FitnessGoal::MuscleGain), BudgetTier::Medium) => {
            "Whey protein supplementation with chicken, rice, and calorie-dense snacks between meals"
        }
        (Some(FitnessGoal::MuscleGain), BudgetTier::High) => {
            "Coach-designed bulking plan with premium protein supplements and five structured meals daily"
        }
        (Some(FitnessGoal::Toning), BudgetTier::Low) => {
            "Balanced home meals with moderate protein, whole grains, and minimal processed food"
        }
        (Some(FitnessGoal::Toning), BudgetTier::Medium) => {
            "Portion-controlled balanced meals with a daily protein target and weekly meal prep"
        }
        (Some(FitnessGoal::Toning), BudgetTier::High) => {
            "Nutritionist-curated clean-eating plan built around lean proteins and low-glycemic carbs"
        }
        _ => GENERIC_DIET,
    }
}

/// Workout description keyed by goal and budget tier
fn workout_for(goal: Option<FitnessGoal>, tier: BudgetTier) -> &'static str {
    match (goal, tier) {
        (Some(FitnessGoal::WeightLoss), BudgetTier::Low) => {
            "Brisk walking, bodyweight circuits, and stair climbing; 30-45 minutes most days"
        }
        (Some(FitnessGoal::WeightLoss), BudgetTier::Medium) => {
            "Gym cardio machines with three strength sessions per week and one interval day"
        }
        (Some(FitnessGoal::WeightLoss), BudgetTier::High) => {
            "Personal-trainer-led HIIT sessions plus dedicated strength and mobility programming"
        }
        (Some(FitnessGoal::MuscleGain), BudgetTier::Low) => {
            "Progressive bodyweight strength work: push-ups, pull-ups, dips, and weighted squats"
        }
        (Some(FitnessGoal::MuscleGain), BudgetTier::Medium) => {
            "Gym membership with a four-day upper/lower split and progressive overload"
        }
        (Some(FitnessGoal::MuscleGain), BudgetTier::High) => {
            "Coached hypertrophy program with periodized lifting and recovery tracking"
        }
        (Some(FitnessGoal::Toning), BudgetTier::Low) => {
            "Bodyweight circuits, resistance bands, and yoga; four sessions per week"
        }
        (Some(FitnessGoal::Toning), BudgetTier::Medium) => {
            "Mixed studio classes: pilates, light weights, and steady-state cardio"
        }
        (Some(FitnessGoal::Toning), BudgetTier::High) => {
            "Boutique studio membership combining reformer pilates, barre, and sculpt sessions"
        }
        _ => GENERIC_WORKOUT,
    }
}

/// Budget-band workout recommendation, independent of goal
pub fn workout_recommendations(budget: f64) -> &'static str {
    if budget < recommendation_bands::FREE_BAND {
        "Focus on free options: running, bodyweight routines, and public workout videos"
    } else if budget < recommendation_bands::BASIC_BAND {
        "A basic gym membership plus resistance bands at home gives solid coverage"
    } else {
        "Consider a gym membership with a few personal training sessions to dial in your form"
    }
}

/// Base diet tip plus a suffix for the goal direction
pub fn diet_tips(is_loss: bool, is_gain: bool) -> String {
    let base = "Stay hydrated, prioritize whole foods, and keep a consistent meal schedule. ";
    let suffix = if is_loss {
        "Maintain a moderate calorie deficit and fill half your plate with vegetables."
    } else if is_gain {
        "Eat a small calorie surplus with protein at every meal to support muscle growth."
    } else {
        "Keep calories at maintenance and focus on food quality over quantity."
    };
    format!("{base}{suffix}")
}

/// Monthly cost narrative with the display symbol for the currency
///
/// Currency mapping is total: anything other than USD or EUR renders as ₹.
pub fn estimated_monthly_cost(budget: f64, currency: &str) -> String {
    let symbol = match currency {
        "USD" => "$",
        "EUR" => "€",
        _ => "₹",
    };

    if budget == 0.0 {
        format!("No budget set; free resources keep your plan at {symbol}0 per month")
    } else if budget < 50.0 {
        format!("A lean plan: roughly {symbol}{budget} per month on basics like bands and staples")
    } else if budget < 150.0 {
        format!(
            "A moderate plan: about {symbol}{budget} per month covering a gym membership and groceries"
        )
    } else {
        format!(
            "A premium plan: around {symbol}{budget} per month including coaching and meal support"
        )
    }
}

/// Pick one quote uniformly from the fixed list
pub fn motivational_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_QUOTES[rng.gen_range(0..MOTIVATIONAL_QUOTES.len())]
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(weight: f64, target: f64, duration: u32) -> FitnessProfile {
        FitnessProfile {
            weight_kg: weight,
            target_weight_kg: Some(target),
            bmi: 24.0,
            goal: None,
            duration_days: Some(duration),
            budget: None,
            currency: None,
        }
    }

    #[test]
    fn test_maintenance_is_trivially_feasible() {
        let mut projector = PlanProjector::new();
        let projection = projector.project(&profile(70.0, 70.0, 60));

        assert!(projection.feasible);
        assert!(projection
            .weekly_plan
            .iter()
            .all(|entry| entry.goal_label == "Maintain current weight"));
    }

    #[test]
    fn test_weeks_is_ceiling_of_duration_over_seven() {
        let mut projector = PlanProjector::new();
        assert_eq!(projector.project(&profile(70.0, 70.0, 60)).weekly_plan.len(), 9);
        assert_eq!(projector.project(&profile(70.0, 70.0, 7)).weekly_plan.len(), 1);
        assert_eq!(projector.project(&profile(70.0, 70.0, 8)).weekly_plan.len(), 2);
        assert_eq!(projector.project(&profile(70.0, 70.0, 90)).weekly_plan.len(), 13);
    }

    #[test]
    fn test_milestone_counts() {
        let mut projector = PlanProjector::new();
        // 60 days -> 9 weeks -> min(4, 4) = 4
        assert_eq!(projector.project(&profile(70.0, 65.0, 60)).milestones.len(), 4);
        // 21 days -> 3 weeks -> min(4, 1) = 1
        assert_eq!(projector.project(&profile(70.0, 65.0, 21)).milestones.len(), 1);
        // 7 days -> 1 week -> min(4, 0) = 0
        assert!(projector.project(&profile(70.0, 65.0, 7)).milestones.is_empty());
    }

    #[test]
    fn test_weight_loss_end_to_end() {
        let input = FitnessProfile {
            weight_kg: 92.0,
            target_weight_kg: Some(80.0),
            bmi: 29.7,
            goal: Some(FitnessGoal::WeightLoss),
            duration_days: Some(90),
            budget: Some(150.0),
            currency: Some("INR".to_string()),
        };

        let projection = PlanProjector::new().project(&input);

        // -12kg over 90 days: -12 / (90/7) = -0.933 -> -0.9/week
        assert_eq!(projection.weekly_plan.len(), 13);
        assert_eq!(projection.weekly_plan[0].goal_label, "Lose 0.9kg");
        // 12 <= 90 * 0.5
        assert!(projection.feasible);
        assert_eq!(projection.milestones.len(), 4);
        // Medium tier (150 is above 100, at most 200)
        assert!(projection.weekly_plan[0].diet.contains("calorie-tracking"));
        // INR is not USD/EUR, so the rupee symbol applies
        assert!(projection.estimated_monthly_cost.contains('₹'));
        assert!(projection.summary.contains("lose 12kg over the next 90 days"));
    }

    #[test]
    fn test_infeasible_gain_flagged() {
        // +40kg in 30 days; max safe gain is 30 * 0.25 = 7.5
        let projection = PlanProjector::new().project(&profile(60.0, 100.0, 30));
        assert!(!projection.feasible);
        assert!(projection.summary.contains("exceeds safe"));
    }

    #[test]
    fn test_milestones_interpolate_between_weights() {
        let projection = PlanProjector::new().project(&profile(92.0, 80.0, 90));
        // 13 weeks, 4 milestones: week floor(13/4 * i), weight 92 - 3*i
        assert_eq!(projection.milestones[0], "Week 3: 89.0kg target");
        assert_eq!(projection.milestones[1], "Week 6: 86.0kg target");
        assert_eq!(projection.milestones[2], "Week 9: 83.0kg target");
        assert_eq!(projection.milestones[3], "Week 13: 80.0kg target");
    }

    #[test]
    fn test_goal_fallback_uses_generic_strings() {
        let mut input = profile(70.0, 70.0, 60);
        input.goal = Some(FitnessGoal::Endurance);
        let projection = PlanProjector::new().project(&input);
        assert_eq!(projection.weekly_plan[0].diet, GENERIC_DIET);
        assert_eq!(projection.weekly_plan[0].workout, GENERIC_WORKOUT);
    }

    #[test]
    fn test_quote_is_deterministic_with_pinned_rng() {
        // StepRng always yields the minimum, so the first quote is selected.
        let mut projector = PlanProjector::with_rng(StepRng::new(0, 0));
        let projection = projector.project(&profile(70.0, 70.0, 60));
        assert_eq!(projection.motivational_quote, MOTIVATIONAL_QUOTES[0]);
    }

    #[test]
    fn test_quote_reproducible_across_seeded_runs() {
        let input = profile(70.0, 70.0, 60);
        let first = PlanProjector::with_rng(StdRng::seed_from_u64(42)).project(&input);
        let second = PlanProjector::with_rng(StdRng::seed_from_u64(42)).project(&input);
        assert_eq!(first.motivational_quote, second.motivational_quote);
    }

    #[test]
    fn test_workout_recommendation_bands() {
        assert!(workout_recommendations(0.0).contains("free options"));
        assert!(workout_recommendations(49.0).contains("free options"));
        assert!(workout_recommendations(50.0).contains("basic gym membership"));
        assert!(workout_recommendations(150.0).contains("personal training"));
    }

    #[test]
    fn test_estimated_cost_currency_symbols() {
        assert!(estimated_monthly_cost(100.0, "USD").contains('$'));
        assert!(estimated_monthly_cost(100.0, "EUR").contains('€'));
        assert!(estimated_monthly_cost(100.0, "INR").contains('₹'));
        assert!(estimated_monthly_cost(100.0, "GBP").contains('₹'));
    }

    #[test]
    fn test_estimated_cost_bands() {
        assert!(estimated_monthly_cost(0.0, "USD").contains("No budget set"));
        assert!(estimated_monthly_cost(25.0, "USD").contains("lean plan"));
        assert!(estimated_monthly_cost(100.0, "USD").contains("moderate plan"));
        assert!(estimated_monthly_cost(500.0, "USD").contains("premium plan"));
    }

    #[test]
    fn test_diet_tips_direction_suffixes() {
        assert!(diet_tips(true, false).contains("calorie deficit"));
        assert!(diet_tips(false, true).contains("calorie surplus"));
        assert!(diet_tips(false, false).contains("maintenance"));
    }
}
