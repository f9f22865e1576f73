// ABOUTME: Fitgoal CLI - command-line front end for plan projection and generation
// ABOUTME: Projects plans offline from a profile file or submits a survey to the webhook
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors
//!
//! Usage:
//! ```bash
//! # Project a plan offline from a profile JSON file
//! fitgoal-cli project --input profile.json
//!
//! # Submit a manual survey to the plan-generation webhook
//! fitgoal-cli generate --input survey.json
//!
//! # Compute BMI from raw biometrics
//! fitgoal-cli bmi --weight-kg 92 --height-cm 176
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use fitgoal::config::PlannerConfig;
use fitgoal::errors::{AppError, AppResult};
use fitgoal::intelligence::PlanProjector;
use fitgoal::models::{body_mass_index, FitnessProfile};
use fitgoal::providers::WebhookPlanProvider;
use fitgoal::survey::{PlanRequest, SurveyUser};

#[derive(Parser)]
#[command(
    name = "fitgoal-cli",
    about = "Fitgoal planner CLI",
    long_about = "Command-line tool for projecting fitness plans offline and generating full plans via the remote webhook."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a plan offline from a fitness profile JSON file
    Project {
        /// Path to a FitnessProfile JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,
        /// Write the projection JSON here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Submit a manual survey to the plan-generation webhook
    Generate {
        /// Path to a SurveyUser JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,
    },
    /// Compute Body Mass Index from weight and height
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight_kg: f64,
        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    fitgoal::logging::init_from_env()
        .map_err(|e| AppError::config(format!("failed to initialize logging: {e}")))?;

    let cli = Cli::parse();
    match cli.command {
        Command::Project { input, output } => project(&input, output.as_deref()).await,
        Command::Generate { input } => generate(&input).await,
        Command::Bmi {
            weight_kg,
            height_cm,
        } => {
            println!("{}", body_mass_index(weight_kg, height_cm));
            Ok(())
        }
    }
}

async fn project(input: &std::path::Path, output: Option<&std::path::Path>) -> AppResult<()> {
    let raw = tokio::fs::read_to_string(input).await.map_err(|e| {
        AppError::invalid_input(format!("cannot read profile file: {}", input.display()))
            .with_source(e)
    })?;
    let profile: FitnessProfile = serde_json::from_str(&raw)
        .map_err(|e| AppError::invalid_format("profile file is not valid JSON").with_source(e))?;

    let projection = PlanProjector::new().project(&profile);
    let rendered = serde_json::to_string_pretty(&projection)
        .map_err(|e| AppError::serialization("cannot serialize projection").with_source(e))?;

    match output {
        Some(path) => {
            tokio::fs::write(path, rendered).await.map_err(|e| {
                AppError::internal(format!("cannot write {}", path.display())).with_source(e)
            })?;
            info!(path = %path.display(), "projection written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

async fn generate(input: &std::path::Path) -> AppResult<()> {
    let raw = tokio::fs::read_to_string(input).await.map_err(|e| {
        AppError::invalid_input(format!("cannot read survey file: {}", input.display()))
            .with_source(e)
    })?;
    let user: SurveyUser = serde_json::from_str(&raw)
        .map_err(|e| AppError::invalid_format("survey file is not valid JSON").with_source(e))?;

    let config = PlannerConfig::from_env()?;
    let provider = WebhookPlanProvider::new(&config)?;
    let plan = provider.generate_plan(&PlanRequest::manual(user)).await?;

    let rendered = serde_json::to_string_pretty(&plan)
        .map_err(|e| AppError::serialization("cannot serialize plan").with_source(e))?;
    println!("{rendered}");

    if !plan.has_plan_details() {
        info!("plan details were not included; full details are delivered by email");
    }
    Ok(())
}
