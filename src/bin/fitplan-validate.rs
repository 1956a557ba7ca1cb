// ABOUTME: FitPlan validation CLI - checks plan JSON files and prints JSON reports
// ABOUTME: Exits 0 when every plan is valid, 1 when any plan has errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Validate a full plan bundle (meals, targets, restrictions, recipes, workout)
//! fitplan-validate bundle plan.json
//!
//! # Validate many candidate bundles in parallel
//! fitplan-validate bundle candidate-*.json
//!
//! # Validate only the meal plan
//! fitplan-validate meal-plan --meals meals.json --targets targets.json
//!
//! # Cross-check a recipe against its ingredient breakdown
//! fitplan-validate recipe recipe.json --name "Chicken stir fry"
//!
//! # Print the effective thresholds
//! fitplan-validate config
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitplan_validation::config::ValidationConfig;
use fitplan_validation::errors::{AppError, ErrorCode};
use fitplan_validation::grocery::build_grocery_list;
use fitplan_validation::logging::{init_from_env, LoggingConfig, ValidationLogger};
use fitplan_validation::models::{
    MealSlot, NutritionTargets, RecipeEntry, RestrictionProfile, WorkoutPreferences,
};
use fitplan_validation::report::{validate_bundles, PlanBundle};
use fitplan_validation::validation::{
    check_preference_conflicts, validate_ingredient_sums, validate_meal_plan,
    validate_restrictions, validate_workout_plan_value, Severity,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "fitplan-validate",
    about = "Validate generated meal and workout plans",
    long_about = "Checks weekly meal and workout plans against calorie targets, macro consistency, dietary restrictions, and structural completeness."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one or more plan bundles
    Bundle {
        /// Bundle JSON files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Validate meals against calorie targets
    MealPlan {
        /// JSON array of meal slots
        #[arg(long)]
        meals: PathBuf,

        /// JSON object of per-day targets
        #[arg(long)]
        targets: PathBuf,
    },

    /// Cross-check a recipe's stated nutrition against its ingredients
    Recipe {
        /// Recipe nutrition claim JSON
        file: PathBuf,

        /// Meal name used in messages (defaults to the recipe's own name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Scan meals for dietary restriction violations
    Restrictions {
        /// JSON array of meal slots
        #[arg(long)]
        meals: PathBuf,

        /// Restriction profile JSON
        #[arg(long)]
        profile: PathBuf,

        /// Preferred foods to check against the profile
        #[arg(long, value_delimiter = ',')]
        preferred: Vec<String>,
    },

    /// Validate a workout plan
    Workout {
        /// JSON array of workout days
        plan: PathBuf,

        /// Workout preferences JSON
        #[arg(long)]
        preferences: Option<PathBuf>,
    },

    /// Build the grocery list for a week of meals
    Grocery {
        /// JSON array of meal slots
        #[arg(long)]
        meals: PathBuf,
    },

    /// Print the effective validation thresholds
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig {
            level: "debug".into(),
            ..LoggingConfig::from_env()
        }
        .init()
    } else {
        init_from_env()
    };
    if let Err(e) = logging {
        eprintln!("Logging disabled: {e}");
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<AppError>()
                .map_or(ErrorCode::InternalError.exit_code(), |app_error| {
                    app_error.code.exit_code()
                });
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// Run a command, returning whether everything validated
fn run(cli: Cli) -> Result<bool> {
    let pretty = cli.pretty;
    match cli.command {
        Command::Bundle { files } => run_bundles(&files, pretty),
        Command::MealPlan { meals, targets } => {
            let meals: Vec<MealSlot> = read_json(&meals)?;
            let targets: NutritionTargets = read_json(&targets)?;
            let result = validate_meal_plan(&meals, &targets);
            ValidationLogger::log_outcome(
                "meal_plan",
                "meals",
                result.valid,
                result.errors.len(),
                result.warnings.len(),
            );
            print_json(&result, pretty)?;
            Ok(result.valid)
        }
        Command::Recipe { file, name } => {
            let recipe: RecipeEntry = read_json(&file)?;
            let meal_name = name.unwrap_or_else(|| recipe.meal_name.clone());
            let result = validate_ingredient_sums(&meal_name, &recipe.claim);
            ValidationLogger::log_outcome(
                "ingredient_sums",
                &meal_name,
                result.valid,
                result.errors.len(),
                result.warnings.len(),
            );
            print_json(&result, pretty)?;
            Ok(result.valid)
        }
        Command::Restrictions {
            meals,
            profile,
            preferred,
        } => {
            let meals: Vec<MealSlot> = read_json(&meals)?;
            let profile: RestrictionProfile = read_json(&profile)?;
            let result = validate_restrictions(&meals, &profile);
            let error_count = result
                .violations
                .iter()
                .filter(|violation| violation.severity == Severity::Error)
                .count();
            ValidationLogger::log_outcome(
                "restrictions",
                "meals",
                result.valid,
                error_count,
                result.violations.len() - error_count,
            );
            let conflicts = check_preference_conflicts(
                &preferred,
                &profile.diet_prefs,
                &profile.strict_exclusions,
                &profile.food_allergies,
            );
            print_json(
                &serde_json::json!({
                    "valid": result.valid,
                    "violations": result.violations,
                    "preferenceConflicts": conflicts,
                }),
                pretty,
            )?;
            Ok(result.valid)
        }
        Command::Workout { plan, preferences } => {
            let plan: Value = read_json(&plan)?;
            let preferences: WorkoutPreferences = match preferences {
                Some(path) => read_json(&path)?,
                None => WorkoutPreferences::default(),
            };
            let result = validate_workout_plan_value(&plan, &preferences);
            ValidationLogger::log_outcome(
                "workout",
                "plan",
                result.valid,
                result.errors.len(),
                result.warnings.len(),
            );
            print_json(&result, pretty)?;
            Ok(result.valid)
        }
        Command::Grocery { meals } => {
            let meals: Vec<MealSlot> = read_json(&meals)?;
            print_json(&build_grocery_list(&meals), pretty)?;
            Ok(true)
        }
        Command::Config => {
            let config = ValidationConfig::load().map_err(AppError::from)?;
            print_json(&config, pretty)?;
            Ok(true)
        }
    }
}

fn run_bundles(files: &[PathBuf], pretty: bool) -> Result<bool> {
    let bundles = files
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .map_err(AppError::from)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            PlanBundle::from_json(&text)
                .with_context(|| format!("Invalid plan bundle in {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let started = Instant::now();
    let reports = validate_bundles(&bundles);
    let rejected = reports.iter().filter(|report| !report.valid).count();
    ValidationLogger::log_batch(reports.len(), rejected, started.elapsed().as_millis());

    if let [report] = reports.as_slice() {
        print_json(report, pretty)?;
    } else {
        print_json(&reports, pretty)?;
    }
    Ok(rejected == 0)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
