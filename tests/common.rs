// ABOUTME: Shared test utilities and plan fixtures for integration tests
// ABOUTME: Provides quiet logging setup and consistent weekly meal and workout builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fitplan_validation`
//!
//! Fixture meals have macros that reproduce their stated calories exactly
//! under the Atwater factors, so a fixture week is silent unless a test
//! perturbs it.

use fitplan_validation::models::{
    DayOfWeek, DayTargets, Exercise, MealSlot, MealType, NutritionTargets, WorkoutDayPlan,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Breakfast target (kcal)
pub const BREAKFAST_TARGET: f64 = 500.0;
/// Lunch target (kcal)
pub const LUNCH_TARGET: f64 = 700.0;
/// Dinner target (kcal)
pub const DINNER_TARGET: f64 = 800.0;

/// Same slot targets every day, daily total 2000 kcal
pub fn week_targets() -> NutritionTargets {
    NutritionTargets::uniform(DayTargets::from_slots(
        BREAKFAST_TARGET,
        LUNCH_TARGET,
        DINNER_TARGET,
    ))
}

/// 500 kcal: 30g protein, 50g carbs, 20g fat
pub fn breakfast(day: DayOfWeek) -> MealSlot {
    MealSlot::new(day, MealType::Breakfast, "Greek yogurt parfait", 500.0, 30.0, 50.0, 20.0)
}

/// 700 kcal: 40g protein, 90g carbs, 20g fat
pub fn lunch(day: DayOfWeek) -> MealSlot {
    MealSlot::new(day, MealType::Lunch, "Quinoa power bowl", 700.0, 40.0, 90.0, 20.0)
}

/// 800 kcal: 60g protein, 95g carbs, 20g fat
pub fn dinner(day: DayOfWeek) -> MealSlot {
    MealSlot::new(day, MealType::Dinner, "Baked salmon with rice", 800.0, 60.0, 95.0, 20.0)
}

/// Seven days of three meals, each exactly on target
pub fn full_week_meals() -> Vec<MealSlot> {
    DayOfWeek::ALL
        .into_iter()
        .flat_map(|day| [breakfast(day), lunch(day), dinner(day)])
        .collect()
}

/// Replace the calories of one slot, keeping its macros
pub fn with_calories(
    mut meals: Vec<MealSlot>,
    day: DayOfWeek,
    meal_type: MealType,
    calories: f64,
) -> Vec<MealSlot> {
    for meal in &mut meals {
        if meal.day_of_week() == Some(day) && meal.meal_kind() == Some(meal_type) {
            meal.calories = calories;
        }
    }
    meals
}

/// A plausible full-body training day
pub fn training_day(day: &str) -> WorkoutDayPlan {
    let mut plan = WorkoutDayPlan::training(
        day,
        "full body",
        vec![
            Exercise::reps("Goblet squat", "dumbbell", 3.0, 10.0),
            Exercise::reps("Push-up", "bodyweight", 3.0, 12.0),
            Exercise::reps("Bent-over row", "dumbbell", 3.0, 10.0),
            Exercise::timed("Plank", "bodyweight", 3.0, 45.0),
        ],
    );
    plan.estimated_time = Some(45.0);
    plan.estimated_calories = Some(300.0);
    plan
}

/// Three training days and a rest day with recovery guidance
pub fn sample_workout_week() -> Vec<WorkoutDayPlan> {
    vec![
        training_day("monday"),
        training_day("wednesday"),
        training_day("friday"),
        WorkoutDayPlan::rest("sunday", Some("20 minute easy walk and stretching")),
    ]
}
