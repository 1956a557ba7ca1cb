// ABOUTME: Benchmark fixtures generating realistic weekly meal and workout plans
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating weekly plans.
//!
//! Every generator is a pure function of its index so that runs are
//! comparable across machines.

use fitplan_validation::models::{
    DayOfWeek, DayTargets, Exercise, IngredientNutrition, MealSlot, MealType, NutritionTargets,
    RecipeEntry, RecipeNutritionClaim, RestrictionProfile, WorkoutDayPlan,
};
use fitplan_validation::report::PlanBundle;
use serde_json::Value;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BundleBatchSize {
    /// Small batch (8 candidates) - one retry round
    Small,
    /// Medium batch (64 candidates) - nightly regeneration
    Medium,
}

impl BundleBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Medium => 64,
        }
    }
}

const INGREDIENT_POOL: &[&str] = &[
    "2 cups fresh spinach",
    "1 lb boneless skinless chicken breast",
    "1 cup brown rice",
    "3 large eggs",
    "1 tbsp olive oil",
    "½ cup greek yogurt",
    "1 cup blueberries",
    "2 cloves garlic, minced",
    "1 medium sweet potato",
    "200g salmon fillet",
    "1 can chickpeas, drained",
    "1 tsp cumin",
];

/// Weekly targets shared by every generated plan
#[must_use]
pub fn week_targets() -> NutritionTargets {
    NutritionTargets::uniform(DayTargets::from_slots(500.0, 700.0, 800.0))
}

/// Twenty-one meals whose calories drift around their targets
#[must_use]
pub fn generate_week(seed: usize) -> Vec<MealSlot> {
    DayOfWeek::ALL
        .into_iter()
        .enumerate()
        .flat_map(|(day_index, day)| {
            MealType::ALL
                .into_iter()
                .enumerate()
                .map(move |(slot_index, meal_type)| {
                    let index = seed * 21 + day_index * 3 + slot_index;
                    let base = [500.0, 700.0, 800.0][slot_index];
                    let drift = ((index * 37) % 31) as f64 - 15.0;
                    let calories = base * (1.0 + drift / 100.0);
                    let ingredients = (0..4)
                        .map(|offset| INGREDIENT_POOL[(index + offset * 5) % INGREDIENT_POOL.len()]);
                    MealSlot::new(
                        day,
                        meal_type,
                        format!("Meal {index}"),
                        calories,
                        calories * 0.3 / 4.0,
                        calories * 0.4 / 4.0,
                        calories * 0.3 / 9.0,
                    )
                    .with_ingredients(ingredients)
                })
        })
        .collect()
}

/// Four training days and three rest days
#[must_use]
pub fn generate_workout() -> Vec<WorkoutDayPlan> {
    DayOfWeek::ALL
        .into_iter()
        .enumerate()
        .map(|(index, day)| {
            if index % 2 == 0 {
                let mut plan = WorkoutDayPlan::training(
                    day.as_str(),
                    "strength",
                    vec![
                        Exercise::reps("Squat", "barbell", 4.0, 8.0),
                        Exercise::reps("Bench press", "barbell", 4.0, 8.0),
                        Exercise::reps("Row", "dumbbell", 3.0, 12.0),
                        Exercise::timed("Plank", "bodyweight", 3.0, 60.0),
                        Exercise::reps("Lunge", "dumbbell", 3.0, 10.0),
                    ],
                );
                plan.estimated_time = Some(55.0);
                plan.estimated_calories = Some(380.0);
                plan
            } else {
                WorkoutDayPlan::rest(day.as_str(), Some("easy walk"))
            }
        })
        .collect()
}

/// A recipe claim with a four-row ingredient breakdown
#[must_use]
pub fn generate_recipe(name: &str) -> RecipeEntry {
    RecipeEntry {
        meal_name: name.to_owned(),
        claim: RecipeNutritionClaim {
            estimated_calories: Some(650.0),
            protein: 45.0,
            carbs: 60.0,
            fat: 22.0,
            ingredients_with_nutrition: Some(vec![
                IngredientNutrition::new("chicken breast", 280.0, 40.0, 0.0, 6.0),
                IngredientNutrition::new("brown rice", 220.0, 5.0, 46.0, 2.0),
                IngredientNutrition::new("olive oil", 120.0, 0.0, 0.0, 14.0),
                IngredientNutrition::new("broccoli", 40.0, 3.0, 8.0, 0.0),
            ]),
            ..RecipeNutritionClaim::default()
        },
    }
}

/// Complete candidate bundles, every fourth one pescatarian
#[must_use]
pub fn generate_bundles(size: BundleBatchSize) -> Vec<PlanBundle> {
    let workout = serde_json::to_value(generate_workout()).unwrap_or(Value::Null);
    (0..size.count())
        .map(|seed| PlanBundle {
            id: Some(format!("candidate-{seed}")),
            meals: generate_week(seed),
            targets: week_targets(),
            restrictions: if seed % 4 == 0 {
                RestrictionProfile::with_diets(["pescatarian"])
            } else {
                RestrictionProfile::default()
            },
            preferred_foods: vec!["salmon".to_owned(), "rice".to_owned()],
            recipes: vec![generate_recipe("Meal 0")],
            workout: Some(workout.clone()),
            ..PlanBundle::default()
        })
        .collect()
}
