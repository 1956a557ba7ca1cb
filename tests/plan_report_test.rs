// ABOUTME: Integration tests for combined plan reports and parallel batch validation
// ABOUTME: Tests bundle parsing errors, verdict combination, and input-order batch results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

mod common;

use common::{full_week_meals, init_test_logging, sample_workout_week, week_targets};
use fitplan_validation::errors::ErrorCode;
use fitplan_validation::models::{
    IngredientNutrition, RecipeEntry, RecipeNutritionClaim, RestrictionProfile,
};
use fitplan_validation::report::{validate_bundles, validate_plan_bundle, PlanBundle};
use serde_json::json;

fn clean_bundle(id: &str) -> PlanBundle {
    PlanBundle {
        id: Some(id.to_owned()),
        meals: full_week_meals(),
        targets: week_targets(),
        workout: Some(serde_json::to_value(sample_workout_week()).unwrap()),
        ..PlanBundle::default()
    }
}

// ============================================================================
// Bundle parsing
// ============================================================================

#[test]
fn test_bundle_must_be_object() {
    let error = PlanBundle::from_json("[1, 2, 3]").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_bundle_requires_meals() {
    let error = PlanBundle::from_value(json!({ "targets": {} })).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert!(error.to_string().contains("meals"));

    let error = PlanBundle::from_value(json!({ "meals": "breakfast" })).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_bundle_rejects_malformed_json() {
    let error = PlanBundle::from_json("{ meals: ").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_bundle_from_generator_json() {
    let bundle = PlanBundle::from_value(json!({
        "id": "candidate-1",
        "meals": [
            { "day": "monday", "mealType": "breakfast", "name": "Oats", "calories": 500,
              "protein": 30, "carbs": 50, "fat": 20, "ingredients": ["1 cup oats"] }
        ],
        "targets": { "monday": { "breakfast": { "calories": 500 } } },
        "restrictions": { "dietPrefs": ["vegan"], "foodAllergies": [] },
        "preferredFoods": ["oats"],
        "recipes": [{ "mealName": "Oats", "estimatedCalories": 500 }],
        "workoutPreferences": { "experienceLevel": "Intermediate" }
    }))
    .unwrap();

    assert_eq!(bundle.id.as_deref(), Some("candidate-1"));
    assert_eq!(bundle.meals.len(), 1);
    assert_eq!(bundle.restrictions.diet_prefs, vec!["vegan"]);
    assert_eq!(bundle.recipes[0].meal_name, "Oats");
    assert!(bundle.workout.is_none());
}

// ============================================================================
// Verdict combination
// ============================================================================

#[test]
fn test_clean_bundle_is_valid() {
    init_test_logging();
    let report = validate_plan_bundle(&clean_bundle("clean"));

    assert!(report.valid);
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.id.as_deref(), Some("clean"));
    assert!(report.workout.as_ref().is_some_and(|workout| workout.valid));
    assert!(report.grocery_list.is_empty());
}

#[test]
fn test_restriction_error_fails_bundle() {
    init_test_logging();
    let mut bundle = clean_bundle("salmon-for-vegans");
    bundle.restrictions = RestrictionProfile::with_diets(["vegan"]);

    let report = validate_plan_bundle(&bundle);

    // "Greek yogurt parfait" and "Baked salmon with rice" every day
    assert!(!report.valid);
    assert!(report.meal_plan.valid);
    assert!(!report.restrictions.valid);
    assert!(report.error_count() >= 14);
}

#[test]
fn test_recipe_and_workout_errors_fail_bundle() {
    init_test_logging();
    let mut bundle = clean_bundle("bad-recipe");
    bundle.recipes = vec![RecipeEntry {
        meal_name: "Quinoa power bowl".to_owned(),
        claim: RecipeNutritionClaim {
            estimated_calories: Some(700.0),
            ingredients_with_nutrition: Some(vec![IngredientNutrition::new(
                "quinoa", 1000.0, 0.0, 0.0, 0.0,
            )]),
            ..RecipeNutritionClaim::default()
        },
    }];
    bundle.workout = Some(json!("rest all week"));

    let report = validate_plan_bundle(&bundle);

    assert!(!report.valid);
    assert!(!report.recipes[0].result.valid);
    assert_eq!(
        report.workout.as_ref().unwrap().errors,
        vec!["Workout plan must be an array of days"]
    );
    assert_eq!(report.error_count(), 2);
}

#[test]
fn test_preference_conflicts_do_not_affect_validity() {
    init_test_logging();
    let mut bundle = clean_bundle("contradictory-survey");
    bundle.preferred_foods = vec!["bacon".to_owned()];
    bundle.restrictions.food_allergies = vec!["bacon".to_owned()];

    let report = validate_plan_bundle(&bundle);

    assert!(report.valid);
    assert_eq!(report.preference_conflicts.len(), 1);
    assert_eq!(report.preference_conflicts[0].restriction, "allergy: bacon");
}

#[test]
fn test_report_serializes_camel_case() {
    init_test_logging();
    let value = serde_json::to_value(validate_plan_bundle(&clean_bundle("json"))).unwrap();

    assert_eq!(value["id"], "json");
    assert!(value["mealPlan"]["dailySummaries"].is_array());
    assert!(value["preferenceConflicts"].is_array());
    assert!(value["groceryList"].is_array());
    assert!(value["generatedAt"].is_string());
}

// ============================================================================
// Batch validation
// ============================================================================

#[test]
fn test_batch_preserves_input_order() {
    init_test_logging();
    let bundles: Vec<PlanBundle> = (0..24)
        .map(|index| {
            let mut bundle = clean_bundle(&format!("candidate-{index}"));
            if index % 3 == 0 {
                bundle.restrictions = RestrictionProfile::with_diets(["vegetarian"]);
            }
            bundle
        })
        .collect();

    let reports = validate_bundles(&bundles);

    assert_eq!(reports.len(), bundles.len());
    for (index, report) in reports.iter().enumerate() {
        assert_eq!(report.id, Some(format!("candidate-{index}")));
        assert_eq!(report.valid, index % 3 != 0, "candidate-{index}");
    }
}
