// ABOUTME: Combined plan report running every validator over one candidate plan bundle
// ABOUTME: Batch validation of many candidates in parallel with results in input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Reports
//!
//! A [`PlanBundle`] is the JSON document an upstream pipeline hands over for
//! one candidate: meals, targets, the restriction profile, optional recipe
//! breakdowns, and an optional workout plan. [`validate_plan_bundle`] runs the
//! applicable validators and combines their verdicts; the bundle is valid only
//! when every part is.

use crate::config::ValidationConfig;
use crate::grocery::build_grocery_list;
use crate::validation::{
    check_preference_conflicts, validate_ingredient_sums_with_config,
    validate_meal_plan_with_config, validate_restrictions,
    validate_workout_plan_value_with_config,
    IngredientSumResult, MealPlanValidationResult, PreferenceConflict, RestrictionResult,
    Severity, WorkoutValidationResult,
};
use chrono::{DateTime, Utc};
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{
    GroceryItem, MealSlot, NutritionTargets, RecipeEntry, RestrictionProfile, WorkoutPreferences,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// One candidate plan with everything needed to validate it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBundle {
    /// Caller-chosen identifier echoed in the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Weekly meal slots
    pub meals: Vec<MealSlot>,
    /// Weekly calorie targets
    #[serde(default)]
    pub targets: NutritionTargets,
    /// Survey restrictions
    #[serde(default)]
    pub restrictions: RestrictionProfile,
    /// Foods the user said they like
    #[serde(default)]
    pub preferred_foods: Vec<String>,
    /// Recipe breakdowns to cross-check
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,
    /// Raw workout plan, validated only when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<Value>,
    /// Survey workout preferences
    #[serde(default)]
    pub workout_preferences: WorkoutPreferences,
}

impl PlanBundle {
    /// Parse a bundle from JSON
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not an object, when `meals` is
    /// missing or not an array, or when a field has an unusable shape
    pub fn from_value(value: Value) -> AppResult<Self> {
        let Some(object) = value.as_object() else {
            return Err(AppError::invalid_input("plan bundle must be a JSON object"));
        };
        match object.get("meals") {
            None => return Err(AppError::missing_field("meals")),
            Some(meals) if !meals.is_array() => {
                return Err(AppError::invalid_input("`meals` must be an array of meal slots"));
            }
            Some(_) => {}
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a bundle from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not JSON or not a valid bundle
    pub fn from_json(text: &str) -> AppResult<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }
}

/// Ingredient-sum outcome for one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeReport {
    /// Meal the recipe belongs to
    pub meal_name: String,
    /// Validator outcome
    pub result: IngredientSumResult,
}

/// Combined outcome for one bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    /// Bundle identifier, when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Conjunction of every part's validity
    pub valid: bool,
    /// Meal-plan numeric checks
    pub meal_plan: MealPlanValidationResult,
    /// Meal content restriction scan
    pub restrictions: RestrictionResult,
    /// Contradictions within the survey answers
    pub preference_conflicts: Vec<PreferenceConflict>,
    /// One entry per recipe
    pub recipes: Vec<RecipeReport>,
    /// Workout checks, when a workout plan was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutValidationResult>,
    /// Shopping list derived from the meals
    pub grocery_list: Vec<GroceryItem>,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl PlanReport {
    /// Total blocking findings across all parts
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.meal_plan.errors.len()
            + self
                .restrictions
                .violations
                .iter()
                .filter(|violation| violation.severity == Severity::Error)
                .count()
            + self
                .recipes
                .iter()
                .map(|recipe| recipe.result.errors.len())
                .sum::<usize>()
            + self
                .workout
                .as_ref()
                .map_or(0, |workout| workout.errors.len())
    }
}

/// Validate one bundle with the global configuration
#[must_use]
pub fn validate_plan_bundle(bundle: &PlanBundle) -> PlanReport {
    validate_plan_bundle_with_config(bundle, ValidationConfig::global())
}

/// Validate one bundle
///
/// Preference conflicts describe the survey rather than the plan, so they
/// are reported but do not affect `valid`.
#[must_use]
pub fn validate_plan_bundle_with_config(bundle: &PlanBundle, config: &ValidationConfig) -> PlanReport {
    let meal_plan = validate_meal_plan_with_config(&bundle.meals, &bundle.targets, &config.meal_plan);
    let restrictions = validate_restrictions(&bundle.meals, &bundle.restrictions);
    let preference_conflicts = check_preference_conflicts(
        &bundle.preferred_foods,
        &bundle.restrictions.diet_prefs,
        &bundle.restrictions.strict_exclusions,
        &bundle.restrictions.food_allergies,
    );
    let recipes: Vec<RecipeReport> = bundle
        .recipes
        .iter()
        .map(|recipe| RecipeReport {
            meal_name: recipe.meal_name.clone(),
            result: validate_ingredient_sums_with_config(
                &recipe.meal_name,
                &recipe.claim,
                &config.ingredient_sums,
            ),
        })
        .collect();
    let workout = bundle
        .workout
        .as_ref()
        .map(|plan| {
            validate_workout_plan_value_with_config(
                plan,
                &bundle.workout_preferences,
                &config.workout,
            )
        });

    let valid = meal_plan.valid
        && restrictions.valid
        && recipes.iter().all(|recipe| recipe.result.valid)
        && workout.as_ref().map_or(true, |workout| workout.valid);

    let report = PlanReport {
        id: bundle.id.clone(),
        valid,
        meal_plan,
        restrictions,
        preference_conflicts,
        recipes,
        workout,
        grocery_list: build_grocery_list(&bundle.meals),
        generated_at: Utc::now(),
    };

    let id = bundle.id.as_deref().unwrap_or("-");
    if report.valid {
        info!(bundle = id, meals = bundle.meals.len(), "Plan bundle accepted");
    } else {
        warn!(
            bundle = id,
            meals = bundle.meals.len(),
            errors = report.error_count(),
            "Plan bundle rejected"
        );
    }
    report
}

/// Validate many bundles in parallel, returning reports in input order
#[must_use]
pub fn validate_bundles(bundles: &[PlanBundle]) -> Vec<PlanReport> {
    let config = ValidationConfig::global();
    bundles
        .par_iter()
        .map(|bundle| validate_plan_bundle_with_config(bundle, config))
        .collect()
}
