// ABOUTME: Recipe ingredient-sum validator comparing stated totals to the ingredient breakdown
// ABOUTME: Tiers each nutrient's percent deviation into warnings and errors independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{classify_deviation, percent_deviation, round1, Findings};
use crate::config::{IngredientSumThresholds, ValidationConfig};
use fitplan_core::models::RecipeNutritionClaim;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Stated vs summed values for every nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSumDetails {
    /// Number of ingredient rows summed
    pub ingredient_count: usize,
    /// Stated calories
    pub stated_calories: f64,
    /// Summed ingredient calories
    pub summed_calories: f64,
    /// Calorie deviation percent
    pub calorie_deviation: f64,
    /// Stated protein
    pub stated_protein: f64,
    /// Summed ingredient protein
    pub summed_protein: f64,
    /// Protein deviation percent
    pub protein_deviation: f64,
    /// Stated carbohydrates
    pub stated_carbs: f64,
    /// Summed ingredient carbohydrates
    pub summed_carbs: f64,
    /// Carbohydrate deviation percent
    pub carbs_deviation: f64,
    /// Stated fat
    pub stated_fat: f64,
    /// Summed ingredient fat
    pub summed_fat: f64,
    /// Fat deviation percent
    pub fat_deviation: f64,
}

/// Outcome of an ingredient-sum check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSumResult {
    /// True when `errors` is empty
    pub valid: bool,
    /// Informational findings
    pub warnings: Vec<String>,
    /// Blocking findings
    pub errors: Vec<String>,
    /// Per-nutrient comparison, `None` when no breakdown was supplied
    pub details: Option<IngredientSumDetails>,
}

/// Validate a recipe claim against its ingredient breakdown with default thresholds
#[must_use]
pub fn validate_ingredient_sums(meal_name: &str, claim: &RecipeNutritionClaim) -> IngredientSumResult {
    validate_ingredient_sums_with_config(meal_name, claim, &ValidationConfig::global().ingredient_sums)
}

/// Validate a recipe claim against its ingredient breakdown
///
/// A missing or empty breakdown is a single warning and leaves the result
/// valid. Otherwise each nutrient is tiered independently and `details` is
/// always populated.
#[must_use]
pub fn validate_ingredient_sums_with_config(
    meal_name: &str,
    claim: &RecipeNutritionClaim,
    thresholds: &IngredientSumThresholds,
) -> IngredientSumResult {
    let mut findings = Findings::default();
    let rows = claim.ingredient_rows();

    if rows.is_empty() {
        findings.warn(format!(
            "{meal_name}: no ingredient nutrition breakdown, cannot validate sums"
        ));
        let result = findings.into_result();
        return IngredientSumResult {
            valid: result.valid,
            warnings: result.warnings,
            errors: result.errors,
            details: None,
        };
    }

    let (calories, protein, carbs, fat) = rows.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(cal, p, c, f), row| (cal + row.calories, p + row.protein, c + row.carbs, f + row.fat),
    );

    let nutrients = [
        ("calories", "kcal", claim.stated_calories(), calories),
        ("protein", "g", claim.protein, protein),
        ("carbs", "g", claim.carbs, carbs),
        ("fat", "g", claim.fat, fat),
    ];
    let mut deviations = [0.0_f64; 4];

    for (slot, (nutrient, unit, stated, summed)) in deviations.iter_mut().zip(nutrients) {
        let deviation = percent_deviation(summed, stated);
        *slot = round1(deviation);
        if let Some(severity) = classify_deviation(deviation, &thresholds.deviation) {
            findings.push(
                severity,
                format!(
                    "{meal_name}: stated {nutrient} {stated}{unit} differs from ingredient sum {}{unit} by {deviation:.1}%",
                    round1(summed)
                ),
            );
        }
    }

    let details = IngredientSumDetails {
        ingredient_count: rows.len(),
        stated_calories: claim.stated_calories(),
        summed_calories: round1(calories),
        calorie_deviation: deviations[0],
        stated_protein: claim.protein,
        summed_protein: round1(protein),
        protein_deviation: deviations[1],
        stated_carbs: claim.carbs,
        summed_carbs: round1(carbs),
        carbs_deviation: deviations[2],
        stated_fat: claim.fat,
        summed_fat: round1(fat),
        fat_deviation: deviations[3],
    };

    debug!(
        meal = meal_name,
        ingredients = details.ingredient_count,
        calorie_deviation = details.calorie_deviation,
        protein_deviation = details.protein_deviation,
        carbs_deviation = details.carbs_deviation,
        fat_deviation = details.fat_deviation,
        "Ingredient sum validation"
    );

    let result = findings.into_result();
    if !result.valid {
        warn!(meal = meal_name, errors = result.errors.len(), "Recipe totals disagree with ingredients");
    }

    IngredientSumResult {
        valid: result.valid,
        warnings: result.warnings,
        errors: result.errors,
        details: Some(details),
    }
}
