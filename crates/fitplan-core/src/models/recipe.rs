// ABOUTME: Recipe nutrition claim models with per-ingredient nutrition breakdown
// ABOUTME: Used to cross-check stated recipe totals against ingredient sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient::{number_or_zero, optional_number, string_or_empty};
use serde::{Deserialize, Serialize};

/// Nutrition for one ingredient row of a recipe breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientNutrition {
    /// Ingredient line as written in the recipe
    #[serde(default, deserialize_with = "string_or_empty")]
    pub item: String,
    /// Calories (kcal)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub calories: f64,
    /// Protein (g)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub carbs: f64,
    /// Fat (g)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub fat: f64,
}

impl IngredientNutrition {
    /// Create an ingredient row
    pub fn new(item: impl Into<String>, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            item: item.into(),
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// Stated recipe totals plus the ingredient breakdown they should sum from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNutritionClaim {
    /// Calories as named by recipe generators (`estimatedCalories`)
    #[serde(
        default,
        deserialize_with = "optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_calories: Option<f64>,
    /// Calories under the plain `calories` key
    #[serde(
        default,
        deserialize_with = "optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub calories: Option<f64>,
    /// Stated protein (g)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub protein: f64,
    /// Stated carbohydrates (g)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub carbs: f64,
    /// Stated fat (g)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub fat: f64,
    /// Per-ingredient breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_with_nutrition: Option<Vec<IngredientNutrition>>,
}

impl RecipeNutritionClaim {
    /// Stated calories, preferring `estimatedCalories` over `calories`
    #[must_use]
    pub fn stated_calories(&self) -> f64 {
        self.estimated_calories.or(self.calories).unwrap_or(0.0)
    }

    /// Ingredient rows, empty when no breakdown was supplied
    #[must_use]
    pub fn ingredient_rows(&self) -> &[IngredientNutrition] {
        self.ingredients_with_nutrition.as_deref().unwrap_or(&[])
    }
}

/// A recipe claim tagged with the meal it belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeEntry {
    /// Meal name used as message context
    #[serde(default, alias = "name", deserialize_with = "string_or_empty")]
    pub meal_name: String,
    /// The nutrition claim
    #[serde(flatten)]
    pub claim: RecipeNutritionClaim,
}
