// ABOUTME: Plan data models module aggregating meal, recipe, restriction, workout, and grocery types
// ABOUTME: Re-exports the types consumed by the validators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Grocery list items and perishability classes
pub mod grocery;
/// Serde helpers for loosely typed generator output
pub mod lenient;
/// Days, meal slots, and calorie targets
pub mod meal;
/// Recipe nutrition claims
pub mod recipe;
/// Dietary restriction profile
pub mod restrictions;
/// Workout plans and preferences
pub mod workout;

pub use grocery::{GroceryCategory, GroceryItem, MealUsage, Perishability};
pub use lenient::{number_from_text, to_number};
pub use meal::{CalorieTarget, DayOfWeek, DayTargets, MealSlot, MealType, NutritionTargets};
pub use recipe::{IngredientNutrition, RecipeEntry, RecipeNutritionClaim};
pub use restrictions::RestrictionProfile;
pub use workout::{ExperienceLevel, Exercise, WorkoutDayPlan, WorkoutPreferences};
