// ABOUTME: Grocery list models: perishability classes, store categories, and usages
// ABOUTME: Grocery items are derived from meal ingredients, never user-supplied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::{DayOfWeek, MealType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse shelf-life class used to order shopping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Perishability {
    /// Spoils within days (raw meat, fish, fresh herbs, berries, leafy greens)
    High,
    /// Keeps about a week (eggs, cheese, firm vegetables, bread)
    Medium,
    /// Shelf stable (grains, oils, canned goods, spices)
    #[default]
    Low,
}

impl Perishability {
    /// Sort rank, most perishable first
    #[must_use]
    pub const fn urgency_rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Perishability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store section for a grocery item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroceryCategory {
    /// Fruits, vegetables, fresh herbs
    Produce,
    /// Meat, fish, tofu, legumes
    Protein,
    /// Milk, cheese, yogurt, eggs
    Dairy,
    /// Rice, pasta, bread, oats
    Grains,
    /// Oils, condiments, canned goods
    Pantry,
    /// Dried spices and seasonings
    Spices,
    /// Anything unclassified
    #[default]
    Other,
}

/// Where an ingredient is used in the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealUsage {
    /// Day of the meal
    pub day: DayOfWeek,
    /// Meal slot, when recognized
    pub meal_type: Option<MealType>,
    /// Dish name
    pub meal_name: String,
}

/// One aggregated line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Canonical ingredient name
    pub name: String,
    /// Normalization key used for aggregation
    pub key: String,
    /// Combined quantities as written (e.g. `2 cups + 1 cup`), empty when unstated
    pub quantity: String,
    /// Store section
    pub category: GroceryCategory,
    /// Every meal using the item
    pub used_in_meals: Vec<MealUsage>,
    /// Earliest day the item is needed
    pub first_use_day: DayOfWeek,
    /// Shelf-life class
    pub perishability: Perishability,
}
