// ABOUTME: Grocery module: ingredient normalization, perishability tables, and list building
// ABOUTME: Turns free-text meal ingredients into an ordered weekly shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weekly list aggregation
pub mod list;
/// Ingredient line parsing and matching keys
pub mod normalizer;
/// Keyword classification tables
pub mod perishability;

pub use list::{build_grocery_list, items_by_first_use};
pub use normalizer::{
    canonical_ingredient_name, normalize_ingredient_key, parse_ingredient, ParsedIngredient,
};
pub use perishability::{classify_category, classify_perishability};
