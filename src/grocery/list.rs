// ABOUTME: Weekly grocery list builder aggregating meal ingredients by normalization key
// ABOUTME: Orders items by first-use day, then perishability, then name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalizer::parse_ingredient;
use super::perishability::classify_category;
use fitplan_core::models::{DayOfWeek, GroceryItem, MealSlot, MealUsage};
use std::collections::HashMap;
use tracing::debug;

/// Build the shopping list for a week of meals
///
/// Ingredient lines that normalize to the same key collapse into one item
/// whose quantities are joined with `" + "`. Meals whose day is not a day name
/// cannot be scheduled and are skipped, as are blank lines.
#[must_use]
pub fn build_grocery_list(meals: &[MealSlot]) -> Vec<GroceryItem> {
    let mut items: Vec<GroceryItem> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for meal in meals {
        let Some(day) = meal.day_of_week() else {
            continue;
        };
        for line in &meal.ingredients {
            let parsed = parse_ingredient(line);
            if parsed.key.is_empty() {
                continue;
            }
            let usage = MealUsage {
                day,
                meal_type: meal.meal_kind(),
                meal_name: meal.name.clone(),
            };

            if let Some(&index) = index_by_key.get(&parsed.key) {
                let item = &mut items[index];
                if let Some(quantity) = parsed.quantity {
                    append_quantity(&mut item.quantity, &quantity);
                }
                item.first_use_day = item.first_use_day.min(day);
                item.used_in_meals.push(usage);
            } else {
                index_by_key.insert(parsed.key.clone(), items.len());
                items.push(GroceryItem {
                    category: classify_category(&parsed.canonical_name),
                    name: parsed.canonical_name,
                    key: parsed.key,
                    quantity: parsed.quantity.unwrap_or_default(),
                    used_in_meals: vec![usage],
                    first_use_day: day,
                    perishability: parsed.perishability,
                });
            }
        }
    }

    items.sort_by(|a, b| {
        a.first_use_day
            .cmp(&b.first_use_day)
            .then_with(|| a.perishability.urgency_rank().cmp(&b.perishability.urgency_rank()))
            .then_with(|| a.name.cmp(&b.name))
    });

    debug!(
        meals = meals.len(),
        items = items.len(),
        "Built grocery list"
    );
    items
}

fn append_quantity(total: &mut String, quantity: &str) {
    if !total.is_empty() {
        total.push_str(" + ");
    }
    total.push_str(quantity);
}

/// Items grouped by the day they are first needed, in week order
#[must_use]
pub fn items_by_first_use(items: &[GroceryItem]) -> Vec<(DayOfWeek, Vec<&GroceryItem>)> {
    DayOfWeek::ALL
        .into_iter()
        .filter_map(|day| {
            let due: Vec<&GroceryItem> =
                items.iter().filter(|item| item.first_use_day == day).collect();
            (!due.is_empty()).then_some((day, due))
        })
        .collect()
}
