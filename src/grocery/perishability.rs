// ABOUTME: Keyword tables classifying ingredients by perishability and store section
// ABOUTME: First matching keyword wins; unknown items default to low perishability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::models::{GroceryCategory, Perishability};

/// Ordered keyword table; compound names come first so that
/// "peanut butter" is not caught by "butter" and "chicken broth" not by "chicken"
const PERISHABILITY_KEYWORDS: &[(&str, Perishability)] = &[
    // Compound overrides
    ("peanut butter", Perishability::Low),
    ("almond butter", Perishability::Low),
    ("black pepper", Perishability::Low),
    ("coconut milk", Perishability::Low),
    ("cream cheese", Perishability::Medium),
    ("almond milk", Perishability::Medium),
    ("oat milk", Perishability::Medium),
    ("fish sauce", Perishability::Low),
    ("broth", Perishability::Low),
    ("stock", Perishability::Low),
    ("canned", Perishability::Low),
    ("dried", Perishability::Low),
    ("frozen", Perishability::Low),
    ("powder", Perishability::Low),
    // High: raw meats, fish, dairy, fresh herbs, berries, leafy greens
    ("chicken", Perishability::High),
    ("beef", Perishability::High),
    ("pork", Perishability::High),
    ("turkey", Perishability::High),
    ("lamb", Perishability::High),
    ("salmon", Perishability::High),
    ("tuna", Perishability::High),
    ("cod", Perishability::High),
    ("tilapia", Perishability::High),
    ("shrimp", Perishability::High),
    ("fish", Perishability::High),
    ("milk", Perishability::High),
    ("cream", Perishability::High),
    ("yogurt", Perishability::High),
    ("cottage cheese", Perishability::High),
    ("basil", Perishability::High),
    ("cilantro", Perishability::High),
    ("parsley", Perishability::High),
    ("mint", Perishability::High),
    ("dill", Perishability::High),
    ("berries", Perishability::High),
    ("strawberr", Perishability::High),
    ("raspberr", Perishability::High),
    ("blueberr", Perishability::High),
    ("spinach", Perishability::High),
    ("lettuce", Perishability::High),
    ("arugula", Perishability::High),
    ("kale", Perishability::High),
    ("greens", Perishability::High),
    ("mushroom", Perishability::High),
    ("sprouts", Perishability::High),
    // Medium: eggs, cheese, firm vegetables, fruit, bread, butter
    ("egg", Perishability::Medium),
    ("cheese", Perishability::Medium),
    ("feta", Perishability::Medium),
    ("parmesan", Perishability::Medium),
    ("butter", Perishability::Medium),
    ("tofu", Perishability::Medium),
    ("hummus", Perishability::Medium),
    ("bread", Perishability::Medium),
    ("tortilla", Perishability::Medium),
    ("bell pepper", Perishability::Medium),
    ("broccoli", Perishability::Medium),
    ("cauliflower", Perishability::Medium),
    ("zucchini", Perishability::Medium),
    ("cucumber", Perishability::Medium),
    ("tomato", Perishability::Medium),
    ("celery", Perishability::Medium),
    ("avocado", Perishability::Medium),
    ("apple", Perishability::Medium),
    ("banana", Perishability::Medium),
    ("orange", Perishability::Medium),
    ("lemon", Perishability::Medium),
    ("lime", Perishability::Medium),
    ("grape", Perishability::Medium),
    ("pear", Perishability::Medium),
    ("peach", Perishability::Medium),
    ("mango", Perishability::Medium),
    // Low: grains, oils, condiments, canned goods, spices, aromatics, root vegetables
    ("rice", Perishability::Low),
    ("quinoa", Perishability::Low),
    ("oat", Perishability::Low),
    ("pasta", Perishability::Low),
    ("noodle", Perishability::Low),
    ("flour", Perishability::Low),
    ("oil", Perishability::Low),
    ("vinegar", Perishability::Low),
    ("sauce", Perishability::Low),
    ("honey", Perishability::Low),
    ("syrup", Perishability::Low),
    ("sugar", Perishability::Low),
    ("salt", Perishability::Low),
    ("pepper", Perishability::Low),
    ("cumin", Perishability::Low),
    ("paprika", Perishability::Low),
    ("cinnamon", Perishability::Low),
    ("oregano", Perishability::Low),
    ("spice", Perishability::Low),
    ("beans", Perishability::Low),
    ("lentil", Perishability::Low),
    ("chickpea", Perishability::Low),
    ("almond", Perishability::Low),
    ("walnut", Perishability::Low),
    ("peanut", Perishability::Low),
    ("seed", Perishability::Low),
    ("garlic", Perishability::Low),
    ("onion", Perishability::Low),
    ("ginger", Perishability::Low),
    ("potato", Perishability::Low),
    ("carrot", Perishability::Low),
    ("beet", Perishability::Low),
    ("mustard", Perishability::Low),
];

/// Store-section keyword table, compound names first
const CATEGORY_KEYWORDS: &[(&str, GroceryCategory)] = &[
    ("peanut butter", GroceryCategory::Pantry),
    ("almond butter", GroceryCategory::Pantry),
    ("coconut milk", GroceryCategory::Pantry),
    ("black pepper", GroceryCategory::Spices),
    ("bell pepper", GroceryCategory::Produce),
    ("sweet potato", GroceryCategory::Produce),
    ("broth", GroceryCategory::Pantry),
    ("stock", GroceryCategory::Pantry),
    ("sauce", GroceryCategory::Pantry),
    ("canned", GroceryCategory::Pantry),
    ("powder", GroceryCategory::Spices),
    ("chicken", GroceryCategory::Protein),
    ("beef", GroceryCategory::Protein),
    ("pork", GroceryCategory::Protein),
    ("turkey", GroceryCategory::Protein),
    ("lamb", GroceryCategory::Protein),
    ("salmon", GroceryCategory::Protein),
    ("tuna", GroceryCategory::Protein),
    ("cod", GroceryCategory::Protein),
    ("shrimp", GroceryCategory::Protein),
    ("fish", GroceryCategory::Protein),
    ("tofu", GroceryCategory::Protein),
    ("tempeh", GroceryCategory::Protein),
    ("beans", GroceryCategory::Protein),
    ("lentil", GroceryCategory::Protein),
    ("chickpea", GroceryCategory::Protein),
    ("milk", GroceryCategory::Dairy),
    ("cheese", GroceryCategory::Dairy),
    ("feta", GroceryCategory::Dairy),
    ("parmesan", GroceryCategory::Dairy),
    ("yogurt", GroceryCategory::Dairy),
    ("cream", GroceryCategory::Dairy),
    ("butter", GroceryCategory::Dairy),
    ("egg", GroceryCategory::Dairy),
    ("rice", GroceryCategory::Grains),
    ("quinoa", GroceryCategory::Grains),
    ("oat", GroceryCategory::Grains),
    ("pasta", GroceryCategory::Grains),
    ("noodle", GroceryCategory::Grains),
    ("bread", GroceryCategory::Grains),
    ("tortilla", GroceryCategory::Grains),
    ("flour", GroceryCategory::Grains),
    ("salt", GroceryCategory::Spices),
    ("pepper", GroceryCategory::Spices),
    ("cumin", GroceryCategory::Spices),
    ("paprika", GroceryCategory::Spices),
    ("cinnamon", GroceryCategory::Spices),
    ("oregano", GroceryCategory::Spices),
    ("spice", GroceryCategory::Spices),
    ("oil", GroceryCategory::Pantry),
    ("vinegar", GroceryCategory::Pantry),
    ("honey", GroceryCategory::Pantry),
    ("syrup", GroceryCategory::Pantry),
    ("sugar", GroceryCategory::Pantry),
    ("mustard", GroceryCategory::Pantry),
    ("almond", GroceryCategory::Pantry),
    ("walnut", GroceryCategory::Pantry),
    ("peanut", GroceryCategory::Pantry),
    ("seed", GroceryCategory::Pantry),
    ("spinach", GroceryCategory::Produce),
    ("lettuce", GroceryCategory::Produce),
    ("kale", GroceryCategory::Produce),
    ("greens", GroceryCategory::Produce),
    ("basil", GroceryCategory::Produce),
    ("cilantro", GroceryCategory::Produce),
    ("parsley", GroceryCategory::Produce),
    ("berr", GroceryCategory::Produce),
    ("tomato", GroceryCategory::Produce),
    ("broccoli", GroceryCategory::Produce),
    ("cucumber", GroceryCategory::Produce),
    ("zucchini", GroceryCategory::Produce),
    ("mushroom", GroceryCategory::Produce),
    ("avocado", GroceryCategory::Produce),
    ("onion", GroceryCategory::Produce),
    ("garlic", GroceryCategory::Produce),
    ("ginger", GroceryCategory::Produce),
    ("potato", GroceryCategory::Produce),
    ("carrot", GroceryCategory::Produce),
    ("apple", GroceryCategory::Produce),
    ("banana", GroceryCategory::Produce),
    ("lemon", GroceryCategory::Produce),
    ("lime", GroceryCategory::Produce),
];

/// Classify perishability by keyword
///
/// Unknown items are `Low` so that they never trigger a false "buy last
/// minute" signal.
#[must_use]
pub fn classify_perishability(ingredient: &str) -> Perishability {
    first_match(PERISHABILITY_KEYWORDS, ingredient).unwrap_or(Perishability::Low)
}

/// Classify the store section by keyword, `Other` when nothing matches
#[must_use]
pub fn classify_category(ingredient: &str) -> GroceryCategory {
    first_match(CATEGORY_KEYWORDS, ingredient).unwrap_or(GroceryCategory::Other)
}

fn first_match<T: Copy>(table: &[(&str, T)], ingredient: &str) -> Option<T> {
    let lower = ingredient.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, class)| *class)
}
