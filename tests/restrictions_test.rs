// ABOUTME: Integration tests for dietary restriction checks on preferences and meal content
// ABOUTME: Tests diet violations, allergy expansion, dislike warnings, and loose substring matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

mod common;

use common::init_test_logging;
use fitplan_validation::models::{DayOfWeek, MealSlot, MealType, RestrictionProfile};
use fitplan_validation::validation::restrictions::{allergy_terms, category_items};
use fitplan_validation::validation::{
    check_preference_conflicts, validate_restrictions, Severity,
};
use std::collections::BTreeMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn meal(name: &str) -> MealSlot {
    MealSlot::new(DayOfWeek::Thursday, MealType::Lunch, name, 600.0, 35.0, 60.0, 24.0)
}

// ============================================================================
// Meal content scan
// ============================================================================

#[test]
fn test_vegetarian_plan_with_chicken() {
    init_test_logging();
    let meals = vec![meal("Grilled Chicken Caesar Salad")];
    let profile = RestrictionProfile::with_diets(["vegetarian"]);

    let result = validate_restrictions(&meals, &profile);

    assert!(!result.valid);
    let violation = result
        .violations
        .iter()
        .find(|violation| violation.ingredient == "chicken")
        .expect("chicken should be flagged");
    assert_eq!(violation.severity, Severity::Error);
    assert_eq!(violation.restriction, "diet: vegetarian");
    assert_eq!(violation.meal, "Grilled Chicken Caesar Salad");
    assert_eq!(violation.day, "thursday");
}

#[test]
fn test_ingredients_and_description_are_scanned() {
    init_test_logging();
    let meals = vec![
        meal("Garden pasta")
            .with_description("Tossed with parmesan cheese")
            .with_ingredients(["200g penne", "1 cup cherry tomatoes"]),
    ];
    let profile = RestrictionProfile {
        diet_prefs: strings(&["Vegan", "gluten-free"]),
        ..RestrictionProfile::default()
    };

    let result = validate_restrictions(&meals, &profile);

    assert!(!result.valid);
    let matched: Vec<(&str, &str)> = result
        .violations
        .iter()
        .map(|violation| (violation.ingredient.as_str(), violation.restriction.as_str()))
        .collect();
    assert!(matched.contains(&("cheese", "diet: Vegan")));
    assert!(matched.contains(&("pasta", "diet: gluten-free")));
}

#[test]
fn test_dislikes_only_warn() {
    init_test_logging();
    let mut strict_exclusions = BTreeMap::new();
    strict_exclusions.insert("seafood".to_owned(), strings(&["calamari"]));
    let profile = RestrictionProfile {
        strict_exclusions,
        ..RestrictionProfile::default()
    };
    let meals = vec![meal("Shrimp tacos"), meal("Fried calamari")];

    let result = validate_restrictions(&meals, &profile);

    assert!(result.valid, "dislikes must not fail the plan");
    assert_eq!(result.violations.len(), 2);
    assert!(result
        .violations
        .iter()
        .all(|violation| violation.severity == Severity::Warning
            && violation.restriction == "exclusion: seafood"));
    assert_eq!(result.with_severity(Severity::Error).count(), 0);
}

#[test]
fn test_allergy_expands_through_category() {
    init_test_logging();
    let profile = RestrictionProfile {
        food_allergies: strings(&["dairy"]),
        ..RestrictionProfile::default()
    };
    let meals = vec![meal("Mushroom risotto").with_ingredients(["2 tbsp butter", "arborio rice"])];

    let result = validate_restrictions(&meals, &profile);

    assert!(!result.valid);
    let violation = &result.violations[0];
    assert_eq!(violation.ingredient, "butter");
    assert_eq!(violation.restriction, "allergy: dairy");
    assert_eq!(violation.severity, Severity::Error);
}

#[test]
fn test_substring_matching_is_loose() {
    init_test_logging();
    let profile = RestrictionProfile {
        food_allergies: strings(&["egg"]),
        ..RestrictionProfile::default()
    };
    let result = validate_restrictions(&[meal("Roasted eggplant")], &profile);

    // "eggplant" contains "egg"; over-flagging an allergen is preferred
    assert!(!result.valid);
    assert_eq!(result.violations[0].ingredient, "egg");
}

#[test]
fn test_unrestricted_profile_accepts_anything() {
    init_test_logging();
    let result = validate_restrictions(
        &[meal("Bacon cheeseburger")],
        &RestrictionProfile::default(),
    );
    assert!(result.valid);
    assert!(result.violations.is_empty());
}

// ============================================================================
// Preference conflicts
// ============================================================================

#[test]
fn test_vegetarian_preferring_chicken_conflicts() {
    init_test_logging();
    let conflicts = check_preference_conflicts(
        &strings(&["Chicken", "broccoli"]),
        &strings(&["vegetarian"]),
        &BTreeMap::new(),
        &[],
    );

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].food, "Chicken");
    assert_eq!(conflicts[0].restriction, "diet: vegetarian");
    assert_eq!(conflicts[0].matched, "chicken");
    assert_eq!(conflicts[0].severity, Severity::Error);
}

#[test]
fn test_allergy_contradiction_is_error() {
    init_test_logging();
    let conflicts = check_preference_conflicts(
        &strings(&["peanut butter toast"]),
        &[],
        &BTreeMap::new(),
        &strings(&["peanut"]),
    );

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].restriction, "allergy: peanut");
    assert_eq!(conflicts[0].severity, Severity::Error);
}

#[test]
fn test_matching_is_bidirectional() {
    init_test_logging();
    // the food is contained in the dislike, not the other way round
    let mut exclusions = BTreeMap::new();
    exclusions.insert("misc".to_owned(), strings(&["smoked salmon"]));
    let conflicts = check_preference_conflicts(&strings(&["salmon"]), &[], &exclusions, &[]);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].matched, "smoked salmon");
    assert_eq!(conflicts[0].severity, Severity::Warning);
}

#[test]
fn test_one_conflict_per_food_and_restriction() {
    init_test_logging();
    let conflicts = check_preference_conflicts(
        &strings(&["beef and pork sausage"]),
        &strings(&["vegetarian"]),
        &BTreeMap::new(),
        &[],
    );
    assert_eq!(conflicts.len(), 1);
}

#[test]
fn test_blank_foods_never_conflict() {
    init_test_logging();
    let conflicts = check_preference_conflicts(
        &strings(&["", "   "]),
        &strings(&["vegan"]),
        &BTreeMap::new(),
        &strings(&["shellfish"]),
    );
    assert!(conflicts.is_empty());
}

#[test]
fn test_keyword_tables() {
    assert!(category_items("Nuts").contains(&"cashew"));
    assert!(category_items("unknown").is_empty());

    let gluten = allergy_terms("gluten");
    assert_eq!(gluten[0], "gluten");
    assert!(gluten.contains(&"soy sauce".to_owned()));
}
