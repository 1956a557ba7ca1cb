// ABOUTME: Dietary restriction validator for stated food preferences and generated meal content
// ABOUTME: Static diet and category keyword tables with loose substring matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Restriction Checks
//!
//! Two lexical scans share one set of keyword tables:
//!
//! - [`check_preference_conflicts`] flags survey answers that contradict each
//!   other, such as a vegetarian listing chicken as a favourite food.
//! - [`validate_restrictions`] scans generated meals for forbidden terms.
//!
//! Matching is plain substring containment, so "eggplant" matches "egg".
//! Over-flagging is preferred to missing an allergen. Diet and allergy
//! matches are errors; category dislikes are warnings.

use super::Severity;
use fitplan_core::models::{MealSlot, RestrictionProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter;
use tracing::{debug, warn};

/// Foods excluded by each diet type
const DIET_EXCLUSIONS: &[(&str, &[&str])] = &[
    (
        "vegetarian",
        &[
            "chicken", "beef", "pork", "lamb", "turkey", "duck", "bacon", "ham", "sausage",
            "salami", "pepperoni", "prosciutto", "veal", "venison", "steak", "fish", "salmon",
            "tuna", "cod", "tilapia", "shrimp", "prawn", "crab", "lobster", "anchov", "gelatin",
        ],
    ),
    (
        "vegan",
        &[
            "chicken", "beef", "pork", "lamb", "turkey", "duck", "bacon", "ham", "sausage",
            "salami", "pepperoni", "prosciutto", "veal", "venison", "steak", "fish", "salmon",
            "tuna", "cod", "tilapia", "shrimp", "prawn", "crab", "lobster", "anchov", "gelatin",
            "milk", "cheese", "butter", "cream", "yogurt", "egg", "honey", "whey", "ghee",
            "mayonnaise",
        ],
    ),
    (
        "gluten-free",
        &[
            "wheat", "flour", "bread", "pasta", "barley", "rye", "couscous", "seitan",
            "soy sauce", "cracker", "noodle", "breadcrumb", "croissant", "bagel",
        ],
    ),
    (
        "dairy-free",
        &["milk", "cheese", "butter", "cream", "yogurt", "whey", "ghee", "casein"],
    ),
    (
        "pescatarian",
        &[
            "chicken", "beef", "pork", "lamb", "turkey", "duck", "bacon", "ham", "sausage",
            "veal", "venison", "steak",
        ],
    ),
    (
        "keto",
        &[
            "sugar", "rice", "pasta", "bread", "potato", "flour", "oats", "quinoa", "corn",
            "honey", "tortilla", "noodle",
        ],
    ),
    (
        "paleo",
        &[
            "bread", "pasta", "rice", "oats", "quinoa", "beans", "lentil", "peanut", "cheese",
            "milk", "yogurt", "sugar", "soy", "corn",
        ],
    ),
    (
        "halal",
        &[
            "pork", "bacon", "ham", "prosciutto", "salami", "pepperoni", "gelatin", "wine",
            "beer", "rum",
        ],
    ),
    (
        "kosher",
        &[
            "pork", "bacon", "ham", "shrimp", "crab", "lobster", "shellfish", "clam", "oyster",
            "mussel", "scallop",
        ],
    ),
];

/// Example items for each strict-exclusion category
const CATEGORY_ITEMS: &[(&str, &[&str])] = &[
    ("dairy", &["milk", "cheese", "butter", "cream", "yogurt", "whey", "ghee"]),
    (
        "seafood",
        &[
            "fish", "salmon", "tuna", "cod", "tilapia", "shrimp", "prawn", "crab", "lobster",
            "scallop", "clam", "mussel", "oyster", "anchov", "sardine",
        ],
    ),
    (
        "shellfish",
        &["shrimp", "prawn", "crab", "lobster", "scallop", "clam", "mussel", "oyster"],
    ),
    (
        "nuts",
        &[
            "almond", "walnut", "pecan", "cashew", "pistachio", "hazelnut", "peanut",
            "macadamia",
        ],
    ),
    ("red meat", &["beef", "lamb", "pork", "veal", "venison", "steak"]),
    ("poultry", &["chicken", "turkey", "duck"]),
    ("pork", &["pork", "bacon", "ham", "sausage", "prosciutto"]),
    ("eggs", &["egg"]),
    ("soy", &["soy", "tofu", "tempeh", "edamame"]),
    (
        "gluten",
        &["wheat", "flour", "bread", "pasta", "barley", "rye", "couscous", "seitan"],
    ),
    ("mushrooms", &["mushroom", "shiitake", "portobello"]),
    ("spicy", &["chili", "jalapeno", "cayenne", "sriracha", "habanero"]),
];

fn lookup(table: &'static [(&str, &'static [&'static str])], key: &str) -> &'static [&'static str] {
    let key = key.trim().to_lowercase();
    let none: &'static [&'static str] = &[];
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(none, |(_, items)| *items)
}

/// Foods excluded by a diet type, empty for unknown diets
#[must_use]
pub fn diet_exclusions(diet: &str) -> &'static [&'static str] {
    lookup(DIET_EXCLUSIONS, diet)
}

/// Example items for an exclusion category, empty for unknown categories
#[must_use]
pub fn category_items(category: &str) -> &'static [&'static str] {
    lookup(CATEGORY_ITEMS, category)
}

/// Terms forbidden by an allergy: the allergen itself plus any table expansion
///
/// The allergen name is looked up as a diet (`"gluten-free"`), then as
/// `"{allergen}-free"`, then as an exclusion category.
#[must_use]
pub fn allergy_terms(allergen: &str) -> Vec<String> {
    let allergen = allergen.trim().to_lowercase();
    if allergen.is_empty() {
        return Vec::new();
    }

    let mut expansion = diet_exclusions(&allergen);
    if expansion.is_empty() {
        expansion = diet_exclusions(&format!("{allergen}-free"));
    }
    if expansion.is_empty() {
        expansion = category_items(&allergen);
    }

    let mut terms = vec![allergen];
    for term in expansion {
        if !terms.iter().any(|existing| existing == term) {
            terms.push((*term).to_owned());
        }
    }
    terms
}

/// Bidirectional substring overlap; empty strings never overlap
fn overlaps(food: &str, term: &str) -> bool {
    !food.is_empty() && !term.is_empty() && (food.contains(term) || term.contains(food))
}

/// A contradiction between a stated preference and a restriction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceConflict {
    /// Preferred food as stated
    pub food: String,
    /// Restriction label such as `diet: vegetarian` or `allergy: peanuts`
    pub restriction: String,
    /// Keyword that matched
    pub matched: String,
    /// `error` for diets and allergies, `warning` for dislikes
    pub severity: Severity,
}

/// Check stated preferred foods against the user's own restrictions
///
/// At most one conflict is reported per (food, restriction) pair.
#[must_use]
pub fn check_preference_conflicts(
    preferred_foods: &[String],
    diet_prefs: &[String],
    strict_exclusions: &BTreeMap<String, Vec<String>>,
    food_allergies: &[String],
) -> Vec<PreferenceConflict> {
    let foods: Vec<(&String, String)> = preferred_foods
        .iter()
        .map(|food| (food, food.trim().to_lowercase()))
        .filter(|(_, lower)| !lower.is_empty())
        .collect();
    let mut conflicts = Vec::new();

    let mut record = |restriction: String, terms: &[String], severity: Severity| {
        for (food, lower) in &foods {
            if let Some(term) = terms.iter().find(|term| overlaps(lower, term)) {
                conflicts.push(PreferenceConflict {
                    food: (*food).clone(),
                    restriction: restriction.clone(),
                    matched: term.clone(),
                    severity,
                });
            }
        }
    };

    for diet in diet_prefs {
        let terms = owned_terms(diet_exclusions(diet).iter().copied());
        record(format!("diet: {}", diet.trim()), &terms, Severity::Error);
    }

    for (category, items) in strict_exclusions {
        let terms = owned_terms(
            category_items(category)
                .iter()
                .copied()
                .chain(items.iter().map(String::as_str)),
        );
        record(format!("exclusion: {}", category.trim()), &terms, Severity::Warning);
    }

    for allergen in food_allergies {
        let terms = owned_terms(iter::once(allergen.as_str()));
        record(format!("allergy: {}", allergen.trim()), &terms, Severity::Error);
    }

    if !conflicts.is_empty() {
        debug!(count = conflicts.len(), "Preference conflicts detected");
    }
    conflicts
}

/// Lowercased, trimmed, non-empty, de-duplicated terms
fn owned_terms<'a>(terms: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut owned: Vec<String> = Vec::new();
    for term in terms {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && !owned.contains(&term) {
            owned.push(term);
        }
    }
    owned
}

/// A forbidden term found in a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionViolation {
    /// Meal name
    pub meal: String,
    /// Day as generated
    pub day: String,
    /// Forbidden term that matched
    pub ingredient: String,
    /// Restriction label such as `diet: vegetarian`
    pub restriction: String,
    /// `error` for diets and allergies, `warning` for dislikes
    pub severity: Severity,
}

/// Outcome of a meal-content restriction scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionResult {
    /// True when no violation is an error
    pub valid: bool,
    /// Every match found
    pub violations: Vec<RestrictionViolation>,
}

impl RestrictionResult {
    /// Violations of a given severity
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &RestrictionViolation> {
        self.violations
            .iter()
            .filter(move |violation| violation.severity == severity)
    }
}

struct ForbiddenTerm {
    term: String,
    restriction: String,
    severity: Severity,
}

fn forbidden_terms(profile: &RestrictionProfile) -> Vec<ForbiddenTerm> {
    let mut forbidden = Vec::new();
    let mut extend = |restriction: String, terms: Vec<String>, severity: Severity| {
        forbidden.extend(terms.into_iter().map(|term| ForbiddenTerm {
            term,
            restriction: restriction.clone(),
            severity,
        }));
    };

    for diet in &profile.diet_prefs {
        extend(
            format!("diet: {}", diet.trim()),
            owned_terms(diet_exclusions(diet).iter().copied()),
            Severity::Error,
        );
    }
    for (category, items) in &profile.strict_exclusions {
        extend(
            format!("exclusion: {}", category.trim()),
            owned_terms(
                category_items(category)
                    .iter()
                    .copied()
                    .chain(items.iter().map(String::as_str)),
            ),
            Severity::Warning,
        );
    }
    for allergen in &profile.food_allergies {
        extend(
            format!("allergy: {}", allergen.trim()),
            allergy_terms(allergen),
            Severity::Error,
        );
    }
    forbidden
}

fn searchable_text(meal: &MealSlot) -> String {
    let mut parts: Vec<&str> = vec![meal.name.as_str()];
    if let Some(description) = &meal.description {
        parts.push(description);
    }
    parts.extend(meal.ingredients.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Scan meals for terms forbidden by the profile
///
/// Each meal's name, description, and ingredient lines form one lowercase
/// search string; every forbidden term found in it is one violation.
#[must_use]
pub fn validate_restrictions(meals: &[MealSlot], profile: &RestrictionProfile) -> RestrictionResult {
    if profile.is_unrestricted() {
        return RestrictionResult {
            valid: true,
            violations: Vec::new(),
        };
    }

    let forbidden = forbidden_terms(profile);
    let mut violations = Vec::new();

    for meal in meals {
        let text = searchable_text(meal);
        for entry in &forbidden {
            if text.contains(&entry.term) {
                violations.push(RestrictionViolation {
                    meal: meal.name.clone(),
                    day: meal.day.clone(),
                    ingredient: entry.term.clone(),
                    restriction: entry.restriction.clone(),
                    severity: entry.severity,
                });
            }
        }
    }

    let valid = !violations
        .iter()
        .any(|violation| violation.severity == Severity::Error);
    if valid {
        debug!(
            meals = meals.len(),
            violations = violations.len(),
            "Restriction scan passed"
        );
    } else {
        warn!(
            meals = meals.len(),
            violations = violations.len(),
            "Meal plan violates dietary restrictions"
        );
    }

    RestrictionResult { valid, violations }
}
