// ABOUTME: Free-text ingredient line parser producing canonical names and matching keys
// ABOUTME: Strips leading quantities, unit words, "of", and size adjectives from recipe lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient line normalization
//!
//! `"2 cups of large (about 3) tomatoes, diced"` parses to the canonical name
//! `"tomatoes"` with quantity `"2 cups"`. Commas are separators only, so
//! `"boneless, skinless chicken breast"` keeps every word. Preparation
//! descriptors trailing the name are trimmed.

use super::perishability::classify_perishability;
use fitplan_core::models::Perishability;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Parenthetical asides such as `(about 3)` or `(15 oz)`
static PARENTHETICAL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\([^)]*\)").ok());

/// Tokens made only of digits, fractions, and range/decimal punctuation
static QUANTITY_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9/.+\-½¼¾⅓⅔⅛]+$").ok());

/// Measurement and packaging words skipped at the start of a line
const UNIT_WORDS: &[&str] = &[
    "cup", "cups", "c", "tbsp", "tbsps", "tbs", "tablespoon", "tablespoons", "tsp", "tsps",
    "teaspoon", "teaspoons", "oz", "ounce", "ounces", "fl", "lb", "lbs", "pound", "pounds", "g",
    "gram", "grams", "kg", "kilogram", "kilograms", "ml", "milliliter", "milliliters", "l",
    "liter", "liters", "litre", "litres", "qt", "quart", "quarts", "pt", "pint", "pints",
    "clove", "cloves", "slice", "slices", "can", "cans", "package", "packages", "pkg", "bag",
    "bags", "pinch", "pinches", "piece", "pieces", "bunch", "bunches", "handful", "handfuls",
    "dash", "dashes", "sprig", "sprigs", "stalk", "stalks", "head", "heads", "jar", "jars",
    "bottle", "bottles", "box", "boxes", "container", "containers", "stick", "sticks", "scoop",
    "scoops",
];

/// Size adjectives dropped once after quantities and units
const SIZE_WORDS: &[&str] = &["small", "medium", "large", "extra-large", "xl"];

/// Preparation descriptors ignored in matching keys and trimmed from the end of names
const DESCRIPTOR_WORDS: &[&str] = &[
    "fresh", "chopped", "diced", "minced", "sliced", "shredded", "grated", "frozen", "raw",
    "cooked", "boneless", "skinless", "organic", "finely", "roughly", "thinly", "peeled",
    "beaten", "drained", "rinsed", "divided", "softened", "melted", "halved", "trimmed",
];

/// A parsed ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredient {
    /// Line as supplied
    pub raw: String,
    /// Name with quantity, unit, and size tokens removed
    pub canonical_name: String,
    /// Letters-only key for cross-format matching
    pub key: String,
    /// Leading quantity and unit tokens, when present
    pub quantity: Option<String>,
    /// Shelf-life class
    pub perishability: Perishability,
}

/// Parse a free-text ingredient line
#[must_use]
pub fn parse_ingredient(raw: &str) -> ParsedIngredient {
    let (canonical_name, quantity) = split_quantity(raw);
    let key = normalize_ingredient_key(&canonical_name);
    let perishability = classify_perishability(&canonical_name);
    ParsedIngredient {
        raw: raw.to_owned(),
        canonical_name,
        key,
        quantity,
        perishability,
    }
}

/// Canonical ingredient name for a free-text line
#[must_use]
pub fn canonical_ingredient_name(raw: &str) -> String {
    split_quantity(raw).0
}

/// Matching key: lowercase letters and single spaces, descriptors removed
///
/// Other characters are deleted rather than split on, so `"half-and-half"`
/// yields `"halfandhalf"`. `"Fresh Spinach"` yields `"spinach"`. If only
/// descriptors remain they are kept, so `"fresh"` stays `"fresh"`.
#[must_use]
pub fn normalize_ingredient_key(name: &str) -> String {
    let letters: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    let words: Vec<&str> = letters.split_whitespace().collect();
    let meaningful: Vec<&str> = words
        .iter()
        .copied()
        .filter(|word| !DESCRIPTOR_WORDS.contains(word))
        .collect();

    if meaningful.is_empty() {
        words.join(" ")
    } else {
        meaningful.join(" ")
    }
}

/// Lowercase, drop parentheticals and commas, collapse whitespace
fn clean_line(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let without_parens = PARENTHETICAL
        .as_ref()
        .map_or_else(|| lower.clone(), |re| re.replace_all(&lower, " ").into_owned());
    without_parens
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_quantity_token(token: &str) -> bool {
    QUANTITY_TOKEN
        .as_ref()
        .is_some_and(|re| re.is_match(token))
}

fn is_unit_token(token: &str) -> bool {
    UNIT_WORDS.contains(&token.trim_end_matches('.'))
}

/// Split a line into (canonical name, leading quantity)
fn split_quantity(raw: &str) -> (String, Option<String>) {
    let cleaned = clean_line(raw);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let mut index = 0;
    while index < tokens.len() && (is_quantity_token(tokens[index]) || is_unit_token(tokens[index]))
    {
        index += 1;
    }
    let quantity = (index > 0).then(|| tokens[..index].join(" "));

    if tokens.get(index) == Some(&"of") {
        index += 1;
    }
    if tokens
        .get(index)
        .is_some_and(|token| SIZE_WORDS.contains(token))
    {
        index += 1;
    }

    let mut name_tokens = &tokens[index.min(tokens.len())..];
    // "drained and rinsed": a connective is trimmed only after a descriptor
    let mut trimmed_descriptor = false;
    while let [rest @ .., last] = name_tokens {
        let trailing_note =
            DESCRIPTOR_WORDS.contains(last) || (trimmed_descriptor && *last == "and");
        if rest.is_empty() || !trailing_note {
            break;
        }
        trimmed_descriptor = true;
        name_tokens = rest;
    }

    let name = name_tokens.join(" ");
    if name.is_empty() {
        (cleaned, quantity)
    } else {
        (name, quantity)
    }
}
