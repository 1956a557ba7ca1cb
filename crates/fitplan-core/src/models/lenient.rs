// ABOUTME: Lenient serde helpers for LLM-generated plan JSON
// ABOUTME: Accepts numbers-as-strings, null numbers, and mixed ingredient list shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Generated plans routinely emit `"sets": "3"`, `"reps": "8-12"` or
//! `"duration": "45 seconds"`. These helpers normalize such values instead of
//! rejecting the whole document.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::LazyLock;

/// First run of digits, with an optional decimal part
static FIRST_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").ok());

/// Extract a number from a JSON value
///
/// Numbers pass through. Strings yield their first digit run (`"8-12"` -> 8,
/// `"30 sec"` -> 30). Anything else is `None`.
#[must_use]
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => number_from_text(s),
        _ => None,
    }
}

/// Extract the first digit run from free text
#[must_use]
pub fn number_from_text(text: &str) -> Option<f64> {
    let pattern = FIRST_NUMBER.as_ref()?;
    pattern
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Deserialize a number that defaults to zero when absent or unparseable
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(to_number).unwrap_or(0.0))
}

/// Deserialize an optional number, treating unparseable text as absent
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(to_number))
}

/// Deserialize an optional flag given as a bool or as `"true"` / `"yes"` text
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Deserialize an optional string, treating blank text as absent
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Deserialize a string field that may be null, a number, or missing
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Deserialize an ingredient list given either as strings or as objects
///
/// Object entries contribute `quantity` followed by `item` (or `name`), so
/// `{"item": "spinach", "quantity": "2 cups"}` becomes `"2 cups spinach"`.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn ingredient_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(entries)) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => {
                let item = map
                    .get("item")
                    .or_else(|| map.get("name"))
                    .and_then(Value::as_str)?;
                let quantity = map.get("quantity").and_then(|q| match q {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                });
                Some(quantity.map_or_else(|| item.to_owned(), |q| format!("{q} {item}")))
            }
            _ => None,
        })
        .filter(|line| !line.trim().is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_number_variants() {
        assert_eq!(to_number(&json!(12)), Some(12.0));
        assert_eq!(to_number(&json!(2.5)), Some(2.5));
        assert_eq!(to_number(&json!("8-12")), Some(8.0));
        assert_eq!(to_number(&json!("45 seconds")), Some(45.0));
        assert_eq!(to_number(&json!("AMRAP")), None);
        assert_eq!(to_number(&json!(null)), None);
        assert_eq!(to_number(&json!(true)), None);
    }

    #[test]
    fn test_ingredient_lines_mixed_shapes() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "ingredient_lines")]
            ingredients: Vec<String>,
        }

        let holder: Holder = serde_json::from_value(json!({
            "ingredients": [
                "1 cup rice",
                {"item": "spinach", "quantity": "2 cups"},
                {"name": "salt"},
                42,
                ""
            ]
        }))
        .unwrap();

        assert_eq!(holder.ingredients, vec!["1 cup rice", "2 cups spinach", "salt"]);
    }
}
