// ABOUTME: Plan validation module: shared result types and the per-call findings accumulator
// ABOUTME: Hosts the ingredient-sum, restriction, meal-plan, and workout validators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Validation
//!
//! Pure, synchronous validators over already-parsed plans. None of them fail on
//! data-quality problems: every problem becomes a human-readable warning or
//! error string, and `valid` is true exactly when there are no errors.
//!
//! - [`ingredient_sums`] cross-checks recipe totals against ingredient rows
//! - [`restrictions`] checks preferences and meals against diets, dislikes, allergies
//! - [`meal_plan`] checks meal calories against targets, sanity bounds, and macros
//! - [`workout`] checks workout plans for structure and plausibility

pub mod ingredient_sums;
pub mod meal_plan;
pub mod restrictions;
pub mod workout;

pub use ingredient_sums::{
    validate_ingredient_sums, validate_ingredient_sums_with_config, IngredientSumDetails,
    IngredientSumResult,
};
pub use meal_plan::{
    validate_meal_plan, validate_meal_plan_with_config, DayValidationSummary,
    MacroConsistency, MealCheckDetail, MealPlanValidationResult,
};
pub use restrictions::{
    check_preference_conflicts, validate_restrictions, PreferenceConflict, RestrictionResult,
    RestrictionViolation,
};
pub use workout::{
    validate_workout_plan, validate_workout_plan_value, validate_workout_plan_value_with_config,
    validate_workout_plan_with_config, WorkoutDaySummary, WorkoutValidationResult,
};

use crate::config::DeviationTiers;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks acceptance of the plan
    Error,
    /// Informational; never affects validity
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// Shape shared by every validator result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when `errors` is empty
    pub valid: bool,
    /// Informational findings
    pub warnings: Vec<String>,
    /// Blocking findings
    pub errors: Vec<String>,
}

/// Warning and error accumulator scoped to a single validator call
#[derive(Debug, Default)]
pub(crate) struct Findings {
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Findings {
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn push(&mut self, severity: Severity, message: impl Into<String>) {
        match severity {
            Severity::Error => self.error(message),
            Severity::Warning => self.warn(message),
        }
    }

    pub(crate) fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn into_result(self) -> ValidationResult {
        ValidationResult {
            valid: self.errors.is_empty(),
            warnings: self.warnings,
            errors: self.errors,
        }
    }
}

/// `|actual - reference| / reference * 100`, or 0 when the reference is not positive
///
/// The multiplication happens before the division so that exact boundary
/// values (e.g. 1150 against 1000) land exactly on the threshold.
#[must_use]
pub fn percent_deviation(actual: f64, reference: f64) -> f64 {
    if reference <= 0.0 || !reference.is_finite() {
        return 0.0;
    }
    (actual - reference).abs() * 100.0 / reference
}

/// Tier a deviation: strictly above the error tier is an error, strictly above
/// the warning tier a warning
#[must_use]
pub fn classify_deviation(deviation: f64, tiers: &DeviationTiers) -> Option<Severity> {
    if deviation > tiers.error_percent {
        Some(Severity::Error)
    } else if deviation > tiers.warning_percent {
        Some(Severity::Warning)
    } else {
        None
    }
}

/// Round to one decimal place for summaries
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
