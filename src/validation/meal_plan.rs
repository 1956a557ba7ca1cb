// ABOUTME: Meal-plan numeric validator checking slot and daily calories against targets
// ABOUTME: Applies absolute sanity bounds and Atwater macro-consistency cross-checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal-Plan Validation
//!
//! For every recognized day that has targets, each meal slot is checked three
//! ways:
//!
//! 1. **Target deviation**: stated calories vs the slot target (10% warning, 15% error)
//! 2. **Sanity bounds**: below 150 kcal or above 1200 kcal is an error, below 200 a warning
//! 3. **Macro consistency**: stated calories vs `protein*4 + carbs*4 + fat*9`
//!    (warning only above 15%)
//!
//! The summed day total is then compared with the daily target (8% warning,
//! 10% error). Missing data never aborts validation; it becomes a warning or
//! a skipped check.

use super::{classify_deviation, percent_deviation, round1, Findings, Severity};
use crate::config::{MealPlanThresholds, ValidationConfig};
use fitplan_core::constants::atwater::calories_from_macros;
use fitplan_core::models::{DayOfWeek, DayTargets, MealSlot, NutritionTargets};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Stated calories vs macro-derived calories for one meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroConsistency {
    /// `protein*4 + carbs*4 + fat*9`
    pub calculated_calories: f64,
    /// Percent difference relative to stated calories
    pub deviation_percent: f64,
    /// False when the deviation raised a warning
    pub consistent: bool,
}

/// Per-meal record inside a day summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealCheckDetail {
    /// Meal type as generated
    pub meal_type: String,
    /// Dish name
    pub name: String,
    /// Stated calories
    pub calories: f64,
    /// Slot target, `None` when the slot has no target
    pub target_calories: Option<f64>,
    /// Percent deviation from the slot target
    pub deviation_percent: Option<f64>,
    /// Macro cross-check, `None` when calorie checks were skipped
    pub macro_check: Option<MacroConsistency>,
}

/// Outcome for one day, recorded whether or not it passed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayValidationSummary {
    /// Day validated
    pub day: DayOfWeek,
    /// Sum of every slot's stated calories
    pub total_calories: f64,
    /// Daily target, `None` when absent or zero
    pub target_calories: Option<f64>,
    /// Percent deviation from the daily target
    pub deviation_percent: Option<f64>,
    /// Meals in input order
    pub meals: Vec<MealCheckDetail>,
}

/// Outcome of a meal-plan validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanValidationResult {
    /// True when `errors` is empty
    pub valid: bool,
    /// Informational findings
    pub warnings: Vec<String>,
    /// Blocking findings
    pub errors: Vec<String>,
    /// One entry per validated day, in week order
    pub daily_summaries: Vec<DayValidationSummary>,
}

/// Validate a meal plan against weekly targets with default thresholds
#[must_use]
pub fn validate_meal_plan(
    meals: &[MealSlot],
    targets: &NutritionTargets,
) -> MealPlanValidationResult {
    validate_meal_plan_with_config(meals, targets, &ValidationConfig::global().meal_plan)
}

/// Validate a meal plan against weekly targets
///
/// Meals are grouped by day in week order and keep their input order within
/// a day. Meals whose day is not a day name are excluded and counted in a
/// single warning.
#[must_use]
pub fn validate_meal_plan_with_config(
    meals: &[MealSlot],
    targets: &NutritionTargets,
    thresholds: &MealPlanThresholds,
) -> MealPlanValidationResult {
    let mut findings = Findings::default();
    let mut by_day: BTreeMap<DayOfWeek, Vec<&MealSlot>> = BTreeMap::new();
    let mut unrecognized = 0_usize;

    for meal in meals {
        match meal.day_of_week() {
            Some(day) => by_day.entry(day).or_default().push(meal),
            None => unrecognized += 1,
        }
    }

    if unrecognized > 0 {
        findings.warn(format!(
            "{unrecognized} meals had unrecognized day values and were excluded from validation"
        ));
    }

    let mut daily_summaries = Vec::with_capacity(by_day.len());
    for (day, day_meals) in by_day {
        let Some(day_targets) = targets.for_day(day) else {
            findings.warn(format!("{day}: no nutrition targets, skipping day"));
            continue;
        };
        daily_summaries.push(validate_day(
            day,
            &day_meals,
            day_targets,
            thresholds,
            &mut findings,
        ));
    }

    let result = findings.into_result();
    if result.valid {
        debug!(
            meals = meals.len(),
            days = daily_summaries.len(),
            warnings = result.warnings.len(),
            "Meal plan passed validation"
        );
    } else {
        warn!(
            meals = meals.len(),
            days = daily_summaries.len(),
            errors = result.errors.len(),
            "Meal plan failed validation"
        );
    }

    MealPlanValidationResult {
        valid: result.valid,
        warnings: result.warnings,
        errors: result.errors,
        daily_summaries,
    }
}

fn validate_day(
    day: DayOfWeek,
    meals: &[&MealSlot],
    day_targets: &DayTargets,
    thresholds: &MealPlanThresholds,
    findings: &mut Findings,
) -> DayValidationSummary {
    let mut total_calories = 0.0;
    let mut details = Vec::with_capacity(meals.len());

    for meal in meals {
        total_calories += meal.calories;
        details.push(check_meal(day, meal, day_targets, thresholds, findings));
    }

    let daily_target = day_targets.daily_calories();
    let (target_calories, deviation_percent) = if daily_target > 0.0 {
        let deviation = percent_deviation(total_calories, daily_target);
        if let Some(severity) = classify_deviation(deviation, &thresholds.daily_deviation) {
            let limit = match severity {
                Severity::Error => thresholds.daily_deviation.error_percent,
                Severity::Warning => thresholds.daily_deviation.warning_percent,
            };
            findings.push(
                severity,
                format!(
                    "{day}: daily total {} kcal is {deviation:.1}% off target {daily_target} kcal (limit {limit}%)",
                    round1(total_calories)
                ),
            );
        }
        (Some(daily_target), Some(round1(deviation)))
    } else {
        (None, None)
    };

    debug!(
        day = day.as_str(),
        meals = meals.len(),
        total_calories,
        target_calories = daily_target,
        "Validated day"
    );

    DayValidationSummary {
        day,
        total_calories: round1(total_calories),
        target_calories,
        deviation_percent,
        meals: details,
    }
}

fn check_meal(
    day: DayOfWeek,
    meal: &MealSlot,
    day_targets: &DayTargets,
    thresholds: &MealPlanThresholds,
    findings: &mut Findings,
) -> MealCheckDetail {
    let meal_type = meal.meal_type.trim().to_lowercase();
    let context = if meal_type.is_empty() {
        format!("{day} meal")
    } else {
        format!("{day} {meal_type}")
    };
    let calories = meal.calories;
    let target = day_targets.slot_calories(meal.meal_kind());

    if target <= 0.0 {
        findings.warn(format!(
            "{context}: no calorie target for this slot, skipping calorie checks"
        ));
        return MealCheckDetail {
            meal_type,
            name: meal.name.clone(),
            calories,
            target_calories: None,
            deviation_percent: None,
            macro_check: None,
        };
    }

    let deviation = percent_deviation(calories, target);
    if let Some(severity) = classify_deviation(deviation, &thresholds.slot_deviation) {
        let limit = match severity {
            Severity::Error => thresholds.slot_deviation.error_percent,
            Severity::Warning => thresholds.slot_deviation.warning_percent,
        };
        findings.push(
            severity,
            format!(
                "{context}: {calories} kcal is {deviation:.1}% off target {target} kcal (limit {limit}%)"
            ),
        );
    }

    if calories < thresholds.min_meal_calories {
        findings.error(format!(
            "{context}: Too low at {calories} kcal (minimum {})",
            thresholds.min_meal_calories
        ));
    } else if calories < thresholds.low_meal_calories {
        findings.warn(format!(
            "{context}: Suspiciously low at {calories} kcal (expected at least {})",
            thresholds.low_meal_calories
        ));
    } else if calories > thresholds.max_meal_calories {
        findings.error(format!(
            "{context}: Too high at {calories} kcal (maximum {})",
            thresholds.max_meal_calories
        ));
    }

    let macro_check = check_macros(meal, thresholds.macro_warning_percent);
    if !macro_check.consistent {
        findings.warn(format!(
            "{context}: macros imply {} kcal but {calories} kcal stated ({:.1}% apart)",
            round1(macro_check.calculated_calories),
            macro_check.deviation_percent
        ));
    }

    MealCheckDetail {
        meal_type,
        name: meal.name.clone(),
        calories,
        target_calories: Some(target),
        deviation_percent: Some(round1(deviation)),
        macro_check: Some(macro_check),
    }
}

fn check_macros(meal: &MealSlot, warning_percent: f64) -> MacroConsistency {
    let calculated = calories_from_macros(meal.protein, meal.carbs, meal.fat);
    let deviation = percent_deviation(calculated, meal.calories);
    MacroConsistency {
        calculated_calories: calculated,
        deviation_percent: round1(deviation),
        consistent: deviation <= warning_percent,
    }
}
