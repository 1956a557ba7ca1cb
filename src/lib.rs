// ABOUTME: Main library entry point for FitPlan meal and workout plan validation
// ABOUTME: Validators, grocery list building, plan reports, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitPlan` Validation
//!
//! Pure, deterministic checks for externally generated weekly meal and
//! workout plans. Every validator takes already-parsed data and returns a
//! structured result separating blocking errors from informational warnings;
//! retry or accept policy is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use fitplan_validation::models::{DayOfWeek, DayTargets, MealSlot, MealType, NutritionTargets};
//! use fitplan_validation::validation::validate_meal_plan;
//!
//! let targets = NutritionTargets::uniform(DayTargets::from_slots(500.0, 700.0, 800.0));
//! let meals = vec![MealSlot::new(
//!     DayOfWeek::Monday,
//!     MealType::Breakfast,
//!     "Oatmeal with berries",
//!     500.0,
//!     20.0,
//!     80.0,
//!     11.0,
//! )];
//!
//! let result = validate_meal_plan(&meals, &targets);
//!
//! // The breakfast matches its target, but one meal cannot meet a 2000 kcal day
//! assert!(!result.valid);
//! assert_eq!(result.daily_summaries.len(), 1);
//! ```

/// Validation thresholds with environment overrides
pub mod config;

/// Ingredient normalization, perishability, and weekly grocery lists
pub mod grocery;

/// Logging configuration and structured outcome events
pub mod logging;

/// Combined plan reports and parallel batch validation
pub mod report;

/// Meal-plan, ingredient-sum, restriction, and workout validators
pub mod validation;

pub use fitplan_core::{constants, errors, models};
