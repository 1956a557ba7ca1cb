// ABOUTME: Validation configuration container with environment overrides and invariant checks
// ABOUTME: Provides defaults matching the documented thresholds and a validated global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validation Configuration
//!
//! Every threshold the validators apply lives here. Defaults reproduce the
//! documented behaviour; deployments may tune them through `FITPLAN_*`
//! environment variables, which are parsed and validated once.
//!
//! The global instance is initialized lazily and never mutated afterwards, so
//! validators that read it remain independent across threads.

pub mod error;
pub mod thresholds;

pub use error::ConfigError;
pub use thresholds::{
    Band, DeviationTiers, IngredientSumThresholds, MealPlanThresholds, WorkoutThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static VALIDATION_CONFIG: OnceLock<ValidationConfig> = OnceLock::new();

/// All validation thresholds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Meal-plan numeric checks
    pub meal_plan: MealPlanThresholds,
    /// Recipe ingredient-sum checks
    pub ingredient_sums: IngredientSumThresholds,
    /// Workout structural checks
    pub workout: WorkoutThresholds,
}

impl ValidationConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        VALIDATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load validation config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any tier or band is inverted or out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.meal_plan.validate()?;
        if self.ingredient_sums.deviation.warning_percent
            >= self.ingredient_sums.deviation.error_percent
        {
            return Err(ConfigError::InvalidRange(
                "ingredient sum warning_percent must be < error_percent",
            ));
        }
        self.workout.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let meal = &mut self.meal_plan;
        Self::apply_env_var(
            "FITPLAN_MEAL_SLOT_WARNING_PERCENT",
            &mut meal.slot_deviation.warning_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_MEAL_SLOT_ERROR_PERCENT",
            &mut meal.slot_deviation.error_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_DAILY_WARNING_PERCENT",
            &mut meal.daily_deviation.warning_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_DAILY_ERROR_PERCENT",
            &mut meal.daily_deviation.error_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_MACRO_WARNING_PERCENT",
            &mut meal.macro_warning_percent,
        )?;
        Self::apply_env_var("FITPLAN_MEAL_MIN_CALORIES", &mut meal.min_meal_calories)?;
        Self::apply_env_var("FITPLAN_MEAL_LOW_CALORIES", &mut meal.low_meal_calories)?;
        Self::apply_env_var("FITPLAN_MEAL_MAX_CALORIES", &mut meal.max_meal_calories)?;

        let sums = &mut self.ingredient_sums.deviation;
        Self::apply_env_var(
            "FITPLAN_INGREDIENT_SUM_WARNING_PERCENT",
            &mut sums.warning_percent,
        )?;
        Self::apply_env_var(
            "FITPLAN_INGREDIENT_SUM_ERROR_PERCENT",
            &mut sums.error_percent,
        )?;

        let workout = &mut self.workout;
        Self::apply_env_var(
            "FITPLAN_WORKOUT_MIN_EXERCISES",
            &mut workout.exercise_count.min,
        )?;
        Self::apply_env_var(
            "FITPLAN_WORKOUT_MAX_EXERCISES",
            &mut workout.exercise_count.max,
        )?;
        Self::apply_env_var(
            "FITPLAN_WORKOUT_MAX_MINUTES",
            &mut workout.session_minutes.max,
        )?;
        Self::apply_env_var(
            "FITPLAN_WORKOUT_DURATION_GRACE_MINUTES",
            &mut workout.duration_grace_minutes,
        )?;

        Ok(self)
    }
}
