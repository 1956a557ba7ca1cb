// ABOUTME: Threshold configuration for meal, recipe, and workout plan validation
// ABOUTME: Percent deviation tiers and plausibility bands with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validation thresholds
//!
//! Deviation checks are tiered: a value strictly above `error_percent` is an
//! error, strictly above `warning_percent` a warning, anything else silent.
//! Plausibility bands are inclusive on both ends.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lowest plausible value
    pub min: f64,
    /// Highest plausible value
    pub max: f64,
}

impl Band {
    /// Create a band
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the band
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min < 0.0 {
            return Err(ConfigError::ValueOutOfRange(name));
        }
        if self.min > self.max {
            return Err(ConfigError::InvalidRange(name));
        }
        Ok(())
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Two-tier percent deviation threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationTiers {
    /// Deviation strictly above this is a warning
    pub warning_percent: f64,
    /// Deviation strictly above this is an error
    pub error_percent: f64,
}

impl DeviationTiers {
    /// Create tiers
    #[must_use]
    pub const fn new(warning_percent: f64, error_percent: f64) -> Self {
        Self {
            warning_percent,
            error_percent,
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.warning_percent < 0.0 || self.error_percent > 100.0 {
            return Err(ConfigError::ValueOutOfRange(name));
        }
        if self.warning_percent >= self.error_percent {
            return Err(ConfigError::InvalidRange(name));
        }
        Ok(())
    }
}

/// Meal-plan numeric validation thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanThresholds {
    /// Per-slot calories vs slot target: 10% warning, 15% error
    pub slot_deviation: DeviationTiers,
    /// Summed day calories vs daily target: 8% warning, 10% error
    pub daily_deviation: DeviationTiers,
    /// Stated calories vs Atwater macro calories: warning only above 15%
    pub macro_warning_percent: f64,
    /// Calories below this are an error (150 kcal)
    pub min_meal_calories: f64,
    /// Calories below this (and at least the minimum) are a warning (200 kcal)
    pub low_meal_calories: f64,
    /// Calories above this are an error (1200 kcal)
    pub max_meal_calories: f64,
}

impl Default for MealPlanThresholds {
    fn default() -> Self {
        Self {
            slot_deviation: DeviationTiers::new(10.0, 15.0),
            daily_deviation: DeviationTiers::new(8.0, 10.0),
            macro_warning_percent: 15.0,
            min_meal_calories: 150.0,
            low_meal_calories: 200.0,
            max_meal_calories: 1200.0,
        }
    }
}

impl MealPlanThresholds {
    /// Validate ordering invariants
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when tiers are inverted or calorie bounds overlap
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.slot_deviation.validate("meal slot deviation tiers")?;
        self.daily_deviation.validate("daily total deviation tiers")?;
        if self.macro_warning_percent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "macro_warning_percent must be positive",
            ));
        }
        if self.min_meal_calories > self.low_meal_calories
            || self.low_meal_calories >= self.max_meal_calories
        {
            return Err(ConfigError::InvalidRange(
                "meal calories must satisfy min <= low < max",
            ));
        }
        Ok(())
    }
}

/// Recipe ingredient-sum thresholds: 10% warning, 20% error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSumThresholds {
    /// Stated vs summed nutrient deviation tiers
    pub deviation: DeviationTiers,
}

impl Default for IngredientSumThresholds {
    fn default() -> Self {
        Self {
            deviation: DeviationTiers::new(10.0, 20.0),
        }
    }
}

/// Workout structural plausibility thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutThresholds {
    /// Exercises per training day (3-12)
    pub exercise_count: Band,
    /// Session length in minutes (10-120)
    pub session_minutes: Band,
    /// Session energy expenditure in kcal (50-800)
    pub session_calories: Band,
    /// Allowed overrun beyond the preferred duration (15 minutes)
    pub duration_grace_minutes: f64,
    /// Sets per exercise (1-10)
    pub sets: Band,
    /// Reps per set (1-50)
    pub reps: Band,
    /// Timed set duration in seconds (10-300)
    pub duration_secs: Band,
    /// Beginners get a warning above this many exercises (8)
    pub beginner_max_exercises: usize,
    /// Advanced users get a warning below this many exercises (4)
    pub advanced_min_exercises: usize,
}

impl Default for WorkoutThresholds {
    fn default() -> Self {
        Self {
            exercise_count: Band::new(3.0, 12.0),
            session_minutes: Band::new(10.0, 120.0),
            session_calories: Band::new(50.0, 800.0),
            duration_grace_minutes: 15.0,
            sets: Band::new(1.0, 10.0),
            reps: Band::new(1.0, 50.0),
            duration_secs: Band::new(10.0, 300.0),
            beginner_max_exercises: 8,
            advanced_min_exercises: 4,
        }
    }
}

impl WorkoutThresholds {
    /// Validate band ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a band is inverted or negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.exercise_count.validate("exercise_count band")?;
        self.session_minutes.validate("session_minutes band")?;
        self.session_calories.validate("session_calories band")?;
        self.sets.validate("sets band")?;
        self.reps.validate("reps band")?;
        self.duration_secs.validate("duration_secs band")?;
        if self.duration_grace_minutes < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "duration_grace_minutes must not be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_display_drops_trailing_zero() {
        assert_eq!(Band::new(1.0, 10.0).to_string(), "1-10");
        assert_eq!(Band::new(0.5, 2.5).to_string(), "0.5-2.5");
    }

    #[test]
    fn test_defaults_validate() {
        assert!(MealPlanThresholds::default().validate().is_ok());
        assert!(WorkoutThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_tiers_rejected() {
        let mut thresholds = MealPlanThresholds::default();
        thresholds.slot_deviation = DeviationTiers::new(20.0, 15.0);
        assert!(matches!(
            thresholds.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
