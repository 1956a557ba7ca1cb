// ABOUTME: Workout plan data models: training days, exercises, and user preferences
// ABOUTME: Fields are optional because structural completeness is itself validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient::{optional_bool, optional_number, optional_text};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Training experience level from the survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// New to structured training
    Beginner,
    /// Some consistent training history
    Intermediate,
    /// Long training history
    Advanced,
}

impl ExperienceLevel {
    /// Parse a level, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

fn lenient_experience<'de, D>(deserializer: D) -> Result<Option<ExperienceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(ExperienceLevel::parse))
}

/// One exercise within a training day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    /// Required equipment (`bodyweight` counts)
    #[serde(default, deserialize_with = "optional_text")]
    pub equipment: Option<String>,
    /// Number of sets
    #[serde(default, deserialize_with = "optional_number")]
    pub sets: Option<f64>,
    /// Repetitions per set
    #[serde(default, deserialize_with = "optional_number")]
    pub reps: Option<f64>,
    /// Timed duration per set (seconds)
    #[serde(default, deserialize_with = "optional_number")]
    pub duration: Option<f64>,
}

impl Exercise {
    /// Rep-based exercise
    pub fn reps(name: impl Into<String>, equipment: impl Into<String>, sets: f64, reps: f64) -> Self {
        Self {
            name: Some(name.into()),
            equipment: Some(equipment.into()),
            sets: Some(sets),
            reps: Some(reps),
            duration: None,
        }
    }

    /// Timed exercise
    pub fn timed(
        name: impl Into<String>,
        equipment: impl Into<String>,
        sets: f64,
        duration_secs: f64,
    ) -> Self {
        Self {
            name: Some(name.into()),
            equipment: Some(equipment.into()),
            sets: Some(sets),
            reps: None,
            duration: Some(duration_secs),
        }
    }
}

/// One day of a weekly workout plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDayPlan {
    /// Day name as generated
    #[serde(default, deserialize_with = "optional_text")]
    pub day: Option<String>,
    /// Training focus (e.g. `upper body`)
    #[serde(default, deserialize_with = "optional_text")]
    pub focus: Option<String>,
    /// Explicit rest-day flag
    #[serde(default, deserialize_with = "optional_bool")]
    pub rest_day: Option<bool>,
    /// Active recovery guidance for rest days (text or structured)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_recovery: Option<Value>,
    /// Exercises for training days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<Exercise>>,
    /// Estimated session length (minutes)
    #[serde(default, deserialize_with = "optional_number")]
    pub estimated_time: Option<f64>,
    /// Estimated energy expenditure (kcal)
    #[serde(default, deserialize_with = "optional_number")]
    pub estimated_calories: Option<f64>,
}

impl WorkoutDayPlan {
    /// Training day with exercises
    pub fn training(
        day: impl Into<String>,
        focus: impl Into<String>,
        exercises: Vec<Exercise>,
    ) -> Self {
        Self {
            day: Some(day.into()),
            focus: Some(focus.into()),
            rest_day: Some(false),
            exercises: Some(exercises),
            ..Self::default()
        }
    }

    /// Rest day with optional active recovery guidance
    pub fn rest(day: impl Into<String>, active_recovery: Option<&str>) -> Self {
        Self {
            day: Some(day.into()),
            focus: Some("rest".to_owned()),
            rest_day: Some(true),
            active_recovery: active_recovery.map(|text| Value::String(text.to_owned())),
            ..Self::default()
        }
    }

    /// Whether the day counts as a rest day
    ///
    /// True when flagged, or when there is no (or an empty) exercise list.
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.rest_day.unwrap_or(false)
            || self.exercises.as_ref().map_or(true, Vec::is_empty)
    }

    /// Whether active recovery guidance is present and non-empty
    #[must_use]
    pub fn has_active_recovery(&self) -> bool {
        match &self.active_recovery {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(_) => true,
        }
    }

    /// Number of exercises listed
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.as_ref().map_or(0, Vec::len)
    }
}

/// Workout preferences from the survey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPreferences {
    /// Preferred session length (minutes)
    #[serde(default, deserialize_with = "optional_number")]
    pub preferred_duration: Option<f64>,
    /// Days the user can train
    #[serde(default)]
    pub available_days: Vec<String>,
    /// Training experience
    #[serde(default, deserialize_with = "lenient_experience")]
    pub experience_level: Option<ExperienceLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rest_day_detection() {
        let flagged = WorkoutDayPlan::rest("sunday", Some("light walk"));
        assert!(flagged.is_rest_day());
        assert!(flagged.has_active_recovery());

        let empty: WorkoutDayPlan =
            serde_json::from_value(json!({"day": "monday", "focus": "legs", "exercises": []}))
                .unwrap();
        assert!(empty.is_rest_day());

        let training = WorkoutDayPlan::training(
            "tuesday",
            "upper",
            vec![Exercise::reps("Push-up", "bodyweight", 3.0, 12.0)],
        );
        assert!(!training.is_rest_day());
    }

    #[test]
    fn test_exercise_numeric_strings() {
        let exercise: Exercise = serde_json::from_value(json!({
            "name": "Plank",
            "equipment": "bodyweight",
            "sets": "3",
            "duration": "45 seconds"
        }))
        .unwrap();

        assert_eq!(exercise.sets, Some(3.0));
        assert_eq!(exercise.reps, None);
        assert_eq!(exercise.duration, Some(45.0));
    }

    #[test]
    fn test_preferences_unknown_level() {
        let prefs: WorkoutPreferences = serde_json::from_value(json!({
            "preferredDuration": "45",
            "availableDays": ["monday", "wednesday"],
            "experienceLevel": "elite"
        }))
        .unwrap();

        assert_eq!(prefs.preferred_duration, Some(45.0));
        assert_eq!(prefs.experience_level, None);
        assert_eq!(prefs.available_days.len(), 2);
    }
}
