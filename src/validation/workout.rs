// ABOUTME: Workout-plan structural validator for training days, rest days, and exercises
// ABOUTME: Checks plausibility bands and alignment with duration, schedule, and experience
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Findings, Severity};
use crate::config::{Band, ValidationConfig, WorkoutThresholds};
use fitplan_core::models::{
    DayOfWeek, Exercise, ExperienceLevel, WorkoutDayPlan, WorkoutPreferences,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Per-day outcome with a display-ready issue list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDaySummary {
    /// Day label (the generated day, or `Day N` when missing)
    pub day: String,
    /// Training focus, when given
    pub focus: Option<String>,
    /// Whether the day was treated as a rest day
    pub rest_day: bool,
    /// Exercises listed
    pub exercise_count: usize,
    /// Errors raised for this day
    pub error_count: usize,
    /// Warnings raised for this day
    pub warning_count: usize,
    /// Every message raised for this day, in order
    pub issues: Vec<String>,
}

/// Outcome of a workout-plan validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutValidationResult {
    /// True when `errors` is empty
    pub valid: bool,
    /// Informational findings
    pub warnings: Vec<String>,
    /// Blocking findings
    pub errors: Vec<String>,
    /// One entry per day in input order
    pub day_summaries: Vec<WorkoutDaySummary>,
}

impl WorkoutValidationResult {
    fn rejected(message: &str) -> Self {
        Self {
            valid: false,
            warnings: Vec::new(),
            errors: vec![message.to_owned()],
            day_summaries: Vec::new(),
        }
    }
}

const EMPTY_PLAN: &str = "Workout plan has no days";
const NOT_AN_ARRAY: &str = "Workout plan must be an array of days";

/// Records a day's findings both globally and in its summary
struct DayRecorder<'a> {
    findings: &'a mut Findings,
    issues: Vec<String>,
    errors: usize,
    warnings: usize,
}

impl<'a> DayRecorder<'a> {
    fn new(findings: &'a mut Findings) -> Self {
        Self {
            findings,
            issues: Vec::new(),
            errors: 0,
            warnings: 0,
        }
    }

    fn push(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
        self.issues.push(message.clone());
        self.findings.push(severity, message);
    }

    fn error(&mut self, message: String) {
        self.push(Severity::Error, message);
    }

    fn warn(&mut self, message: String) {
        self.push(Severity::Warning, message);
    }

    fn check_band(&mut self, band: &Band, value: f64, describe: impl FnOnce() -> String) {
        if !band.contains(value) {
            self.warn(format!("{} outside {band}", describe()));
        }
    }
}

/// Validate a typed workout plan with default thresholds
#[must_use]
pub fn validate_workout_plan(
    days: &[WorkoutDayPlan],
    preferences: &WorkoutPreferences,
) -> WorkoutValidationResult {
    validate_workout_plan_with_config(days, preferences, &ValidationConfig::global().workout)
}

/// Validate a workout plan supplied as raw JSON with default thresholds
#[must_use]
pub fn validate_workout_plan_value(
    plan: &Value,
    preferences: &WorkoutPreferences,
) -> WorkoutValidationResult {
    validate_workout_plan_value_with_config(plan, preferences, &ValidationConfig::global().workout)
}

/// Validate a workout plan supplied as raw JSON
///
/// A non-array value is rejected with a single error. Array elements that are
/// not objects are reported as malformed days.
#[must_use]
pub fn validate_workout_plan_value_with_config(
    plan: &Value,
    preferences: &WorkoutPreferences,
    thresholds: &WorkoutThresholds,
) -> WorkoutValidationResult {
    let Some(items) = plan.as_array() else {
        warn!("Workout plan is not an array");
        return WorkoutValidationResult::rejected(NOT_AN_ARRAY);
    };

    let mut malformed = Vec::new();
    let days: Vec<WorkoutDayPlan> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.is_object() {
                if let Ok(day) = WorkoutDayPlan::deserialize(item) {
                    return day;
                }
            }
            malformed.push(index);
            WorkoutDayPlan::default()
        })
        .collect();

    let mut result = validate_workout_plan_with_config(&days, preferences, thresholds);
    for index in malformed {
        let message = format!("Day {}: entry is not a workout day object", index + 1);
        if let Some(summary) = result.day_summaries.get_mut(index) {
            summary.issues.insert(0, message.clone());
            summary.error_count += 1;
        }
        result.errors.push(message);
    }
    result.valid = result.errors.is_empty();
    result
}

/// Validate a workout plan
///
/// An empty plan is invalid. Each day is checked for structure, plausibility
/// bands, and alignment with the user's preferences.
#[must_use]
pub fn validate_workout_plan_with_config(
    days: &[WorkoutDayPlan],
    preferences: &WorkoutPreferences,
    thresholds: &WorkoutThresholds,
) -> WorkoutValidationResult {
    if days.is_empty() {
        warn!("Workout plan is empty");
        return WorkoutValidationResult::rejected(EMPTY_PLAN);
    }

    let available: Vec<DayOfWeek> = preferences
        .available_days
        .iter()
        .filter_map(|day| DayOfWeek::parse(day))
        .collect();

    let mut findings = Findings::default();
    let day_summaries: Vec<WorkoutDaySummary> = days
        .iter()
        .enumerate()
        .map(|(index, day)| {
            validate_day(index, day, preferences, &available, thresholds, &mut findings)
        })
        .collect();

    let result = findings.into_result();
    if result.valid {
        debug!(
            days = days.len(),
            warnings = result.warnings.len(),
            "Workout plan passed validation"
        );
    } else {
        warn!(
            days = days.len(),
            errors = result.errors.len(),
            "Workout plan failed validation"
        );
    }

    WorkoutValidationResult {
        valid: result.valid,
        warnings: result.warnings,
        errors: result.errors,
        day_summaries,
    }
}

fn validate_day(
    index: usize,
    day: &WorkoutDayPlan,
    preferences: &WorkoutPreferences,
    available: &[DayOfWeek],
    thresholds: &WorkoutThresholds,
    findings: &mut Findings,
) -> WorkoutDaySummary {
    let label = day
        .day
        .clone()
        .unwrap_or_else(|| format!("Day {}", index + 1));
    let mut recorder = DayRecorder::new(findings);

    if day.day.is_none() {
        recorder.error(format!("{label}: missing day"));
    }
    if day.focus.is_none() {
        recorder.error(format!("{label}: missing focus"));
    }

    let count = day.exercise_count();
    let declared_training = day.rest_day == Some(false) && count == 0;
    let rest_day = day.is_rest_day() && !declared_training;

    if declared_training {
        recorder.error(format!("{label}: training day has no exercises"));
    } else if rest_day {
        if !day.has_active_recovery() {
            recorder.error(format!(
                "{label}: rest day is missing activeRecovery guidance"
            ));
        }
    } else {
        check_training_day(&label, day, preferences, available, thresholds, &mut recorder);
    }

    if let (Some(preferred), Some(estimated)) = (preferences.preferred_duration, day.estimated_time)
    {
        if estimated > preferred + thresholds.duration_grace_minutes {
            recorder.warn(format!(
                "{label}: estimated time {estimated} min exceeds preferred {preferred} min by more than {} min",
                thresholds.duration_grace_minutes
            ));
        }
    }

    WorkoutDaySummary {
        day: label,
        focus: day.focus.clone(),
        rest_day,
        exercise_count: count,
        error_count: recorder.errors,
        warning_count: recorder.warnings,
        issues: recorder.issues,
    }
}

fn check_training_day(
    label: &str,
    day: &WorkoutDayPlan,
    preferences: &WorkoutPreferences,
    available: &[DayOfWeek],
    thresholds: &WorkoutThresholds,
    recorder: &mut DayRecorder<'_>,
) {
    let count = day.exercise_count();

    let count_value = count as f64;
    recorder.check_band(&thresholds.exercise_count, count_value, || {
        format!("{label}: {count} exercises")
    });
    if let Some(minutes) = day.estimated_time {
        recorder.check_band(&thresholds.session_minutes, minutes, || {
            format!("{label}: estimated time {minutes} min")
        });
    }
    if let Some(calories) = day.estimated_calories {
        recorder.check_band(&thresholds.session_calories, calories, || {
            format!("{label}: estimated calories {calories} kcal")
        });
    }

    if !available.is_empty() {
        let scheduled = day.day.as_deref().and_then(DayOfWeek::parse);
        if scheduled.is_some_and(|scheduled| !available.contains(&scheduled)) {
            recorder.warn(format!("{label}: scheduled outside available days"));
        }
    }

    match preferences.experience_level {
        Some(ExperienceLevel::Beginner) if count > thresholds.beginner_max_exercises => {
            recorder.warn(format!(
                "{label}: {count} exercises is a lot for a beginner (max {})",
                thresholds.beginner_max_exercises
            ));
        }
        Some(ExperienceLevel::Advanced) if count < thresholds.advanced_min_exercises => {
            recorder.warn(format!(
                "{label}: only {count} exercises for an advanced trainee (min {})",
                thresholds.advanced_min_exercises
            ));
        }
        _ => {}
    }

    for (position, exercise) in day.exercises.iter().flatten().enumerate() {
        check_exercise(label, position, exercise, thresholds, recorder);
    }
}

fn check_exercise(
    label: &str,
    position: usize,
    exercise: &Exercise,
    thresholds: &WorkoutThresholds,
    recorder: &mut DayRecorder<'_>,
) {
    let context = exercise.name.as_deref().map_or_else(
        || format!("{label} exercise {}", position + 1),
        |name| format!("{label} {name}"),
    );

    if exercise.name.is_none() {
        recorder.error(format!("{context}: missing name"));
    }
    if exercise.equipment.is_none() {
        recorder.error(format!("{context}: missing equipment"));
    }
    if exercise.sets.is_none() && exercise.reps.is_none() && exercise.duration.is_none() {
        recorder.error(format!(
            "{context}: needs sets with reps or a timed duration"
        ));
    }

    if let Some(sets) = exercise.sets {
        recorder.check_band(&thresholds.sets, sets, || format!("{context}: sets {sets}"));
    }
    if let Some(reps) = exercise.reps {
        recorder.check_band(&thresholds.reps, reps, || format!("{context}: reps {reps}"));
    }
    if let Some(duration) = exercise.duration {
        recorder.check_band(&thresholds.duration_secs, duration, || {
            format!("{context}: duration {duration}s")
        });
    }
}
