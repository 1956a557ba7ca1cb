// ABOUTME: Meal plan data models: days, meal types, meal slots, and calorie targets
// ABOUTME: Deserializes generator output leniently while exposing typed accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient::{ingredient_lines, number_or_zero, string_or_empty};
use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Day of the week, ordered Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl DayOfWeek {
    /// All days in week order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Lowercase key used in plan JSON
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Capitalized name for human-readable messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Parse a full day name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|day| day.as_str() == lower)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Self::Mon,
            DayOfWeek::Tuesday => Self::Tue,
            DayOfWeek::Wednesday => Self::Wed,
            DayOfWeek::Thursday => Self::Thu,
            DayOfWeek::Friday => Self::Fri,
            DayOfWeek::Saturday => Self::Sat,
            DayOfWeek::Sunday => Self::Sun,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
}

impl MealType {
    /// All meal types in serving order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Lowercase key used in plan JSON
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Parse a meal type, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|meal| meal.as_str() == lower)
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (day, meal type) cell of a weekly meal plan
///
/// `day` and `meal_type` hold the text exactly as generated; use
/// [`MealSlot::day_of_week`] and [`MealSlot::meal_kind`] for typed access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    /// Day as generated (expected `monday`..`sunday`)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub day: String,
    /// Meal type as generated (expected `breakfast`, `lunch`, `dinner`)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub meal_type: String,
    /// Dish name
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    /// Optional dish description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stated calories (kcal)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub calories: f64,
    /// Protein (g)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub carbs: f64,
    /// Fat (g)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub fat: f64,
    /// Free-text ingredient lines
    #[serde(
        default,
        deserialize_with = "ingredient_lines",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ingredients: Vec<String>,
}

impl MealSlot {
    /// Create a slot with the given macros and no ingredients
    pub fn new(
        day: DayOfWeek,
        meal_type: MealType,
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Self {
        Self {
            day: day.as_str().to_owned(),
            meal_type: meal_type.as_str().to_owned(),
            name: name.into(),
            description: None,
            calories,
            protein,
            carbs,
            fat,
            ingredients: Vec::new(),
        }
    }

    /// Attach ingredient lines
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parsed day, `None` when the generated text is not a day name
    #[must_use]
    pub fn day_of_week(&self) -> Option<DayOfWeek> {
        DayOfWeek::parse(&self.day)
    }

    /// Parsed meal type, `None` when unrecognized
    #[must_use]
    pub fn meal_kind(&self) -> Option<MealType> {
        MealType::parse(&self.meal_type)
    }
}

/// A calorie goal for one slot or one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalorieTarget {
    /// Target calories (kcal)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub calories: f64,
}

impl CalorieTarget {
    /// Create a target
    #[must_use]
    pub const fn new(calories: f64) -> Self {
        Self { calories }
    }
}

/// Per-slot and daily calorie targets for one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTargets {
    /// Breakfast target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<CalorieTarget>,
    /// Lunch target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<CalorieTarget>,
    /// Dinner target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<CalorieTarget>,
    /// Whole-day target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_totals: Option<CalorieTarget>,
}

impl DayTargets {
    /// Targets whose daily total is the sum of the three slots
    #[must_use]
    pub fn from_slots(breakfast: f64, lunch: f64, dinner: f64) -> Self {
        Self {
            breakfast: Some(CalorieTarget::new(breakfast)),
            lunch: Some(CalorieTarget::new(lunch)),
            dinner: Some(CalorieTarget::new(dinner)),
            daily_totals: Some(CalorieTarget::new(breakfast + lunch + dinner)),
        }
    }

    /// Target for a meal slot
    #[must_use]
    pub const fn slot(&self, meal_type: MealType) -> Option<CalorieTarget> {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
        }
    }

    /// Slot target calories, zero when absent
    #[must_use]
    pub fn slot_calories(&self, meal_type: Option<MealType>) -> f64 {
        meal_type
            .and_then(|meal| self.slot(meal))
            .map_or(0.0, |target| target.calories)
    }

    /// Daily target calories, zero when absent
    #[must_use]
    pub fn daily_calories(&self) -> f64 {
        self.daily_totals.map_or(0.0, |target| target.calories)
    }
}

/// Weekly nutrition targets keyed by day
///
/// Deserializes from an object keyed by day name. Keys that are not day names
/// (in any case) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NutritionTargets {
    days: BTreeMap<DayOfWeek, DayTargets>,
}

impl NutritionTargets {
    /// Empty targets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same targets for every day of the week
    #[must_use]
    pub fn uniform(targets: DayTargets) -> Self {
        DayOfWeek::ALL.into_iter().map(|day| (day, targets)).collect()
    }

    /// Set targets for a day
    pub fn insert(&mut self, day: DayOfWeek, targets: DayTargets) {
        self.days.insert(day, targets);
    }

    /// Targets for a day
    #[must_use]
    pub fn for_day(&self, day: DayOfWeek) -> Option<&DayTargets> {
        self.days.get(&day)
    }

    /// Whether no day has targets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate days in week order
    pub fn iter(&self) -> impl Iterator<Item = (&DayOfWeek, &DayTargets)> {
        self.days.iter()
    }
}

impl FromIterator<(DayOfWeek, DayTargets)> for NutritionTargets {
    fn from_iter<T: IntoIterator<Item = (DayOfWeek, DayTargets)>>(iter: T) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for NutritionTargets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, DayTargets>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, targets)| DayOfWeek::parse(&key).map(|day| (day, targets)))
            .collect())
    }
}
