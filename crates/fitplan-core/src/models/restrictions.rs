// ABOUTME: Dietary restriction profile captured from the user health survey
// ABOUTME: Diet preferences, category-based strict exclusions, and food allergies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user's dietary constraints
///
/// All entries are free text and matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionProfile {
    /// Diet types such as `vegetarian` or `gluten-free`
    #[serde(default)]
    pub diet_prefs: Vec<String>,
    /// Disliked foods grouped by category (e.g. `seafood: ["shrimp"]`)
    #[serde(default)]
    pub strict_exclusions: BTreeMap<String, Vec<String>>,
    /// Food allergies
    #[serde(default)]
    pub food_allergies: Vec<String>,
}

impl RestrictionProfile {
    /// Profile with only diet preferences
    pub fn with_diets<I, S>(diets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            diet_prefs: diets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Whether the profile imposes no constraints at all
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.diet_prefs.is_empty()
            && self.food_allergies.is_empty()
            && self.strict_exclusions.is_empty()
    }
}
