// ABOUTME: Nutrition constants and service identifiers shared across the workspace
// ABOUTME: Atwater energy factors and the service name used by structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Atwater general factors (kcal per gram)
///
/// Reference: Atwater, W.O. & Bryant, A.P. (1900). The availability and fuel value of food materials.
pub mod atwater {
    /// Energy per gram of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Energy per gram of carbohydrate
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Energy per gram of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;

    /// Calories implied by a macro breakdown
    #[must_use]
    pub fn calories_from_macros(protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
        protein_g.mul_add(
            PROTEIN_KCAL_PER_G,
            carbs_g.mul_add(CARBS_KCAL_PER_G, fat_g * FAT_KCAL_PER_G),
        )
    }
}

/// Service names for structured logging
pub mod service_names {
    /// Validation library / CLI service name
    pub const FITPLAN_VALIDATION: &str = "fitplan-validation";
}
