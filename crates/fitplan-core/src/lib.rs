// ABOUTME: Core types for FitPlan meal and workout plan validation
// ABOUTME: Foundation crate with plan data models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitPlan` Core
//!
//! Foundation crate providing the shared data model for plan validation.
//! Plans arrive as JSON produced by an upstream generator, so every model here
//! deserializes leniently: unknown day names are preserved as raw text, missing
//! numbers default to zero, and numeric fields accept strings such as `"12 reps"`.
//!
//! ## Modules
//!
//! - **models**: Meal slots, nutrition targets, recipe claims, restriction profiles,
//!   workout plans, and grocery items
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition constants and service names

/// Unified error handling with standard error codes
pub mod errors;

/// Nutrition constants and service identifiers
pub mod constants;

/// Plan data models (meals, targets, recipes, restrictions, workouts, groceries)
pub mod models;
