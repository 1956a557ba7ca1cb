// ABOUTME: End-to-end tests for the fitplan-validate command line tool
// ABOUTME: Runs the built binary against temporary plan files and checks output and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

mod common;

use anyhow::Result;
use common::{full_week_meals, sample_workout_week, week_targets, with_calories};
use fitplan_validation::models::{DayOfWeek, MealType};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fitplan-validate"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to run fitplan-validate")
}

fn write_json(dir: &Path, name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    Ok(path)
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_valid_bundle_exits_zero() -> Result<()> {
    let dir = TempDir::new()?;
    let bundle = json!({
        "id": "week-1",
        "meals": full_week_meals(),
        "targets": week_targets(),
        "workout": sample_workout_week(),
    });
    let path = write_json(dir.path(), "plan.json", &bundle)?;

    let output = run_cli(&["bundle", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let report = stdout_json(&output);
    assert_eq!(report["id"], "week-1");
    assert_eq!(report["valid"], true);
    Ok(())
}

#[test]
fn test_batch_reports_each_bundle() -> Result<()> {
    let dir = TempDir::new()?;
    let good = write_json(
        dir.path(),
        "good.json",
        &json!({ "meals": full_week_meals(), "targets": week_targets() }),
    )?;
    let bad_meals = with_calories(full_week_meals(), DayOfWeek::Sunday, MealType::Dinner, 100.0);
    let bad = write_json(
        dir.path(),
        "bad.json",
        &json!({ "meals": bad_meals, "targets": week_targets() }),
    )?;

    let output = run_cli(&["bundle", good.to_str().unwrap(), bad.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let reports = stdout_json(&output);
    assert_eq!(reports[0]["valid"], true);
    assert_eq!(reports[1]["valid"], false);
    Ok(())
}

#[test]
fn test_workout_subcommand_rejects_non_array() -> Result<()> {
    let dir = TempDir::new()?;
    let plan = write_json(dir.path(), "workout.json", &json!({ "monday": "run" }))?;

    let output = run_cli(&["workout", plan.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_json(&output)["errors"][0],
        "Workout plan must be an array of days"
    );
    Ok(())
}

#[test]
fn test_missing_meals_field_is_input_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_json(dir.path(), "empty.json", &json!({ "targets": {} }))?;

    let output = run_cli(&["bundle", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(65));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing required field: meals"));
    Ok(())
}

#[test]
fn test_unreadable_file_is_storage_error() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("nope.json");

    let output = run_cli(&["recipe", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(74));
    Ok(())
}

#[test]
fn test_config_prints_thresholds() {
    let output = run_cli(&["config"]);

    assert_eq!(output.status.code(), Some(0));
    let config = stdout_json(&output);
    assert_eq!(config["meal_plan"]["min_meal_calories"], 150.0);
    assert_eq!(config["workout"]["sets"]["max"], 10.0);
}

#[test]
fn test_bad_threshold_override_is_config_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_fitplan-validate"))
        .arg("config")
        .env("RUST_LOG", "error")
        .env("FITPLAN_MEAL_SLOT_ERROR_PERCENT", "abc")
        .output()
        .expect("failed to run fitplan-validate");

    assert_eq!(output.status.code(), Some(78));
    assert!(String::from_utf8_lossy(&output.stderr).contains("FITPLAN_MEAL_SLOT_ERROR_PERCENT"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_restrictions_subcommand_reports_violations() -> Result<()> {
    let dir = TempDir::new()?;
    let meals = write_json(dir.path(), "meals.json", &json!(full_week_meals()))?;
    let profile = write_json(dir.path(), "profile.json", &json!({ "dietPrefs": ["vegan"] }))?;

    let output = run_cli(&[
        "restrictions",
        "--meals",
        meals.to_str().unwrap(),
        "--profile",
        profile.to_str().unwrap(),
        "--preferred",
        "salmon,tofu",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let report = stdout_json(&output);
    assert_eq!(report["valid"], false);
    assert!(!report["violations"].as_array().unwrap().is_empty());
    assert_eq!(report["preferenceConflicts"].as_array().unwrap().len(), 1);
    Ok(())
}
