// ABOUTME: Integration tests for logging configuration and subscriber installation
// ABOUTME: Tests environment parsing, filter construction, and single global initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

use fitplan_validation::constants::service_names;
use fitplan_validation::logging::{LogFormat, LoggingConfig, ValidationLogger};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 5] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "SERVICE_NAME",
];

fn clear_logging_env() {
    for key in LOGGING_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_default_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
    assert_eq!(config.service_name, service_names::FITPLAN_VALIDATION);
}

#[test]
#[serial]
fn test_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "plan-checker");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert!(config.include_location, "production logs carry locations");
    assert_eq!(config.service_name, "plan-checker");
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_pretty() {
    clear_logging_env();
    env::set_var("LOG_FORMAT", "xml");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.level, "info");
}

#[test]
#[serial]
fn test_env_filter_accepts_directives() {
    let config = LoggingConfig {
        level: "warn,fitplan_validation::report=debug".into(),
        ..LoggingConfig::default()
    };
    let filter = config.env_filter().to_string();
    assert!(filter.contains("warn"));
}

#[test]
#[serial]
fn test_init_installs_subscriber_once() {
    let config = LoggingConfig {
        format: LogFormat::Compact,
        level: "warn".into(),
        ..LoggingConfig::default()
    };

    assert!(config.init().is_ok());
    assert!(config.init().is_err(), "a second global subscriber must be refused");

    // Events after installation must not panic
    ValidationLogger::log_outcome("meal_plan", "week-1", false, 2, 1);
    ValidationLogger::log_batch(10, 3, 42);
}
