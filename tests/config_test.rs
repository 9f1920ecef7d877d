// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Runs serially because each test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;
use smoothie_lab::{
    config::{AppConfig, Environment},
    errors::ErrorCode,
};

const VARS: [&str; 4] = [
    "SMOOTHIE_DATA_DIR",
    "SMOOTHIE_GENERATION_DELAY_MS",
    "SMOOTHIE_NOTIFICATION_TTL_MS",
    "ENVIRONMENT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.generation_delay, Duration::from_millis(2000));
    assert_eq!(config.notification_ttl, Duration::from_millis(3000));
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.data_dir, AppConfig::default_data_dir());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var("SMOOTHIE_DATA_DIR", "/tmp/smoothie-test");
    env::set_var("SMOOTHIE_GENERATION_DELAY_MS", "0");
    env::set_var("SMOOTHIE_NOTIFICATION_TTL_MS", "1500");
    env::set_var("ENVIRONMENT", "testing");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/tmp/smoothie-test"));
    assert_eq!(config.generation_delay, Duration::ZERO);
    assert_eq!(config.notification_ttl, Duration::from_millis(1500));
    assert!(config.environment.is_testing());
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_delay_is_config_error() {
    clear_env();
    env::set_var("SMOOTHIE_GENERATION_DELAY_MS", "soon");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_values_fail_validation() {
    clear_env();
    env::set_var("SMOOTHIE_NOTIFICATION_TTL_MS", "0");
    assert!(AppConfig::from_env().is_err());

    env::set_var("SMOOTHIE_NOTIFICATION_TTL_MS", "3000");
    env::set_var("SMOOTHIE_GENERATION_DELAY_MS", "600000");
    assert!(AppConfig::from_env().is_err());
    clear_env();
}
