// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Uses serial execution because tests mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitgoal Contributors

use fitgoal::config::{LogLevel, PlannerConfig};
use fitgoal::constants::{defaults, env_config};
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var(env_config::WEBHOOK_URL);
    env::remove_var(env_config::HTTP_TIMEOUT_SECS);
    env::remove_var(env_config::LOG_LEVEL);
}

#[test]
#[serial]
fn defaults_apply_when_environment_is_empty() {
    clear_env();
    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config.webhook_url, defaults::WEBHOOK_URL);
    assert_eq!(config.http_timeout_secs, defaults::HTTP_TIMEOUT_SECS);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
#[serial]
fn overrides_are_honored() {
    clear_env();
    env::set_var(env_config::WEBHOOK_URL, "https://example.com/hook");
    env::set_var(env_config::HTTP_TIMEOUT_SECS, "5");
    env::set_var(env_config::LOG_LEVEL, "debug");

    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config.webhook_url, "https://example.com/hook");
    assert_eq!(config.http_timeout_secs, 5);
    assert_eq!(config.log_level, LogLevel::Debug);
    clear_env();
}

#[test]
#[serial]
fn malformed_webhook_url_is_rejected() {
    clear_env();
    env::set_var(env_config::WEBHOOK_URL, "not a url");
    let err = PlannerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("FITGOAL_WEBHOOK_URL"));
    clear_env();
}

#[test]
#[serial]
fn non_numeric_timeout_is_rejected() {
    clear_env();
    env::set_var(env_config::HTTP_TIMEOUT_SECS, "soon");
    assert!(PlannerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn unknown_log_level_falls_back_to_info() {
    clear_env();
    env::set_var(env_config::LOG_LEVEL, "chatty");
    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config.log_level, LogLevel::Info);
    clear_env();
}
