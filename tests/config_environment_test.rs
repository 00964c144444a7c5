// ABOUTME: Tests for environment-variable configuration loading
// ABOUTME: Serialized because they mutate process-wide environment state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

use serial_test::serial;
use std::env;
use stridelog::config::environment::ServerConfig;

fn clear_config_env() {
    for key in ["HTTP_PORT", "STORAGE_URL", "DATA_DIR", "CORS_ALLOWED_ORIGINS"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_env_is_empty() {
    clear_config_env();
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 3001);
    assert_eq!(config.storage.url, "./data");
    assert_eq!(config.cors.allowed_origins, "*");
}

#[test]
#[serial]
fn test_overrides_from_env() {
    clear_config_env();
    env::set_var("HTTP_PORT", "8080");
    env::set_var("STORAGE_URL", "memory://");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://app.example.com");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);
    assert!(config.storage.is_memory());
    assert_eq!(config.cors.allowed_origins, "https://app.example.com");
    clear_config_env();
}

#[test]
#[serial]
fn test_data_dir_alias() {
    clear_config_env();
    env::set_var("DATA_DIR", "/var/lib/stridelog");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.storage.url, "/var/lib/stridelog");
    clear_config_env();
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");
    let result = ServerConfig::from_env();
    assert!(result.is_err());
    clear_config_env();
}
