// ABOUTME: Environment-variable driven server configuration with validated defaults
// ABOUTME: Covers HTTP port, storage backend selection, and CORS origin policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! Server configuration loaded from environment variables
//!
//! | Variable               | Default      | Meaning                                   |
//! |------------------------|--------------|-------------------------------------------|
//! | `HTTP_PORT`            | `3001`       | Port the HTTP API binds to                |
//! | `STORAGE_URL`          | `./data`     | `memory://` or a data directory path      |
//! | `CORS_ALLOWED_ORIGINS` | `*`          | Comma-separated origin list, or wildcard  |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Default HTTP port, matching the original backend
const DEFAULT_HTTP_PORT: u16 = 3001;

/// Default data directory for the JSON-file storage backend
const DEFAULT_STORAGE_URL: &str = "./data";

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Storage backend configuration
    pub storage: StorageConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

/// Storage backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selector: `memory://` or a data directory path for JSON files
    pub url: String,
}

impl StorageConfig {
    /// Whether the in-memory backend is selected
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.url.starts_with("memory://")
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or `*` for any origin
    pub allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but unparseable
    /// (e.g. a non-numeric `HTTP_PORT`).
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
            .parse()
            .context("Invalid HTTP_PORT value")?;

        // DATA_DIR is honored as a legacy alias for STORAGE_URL
        let storage_url = env::var("STORAGE_URL")
            .or_else(|_| env::var("DATA_DIR"))
            .unwrap_or_else(|_| DEFAULT_STORAGE_URL.into());

        Ok(Self {
            http_port,
            storage: StorageConfig { url: storage_url },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
        })
    }

    /// Get a summary of the configuration for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Stridelog Server Configuration:\n\
             - HTTP Port: {}\n\
             - Storage: {}\n\
             - CORS Origins: {}",
            self.http_port,
            if self.storage.is_memory() {
                "in-memory"
            } else {
                &self.storage.url
            },
            self.cors.allowed_origins,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            storage: StorageConfig {
                url: DEFAULT_STORAGE_URL.into(),
            },
            cors: CorsConfig {
                allowed_origins: "*".into(),
            },
        }
    }
}

/// Read an environment variable with a fallback default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, 3001);
        assert!(!config.storage.is_memory());
        assert_eq!(config.cors.allowed_origins, "*");
    }

    #[test]
    fn test_memory_url_detection() {
        let storage = StorageConfig {
            url: "memory://".into(),
        };
        assert!(storage.is_memory());
    }

    #[test]
    fn test_summary_redacts_nothing_but_reads_cleanly() {
        let config = ServerConfig::default();
        let summary = config.summary();
        assert!(summary.contains("HTTP Port: 3001"));
        assert!(summary.contains("./data"));
    }
}
