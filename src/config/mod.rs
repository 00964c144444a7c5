// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-driven configuration for ports, storage, and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! Configuration module for the Stridelog server
//!
//! Configuration is environment-only: every setting has a sensible default
//! and can be overridden through environment variables (see
//! [`environment::ServerConfig::from_env`]).

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, ServerConfig, StorageConfig};
