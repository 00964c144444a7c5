// ABOUTME: Main library entry point for the Stridelog fitness-tracking backend
// ABOUTME: REST API for a two-person workout log with marathon plan tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

#![deny(unsafe_code)]

//! # Stridelog Server
//!
//! REST backend for a calendar-based workout log shared by two partners:
//! workout CRUD, weekly and all-time progress statistics, and a fixed 8-week
//! 21K training plan with shared completion tracking. Persistence is flat
//! JSON files by default, with an in-memory backend for tests.

/// Environment-driven server configuration
pub mod config;
/// Unified error handling
pub mod errors;
/// Request extractors with structured rejections
pub mod extractors;
/// Structured logging setup
pub mod logging;
/// HTTP middleware (CORS)
pub mod middleware;
/// Core data models
pub mod models;
/// Marathon training plan and progress
pub mod plan;
/// HTTP route handlers
pub mod routes;
/// Server resources and HTTP server assembly
pub mod server;
/// Weekly/all-time statistics aggregation
pub mod stats;
/// Storage abstraction with JSON-file and in-memory backends
pub mod storage;
