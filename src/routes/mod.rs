// ABOUTME: Route module organization for the Stridelog HTTP API
// ABOUTME: Centralized route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! Route module for the Stridelog server
//!
//! Routes are organized by domain. Each module contains only route
//! definitions and thin handler functions that delegate to the storage and
//! aggregation layers.

/// Health check and readiness routes
pub mod health;
/// Marathon plan and progress routes
pub mod marathon;
/// Weekly/all-time statistics routes
pub mod stats;
/// Workout CRUD and completion routes
pub mod workouts;

/// Health route handlers
pub use health::HealthRoutes;
/// Marathon plan route handlers
pub use marathon::MarathonRoutes;
/// Statistics route handlers
pub use stats::StatsRoutes;
/// Workout route handlers
pub use workouts::WorkoutRoutes;
