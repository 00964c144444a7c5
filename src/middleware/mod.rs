// ABOUTME: HTTP middleware for the Stridelog server
// ABOUTME: CORS layer construction from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! HTTP middleware

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
