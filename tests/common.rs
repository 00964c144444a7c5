// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, in-memory app construction, and an HTTP request helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project
#![allow(dead_code)]

//! Shared test utilities for `stridelog`
//!
//! Common setup to reduce duplication across integration tests: quiet test
//! logging, an app fixture over in-memory storage, and a small helper to run
//! requests against the router without binding a socket.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::Serialize;
use std::sync::{Arc, Once};
use stridelog::{
    config::environment::{ServerConfig, StorageConfig},
    server::{HttpServer, ServerResources},
    storage::Storage,
};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build an app over in-memory storage, returning the shared resources
/// and the full router (including the `/api` nest and middleware)
pub async fn create_test_app() -> (Arc<ServerResources>, Router) {
    init_test_logging();
    let storage = Storage::new("memory://")
        .await
        .expect("memory storage never fails to initialize");
    let config = ServerConfig {
        storage: StorageConfig {
            url: "memory://".into(),
        },
        ..ServerConfig::default()
    };
    let resources = Arc::new(ServerResources::new(storage, Arc::new(config)));
    let router = HttpServer::new(resources.clone()).router();
    (resources, router)
}

/// A minimal JSON workout creation body for the given day
pub fn run_workout_body(date: &str, distance: f64) -> serde_json::Value {
    serde_json::json!({
        "date": date,
        "type": "run",
        "title": "Easy run",
        "duration": 45,
        "distance": distance
    })
}

/// Helper to build and execute HTTP requests against the router
pub struct TestRequest {
    method: Method,
    uri: String,
    body: Option<String>,
}

impl TestRequest {
    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn put(uri: &str) -> Self {
        Self::new(Method::PUT, uri)
    }

    pub fn delete(uri: &str) -> Self {
        Self::new(Method::DELETE, uri)
    }

    fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            body: None,
        }
    }

    /// Attach a JSON body
    pub fn json<T: Serialize>(mut self, data: &T) -> Self {
        self.body = Some(serde_json::to_string(data).expect("serializable test body"));
        self
    }

    /// Attach a raw body string, sent with a JSON content type
    pub fn raw_body(mut self, data: &str) -> Self {
        self.body = Some(data.to_owned());
        self
    }

    /// Execute the request against the router
    pub async fn send(self, app: &Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if self.body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(Body::from(self.body.unwrap_or_default()))
            .expect("valid test request");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("router never errors");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable response body");
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON response body")
        };

        TestResponse { status, body }
    }
}

/// Captured response: status plus parsed JSON body (Null when empty)
pub struct TestResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}
