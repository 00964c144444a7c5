// ABOUTME: Shared server resources and HTTP server assembly
// ABOUTME: Builds the /api router with middleware layers and runs the axum server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! # HTTP Server
//!
//! [`ServerResources`] holds everything handlers share (storage backend and
//! configuration) behind a single `Arc`, so route construction never clones
//! individual components. [`HttpServer`] assembles the `/api` router and
//! serves it.

use crate::config::environment::ServerConfig;
use crate::middleware::setup_cors;
use crate::routes::{HealthRoutes, MarathonRoutes, StatsRoutes, WorkoutRoutes};
use crate::storage::Storage;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared resources for all route handlers
pub struct ServerResources {
    /// Active storage backend
    pub storage: Storage,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources
    #[must_use]
    pub fn new(storage: Storage, config: Arc<ServerConfig>) -> Self {
        Self { storage, config }
    }
}

/// The Stridelog HTTP server
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a new server over shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router, including middleware layers
    #[must_use]
    pub fn router(&self) -> Router {
        let api = Router::new()
            .merge(WorkoutRoutes::routes(self.resources.clone()))
            .merge(StatsRoutes::routes(self.resources.clone()))
            .merge(MarathonRoutes::routes(self.resources.clone()))
            .merge(HealthRoutes::routes());

        Router::new()
            .nest("/api", api)
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(self.resources.config.as_ref()))
    }

    /// Bind and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails.
    pub async fn run(&self, port: u16) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
        info!("HTTP server listening on port {port}");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
