// ABOUTME: Marathon plan route handlers for the fixed 8-week checklist
// ABOUTME: Serves the static plan, the shared progress record, and computed summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! Marathon plan routes
//!
//! The plan itself is static; only the shared completion record is stored.
//! Reading progress before anything was saved returns a fresh empty record
//! rather than a 404, matching the original backend.

use crate::{
    errors::AppError,
    extractors::AppJson,
    plan::{self, MarathonProgress},
    server::ServerResources,
    storage::StorageProvider,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Body for replacing the completed-workout set
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    /// Completed `"<week>-<day>"` keys; duplicates are deduplicated
    pub completed_workouts: Vec<String>,
}

/// Marathon plan routes
pub struct MarathonRoutes;

impl MarathonRoutes {
    /// Create all marathon plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/marathon/plan", get(Self::handle_plan))
            .route(
                "/marathon/progress",
                get(Self::handle_get_progress).put(Self::handle_put_progress),
            )
            .route("/marathon/summary", get(Self::handle_summary))
            .with_state(resources)
    }

    /// Handle fetching the static training plan
    async fn handle_plan() -> Response {
        (StatusCode::OK, Json(plan::TRAINING_PLAN)).into_response()
    }

    /// Handle fetching the shared progress record
    async fn handle_get_progress(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let progress = resources
            .storage
            .load_marathon_progress()
            .await?
            .unwrap_or_else(MarathonProgress::empty);

        Ok((StatusCode::OK, Json(progress)).into_response())
    }

    /// Handle replacing the shared progress record
    async fn handle_put_progress(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<UpdateProgressRequest>,
    ) -> Result<Response, AppError> {
        let progress = MarathonProgress {
            id: plan::PROGRESS_ID.into(),
            completed_workouts: request.completed_workouts.into_iter().collect::<BTreeSet<_>>(),
            last_updated: Utc::now(),
        };

        let stored = resources.storage.save_marathon_progress(progress).await?;
        Ok((StatusCode::OK, Json(stored)).into_response())
    }

    /// Handle the computed overall and per-week progress summary
    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let progress = resources
            .storage
            .load_marathon_progress()
            .await?
            .unwrap_or_else(MarathonProgress::empty);

        Ok((StatusCode::OK, Json(plan::summarize(&progress))).into_response())
    }
}
