// ABOUTME: Statistics route handlers for weekly and all-time progress
// ABOUTME: Thin handler over the stats aggregation module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! Statistics routes
//!
//! One endpoint returning both windows: the Monday-start week containing the
//! reference date (today by default) and the all-time totals.

use crate::{
    errors::AppError,
    server::ServerResources,
    stats::{all_time_stats, weekly_stats, StatsResponse},
    storage::StorageProvider,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the stats endpoint
#[derive(Debug, Default, Deserialize)]
struct StatsQuery {
    /// Reference date for the weekly window (defaults to today)
    #[serde(default)]
    date: Option<String>,
}

/// Statistics routes
pub struct StatsRoutes;

impl StatsRoutes {
    /// Create all statistics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/stats", get(Self::handle_stats))
            .with_state(resources)
    }

    /// Handle the combined weekly/all-time stats request
    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<StatsQuery>,
    ) -> Result<Response, AppError> {
        let reference = params
            .date
            .map(|raw| {
                raw.parse::<NaiveDate>()
                    .map_err(|e| AppError::invalid_format(format!("Invalid date '{raw}': {e}")))
            })
            .transpose()?
            .unwrap_or_else(|| Utc::now().date_naive());

        let workouts = resources.storage.list_workouts().await?;
        let response = StatsResponse {
            weekly: weekly_stats(&workouts, reference),
            total: all_time_stats(&workouts),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
