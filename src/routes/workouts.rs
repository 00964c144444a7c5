// ABOUTME: Workout CRUD route handlers for the calendar-based log
// ABOUTME: List/create/update/delete plus the per-partner completion toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! Workout routes
//!
//! CRUD over the workout log, plus the completion toggle each partner uses
//! from the calendar. Updates are partial: absent fields stay unchanged, and
//! an explicit `null` clears the two optional fields. The id is
//! server-assigned and never updatable.

use crate::{
    errors::AppError,
    extractors::AppJson,
    models::{Partner, Workout, WorkoutType},
    server::ServerResources,
    storage::StorageProvider,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

/// Deserializes `null` as `Some(None)` so handlers can tell "clear this
/// field" apart from "leave it alone" (which arrives as a missing key).
fn clearable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Body for creating a workout (id is assigned by the server)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Workout category
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Short title
    pub title: String,
    /// Duration in minutes
    pub duration: u32,
    /// Distance in kilometres
    #[serde(default)]
    pub distance: Option<f64>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Partners who already completed the session
    #[serde(default)]
    pub completed_by: BTreeSet<Partner>,
}

/// Body for partially updating a workout
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutRequest {
    /// New calendar day
    pub date: Option<NaiveDate>,
    /// New category
    #[serde(rename = "type")]
    pub workout_type: Option<WorkoutType>,
    /// New title
    pub title: Option<String>,
    /// New duration in minutes
    pub duration: Option<u32>,
    /// New distance; `null` clears it
    #[serde(default, deserialize_with = "clearable")]
    pub distance: Option<Option<f64>>,
    /// New notes; `null` clears them
    #[serde(default, deserialize_with = "clearable")]
    pub notes: Option<Option<String>>,
    /// Replacement completion set
    pub completed_by: Option<BTreeSet<Partner>>,
}

/// Body for toggling one partner's completion flag
#[derive(Debug, Deserialize)]
pub struct ToggleCompletionRequest {
    /// Which partner is toggling
    pub partner: Partner,
}

/// Query parameters for the workout list
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    /// Restrict the list to one calendar day
    #[serde(default)]
    date: Option<String>,
}

/// Workout routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/workouts",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/workouts/:id",
                put(Self::handle_update).delete(Self::handle_delete),
            )
            .route(
                "/workouts/:id/completion",
                put(Self::handle_toggle_completion),
            )
            .with_state(resources)
    }

    /// Handle listing workouts, optionally filtered to one day
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let day = params
            .date
            .map(|raw| {
                raw.parse::<NaiveDate>()
                    .map_err(|e| AppError::invalid_format(format!("Invalid date '{raw}': {e}")))
            })
            .transpose()?;

        let mut workouts = resources.storage.list_workouts().await?;
        if let Some(day) = day {
            workouts.retain(|w| w.date == day);
        }

        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle creating a workout
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AppJson(request): AppJson<CreateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        let workout = Workout {
            id: Uuid::new_v4(),
            date: request.date,
            workout_type: request.workout_type,
            title: request.title,
            duration: request.duration,
            distance: request.distance,
            notes: request.notes,
            completed_by: request.completed_by,
        };

        let created = resources.storage.create_workout(workout).await?;
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    /// Handle a partial update of one workout
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        AppJson(request): AppJson<UpdateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        let mut workout = resources
            .storage
            .get_workout(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("workout {id}")))?;

        if let Some(date) = request.date {
            workout.date = date;
        }
        if let Some(workout_type) = request.workout_type {
            workout.workout_type = workout_type;
        }
        if let Some(title) = request.title {
            workout.title = title;
        }
        if let Some(duration) = request.duration {
            workout.duration = duration;
        }
        if let Some(distance) = request.distance {
            workout.distance = distance;
        }
        if let Some(notes) = request.notes {
            workout.notes = notes;
        }
        if let Some(completed_by) = request.completed_by {
            workout.completed_by = completed_by;
        }

        let updated = resources.storage.update_workout(workout).await?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    /// Handle deleting one workout
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        if resources.storage.delete_workout(id).await? {
            Ok((StatusCode::NO_CONTENT, ()).into_response())
        } else {
            Err(AppError::not_found(format!("workout {id}")))
        }
    }

    /// Handle toggling one partner's completion flag
    async fn handle_toggle_completion(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        AppJson(request): AppJson<ToggleCompletionRequest>,
    ) -> Result<Response, AppError> {
        let updated = resources
            .storage
            .toggle_workout_completion(id, request.partner)
            .await?;
        Ok((StatusCode::OK, Json(updated)).into_response())
    }
}
