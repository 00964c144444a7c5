// ABOUTME: In-memory storage backend for tests and ephemeral runs
// ABOUTME: RwLock-guarded vectors with the same semantics as the file backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! In-memory storage backend
//!
//! Keeps everything in process memory behind `RwLock`s. Used by the test
//! suite and selectable at runtime with `STORAGE_URL=memory://`.

use crate::errors::{AppError, AppResult};
use crate::models::{Partner, Workout};
use crate::plan::MarathonProgress;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory storage instance
#[derive(Default)]
pub struct MemoryStorage {
    workouts: RwLock<Vec<Workout>>,
    progress: RwLock<Option<MarathonProgress>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl super::StorageProvider for MemoryStorage {
    async fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        Ok(self.workouts.read().await.clone())
    }

    async fn get_workout(&self, id: Uuid) -> AppResult<Option<Workout>> {
        Ok(self
            .workouts
            .read()
            .await
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn create_workout(&self, workout: Workout) -> AppResult<Workout> {
        self.workouts.write().await.push(workout.clone());
        Ok(workout)
    }

    async fn update_workout(&self, workout: Workout) -> AppResult<Workout> {
        let mut workouts = self.workouts.write().await;
        let slot = workouts
            .iter_mut()
            .find(|w| w.id == workout.id)
            .ok_or_else(|| AppError::not_found(format!("workout {}", workout.id)))?;
        *slot = workout.clone();
        Ok(workout)
    }

    async fn delete_workout(&self, id: Uuid) -> AppResult<bool> {
        let mut workouts = self.workouts.write().await;
        let before = workouts.len();
        workouts.retain(|w| w.id != id);
        Ok(workouts.len() != before)
    }

    async fn toggle_workout_completion(&self, id: Uuid, partner: Partner) -> AppResult<Workout> {
        let mut workouts = self.workouts.write().await;
        let workout = workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::not_found(format!("workout {id}")))?;
        workout.toggle_completion(partner);
        Ok(workout.clone())
    }

    async fn load_marathon_progress(&self) -> AppResult<Option<MarathonProgress>> {
        Ok(self.progress.read().await.clone())
    }

    async fn save_marathon_progress(
        &self,
        progress: MarathonProgress,
    ) -> AppResult<MarathonProgress> {
        *self.progress.write().await = Some(progress.clone());
        Ok(progress)
    }
}
