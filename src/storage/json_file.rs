// ABOUTME: Flat JSON-file storage backend under a configurable data directory
// ABOUTME: Seeds missing files with defaults and writes atomically via temp-file rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! JSON-file storage backend
//!
//! Persists workouts in `workouts.json` and the marathon progress record in
//! `marathonProgress.json` (wrapped as `{"progress": ...}`, the layout the
//! original backend wrote). The data directory is created on demand and
//! missing files are seeded with defaults, so a fresh checkout works without
//! any setup. Files are pretty-printed and human-editable; every write goes
//! through a temp file and rename so a crash cannot truncate the data.

use crate::errors::{AppError, AppResult};
use crate::models::{Partner, Workout};
use crate::plan::MarathonProgress;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

const WORKOUTS_FILE: &str = "workouts.json";
const MARATHON_FILE: &str = "marathonProgress.json";

/// Marathon file layout: the record sits under a `progress` key
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    progress: Option<MarathonProgress>,
}

/// Flat JSON-file storage rooted at a data directory
pub struct JsonFileStorage {
    data_dir: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStorage {
    /// Create a storage instance rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the data directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns a storage error when the directory cannot be created.
    pub async fn ensure_data_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }

    async fn read_file<T: DeserializeOwned>(&self, name: &str, default: &str) -> AppResult<T> {
        self.ensure_data_dir().await?;
        let path = self.data_dir.join(name);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("Seeding {name} with default content");
                fs::write(&path, default).await?;
                default.to_owned()
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&raw)
            .map_err(|e| AppError::storage(format!("Failed to parse {name}: {e}")).with_source(e))
    }

    async fn write_file<T: Serialize>(&self, name: &str, value: &T) -> AppResult<()> {
        self.ensure_data_dir().await?;
        let path = self.data_dir.join(name);
        let tmp = self.data_dir.join(format!("{name}.tmp"));
        let body = serde_json::to_string_pretty(value)?;
        fs::write(&tmp, body).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn read_workouts(&self) -> AppResult<Vec<Workout>> {
        self.read_file(WORKOUTS_FILE, "[]").await
    }

    async fn write_workouts(&self, workouts: &[Workout]) -> AppResult<()> {
        self.write_file(WORKOUTS_FILE, &workouts).await
    }
}

#[async_trait]
impl super::StorageProvider for JsonFileStorage {
    async fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        self.read_workouts().await
    }

    async fn get_workout(&self, id: Uuid) -> AppResult<Option<Workout>> {
        let workouts = self.read_workouts().await?;
        Ok(workouts.into_iter().find(|w| w.id == id))
    }

    async fn create_workout(&self, workout: Workout) -> AppResult<Workout> {
        let _guard = self.write_lock.lock().await;
        let mut workouts = self.read_workouts().await?;
        workouts.push(workout.clone());
        self.write_workouts(&workouts).await?;
        Ok(workout)
    }

    async fn update_workout(&self, workout: Workout) -> AppResult<Workout> {
        let _guard = self.write_lock.lock().await;
        let mut workouts = self.read_workouts().await?;
        let slot = workouts
            .iter_mut()
            .find(|w| w.id == workout.id)
            .ok_or_else(|| AppError::not_found(format!("workout {}", workout.id)))?;
        *slot = workout.clone();
        self.write_workouts(&workouts).await?;
        Ok(workout)
    }

    async fn delete_workout(&self, id: Uuid) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut workouts = self.read_workouts().await?;
        let before = workouts.len();
        workouts.retain(|w| w.id != id);
        if workouts.len() == before {
            return Ok(false);
        }
        self.write_workouts(&workouts).await?;
        Ok(true)
    }

    async fn toggle_workout_completion(&self, id: Uuid, partner: Partner) -> AppResult<Workout> {
        let _guard = self.write_lock.lock().await;
        let mut workouts = self.read_workouts().await?;
        let workout = workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::not_found(format!("workout {id}")))?;
        workout.toggle_completion(partner);
        let updated = workout.clone();
        self.write_workouts(&workouts).await?;
        Ok(updated)
    }

    async fn load_marathon_progress(&self) -> AppResult<Option<MarathonProgress>> {
        let file: ProgressFile = self.read_file(MARATHON_FILE, "{}").await?;
        Ok(file.progress)
    }

    async fn save_marathon_progress(
        &self,
        progress: MarathonProgress,
    ) -> AppResult<MarathonProgress> {
        let _guard = self.write_lock.lock().await;
        let file = ProgressFile {
            progress: Some(progress.clone()),
        };
        self.write_file(MARATHON_FILE, &file).await?;
        Ok(progress)
    }
}
