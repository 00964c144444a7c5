// ABOUTME: Storage abstraction layer for the Stridelog backend
// ABOUTME: Plugin architecture with flat JSON-file and in-memory backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! # Storage Abstraction
//!
//! The original project shipped two interchangeable persistence backends; this
//! module models that seam. [`StorageProvider`] is the consistent interface the
//! HTTP layer talks to, and [`Storage`] is the wrapper that selects a backend
//! from a URL-ish configuration string: `memory://` for the in-memory store,
//! anything else is treated as a data directory for flat JSON files.

use crate::errors::AppResult;
use crate::models::{Partner, Workout};
use crate::plan::MarathonProgress;
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

/// Flat JSON-file backend
pub mod json_file;
/// In-memory backend for tests and ephemeral runs
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Core storage abstraction trait
///
/// All storage implementations must implement this trait to provide a
/// consistent interface for the HTTP layer.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// List every stored workout
    async fn list_workouts(&self) -> AppResult<Vec<Workout>>;

    /// Get one workout by id
    async fn get_workout(&self, id: Uuid) -> AppResult<Option<Workout>>;

    /// Persist a new workout
    async fn create_workout(&self, workout: Workout) -> AppResult<Workout>;

    /// Replace the stored workout with the same id
    ///
    /// Fails with a not-found error when no workout has that id.
    async fn update_workout(&self, workout: Workout) -> AppResult<Workout>;

    /// Delete a workout; returns whether anything was removed
    async fn delete_workout(&self, id: Uuid) -> AppResult<bool>;

    /// Toggle one partner's completion flag on a workout, atomically
    /// with respect to other writes, returning the updated record
    ///
    /// Fails with a not-found error when no workout has that id.
    async fn toggle_workout_completion(&self, id: Uuid, partner: Partner) -> AppResult<Workout>;

    /// Load the shared marathon progress record, if one was ever saved
    async fn load_marathon_progress(&self) -> AppResult<Option<MarathonProgress>>;

    /// Persist the shared marathon progress record
    async fn save_marathon_progress(
        &self,
        progress: MarathonProgress,
    ) -> AppResult<MarathonProgress>;
}

/// Storage instance wrapper that delegates to the selected backend
pub enum Storage {
    /// Flat JSON files under a data directory
    JsonFile(JsonFileStorage),
    /// In-memory store
    Memory(MemoryStorage),
}

impl Storage {
    /// Create a storage instance from a configuration URL
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be created.
    pub async fn new(url: &str) -> AppResult<Self> {
        if url.starts_with("memory://") {
            info!("Initializing in-memory storage");
            Ok(Self::Memory(MemoryStorage::new()))
        } else {
            info!("Initializing JSON-file storage in {url}");
            let storage = JsonFileStorage::new(url);
            storage.ensure_data_dir().await?;
            Ok(Self::JsonFile(storage))
        }
    }

    /// Descriptive string for the active backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::JsonFile(_) => "JSON files (flat-file persistence)",
            Self::Memory(_) => "In-memory (ephemeral)",
        }
    }
}

#[async_trait]
impl StorageProvider for Storage {
    async fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        match self {
            Self::JsonFile(s) => s.list_workouts().await,
            Self::Memory(s) => s.list_workouts().await,
        }
    }

    async fn get_workout(&self, id: Uuid) -> AppResult<Option<Workout>> {
        match self {
            Self::JsonFile(s) => s.get_workout(id).await,
            Self::Memory(s) => s.get_workout(id).await,
        }
    }

    async fn create_workout(&self, workout: Workout) -> AppResult<Workout> {
        match self {
            Self::JsonFile(s) => s.create_workout(workout).await,
            Self::Memory(s) => s.create_workout(workout).await,
        }
    }

    async fn update_workout(&self, workout: Workout) -> AppResult<Workout> {
        match self {
            Self::JsonFile(s) => s.update_workout(workout).await,
            Self::Memory(s) => s.update_workout(workout).await,
        }
    }

    async fn delete_workout(&self, id: Uuid) -> AppResult<bool> {
        match self {
            Self::JsonFile(s) => s.delete_workout(id).await,
            Self::Memory(s) => s.delete_workout(id).await,
        }
    }

    async fn toggle_workout_completion(&self, id: Uuid, partner: Partner) -> AppResult<Workout> {
        match self {
            Self::JsonFile(s) => s.toggle_workout_completion(id, partner).await,
            Self::Memory(s) => s.toggle_workout_completion(id, partner).await,
        }
    }

    async fn load_marathon_progress(&self) -> AppResult<Option<MarathonProgress>> {
        match self {
            Self::JsonFile(s) => s.load_marathon_progress().await,
            Self::Memory(s) => s.load_marathon_progress().await,
        }
    }

    async fn save_marathon_progress(
        &self,
        progress: MarathonProgress,
    ) -> AppResult<MarathonProgress> {
        match self {
            Self::JsonFile(s) => s.save_marathon_progress(progress).await,
            Self::Memory(s) => s.save_marathon_progress(progress).await,
        }
    }
}
