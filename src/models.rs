// ABOUTME: Core data models for the Stridelog workout tracker
// ABOUTME: Defines Workout, WorkoutType, and the two-partner completion model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! # Data Models
//!
//! Core data structures shared by the storage layer, the statistics module,
//! and the HTTP handlers. Wire names are camelCase and the enum variants map
//! onto the exact strings the web client stores (`"run"`, `"cross-training"`,
//! `"partner1"`, ...), so the flat JSON files stay interchangeable with the
//! original data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// One of the two fixed user roles sharing the log.
///
/// Completion state is tracked per partner; there is no open-ended user
/// model beyond these two roles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Partner {
    /// First partner
    Partner1,
    /// Second partner
    Partner2,
}

impl Partner {
    /// Both partner roles, in stable order
    pub const ALL: [Self; 2] = [Self::Partner1, Self::Partner2];
}

impl fmt::Display for Partner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partner1 => write!(f, "partner1"),
            Self::Partner2 => write!(f, "partner2"),
        }
    }
}

/// Category of a logged workout session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutType {
    /// Running session
    Run,
    /// Strength training
    Strength,
    /// Cross-training (cycling, swimming, ...)
    CrossTraining,
    /// Scheduled rest day
    Rest,
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run => write!(f, "run"),
            Self::Strength => write!(f, "strength"),
            Self::CrossTraining => write!(f, "cross-training"),
            Self::Rest => write!(f, "rest"),
        }
    }
}

/// A single logged exercise session.
///
/// `completed_by` is a set rather than a boolean: each partner marks the
/// session done independently, and an empty set means not completed by
/// anyone. The set is ordered so the on-disk JSON is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Server-assigned identifier
    pub id: Uuid,
    /// Calendar day of the session (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Workout category
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Short title shown in the calendar
    pub title: String,
    /// Planned or logged duration in minutes
    pub duration: u32,
    /// Distance in kilometres, when the session has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Partners who have marked this session complete
    #[serde(default)]
    pub completed_by: BTreeSet<Partner>,
}

impl Workout {
    /// Whether at least one partner has completed this session
    #[must_use]
    pub fn is_completed(&self) -> bool {
        !self.completed_by.is_empty()
    }

    /// Whether the given partner has completed this session
    #[must_use]
    pub fn is_completed_by(&self, partner: Partner) -> bool {
        self.completed_by.contains(&partner)
    }

    /// Toggle the completion flag for one partner, returning the new state
    pub fn toggle_completion(&mut self, partner: Partner) -> bool {
        if self.completed_by.remove(&partner) {
            false
        } else {
            self.completed_by.insert(partner);
            true
        }
    }
}
