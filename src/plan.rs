// ABOUTME: Fixed 8-week 21K training plan and shared completion tracking
// ABOUTME: Defines the static plan data, the MarathonProgress record, and progress math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! # Marathon Training Plan
//!
//! A fixed 8-week half-marathon (21K) schedule used as a shared checklist.
//! Each prescribed workout is identified by a `"<week>-<day>"` key (e.g.
//! `"3-Sat"`); the [`MarathonProgress`] record stores the set of completed
//! keys, and [`summarize`] turns that set into overall and per-week
//! percentages.

use crate::models::WorkoutType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fixed id of the single shared progress record
pub const PROGRESS_ID: &str = "default";

/// One prescribed workout inside a plan week
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWorkout {
    /// Day label (`Mon`..`Sun`)
    pub day: &'static str,
    /// Workout category
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Prescribed distance in kilometres, for runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// What to do
    pub description: &'static str,
}

/// One week of the training plan
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWeek {
    /// Week number, 1-based
    pub week: u8,
    /// Training focus label
    pub focus: &'static str,
    /// Total running distance prescribed this week, kilometres
    pub total_distance: f64,
    /// Prescribed workouts
    pub workouts: &'static [PlanWorkout],
}

const fn run(day: &'static str, distance: f64, description: &'static str) -> PlanWorkout {
    PlanWorkout {
        day,
        workout_type: WorkoutType::Run,
        distance: Some(distance),
        description,
    }
}

const fn strength(day: &'static str, description: &'static str) -> PlanWorkout {
    PlanWorkout {
        day,
        workout_type: WorkoutType::Strength,
        distance: None,
        description,
    }
}

const fn cross(day: &'static str, description: &'static str) -> PlanWorkout {
    PlanWorkout {
        day,
        workout_type: WorkoutType::CrossTraining,
        distance: None,
        description,
    }
}

const fn rest(day: &'static str) -> PlanWorkout {
    PlanWorkout {
        day,
        workout_type: WorkoutType::Rest,
        distance: None,
        description: "Rest and recovery",
    }
}

/// The fixed 8-week 21K training plan: base, build, peak, taper
pub const TRAINING_PLAN: &[PlanWeek] = &[
    PlanWeek {
        week: 1,
        focus: "Base building",
        total_distance: 18.0,
        workouts: &[
            run("Tue", 5.0, "Easy run, conversational pace"),
            strength("Thu", "Full-body strength, 3 sets"),
            run("Sat", 5.0, "Easy run with 4 strides"),
            run("Sun", 8.0, "Long run, easy effort"),
        ],
    },
    PlanWeek {
        week: 2,
        focus: "Base building",
        total_distance: 21.0,
        workouts: &[
            run("Tue", 6.0, "Easy run, conversational pace"),
            cross("Thu", "45 min bike or swim"),
            run("Sat", 5.0, "Easy run with 6 strides"),
            run("Sun", 10.0, "Long run, easy effort"),
        ],
    },
    PlanWeek {
        week: 3,
        focus: "Introducing tempo",
        total_distance: 24.0,
        workouts: &[
            run("Tue", 7.0, "2 km warm-up, 3 km tempo, 2 km cool-down"),
            strength("Thu", "Legs and core, 3 sets"),
            run("Sat", 6.0, "Easy run"),
            run("Sun", 11.0, "Long run, last 2 km at goal pace"),
        ],
    },
    PlanWeek {
        week: 4,
        focus: "Recovery week",
        total_distance: 17.0,
        workouts: &[
            run("Tue", 5.0, "Easy recovery run"),
            rest("Thu"),
            run("Sat", 4.0, "Easy run with 4 strides"),
            run("Sun", 8.0, "Relaxed long run"),
        ],
    },
    PlanWeek {
        week: 5,
        focus: "Build volume",
        total_distance: 28.0,
        workouts: &[
            run("Tue", 8.0, "2 km warm-up, 4 km tempo, 2 km cool-down"),
            cross("Thu", "60 min bike, steady effort"),
            run("Sat", 6.0, "Easy run"),
            run("Sun", 14.0, "Long run, easy effort"),
        ],
    },
    PlanWeek {
        week: 6,
        focus: "Peak volume",
        total_distance: 32.0,
        workouts: &[
            run("Tue", 8.0, "Intervals: 6 x 800 m at 10K pace"),
            strength("Thu", "Legs and core, 3 sets"),
            run("Sat", 7.0, "Easy run"),
            run("Sun", 17.0, "Longest run, easy effort"),
        ],
    },
    PlanWeek {
        week: 7,
        focus: "Sharpening",
        total_distance: 26.0,
        workouts: &[
            run("Tue", 7.0, "2 km warm-up, 5 km at goal pace, 2 km cool-down"),
            cross("Thu", "40 min easy bike or swim"),
            run("Sat", 5.0, "Easy run with 6 strides"),
            run("Sun", 12.0, "Long run, middle 6 km at goal pace"),
        ],
    },
    PlanWeek {
        week: 8,
        focus: "Taper and race",
        total_distance: 30.0,
        workouts: &[
            run("Tue", 5.0, "Easy run with 4 strides"),
            rest("Thu"),
            run("Sat", 3.0, "Shake-out run, very easy"),
            run("Sun", 21.1, "Race day: 21K"),
        ],
    },
];

/// Completion key for one prescribed workout (`"<week>-<day>"`)
#[must_use]
pub fn workout_key(week: u8, day: &str) -> String {
    format!("{week}-{day}")
}

/// Total number of prescribed workouts across the whole plan
#[must_use]
pub fn total_workouts() -> usize {
    TRAINING_PLAN.iter().map(|week| week.workouts.len()).sum()
}

/// Shared completion state for the training plan.
///
/// Stored as a single record; `completed_workouts` holds `"<week>-<day>"`
/// keys. The set is ordered and deduplicated, and `last_updated` is
/// refreshed by the server on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarathonProgress {
    /// Record id (always `"default"`)
    pub id: String,
    /// Completed workout keys
    pub completed_workouts: BTreeSet<String>,
    /// When the record was last saved
    pub last_updated: DateTime<Utc>,
}

impl MarathonProgress {
    /// Fresh empty record, used when nothing has been saved yet
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: PROGRESS_ID.into(),
            completed_workouts: BTreeSet::new(),
            last_updated: Utc::now(),
        }
    }
}

/// Computed progress for one plan week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    /// Week number
    pub week: u8,
    /// Completed workouts this week
    pub completed: usize,
    /// Prescribed workouts this week
    pub total: usize,
    /// Rounded completion percentage
    pub percent: u32,
}

/// Computed progress across the whole plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Completed prescribed workouts (unknown keys excluded)
    pub completed: usize,
    /// Total prescribed workouts in the plan
    pub total: usize,
    /// Rounded overall completion percentage
    pub percent: u32,
    /// Per-week breakdown
    pub weeks: Vec<WeekSummary>,
}

fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Compute overall and per-week progress from a stored record.
///
/// Keys that match no plan entry are preserved in the record but ignored
/// here, so percentages never exceed 100.
#[must_use]
pub fn summarize(progress: &MarathonProgress) -> PlanSummary {
    let mut completed_total = 0;
    let weeks = TRAINING_PLAN
        .iter()
        .map(|week| {
            let completed = week
                .workouts
                .iter()
                .filter(|w| {
                    progress
                        .completed_workouts
                        .contains(&workout_key(week.week, w.day))
                })
                .count();
            completed_total += completed;
            WeekSummary {
                week: week.week,
                completed,
                total: week.workouts.len(),
                percent: percent(completed, week.workouts.len()),
            }
        })
        .collect();

    PlanSummary {
        completed: completed_total,
        total: total_workouts(),
        percent: percent(completed_total, total_workouts()),
        weeks,
    }
}
