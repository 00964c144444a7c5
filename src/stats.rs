// ABOUTME: Weekly and all-time statistics aggregation over the workout list
// ABOUTME: Monday-start week filtering, distance/duration sums, per-partner completion counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! # Progress Statistics
//!
//! Pure aggregation over an in-memory workout list: the weekly window is the
//! Monday-start week containing a reference date (Monday through Sunday,
//! inclusive), the all-time window is everything. A workout counts as
//! completed when at least one partner has marked it done; per-partner counts
//! are reported alongside.

use crate::models::{Partner, Workout};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// Aggregated statistics for one window of workouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Number of workouts in the window
    pub total_workouts: usize,
    /// Sum of logged distances, kilometres
    pub total_distance: f64,
    /// Sum of durations, minutes
    pub total_duration: u64,
    /// Workouts completed by at least one partner
    pub completed_workouts: usize,
    /// Workouts completed by partner 1
    pub partner1_completed: usize,
    /// Workouts completed by partner 2
    pub partner2_completed: usize,
    /// Rounded completion percentage (0 for an empty window)
    pub completion_rate: u32,
}

/// Weekly and all-time statistics, as returned by the stats endpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Stats for the week containing the reference date
    pub weekly: StatsSummary,
    /// Stats over every stored workout
    pub total: StatsSummary,
}

/// Monday and Sunday of the week containing `date`
#[must_use]
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(date.weekday().num_days_from_monday());
    // Both arithmetic steps stay well inside the representable date range
    let monday = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
    (monday, sunday)
}

fn aggregate<'a>(workouts: impl Iterator<Item = &'a Workout>) -> StatsSummary {
    let mut summary = StatsSummary::default();
    for workout in workouts {
        summary.total_workouts += 1;
        summary.total_distance += workout.distance.unwrap_or(0.0);
        summary.total_duration += u64::from(workout.duration);
        if workout.is_completed() {
            summary.completed_workouts += 1;
        }
        if workout.is_completed_by(Partner::Partner1) {
            summary.partner1_completed += 1;
        }
        if workout.is_completed_by(Partner::Partner2) {
            summary.partner2_completed += 1;
        }
    }
    summary.completion_rate = completion_rate(summary.completed_workouts, summary.total_workouts);
    summary
}

fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Statistics for the Monday-start week containing `reference`
#[must_use]
pub fn weekly_stats(workouts: &[Workout], reference: NaiveDate) -> StatsSummary {
    let (monday, sunday) = week_bounds(reference);
    aggregate(
        workouts
            .iter()
            .filter(|w| w.date >= monday && w.date <= sunday),
    )
}

/// Statistics over every stored workout
#[must_use]
pub fn all_time_stats(workouts: &[Workout]) -> StatsSummary {
    aggregate(workouts.iter())
}
