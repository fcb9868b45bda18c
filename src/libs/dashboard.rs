//! Dashboard statistics for the task list.
//!
//! Turns the complete task set into a [`DashboardSnapshot`]: counts by status
//! and priority, the number of upcoming tasks, the share of each category and
//! a weekly histogram of task creation.
//!
//! ## Percentages
//!
//! ```text
//! Percentage = round(Count / Total * 100, 1 decimal), ties to even
//!
//! Where Total = 0 gives 0.0 for every category.
//! ```
//!
//! The rounding works on the exact fraction, so `1 / 16` (6.25%) is shown as
//! `6.2` and `3 / 16` (18.75%) as `18.8`.
//!
//! ## Creation Histogram
//!
//! The histogram covers a fixed five-week window ending today, split into
//! seven-day buckets labelled `Week 1` (oldest) through `Week 5` (the week
//! ending today):
//!
//! ```text
//! Week k = [today - 6 - 7 * (5 - k), today - 7 * (5 - k)]
//! ```
//!
//! Tasks created outside the window still count toward every total.

use crate::libs::task::{Priority, Status, Task};
use crate::msg_debug;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;

/// Number of buckets in the creation histogram.
pub const HISTOGRAM_WEEKS: i64 = 5;

/// Number of days covered by one histogram bucket.
pub const DAYS_PER_BUCKET: i64 = 7;

/// Task creation volume for one seven-day bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationBucket {
    /// `Week 1` for the oldest bucket up to `Week 5` for the current one
    pub label: String,
    pub start_date: NaiveDate,
    /// Inclusive; always `start_date + 6`
    pub end_date: NaiveDate,
    pub count: usize,
}

impl CreationBucket {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Aggregated statistics for one dashboard render.
///
/// A snapshot is built fresh on every request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub on_hold_tasks: usize,
    /// Tasks due strictly after today that are not completed
    pub upcoming_tasks: usize,

    pub completed_percentage: f64,
    pub pending_percentage: f64,
    pub on_hold_percentage: f64,

    pub high_priority_tasks: usize,
    pub normal_priority_tasks: usize,
    pub low_priority_tasks: usize,

    pub high_priority_percentage: f64,
    pub normal_priority_percentage: f64,
    pub low_priority_percentage: f64,

    pub weekly_task_creation: Vec<CreationBucket>,
}

#[derive(Debug, Default)]
struct Tally {
    total: usize,
    completed: usize,
    pending: usize,
    on_hold: usize,
    upcoming: usize,
    high: usize,
    normal: usize,
    low: usize,
}

/// Computes the dashboard snapshot for `tasks` as seen on `today`.
///
/// This is a pure function of its inputs: the tasks are only borrowed and
/// the same `(tasks, today)` always yields an equal snapshot.
///
/// A task without a creation timestamp has not been through the store and
/// is skipped entirely, so it does not appear in any count.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use taskdash::libs::dashboard::compute_dashboard_snapshot;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let snapshot = compute_dashboard_snapshot(&[], today);
/// assert_eq!(snapshot.total_tasks, 0);
/// assert_eq!(snapshot.completed_percentage, 0.0);
/// assert_eq!(snapshot.weekly_task_creation.len(), 5);
/// ```
pub fn compute_dashboard_snapshot(tasks: &[Task], today: NaiveDate) -> DashboardSnapshot {
    let mut tally = Tally::default();
    let mut buckets = weekly_buckets(today);

    for task in tasks {
        let Some(created) = task.created_date() else {
            msg_debug!(format!("Skipping task {:?} without a creation date", task.id));
            continue;
        };

        tally.total += 1;

        match task.status {
            Status::Completed => tally.completed += 1,
            Status::Pending => tally.pending += 1,
            Status::Hold => tally.on_hold += 1,
        }

        match task.priority {
            Priority::High => tally.high += 1,
            Priority::Normal => tally.normal += 1,
            Priority::Low => tally.low += 1,
        }

        if task.due_date > today && !task.is_completed() {
            tally.upcoming += 1;
        }

        if let Some(bucket) = buckets.iter_mut().find(|b| b.contains(created)) {
            bucket.count += 1;
        }
    }

    let total = tally.total;
    DashboardSnapshot {
        total_tasks: total,
        completed_tasks: tally.completed,
        pending_tasks: tally.pending,
        on_hold_tasks: tally.on_hold,
        upcoming_tasks: tally.upcoming,
        completed_percentage: percentage(tally.completed, total),
        pending_percentage: percentage(tally.pending, total),
        on_hold_percentage: percentage(tally.on_hold, total),
        high_priority_tasks: tally.high,
        normal_priority_tasks: tally.normal,
        low_priority_tasks: tally.low,
        high_priority_percentage: percentage(tally.high, total),
        normal_priority_percentage: percentage(tally.normal, total),
        low_priority_percentage: percentage(tally.low, total),
        weekly_task_creation: buckets,
    }
}

/// Share of `count` in `total` as a percentage rounded to one decimal place.
///
/// Computed in integer tenths of a percent and rounded half to even, so
/// exact ties such as 6.25% go to the even neighbour (6.2). Returns `0.0`
/// when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let scaled = count.min(total) as u128 * 1000;
    let total = total as u128;

    let mut tenths = scaled / total;
    match (2 * (scaled % total)).cmp(&total) {
        Ordering::Greater => tenths += 1,
        Ordering::Equal if tenths % 2 == 1 => tenths += 1,
        _ => {}
    }

    tenths as f64 / 10.0
}

/// Builds the empty histogram buckets for the five weeks ending on `today`.
pub fn weekly_buckets(today: NaiveDate) -> Vec<CreationBucket> {
    (1..=HISTOGRAM_WEEKS)
        .map(|week| {
            let end_date = today - Duration::days(DAYS_PER_BUCKET * (HISTOGRAM_WEEKS - week));
            CreationBucket {
                label: format!("Week {}", week),
                start_date: end_date - Duration::days(DAYS_PER_BUCKET - 1),
                end_date,
                count: 0,
            }
        })
        .collect()
}
