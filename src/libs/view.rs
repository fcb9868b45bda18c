//! Terminal rendering of tasks and dashboard snapshots.
//!
//! Tables are drawn with `prettytable`. Dates are shown as `dd-Mon-yyyy`
//! (for example `14-Mar-2025`), and the weekly creation series is drawn as
//! a horizontal text bar chart scaled to the busiest week.

use super::dashboard::DashboardSnapshot;
use super::messages::Message;
use super::task::Task;
use crate::msg_print;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use prettytable::{row, Table};

/// Display format for calendar dates.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%b-%Y";

/// Width in characters of the longest bar in the creation chart.
const BAR_WIDTH: usize = 30;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PRIORITY", "STATUS", "DUE", "CREATED", "COMPLETED"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.priority,
                task.status,
                format_date(task.due_date),
                format_timestamp(task.created_at),
                format_timestamp(task.completed_at)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Vertical field/value table for a single task.
    pub fn task_details(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description.as_deref().unwrap_or("-")]);
        table.add_row(row!["Priority", task.priority]);
        table.add_row(row!["Status", task.status]);
        table.add_row(row!["Due", format_date(task.due_date)]);
        table.add_row(row!["Created", format_timestamp(task.created_at)]);
        table.add_row(row!["Updated", format_timestamp(task.updated_at)]);
        table.add_row(row!["Completed", format_timestamp(task.completed_at)]);
        table.printstd();

        Ok(())
    }

    pub fn dashboard(snapshot: &DashboardSnapshot, today: NaiveDate) -> Result<()> {
        msg_print!(Message::DashboardHeader(format_date(today)), true);

        if snapshot.total_tasks == 0 {
            msg_print!(Message::DashboardNoTasks);
        }

        msg_print!(Message::DashboardStatusHeader);
        let mut status = Table::new();
        status.add_row(row!["TOTAL", "UPCOMING", "COMPLETED", "PENDING", "ON HOLD"]);
        status.add_row(row![
            snapshot.total_tasks,
            snapshot.upcoming_tasks,
            count_with_share(snapshot.completed_tasks, snapshot.completed_percentage),
            count_with_share(snapshot.pending_tasks, snapshot.pending_percentage),
            count_with_share(snapshot.on_hold_tasks, snapshot.on_hold_percentage)
        ]);
        status.printstd();

        msg_print!(Message::DashboardPriorityHeader);
        let mut priority = Table::new();
        priority.add_row(row!["PRIORITY", "TASKS", "SHARE"]);
        priority.add_row(row![
            "High",
            snapshot.high_priority_tasks,
            format_percentage(snapshot.high_priority_percentage)
        ]);
        priority.add_row(row![
            "Normal",
            snapshot.normal_priority_tasks,
            format_percentage(snapshot.normal_priority_percentage)
        ]);
        priority.add_row(row![
            "Low",
            snapshot.low_priority_tasks,
            format_percentage(snapshot.low_priority_percentage)
        ]);
        priority.printstd();

        msg_print!(Message::DashboardCreationHeader);
        let max = snapshot.weekly_task_creation.iter().map(|b| b.count).max().unwrap_or(0);
        for bucket in &snapshot.weekly_task_creation {
            println!(
                "{:<7} {} - {} | {:<width$} {}",
                bucket.label,
                bucket.start_date.format("%d-%b"),
                bucket.end_date.format("%d-%b"),
                bar(bucket.count, max),
                bucket.count,
                width = BAR_WIDTH
            );
        }

        Ok(())
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn format_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp.map(|t| format_date(t.date())).unwrap_or_else(|| "-".to_string())
}

/// One decimal place, as computed by the dashboard.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

fn count_with_share(count: usize, share: f64) -> String {
    format!("{} ({})", count, format_percentage(share))
}

/// Bar proportional to `count / max`; any non-zero count gets at least one cell.
pub fn bar(count: usize, max: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let cells = (count * BAR_WIDTH / max).max(1);
    "█".repeat(cells)
}
