//! Task model shared by the store, the importer/exporter and the dashboard.

use super::error::{TaskError, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of days after today used as the due date when none is given.
pub const DEFAULT_DUE_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Status {
    #[default]
    Pending,
    Hold,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Hold => "Hold",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(TaskError::UnknownPriority(s.to_string())),
        }
    }
}

impl FromStr for Status {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "hold" => Ok(Status::Hold),
            "completed" => Ok(Status::Completed),
            _ => Err(TaskError::UnknownStatus(s.to_string())),
        }
    }
}

// Both enums are stored as their display text.
impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub due_date: NaiveDate,
    /// Set by the store on insert and never changed afterwards.
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    /// Present only while the task is `Completed`.
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(title: &str, description: Option<&str>, priority: Priority, status: Status, due_date: NaiveDate) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.map(str::to_string).filter(|d| !d.is_empty()),
            priority,
            status,
            due_date,
            created_at: None,
            updated_at: None,
            completed_at: None,
        }
    }

    /// Due date used when the user does not supply one.
    pub fn default_due_date(today: NaiveDate, due_days: i64) -> NaiveDate {
        today + Duration::days(due_days)
    }

    /// The calendar day the task was created on, if the store has stamped it.
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_at.map(|c| c.date())
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Checks the title and description against the form rules: a required
    /// title of at most 100 characters, an optional description of at most
    /// 500, and only letters, digits and whitespace in both.
    pub fn validate(&self) -> Result<(), TaskError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if title.chars().count() > TITLE_MAX_LEN {
            return Err(TaskError::TitleTooLong);
        }
        if !is_plain_text(title) {
            return Err(TaskError::InvalidCharacters("Title"));
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_LEN {
                return Err(TaskError::DescriptionTooLong);
            }
            if !is_plain_text(description) {
                return Err(TaskError::InvalidCharacters("Description"));
            }
        }

        Ok(())
    }
}

fn is_plain_text(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
}

/// Selection passed to [`crate::db::tasks::Tasks::fetch`].
///
/// Filters are explicit values rather than shared state, so a list view and
/// an export can use different selections at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskFilter {
    All,
    ByIds(Vec<i32>),
    /// Unset parts do not constrain the result. `search` matches the title
    /// or the description as a case-insensitive substring; `due_after` keeps
    /// tasks due strictly after the date and `due_on` tasks due on it.
    Matching {
        status: Option<Status>,
        priority: Option<Priority>,
        search: Option<String>,
        due_after: Option<NaiveDate>,
        due_on: Option<NaiveDate>,
    },
}

impl TaskFilter {
    /// Builds a filter from optional command-line parts, collapsing to
    /// [`TaskFilter::All`] when nothing is set.
    pub fn from_parts(
        status: Option<Status>,
        priority: Option<Priority>,
        search: Option<String>,
        due_after: Option<NaiveDate>,
        due_on: Option<NaiveDate>,
    ) -> Self {
        let search = search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        if status.is_none() && priority.is_none() && search.is_none() && due_after.is_none() && due_on.is_none() {
            TaskFilter::All
        } else {
            TaskFilter::Matching {
                status,
                priority,
                search,
                due_after,
                due_on,
            }
        }
    }
}
