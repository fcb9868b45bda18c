use super::parse_date;
use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Priority, Status, TaskFilter},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

/// Selection flags shared by `list` and `export`.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Only tasks with this status
    #[arg(long, value_enum)]
    pub status: Option<Status>,

    /// Only tasks with this priority
    #[arg(long, value_enum)]
    pub priority: Option<Priority>,

    /// Case-insensitive text to look for in the title or description
    #[arg(long)]
    pub search: Option<String>,

    /// Only tasks due after today
    #[arg(long)]
    pub upcoming: bool,

    /// Only tasks due today
    #[arg(long, conflicts_with = "due")]
    pub today: bool,

    /// Only tasks due on this date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
}

impl FilterArgs {
    /// Builds the store filter; relative flags are resolved against `today`.
    pub fn to_filter(&self, today: NaiveDate) -> Result<TaskFilter> {
        let due_after = self.upcoming.then_some(today);
        let due_on = match &self.due {
            _ if self.today => Some(today),
            Some(due) => Some(parse_date(due)?),
            None => None,
        };

        Ok(TaskFilter::from_parts(
            self.status,
            self.priority,
            self.search.clone(),
            due_after,
            due_on,
        ))
    }

    /// Human readable form of the active filters, e.g. `status=Pending, search='docs'`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(status) = self.status {
            parts.push(format!("status={}", status));
        }
        if let Some(priority) = self.priority {
            parts.push(format!("priority={}", priority));
        }
        if let Some(search) = &self.search {
            parts.push(format!("search='{}'", search.trim()));
        }
        if self.upcoming {
            parts.push("upcoming".to_string());
        }
        if self.today {
            parts.push("due=today".to_string());
        }
        if let Some(due) = &self.due {
            parts.push(format!("due={}", due.trim()));
        }
        parts.join(", ")
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let filter = args.filter.to_filter(Local::now().date_naive())?;
    let is_filtered = filter != TaskFilter::All;
    let tasks = Tasks::new()?.fetch(filter)?;

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    if is_filtered {
        msg_print!(Message::TasksFilteredHeader(args.filter.describe()), true);
    } else {
        msg_print!(Message::TasksHeader, true);
    }
    View::tasks(&tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_args() -> FilterArgs {
        FilterArgs {
            status: None,
            priority: None,
            search: None,
            upcoming: false,
            today: false,
            due: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_no_flags_select_all() {
        assert_eq!(filter_args().to_filter(day(14)).unwrap(), TaskFilter::All);
    }

    #[test]
    fn test_due_flags_resolve_against_today() {
        let mut args = filter_args();
        args.upcoming = true;
        args.today = true;

        let filter = args.to_filter(day(14)).unwrap();
        assert_eq!(filter, TaskFilter::from_parts(None, None, None, Some(day(14)), Some(day(14))));
        assert_eq!(args.describe(), "upcoming, due=today");
    }

    #[test]
    fn test_due_date_flag() {
        let mut args = filter_args();
        args.due = Some("2025-03-20".to_string());
        assert_eq!(
            args.to_filter(day(14)).unwrap(),
            TaskFilter::from_parts(None, None, None, None, Some(day(20)))
        );

        args.due = Some("next week".to_string());
        assert!(args.to_filter(day(14)).is_err());
    }
}
