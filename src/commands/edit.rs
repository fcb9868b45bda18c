//! Task editing command.
//!
//! With any field flag the task is updated directly. Without flags an
//! interactive form is shown, prefilled with the current values.

use super::parse_date;
use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Priority, Status, Task},
    },
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: i32,

    #[arg(short, long)]
    title: Option<String>,

    /// New description; an empty value clears it
    #[arg(short, long)]
    description: Option<String>,

    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    #[arg(short, long, value_enum)]
    status: Option<Status>,

    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<String>,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.priority.is_some() || self.status.is_some() || self.due.is_some()
    }

    fn apply(&self, task: &Task) -> Result<Task> {
        let mut updated = task.clone();
        if let Some(title) = &self.title {
            updated.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            updated.description = Some(description.trim().to_string()).filter(|d| !d.is_empty());
        }
        if let Some(priority) = self.priority {
            updated.priority = priority;
        }
        if let Some(status) = self.status {
            updated.status = status;
        }
        if let Some(due) = &self.due {
            updated.due_date = parse_date(due)?;
        }
        Ok(updated)
    }
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let Some(task) = tasks_db.get_by_id(args.id)? else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    let updated = if args.has_changes() { args.apply(&task)? } else { prompt_task(&task)? };

    if updated == task {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if let Err(e) = updated.validate() {
        msg_bail_anyhow!(Message::TaskInvalid(e.to_string()));
    }

    tasks_db.update(&updated)?;
    msg_success!(Message::TaskUpdated(args.id));
    Ok(())
}

fn prompt_task(task: &Task) -> Result<Task> {
    msg_print!(Message::EditingTask(task.title.clone()), true);
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let priorities = Priority::value_variants();
    let priority = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(priorities)
        .default(priorities.iter().position(|p| *p == task.priority).unwrap_or_default())
        .interact()?;

    let statuses = Status::value_variants();
    let status = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(statuses)
        .default(statuses.iter().position(|s| *s == task.status).unwrap_or_default())
        .interact()?;

    let due_date: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(task.due_date.format("%Y-%m-%d").to_string())
        .validate_with(|value: &String| -> Result<(), String> {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| Message::InvalidDate(value.clone()).to_string())
        })
        .interact_text()?;

    let mut updated = task.clone();
    updated.title = title.trim().to_string();
    updated.description = Some(description.trim().to_string()).filter(|d| !d.is_empty());
    updated.priority = priorities[priority];
    updated.status = statuses[status];
    updated.due_date = parse_date(&due_date)?;
    Ok(updated)
}
