use super::parse_date;
use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{Priority, Status, Task},
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Optional description
    #[arg(short, long)]
    description: Option<String>,

    #[arg(short, long, value_enum, default_value = "normal")]
    priority: Priority,

    #[arg(short, long, value_enum, default_value = "pending")]
    status: Status,

    /// Due date (YYYY-MM-DD); defaults to today plus the configured number of days
    #[arg(long)]
    due: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?.tasks_or_default();

    let due_date = match &args.due {
        Some(due) => parse_date(due)?,
        None => Task::default_due_date(Local::now().date_naive(), config.default_due_days),
    };

    let task = Task::new(&args.title, args.description.as_deref(), args.priority, args.status, due_date);
    if let Err(e) = task.validate() {
        msg_bail_anyhow!(Message::TaskInvalid(e.to_string()));
    }

    let id = Tasks::new()?.insert(&task)?;

    msg_success!(Message::TaskCreated(id));
    Ok(())
}
