use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::TaskFilter, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// IDs of the tasks to delete
    ids: Vec<i32>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    if args.ids.is_empty() {
        msg_error!(Message::NoTaskIdsProvided);
        return Ok(());
    }

    let mut tasks_db = Tasks::new()?;
    let tasks = tasks_db.fetch(TaskFilter::ByIds(args.ids.clone()))?;

    for id in args.ids.iter().filter(|id| !tasks.iter().any(|t| t.id == Some(**id))) {
        msg_warning!(Message::TaskNotFoundWithId(*id));
    }
    if tasks.is_empty() {
        msg_error!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksToBeDeleted, true);
    View::tasks(&tasks)?;

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTasks(tasks.len()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let ids: Vec<i32> = tasks.iter().filter_map(|t| t.id).collect();
    let deleted = tasks_db.delete_many(&ids)?;

    msg_success!(Message::TasksDeletedCount(deleted));
    Ok(())
}
