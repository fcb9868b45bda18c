use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_error, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: i32,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let Some(task) = Tasks::new()?.get_by_id(args.id)? else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    msg_print!(Message::TaskDetailsHeader(args.id), true);
    View::task_details(&task)
}
