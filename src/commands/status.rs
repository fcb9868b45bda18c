use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::Status},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Task ID
    id: i32,

    /// New status
    #[arg(value_enum)]
    status: Status,
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    if Tasks::new()?.update_status(args.id, args.status)? {
        msg_success!(Message::TaskStatusUpdated(args.id, args.status.to_string()));
    } else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
    }
    Ok(())
}
