//! Task export command.
//!
//! Writes the selected tasks to CSV, JSON or Excel. The same filter flags as
//! `list` narrow the selection; without them every task is exported.

use super::list::FilterArgs;
use crate::{
    db::tasks::Tasks,
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path
    ///
    /// Defaults to `taskdash_export_YYYYMMDD_HHMMSS.<ext>` in the current
    /// directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let filter = args.filter.to_filter(Local::now().date_naive())?;
    let tasks = Tasks::new()?.fetch(filter)?;
    let exporter = Exporter::new(args.format, args.output);

    msg_info!(Message::ExportingTasks(tasks.len(), args.format.extension().to_string()));
    exporter.export(&tasks)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
