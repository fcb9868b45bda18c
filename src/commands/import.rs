//! CSV import command.
//!
//! Stores every valid line of the file and then reports how many tasks were
//! imported. Rejected lines are listed up to the configured limit.

use crate::{
    db::tasks::Tasks,
    libs::{config::Config, import::Importer, messages::Message},
    msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file with a header line and Title,Description,Priority,Status,DueDate columns
    file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let config = Config::read()?.tasks_or_default();
    let importer = Importer::new(Local::now().date_naive(), &config);

    let report = importer.import_file(&args.file, &mut Tasks::new()?)?;

    if report.errors.is_empty() {
        msg_success!(report.summary());
        return Ok(());
    }

    msg_warning!(report.summary());
    msg_print!(Message::ImportErrorsHeader, true);
    for error in report.errors.iter().take(config.import_error_limit) {
        println!("  {}", error);
    }
    if report.errors.len() > config.import_error_limit {
        msg_print!(Message::ImportErrorsTruncated(report.errors.len() - config.import_error_limit));
    }

    Ok(())
}
