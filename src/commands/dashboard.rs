//! Dashboard command.
//!
//! Loads every task, computes the statistics for the given day and renders
//! them as tables and a bar chart, or as JSON with `--json`.

use super::parse_date;
use crate::{
    db::tasks::Tasks,
    libs::{dashboard::compute_dashboard_snapshot, view::View},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Reference day: `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: DashboardArgs) -> Result<()> {
    let today = parse_date(&args.date)?;
    let tasks = Tasks::new()?.all()?;

    let snapshot = compute_dashboard_snapshot(&tasks, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    View::dashboard(&snapshot, today)
}
