pub mod add;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod show;
pub mod status;

use crate::{libs::messages::Message, msg_error_anyhow};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure task defaults")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Change the status of a task")]
    Status(status::StatusArgs),
    #[command(about = "Delete tasks")]
    Delete(delete::DeleteArgs),
    #[command(about = "Import tasks from a CSV file")]
    Import(import::ImportArgs),
    #[command(about = "Export tasks to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Show task statistics")]
    Dashboard(dashboard::DashboardArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Parses a date argument: `today` or `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if value.trim().eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-14").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(parse_date("Today").unwrap(), Local::now().date_naive());
        assert!(parse_date("14.03.2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_cli_parses_dashboard_flags() {
        let cli = Cli::try_parse_from(["taskdash", "dashboard", "--date", "2025-03-14", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_cli_today_conflicts_with_due() {
        assert!(Cli::try_parse_from(["taskdash", "list", "--upcoming", "--today"]).is_ok());
        assert!(Cli::try_parse_from(["taskdash", "list", "--today", "--due", "2025-03-20"]).is_err());
        assert!(Cli::try_parse_from(["taskdash", "export", "--due", "2025-03-20", "-f", "json"]).is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_priority() {
        assert!(Cli::try_parse_from(["taskdash", "add", "Write docs", "--priority", "urgent"]).is_err());
    }
}
