//! Task export for backup and external analysis.
//!
//! ## Formats
//!
//! - **CSV**: `Title,Description,Priority,Status,DueDate,CreatedDate`, the
//!   same layout the importer reads back
//! - **JSON**: pretty-printed array of task records including their ids
//! - **Excel**: a single `Tasks` worksheet with a bold header row
//!
//! Dates are written as `YYYY-MM-DD`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdash::db::tasks::Tasks;
//! use taskdash::libs::export::{ExportFormat, Exporter};
//!
//! let tasks = Tasks::new()?.all()?;
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&tasks)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CSV_HEADERS: [&str; 6] = ["Title", "Description", "Priority", "Status", "DueDate", "CreatedDate"];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Flattened task record as written to export files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
    pub created_date: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.unwrap_or(0),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority.to_string(),
            status: task.status.to_string(),
            due_date: task.due_date.format(DATE_FORMAT).to_string(),
            created_date: task
                .created_at
                .map(|c| c.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

/// Writes a task list to a file in one of the [`ExportFormat`]s.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `taskdash_export_YYYYMMDD_HHMMSS.<ext>` in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("taskdash_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, tasks: &[Task]) -> Result<()> {
        let records: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&records),
            ExportFormat::Json => self.export_json(&records),
            ExportFormat::Excel => self.export_excel(&records),
        }
    }

    fn export_csv(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(CSV_HEADERS)?;

        for task in tasks {
            wtr.write_record([
                task.title.as_str(),
                task.description.as_str(),
                task.priority.as_str(),
                task.status.as_str(),
                task.due_date.as_str(),
                task.created_date.as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut file = File::create(&self.output_path)?;
        let json = serde_json::to_string_pretty(tasks)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Tasks")?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, header) in CSV_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, task) in tasks.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &task.title)?;
            worksheet.write_string(row, 1, &task.description)?;
            worksheet.write_string(row, 2, &task.priority)?;
            worksheet.write_string(row, 3, &task.status)?;
            worksheet.write_string(row, 4, &task.due_date)?;
            worksheet.write_string(row, 5, &task.created_date)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
