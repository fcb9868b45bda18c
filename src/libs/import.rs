//! CSV import of tasks.
//!
//! The expected layout is the one produced by the CSV export:
//!
//! ```text
//! Title,Description,Priority,Status,DueDate[,CreatedDate]
//! ```
//!
//! The first line is a header. Only the first five columns are read; any
//! further column is ignored, and imported tasks always receive a fresh id
//! and creation timestamp.
//!
//! ## Per-line Rules
//!
//! - Fewer than five columns: the line is rejected (`Insufficient columns`)
//! - Empty title: the line is rejected (`Title is required`)
//! - Unknown priority or status: replaced by `Normal` / `Pending`
//! - Unparsable due date: replaced by today plus the configured offset
//! - Any other validation failure: the line is rejected with its reason
//!
//! Rejected lines never abort the import; every valid line is still stored.
//! The valid lines are stored together: if the store fails on any of them,
//! none are kept.

use crate::db::tasks::Tasks;
use crate::libs::config::TaskConfig;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Status, Task};
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of columns a data line must provide.
const REQUIRED_COLUMNS: usize = 5;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%b-%Y", "%m/%d/%Y", "%Y/%m/%d"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A rejected line. Lines are numbered from 1, the header being line 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLineError {
    pub line: u64,
    pub reason: String,
}

impl fmt::Display for ImportLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.reason)
    }
}

/// Result of parsing a file, before anything is stored.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub tasks: Vec<Task>,
    pub errors: Vec<ImportLineError>,
}

/// Result of a completed import.
#[derive(Debug)]
pub struct ImportReport {
    pub imported: usize,
    pub errors: Vec<ImportLineError>,
}

impl ImportReport {
    /// Summary line shown to the user.
    pub fn summary(&self) -> Message {
        if self.errors.is_empty() {
            Message::ImportCompleted(self.imported)
        } else {
            Message::ImportCompletedWithErrors(self.imported, self.errors.len())
        }
    }
}

pub struct Importer {
    today: NaiveDate,
    default_due_days: i64,
}

impl Importer {
    pub fn new(today: NaiveDate, config: &TaskConfig) -> Self {
        Self {
            today,
            default_due_days: config.default_due_days,
        }
    }

    /// Rejects anything that is not a `.csv` file (case-insensitive).
    pub fn check_extension(path: &Path) -> Result<()> {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            msg_bail_anyhow!(Message::ImportOnlyCsv);
        }
        Ok(())
    }

    /// Parses CSV content into tasks ready for insertion.
    pub fn parse<R: Read>(&self, reader: R) -> ImportOutcome {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut outcome = ImportOutcome::default();

        for (index, result) in rdr.records().enumerate() {
            // Header is line 1, so the first record sits on line 2.
            let fallback_line = index as u64 + 2;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(fallback_line);
                    outcome.errors.push(ImportLineError { line, reason: e.to_string() });
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);

            match self.parse_record(&record) {
                Ok(task) => outcome.tasks.push(task),
                Err(reason) => outcome.errors.push(ImportLineError { line, reason }),
            }
        }

        outcome
    }

    fn parse_record(&self, record: &StringRecord) -> Result<Task, String> {
        if record.len() < REQUIRED_COLUMNS {
            return Err("Insufficient columns".to_string());
        }

        let field = |i: usize| record.get(i).unwrap_or_default().trim().trim_matches('"').trim();

        let title = field(0);
        if title.is_empty() {
            return Err("Title is required".to_string());
        }

        let description = Some(field(1)).filter(|d| !d.is_empty());
        let priority = field(2).parse::<Priority>().unwrap_or_default();
        let status = field(3).parse::<Status>().unwrap_or_default();
        let due_date = parse_due_date(field(4)).unwrap_or_else(|| Task::default_due_date(self.today, self.default_due_days));

        let task = Task::new(title, description, priority, status, due_date);
        task.validate().map_err(|e| e.to_string())?;

        Ok(task)
    }

    pub fn parse_file(&self, path: &Path) -> Result<ImportOutcome> {
        Self::check_extension(path)?;
        if !path.exists() {
            msg_bail_anyhow!(Message::ImportFileNotFound(path.display().to_string()));
        }
        let file = File::open(path)?;

        Ok(self.parse(file))
    }

    /// Parses `path` and stores every valid task in `store`.
    ///
    /// The valid tasks are stored in one transaction, so a storage failure
    /// leaves the store as it was and is returned as an error.
    pub fn import_file(&self, path: &Path, store: &mut Tasks) -> Result<ImportReport> {
        let outcome = self.parse_file(path)?;

        let ids = store
            .insert_many(&outcome.tasks)
            .with_context(|| Message::ImportRolledBack.to_string())?;
        for (task, id) in outcome.tasks.iter().zip(&ids) {
            msg_debug!(format!("Imported '{}' as task {}", task.title, id));
        }

        Ok(ImportReport {
            imported: ids.len(),
            errors: outcome.errors,
        })
    }
}

/// Accepts the export format (`YYYY-MM-DD`), the display format
/// (`dd-Mon-yyyy`) and a few common alternatives, with or without a time.
fn parse_due_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}
