//! Display implementation for taskdash application messages.
//!
//! All user-facing wording is defined in this one place. Variants with
//! dynamic content interpolate their parameters here, so call sites only
//! choose a message and never format text themselves:
//!
//! ```rust
//! use taskdash::libs::messages::Message;
//!
//! assert_eq!(Message::TaskCreated(3).to_string(), "Task 3 created successfully");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created successfully", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully", id),
            Message::TaskStatusUpdated(id, status) => format!("Task {} status updated to {}", id, status),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s) successfully.", count),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksFilteredHeader(filter) => format!("Tasks matching {}:", filter),
            Message::TaskDetailsHeader(id) => format!("Task {}:", id),
            Message::TaskInvalid(reason) => format!("Validation failed: {}", reason),
            Message::TaskIdOutOfRange(id) => format!("Task id {} is outside the supported range", id),
            Message::NoTaskIdsProvided => "No task IDs provided for deletion.".to_string(),
            Message::ConfirmDeleteTasks(count) => format!("Are you sure you want to delete {} task(s)?", count),
            Message::TasksToBeDeleted => "The following tasks will be deleted:".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::InvalidDate(value) => format!("Invalid date '{}', expected 'today' or YYYY-MM-DD", value),

            // === IMPORT MESSAGES ===
            Message::ImportOnlyCsv => "Only CSV files are supported".to_string(),
            Message::ImportFileNotFound(path) => format!("File not found: {}", path),
            Message::ImportCompleted(imported) => format!("Successfully imported {} tasks", imported),
            Message::ImportCompletedWithErrors(imported, errors) => {
                format!("Successfully imported {} tasks. {} errors occurred", imported, errors)
            }
            Message::ImportErrorsHeader => "Import completed with errors:".to_string(),
            Message::ImportRolledBack => "Import failed, no tasks were stored".to_string(),
            Message::ImportErrorsTruncated(hidden) => format!("...and {} more", hidden),

            // === EXPORT MESSAGES ===
            Message::ExportingTasks(count, format) => format!("Exporting {} task(s) as {}...", count, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(date) => format!("Dashboard for {}", date),
            Message::DashboardStatusHeader => "Status".to_string(),
            Message::DashboardPriorityHeader => "Priority distribution".to_string(),
            Message::DashboardCreationHeader => "Tasks created per week".to_string(),
            Message::DashboardNoTasks => "No tasks yet. Add one with 'taskdash add <title>'.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleTasks => "Task defaults".to_string(),
            Message::PromptDefaultDueDays => "Default due date offset in days".to_string(),
            Message::PromptImportErrorLimit => "Number of import errors to display".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),
        };

        write!(f, "{}", text)
    }
}
