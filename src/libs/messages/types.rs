/// Every user-facing message in the application.
///
/// Variants carry the dynamic parts of the text; the wording itself lives in
/// the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i32),
    TaskUpdated(i32),
    TaskStatusUpdated(i32, String), // id, status
    TasksDeletedCount(usize),
    TaskNotFoundWithId(i32),
    TasksNotFound,
    TasksHeader,
    TasksFilteredHeader(String), // filter description
    TaskDetailsHeader(i32),
    TaskInvalid(String),
    TaskIdOutOfRange(i64),
    NoTaskIdsProvided,
    ConfirmDeleteTasks(usize),
    TasksToBeDeleted,
    NoChangesDetected,
    EditingTask(String),
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskPriority,
    PromptTaskStatus,
    PromptTaskDueDate,
    InvalidDate(String),

    // === IMPORT MESSAGES ===
    ImportOnlyCsv,
    ImportFileNotFound(String),
    ImportCompleted(usize),                // imported
    ImportCompletedWithErrors(usize, usize), // imported, errors
    ImportErrorsHeader,
    ImportRolledBack,
    ImportErrorsTruncated(usize), // hidden error count

    // === EXPORT MESSAGES ===
    ExportingTasks(usize, String), // count, format
    ExportCompleted(String),        // path

    // === DASHBOARD MESSAGES ===
    DashboardHeader(String), // date
    DashboardStatusHeader,
    DashboardPriorityHeader,
    DashboardCreationHeader,
    DashboardNoTasks,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleTasks,
    PromptDefaultDueDays,
    PromptImportErrorLimit,

    // === DATABASE MESSAGES ===
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
