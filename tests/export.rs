#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use taskdash::db::db::Db;
    use taskdash::db::tasks::Tasks;
    use taskdash::libs::config::TaskConfig;
    use taskdash::libs::export::{ExportFormat, ExportTask, Exporter};
    use taskdash::libs::import::Importer;
    use taskdash::libs::task::{Priority, Status, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: Vec<Task>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let mut store = Tasks::from_db(Db::open_in_memory().unwrap());
            let due = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
            store
                .insert(&Task::new("Write docs", Some("User guide"), Priority::High, Status::Pending, due))
                .unwrap();
            store
                .insert(&Task::new("Fix bug", None, Priority::Low, Status::Completed, due))
                .unwrap();

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                tasks: store.all().unwrap(),
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&ctx.tasks).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Title,Description,Priority,Status,DueDate,CreatedDate"));

        let first = lines.next().unwrap();
        assert!(first.starts_with("Write docs,User guide,High,Pending,2025-03-21,"));
        let second = lines.next().unwrap();
        assert!(second.starts_with("Fix bug,,Low,Completed,2025-03-21,"));
        assert_eq!(lines.next(), None);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv_can_be_imported(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("backup.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&ctx.tasks).unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let outcome = Importer::new(today, &TaskConfig::default()).parse_file(&path).unwrap();

        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.tasks.len(), ctx.tasks.len());
        for (imported, original) in outcome.tasks.iter().zip(&ctx.tasks) {
            assert_eq!(imported.title, original.title);
            assert_eq!(imported.description, original.description);
            assert_eq!(imported.priority, original.priority);
            assert_eq!(imported.status, original.status);
            assert_eq!(imported.due_date, original.due_date);
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&ctx.tasks).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let records: Vec<ExportTask> = serde_json::from_str(&content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, ctx.tasks[0].id.unwrap());
        assert_eq!(records[0].title, "Write docs");
        assert_eq!(records[1].description, "");
        assert_eq!(records[1].status, "Completed");
        assert_eq!(records[1].due_date, "2025-03-21");
        assert_eq!(records[1].created_date.len(), 10);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.xlsx");
        Exporter::new(ExportFormat::Excel, Some(path.clone())).export(&ctx.tasks).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_list(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("empty.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "Title,Description,Priority,Status,DueDate,CreatedDate");
    }

    #[test]
    fn test_default_output_path() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().to_string();

        assert!(name.starts_with("taskdash_export_"));
        assert!(name.ends_with(".xlsx"));
        assert_eq!(name.len(), "taskdash_export_YYYYMMDD_HHMMSS.xlsx".len());
    }
}
