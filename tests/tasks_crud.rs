#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use taskdash::db::db::Db;
    use taskdash::db::tasks::Tasks;
    use taskdash::libs::task::{Priority, Status, Task, TaskFilter};
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        tasks: Tasks,
        due: NaiveDate,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                tasks: Tasks::from_db(Db::open_in_memory().unwrap()),
                due: NaiveDate::from_ymd_opt(2025, 3, 21).unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn add(&mut self, title: &str, description: Option<&str>, priority: Priority, status: Status) -> i32 {
            let task = Task::new(title, description, priority, status, self.due);
            self.tasks.insert(&task).unwrap()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_insert_and_get(ctx: &mut TaskTestContext) {
        let id = ctx.add("Write report", Some("Quarterly numbers"), Priority::High, Status::Pending);

        let task = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.id, Some(id));
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description.as_deref(), Some("Quarterly numbers"));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.due_date, ctx.due);
        assert!(task.created_at.is_some());
        assert!(task.updated_at.is_none());
        assert!(task.completed_at.is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_many(ctx: &mut TaskTestContext) {
        let batch = vec![
            Task::new("First", None, Priority::High, Status::Pending, ctx.due),
            Task::new("Second", None, Priority::Low, Status::Completed, ctx.due),
        ];

        let ids = ctx.tasks.insert_many(&batch).unwrap();

        assert_eq!(ids.len(), 2);
        let stored: Vec<Option<i32>> = ctx.tasks.all().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(stored, ids.into_iter().map(Some).collect::<Vec<_>>());
        assert!(ctx.tasks.insert_many(&[]).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_rejects_id_beyond_i32(ctx: &mut TaskTestContext) {
        ctx.tasks
            .conn
            .execute(
                "INSERT INTO tasks (id, title, due_date, created_at) VALUES (2147483647, 'Last id', '2025-03-21', '2025-03-14 09:00:00')",
                [],
            )
            .unwrap();

        let task = Task::new("One too many", None, Priority::Normal, Status::Pending, ctx.due);
        let error = ctx.tasks.insert(&task).unwrap_err();

        assert!(error.to_string().contains("2147483648"));
        let count: i64 = ctx.tasks.conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_get_missing(ctx: &mut TaskTestContext) {
        assert!(ctx.tasks.get_by_id(42).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_completed_sets_completed_at(ctx: &mut TaskTestContext) {
        let id = ctx.add("Done already", None, Priority::Low, Status::Completed);

        let task = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert!(task.completed_at.is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(ctx: &mut TaskTestContext) {
        let id = ctx.add("Original title", None, Priority::Normal, Status::Pending);
        let mut task = ctx.tasks.get_by_id(id).unwrap().unwrap();
        let created_at = task.created_at;

        task.title = "Updated title".to_string();
        task.description = Some("Now with details".to_string());
        task.priority = Priority::Low;
        assert!(ctx.tasks.update(&task).unwrap());

        let updated = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.title, "Updated title");
        assert_eq!(updated.description.as_deref(), Some("Now with details"));
        assert_eq!(updated.priority, Priority::Low);
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at.is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task(ctx: &mut TaskTestContext) {
        let mut task = Task::new("Ghost", None, Priority::Normal, Status::Pending, ctx.due);
        assert!(!ctx.tasks.update(&task).unwrap());

        task.id = Some(99);
        assert!(!ctx.tasks.update(&task).unwrap());
        assert!(!ctx.tasks.update_status(99, Status::Completed).unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_status_transitions_track_completion(ctx: &mut TaskTestContext) {
        let id = ctx.add("Ship release", None, Priority::High, Status::Pending);

        assert!(ctx.tasks.update_status(id, Status::Completed).unwrap());
        let completed = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(completed.status, Status::Completed);
        assert!(completed.completed_at.is_some());

        assert!(ctx.tasks.update_status(id, Status::Completed).unwrap());
        let again = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(again.completed_at, completed.completed_at);

        assert!(ctx.tasks.update_status(id, Status::Hold).unwrap());
        let reopened = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(reopened.status, Status::Hold);
        assert!(reopened.completed_at.is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let id = ctx.add("Temporary", None, Priority::Normal, Status::Pending);
        assert_eq!(ctx.tasks.all().unwrap().len(), 1);

        assert_eq!(ctx.tasks.delete(id).unwrap(), 1);
        assert_eq!(ctx.tasks.delete(id).unwrap(), 0);
        assert!(ctx.tasks.all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete_many(ctx: &mut TaskTestContext) {
        for i in 1..=5 {
            ctx.add(&format!("Task {}", i), None, Priority::Normal, Status::Pending);
        }
        let ids: Vec<i32> = ctx.tasks.all().unwrap().iter().filter_map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);

        assert_eq!(ctx.tasks.delete_many(&ids[0..3]).unwrap(), 3);
        assert_eq!(ctx.tasks.delete_many(&[]).unwrap(), 0);

        let remaining: Vec<i32> = ctx.tasks.all().unwrap().iter().filter_map(|t| t.id).collect();
        assert_eq!(remaining, ids[3..].to_vec());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_by_ids(ctx: &mut TaskTestContext) {
        let first = ctx.add("First", None, Priority::Normal, Status::Pending);
        ctx.add("Second", None, Priority::Normal, Status::Pending);
        let third = ctx.add("Third", None, Priority::Normal, Status::Pending);

        let tasks = ctx.tasks.fetch(TaskFilter::ByIds(vec![third, first, 77])).unwrap();
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["First", "Third"]);

        assert!(ctx.tasks.fetch(TaskFilter::ByIds(vec![])).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_matching(ctx: &mut TaskTestContext) {
        ctx.add("Write docs", Some("User guide"), Priority::High, Status::Pending);
        ctx.add("Fix login bug", None, Priority::High, Status::Completed);
        ctx.add("Plan sprint", Some("Write goals"), Priority::Low, Status::Pending);
        ctx.add("Review 100 percent", None, Priority::Normal, Status::Hold);

        let high = ctx.tasks.fetch(TaskFilter::from_parts(None, Some(Priority::High), None, None, None)).unwrap();
        assert_eq!(high.len(), 2);

        let pending_high = ctx
            .tasks
            .fetch(TaskFilter::from_parts(Some(Status::Pending), Some(Priority::High), None, None, None))
            .unwrap();
        assert_eq!(pending_high.len(), 1);
        assert_eq!(pending_high[0].title, "Write docs");

        let search = ctx.tasks.fetch(TaskFilter::from_parts(None, None, Some("WRITE".to_string()), None, None)).unwrap();
        let titles: Vec<&str> = search.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Write docs", "Plan sprint"]);

        let wildcard = ctx.tasks.fetch(TaskFilter::from_parts(None, None, Some("%".to_string()), None, None)).unwrap();
        assert!(wildcard.is_empty());

        let tomorrow = ctx.due + Duration::days(1);
        let yesterday = ctx.due - Duration::days(1);
        ctx.tasks
            .insert(&Task::new("Next release", None, Priority::High, Status::Pending, tomorrow))
            .unwrap();
        ctx.tasks
            .insert(&Task::new("Missed deadline", None, Priority::Low, Status::Hold, yesterday))
            .unwrap();

        let upcoming = ctx.tasks.fetch(TaskFilter::from_parts(None, None, None, Some(ctx.due), None)).unwrap();
        let titles: Vec<&str> = upcoming.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Next release"]);

        let due_today = ctx.tasks.fetch(TaskFilter::from_parts(None, None, None, None, Some(ctx.due))).unwrap();
        assert_eq!(due_today.len(), 4);
        assert!(due_today.iter().all(|t| t.due_date == ctx.due));

        let due_yesterday = ctx.tasks.fetch(TaskFilter::from_parts(None, None, None, None, Some(yesterday))).unwrap();
        assert_eq!(due_yesterday.len(), 1);
        assert_eq!(due_yesterday[0].title, "Missed deadline");

        let high_upcoming = ctx
            .tasks
            .fetch(TaskFilter::from_parts(None, Some(Priority::High), None, Some(yesterday), None))
            .unwrap();
        assert_eq!(high_upcoming.len(), 3);

        let none = ctx
            .tasks
            .fetch(TaskFilter::from_parts(None, None, None, Some(ctx.due), Some(ctx.due)))
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_from_parts_collapses_to_all() {
        assert_eq!(TaskFilter::from_parts(None, None, None, None, None), TaskFilter::All);
        assert_eq!(TaskFilter::from_parts(None, None, Some("   ".to_string()), None, None), TaskFilter::All);
        assert_ne!(TaskFilter::from_parts(Some(Status::Hold), None, None, None, None), TaskFilter::All);
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_ne!(TaskFilter::from_parts(None, None, None, None, Some(day)), TaskFilter::All);
    }
}
