use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Status, Task, TaskFilter};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const TASK_COLUMNS: &str = "id, title, description, priority, status, due_date, created_at, updated_at, completed_at";
/// Storage format of `due_date`, matching rusqlite's `NaiveDate` encoding.
const DATE_FORMAT: &str = "%Y-%m-%d";
const NOW: &str = "datetime(CURRENT_TIMESTAMP, 'localtime')";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Task store backed by the application database.
    pub fn new() -> Result<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Tasks {
        Tasks { conn: db.conn }
    }

    /// Stores a new task and returns its id.
    ///
    /// The creation timestamp is assigned here; a task inserted as
    /// `Completed` is stamped as completed at the same moment.
    pub fn insert(&mut self, task: &Task) -> Result<i32> {
        let tx = self.conn.transaction()?;
        let id = insert_task(&tx, task)?;
        tx.commit()?;

        Ok(id)
    }

    /// Stores `tasks` in a single transaction and returns their ids in order.
    ///
    /// Either every task is stored or, on the first failure, none is.
    pub fn insert_many(&mut self, tasks: &[Task]) -> Result<Vec<i32>> {
        let tx = self.conn.transaction()?;
        let ids = tasks.iter().map(|task| insert_task(&tx, task)).collect::<Result<Vec<_>>>()?;
        tx.commit()?;

        Ok(ids)
    }

    /// Every stored task, ordered by id.
    pub fn all(&mut self) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::All)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Task>> {
        let sql = format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS);
        let task = self.conn.query_row(&sql, params![id], task_from_row).optional()?;

        Ok(task)
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (conditions, params): (Vec<String>, Vec<Value>) = match filter {
            TaskFilter::All => (vec![], vec![]),
            TaskFilter::ByIds(ids) => {
                if ids.is_empty() {
                    return Ok(Vec::new());
                }
                let placeholders = vec!["?"; ids.len()].join(", ");
                (vec![format!("id IN ({})", placeholders)], ids.iter().map(|&id| Value::Integer(id.into())).collect())
            }
            TaskFilter::Matching {
                status,
                priority,
                search,
                due_after,
                due_on,
            } => {
                let mut conditions = Vec::new();
                let mut params = Vec::new();
                if let Some(status) = status {
                    conditions.push("status = ?".to_string());
                    params.push(Value::Text(status.as_str().to_string()));
                }
                if let Some(priority) = priority {
                    conditions.push("priority = ?".to_string());
                    params.push(Value::Text(priority.as_str().to_string()));
                }
                if let Some(search) = search {
                    let pattern = format!("%{}%", escape_like(&search));
                    conditions.push("(title LIKE ? ESCAPE '\\' OR IFNULL(description, '') LIKE ? ESCAPE '\\')".to_string());
                    params.push(Value::Text(pattern.clone()));
                    params.push(Value::Text(pattern));
                }
                if let Some(date) = due_after {
                    conditions.push("due_date > ?".to_string());
                    params.push(Value::Text(date.format(DATE_FORMAT).to_string()));
                }
                if let Some(date) = due_on {
                    conditions.push("due_date = ?".to_string());
                    params.push(Value::Text(date.format(DATE_FORMAT).to_string()));
                }
                (conditions, params)
            }
        };

        let mut sql = format!("SELECT {} FROM tasks", TASK_COLUMNS);
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(params.iter()), task_from_row)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    /// Rewrites the editable fields of `task`. Returns `false` when no task
    /// with that id exists.
    ///
    /// Moving into `Completed` stamps `completed_at` (an existing stamp is
    /// kept); moving away from it clears the stamp.
    pub fn update(&mut self, task: &Task) -> Result<bool> {
        let Some(id) = task.id else {
            return Ok(false);
        };
        let sql = format!(
            "UPDATE tasks SET title = ?2, description = ?3, priority = ?4, status = ?5, due_date = ?6,
             updated_at = {now},
             completed_at = CASE WHEN ?5 = 'Completed' THEN COALESCE(completed_at, {now}) ELSE NULL END
             WHERE id = ?1",
            now = NOW
        );
        let affected = self.conn.execute(
            &sql,
            params![id, task.title.trim(), task.description, task.priority, task.status, task.due_date],
        )?;

        Ok(affected > 0)
    }

    /// Status transition with the same `completed_at` rule as [`Tasks::update`].
    pub fn update_status(&mut self, id: i32, status: Status) -> Result<bool> {
        let sql = format!(
            "UPDATE tasks SET status = ?2, updated_at = {now},
             completed_at = CASE WHEN ?2 = 'Completed' THEN COALESCE(completed_at, {now}) ELSE NULL END
             WHERE id = ?1",
            now = NOW
        );
        let affected = self.conn.execute(&sql, params![id, status])?;

        Ok(affected > 0)
    }

    pub fn delete(&mut self, id: i32) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?)
    }

    pub fn delete_many(&mut self, ids: &[i32]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }
        let sql = format!("DELETE FROM tasks WHERE id IN ({})", vec!["?"; ids.len()].join(", "));

        Ok(self.conn.execute(&sql, params_from_iter(ids.iter()))?)
    }
}

fn insert_task(conn: &Connection, task: &Task) -> Result<i32> {
    let sql = format!(
        "INSERT INTO tasks (title, description, priority, status, due_date, created_at, completed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, {now}, CASE WHEN ?4 = 'Completed' THEN {now} ELSE NULL END)",
        now = NOW
    );
    conn.execute(
        &sql,
        params![task.title.trim(), task.description, task.priority, task.status, task.due_date],
    )?;

    let rowid = conn.last_insert_rowid();
    i32::try_from(rowid).map_err(|_| msg_error_anyhow!(Message::TaskIdOutOfRange(rowid)))
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: row.get(3)?,
        status: row.get(4)?,
        due_date: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
        completed_at: row.get(8)?,
    })
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}
