//! Task repository: every read and write against the task table.
//!
//! Each operation is a single blocking statement and reports its outcome
//! through `TaskError` — `Ok` for success (an empty fetch result is a
//! valid success, not an error), `Err(NotFound)` when an id matches no
//! row, `Err(Storage)` when the driver rejects the statement. Raw
//! `rusqlite` errors never cross this boundary.

use super::db::{Db, DbTarget};
use super::schema;
use crate::libs::config::Config;
use crate::libs::task::{Task, TaskError, TaskFilter, TaskStatus};
use crate::msg_debug;
use rusqlite::{params, Connection};

const INSERT_TASK: &str = "INSERT INTO tasks (name, description, status, created_on) VALUES (?1, ?2, ?3, DATE('now', 'localtime'))";
const SELECT_TASKS: &str = "SELECT id, name, description, status, created_on FROM tasks";
const WHERE_ACTIVE: &str = "WHERE status IN ('not-started', 'in-progress')";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?1 WHERE id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Wraps an open connection, making sure the task table exists.
    pub fn new(db: Db) -> Self {
        schema::ensure_schema(&db.conn);
        Tasks { conn: db.conn }
    }

    /// Opens the database for `target` and prepares the task table.
    pub fn open(config: &Config, target: DbTarget) -> Result<Self, TaskError> {
        Ok(Self::new(Db::open(config, target)?))
    }

    /// Inserts one task with status `not-started` and today's date,
    /// returning the generated id.
    ///
    /// Both fields must be non-empty after trimming; an empty field fails
    /// before any statement is issued. The table's CHECK constraints
    /// enforce the same rule for writes that bypass this method.
    pub fn insert(&mut self, name: &str, description: &str) -> Result<i64, TaskError> {
        let name = name.trim();
        let description = description.trim();
        if name.is_empty() || description.is_empty() {
            return Err(TaskError::EmptyField);
        }

        self.conn.execute(INSERT_TASK, params![name, description, TaskStatus::NotStarted])?;
        let id = self.conn.last_insert_rowid();
        msg_debug!("inserted task id={}", id);
        Ok(id)
    }

    /// Fetches tasks matching `filter`, in storage iteration order.
    /// An empty vector means the query matched no rows.
    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>, TaskError> {
        let sql = match filter {
            TaskFilter::All => SELECT_TASKS.to_string(),
            TaskFilter::Active => format!("{} {}", SELECT_TASKS, WHERE_ACTIVE),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                status: row.get(3)?,
                created_on: row.get(4)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Sets the status of the task with `id`. The previous status is not
    /// inspected: any of the three states may be applied.
    pub fn set_status(&mut self, id: i64, status: TaskStatus) -> Result<(), TaskError> {
        let affected = self.conn.execute(UPDATE_STATUS, params![status, id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        msg_debug!("task id={} set to {}", id, status);
        Ok(())
    }

    /// Physically removes the task with `id`.
    pub fn delete(&mut self, id: i64) -> Result<(), TaskError> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        msg_debug!("deleted task id={}", id);
        Ok(())
    }
}
