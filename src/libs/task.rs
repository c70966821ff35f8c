//! Task domain types and the repository error taxonomy.
//!
//! Everything the persistence layer hands back to callers is described
//! here: the `Task` record itself, the closed set of statuses a task can
//! be in, the fetch filters, and the `TaskError` enum that every
//! repository operation reports failures through.

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single task row as stored in the database.
///
/// `name` and `description` are immutable after creation; only `status`
/// can change, and only through `Tasks::set_status`.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_on: NaiveDate,
}

/// Lifecycle state of a task.
///
/// New tasks always start as `NotStarted` (the table column carries the
/// same default). The store accepts any transition between the three
/// states; the console only ever offers `InProgress` and `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Textual form used in the database and in all user-facing output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not-started",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(TaskStatus::NotStarted),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(TaskError::UnknownStatus(other.to_string())),
        }
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        // The CHECK constraint keeps the column inside the enum, so a
        // parse failure here means the database was edited by hand.
        value.as_str()?.parse().map_err(|_| FromSqlError::InvalidType)
    }
}

/// Row filters understood by `Tasks::fetch`.
#[derive(Debug, Clone, Copy)]
pub enum TaskFilter {
    /// Every task regardless of status.
    All,
    /// Unfinished tasks only (`not-started` or `in-progress`).
    Active,
}

/// Failure classes of the task repository.
///
/// `EmptyField` and `NotFound` are validation failures the user can fix;
/// `Storage` wraps whatever the database driver reported. Driver errors
/// never leave the repository in any other shape.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task name and description must not be empty")]
    EmptyField,
    #[error("no task found with id {0}")]
    NotFound(i64),
    #[error("unknown task status '{0}'")]
    UnknownStatus(String),
    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("data directory error: {0}")]
    DataDir(#[from] std::io::Error),
}
