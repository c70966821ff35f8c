//! Task table schema.
//!
//! SQLite does not enforce `VARCHAR(n)` bounds, so the length limits and
//! the non-blank rules are spelled out as CHECK constraints. The status
//! column is a closed three-value set with a database-level default;
//! `AUTOINCREMENT` keeps ids monotonic and never reused, even after
//! deletes.

use crate::libs::messages::Message;
use crate::{msg_error, msg_print};
use rusqlite::Connection;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(trim(name)) > 0 AND length(name) <= 30),
    description TEXT NOT NULL CHECK (length(trim(description)) > 0 AND length(description) <= 100),
    status TEXT NOT NULL DEFAULT 'not-started' CHECK (status IN ('not-started', 'in-progress', 'done')),
    created_on DATE NOT NULL
);";

/// Creates the task table if it does not exist yet. Idempotent and safe
/// to run at every process start.
///
/// A failure is reported but not raised: the connection stays open and
/// the caller proceeds with whatever schema state exists.
pub fn ensure_schema(conn: &Connection) {
    match conn.execute(SCHEMA_TASKS, []) {
        Ok(_) => msg_print!(Message::SchemaReady),
        Err(err) => msg_error!(Message::SchemaCreateFailed(err.to_string())),
    }
}
