//! Persistence layer built on SQLite.
//!
//! Three pieces: the connection provider (`db`), the idempotent schema
//! initializer (`schema`), and the task repository (`tasks`). The
//! connection is long-lived — one per process, or one per test — and
//! every statement runs synchronously against it.

/// Connection provider for the operational and test databases.
pub mod db;

/// Task table schema and its idempotent initializer.
pub mod schema;

/// CRUD operations for tasks.
pub mod tasks;
