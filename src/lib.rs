//! # Taskman - console task tracker
//!
//! A small interactive task manager backed by a local SQLite database.
//! Tasks carry a name, a description, a lifecycle status and a creation
//! date; a numbered menu adds, lists, updates and deletes them.
//!
//! ## Features
//!
//! - **Task lifecycle**: `not-started` → `in-progress` → `done`, with the
//!   constraints enforced both in code and in the table schema
//! - **Two databases**: an operational and a test target sharing one
//!   schema but holding independent data
//! - **Zero-setup configuration**: sensible defaults, overridable through
//!   `.env` / environment variables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
