//! Application configuration.
//!
//! All settings live in one `Config` struct that is built exactly once at
//! process start and passed by reference to whoever needs it — there is
//! no process-wide mutable state. Values come from the environment (a
//! `.env` file is honored, see `.env.example`), with defaults that make
//! the program usable with no configuration at all:
//!
//! - `TASKMAN_DATA_DIR`     — directory holding the database files
//!                            (default: the platform data directory)
//! - `TASKMAN_DB_NAME`      — operational database file name
//! - `TASKMAN_TEST_DB_NAME` — test database file name
//!
//! The operational and test databases share a schema but hold independent
//! data; which one a run uses is decided by the connection provider, not
//! by swapping configuration values.

use super::data_storage::DataStorage;
use dotenv::dotenv;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

pub const DEFAULT_DB_NAME: &str = "taskman.db";
pub const DEFAULT_TEST_DB_NAME: &str = "taskman_test.db";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding both database files. Created on first use.
    pub data_dir: PathBuf,
    /// File name of the operational database.
    pub db_name: String,
    /// File name of the test database.
    pub test_db_name: String,
}

impl Config {
    /// Builds the configuration from the environment, loading a `.env`
    /// file first if one is present. Missing variables fall back to the
    /// defaults; nothing here fails.
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_dir = env::var("TASKMAN_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| DataStorage::new().base_path().to_path_buf());
        let db_name = env::var("TASKMAN_DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());
        let test_db_name = env::var("TASKMAN_TEST_DB_NAME").unwrap_or_else(|_| DEFAULT_TEST_DB_NAME.to_string());

        Config {
            data_dir,
            db_name,
            test_db_name,
        }
    }

    /// Resolves a database file inside the data directory, creating the
    /// directory if it does not exist yet.
    pub fn db_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(self.data_dir.join(file_name))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: DataStorage::new().base_path().to_path_buf(),
            db_name: DEFAULT_DB_NAME.to_string(),
            test_db_name: DEFAULT_TEST_DB_NAME.to_string(),
        }
    }
}
