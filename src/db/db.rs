use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::TaskError;
use crate::{msg_error, msg_print};
use rusqlite::Connection;

/// Which of the two logical databases to open.
///
/// Both targets share the schema but hold independent data. Everything
/// defaults to the operational database; tests open `Test`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DbTarget {
    #[default]
    Operational,
    Test,
}

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database file for `target`, creating the data directory
    /// on first use. Prints a status line either way; on failure the
    /// driver error is converted into `TaskError` and nothing is
    /// returned. Single attempt, no retries.
    pub fn open(config: &Config, target: DbTarget) -> Result<Db, TaskError> {
        let file_name = match target {
            DbTarget::Operational => &config.db_name,
            DbTarget::Test => &config.test_db_name,
        };
        let db_file_path = match config.db_path(file_name) {
            Ok(path) => path,
            Err(err) => {
                msg_error!(Message::DbConnectFailed(file_name.clone(), err.to_string()));
                return Err(err.into());
            }
        };

        match Connection::open(db_file_path) {
            Ok(conn) => {
                msg_print!(Message::DbConnected(file_name.clone()));
                Ok(Db { conn })
            }
            Err(err) => {
                msg_error!(Message::DbConnectFailed(file_name.clone(), err.to_string()));
                Err(err.into())
            }
        }
    }
}
