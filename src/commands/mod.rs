//! Console layer: the interactive menu and one module per action.
//!
//! Every action reads its input, validates it, calls the task repository
//! and prints the outcome. Failures are reported and control always
//! returns to the menu; only a broken terminal can end the process early.

pub mod add;
pub mod delete;
pub mod list;
pub mod update;

use crate::db::db::DbTarget;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::{msg_error, msg_print};
use anyhow::Result;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run against the test database instead of the operational one
    #[arg(long)]
    test_db: bool,
}

impl Cli {
    /// Entry point: builds the configuration, opens the database, makes
    /// sure the schema exists and runs the menu until the user quits.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        if is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }

        let config = Config::from_env();
        let target = if cli.test_db { DbTarget::Test } else { DbTarget::Operational };

        // A failed open has already printed its status line; the process
        // ends normally without a menu to show.
        let Ok(mut tasks) = Tasks::open(&config, target) else {
            return Ok(());
        };

        loop {
            msg_print!(Message::MenuTitle, true);
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptMenuChoice.to_string())
                .allow_empty(true)
                .interact_text()?;

            // Same two-stage validation as everywhere else: is it a
            // number at all, then is it one of the offered choices.
            let choice = input.trim();
            if choice.is_empty() || !choice.chars().all(|c| c.is_ascii_digit()) {
                msg_error!(Message::InvalidMenuChoice);
                continue;
            }

            match choice.parse::<u32>() {
                Ok(1) => add::cmd(&mut tasks)?,
                Ok(2) => list::cmd(&mut tasks)?,
                Ok(3) => update::cmd(&mut tasks)?,
                Ok(4) => delete::cmd(&mut tasks)?,
                Ok(5) => {
                    msg_print!(Message::Goodbye);
                    break;
                }
                _ => msg_error!(Message::MenuChoiceOutOfRange),
            }
        }

        Ok(())
    }
}

/// Prompts for a task id. Returns `None` (after reporting) when the
/// input is not a plain decimal number; id range is left for the store
/// to check, since only it knows which ids exist.
pub(crate) fn prompt_task_id() -> Result<Option<i64>> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        msg_error!(Message::InvalidTaskId);
        return Ok(None);
    }
    match input.parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            msg_error!(Message::InvalidTaskId);
            Ok(None)
        }
    }
}
