use super::prompt_task_id;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{TaskError, TaskFilter, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

/// Changes the status of one task.
///
/// The full, unfiltered list is shown first so every id is visible
/// before the user picks one; an empty table short-circuits the whole
/// flow. Only the forward transitions are offered — the store itself
/// would accept any of the three states.
pub fn cmd(tasks: &mut Tasks) -> Result<()> {
    let all = match tasks.fetch(TaskFilter::All) {
        Ok(all) => all,
        Err(err) => {
            msg_error!(Message::TaskListFailed(err.to_string()));
            return Ok(());
        }
    };
    if all.is_empty() {
        msg_print!(Message::NoTasksToUpdate);
        return Ok(());
    }

    msg_print!(Message::AllTasksHeader, true);
    View::tasks(&all);

    let Some(id) = prompt_task_id()? else {
        return Ok(());
    };

    let options = [TaskStatus::InProgress, TaskStatus::Done];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewStatus.to_string())
        .items(&options)
        .default(0)
        .interact()?;
    let status = options[selection];

    match tasks.set_status(id, status) {
        Ok(()) => msg_success!(Message::TaskStatusChanged(id, status.to_string())),
        Err(TaskError::NotFound(_)) => msg_error!(Message::TaskNotFoundWithId(id)),
        Err(err) => msg_error!(Message::TaskStatusChangeFailed(err.to_string())),
    }
    Ok(())
}
