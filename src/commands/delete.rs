use super::prompt_task_id;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{TaskError, TaskFilter};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Deletes one task after confirmation. Deletion is physical — there is
/// no soft-delete to recover from.
pub fn cmd(tasks: &mut Tasks) -> Result<()> {
    let all = match tasks.fetch(TaskFilter::All) {
        Ok(all) => all,
        Err(err) => {
            msg_error!(Message::TaskListFailed(err.to_string()));
            return Ok(());
        }
    };
    if all.is_empty() {
        msg_print!(Message::NoTasksToDelete);
        return Ok(());
    }

    msg_print!(Message::AllTasksHeader, true);
    View::tasks(&all);

    let Some(id) = prompt_task_id()? else {
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(id).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_print!(Message::OperationCancelled);
        return Ok(());
    }

    match tasks.delete(id) {
        Ok(()) => msg_success!(Message::TaskDeleted(id)),
        Err(TaskError::NotFound(_)) => msg_error!(Message::TaskNotFoundWithId(id)),
        Err(err) => msg_error!(Message::TaskDeleteFailed(err.to_string())),
    }
    Ok(())
}
