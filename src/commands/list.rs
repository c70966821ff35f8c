use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_error, msg_print};
use anyhow::Result;

/// Shows all unfinished tasks. An empty result is not an error — it just
/// means there is nothing left to do.
pub fn cmd(tasks: &mut Tasks) -> Result<()> {
    match tasks.fetch(TaskFilter::Active) {
        Ok(active) if active.is_empty() => msg_print!(Message::NoActiveTasks),
        Ok(active) => {
            msg_print!(Message::ActiveTasksHeader, true);
            View::tasks(&active);
        }
        Err(err) => msg_error!(Message::TaskListFailed(err.to_string())),
    }
    Ok(())
}
