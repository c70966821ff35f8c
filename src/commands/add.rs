use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Prompts for a name and description and creates the task.
///
/// Empty input is accepted at the prompt and rejected here, before the
/// repository is called — the repository and the table constraints check
/// the same rule again.
pub fn cmd(tasks: &mut Tasks) -> Result<()> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let name = name.trim();
    let description = description.trim();
    if name.is_empty() || description.is_empty() {
        msg_error!(Message::EmptyNameOrDescription);
        return Ok(());
    }

    match tasks.insert(name, description) {
        Ok(_) => msg_success!(Message::TaskAdded(name.to_string())),
        Err(err) => msg_error!(Message::TaskAddFailed(err.to_string())),
    }
    Ok(())
}
