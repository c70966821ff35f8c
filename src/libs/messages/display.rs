//! Display implementation for taskman messages.
//!
//! The single place where structured `Message` values become the text the
//! user sees. Keeping every string here means the rest of the code never
//! formats user-facing output by hand, and the wording of the whole
//! program can be reviewed (or localized) in one file.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DbConnected(name) => format!("Connected to database '{}'.", name),
            Message::DbConnectFailed(name, err) => format!("Failed to connect to database '{}': {}", name, err),
            Message::SchemaReady => "Task table already exists or was just created.".to_string(),
            Message::SchemaCreateFailed(err) => format!("Failed to create task table: {}", err),

            // === TASK MESSAGES ===
            Message::TaskAdded(name) => format!("Task '{}' was added.", name),
            Message::TaskAddFailed(err) => format!("Failed to add task: {}", err),
            Message::TaskStatusChanged(id, status) => format!("Task {} is now '{}'.", id, status),
            Message::TaskStatusChangeFailed(err) => format!("Failed to update task status: {}", err),
            Message::TaskDeleted(id) => format!("Task {} was deleted.", id),
            Message::TaskDeleteFailed(err) => format!("Failed to delete task: {}", err),
            Message::TaskNotFoundWithId(id) => format!("No task exists with id {}.", id),
            Message::TaskListFailed(err) => format!("Failed to load tasks: {}", err),
            Message::NoActiveTasks => "There are no unfinished tasks.".to_string(),
            Message::NoTasksToUpdate => "The task table is empty. There is nothing to update.".to_string(),
            Message::NoTasksToDelete => "The task table is empty. There is nothing to delete.".to_string(),
            Message::ActiveTasksHeader => "TASK LIST:".to_string(),
            Message::AllTasksHeader => "ALL TASKS:".to_string(),

            // === VALIDATION MESSAGES ===
            Message::EmptyNameOrDescription => "Name or description is missing. Please enter both values.".to_string(),
            Message::InvalidTaskId => "Invalid id. Enter the task id from the list (a whole positive number).".to_string(),
            Message::InvalidMenuChoice => "Invalid input. Enter a number between 1 and 5.".to_string(),
            Message::MenuChoiceOutOfRange => "There is no menu option with that number. Enter a number between 1 and 5.".to_string(),

            // === MENU & PROMPTS ===
            Message::MenuTitle => "Task manager - main menu\n\
                 1. Add task\n\
                 2. Show tasks\n\
                 3. Update task status\n\
                 4. Delete task\n\
                 5. Quit"
                .to_string(),
            Message::PromptMenuChoice => "Select an option (1-5)".to_string(),
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptTaskId => "Task id".to_string(),
            Message::PromptNewStatus => "Choose the new status".to_string(),
            Message::ConfirmDeleteTask(id) => format!("Delete task {}? This cannot be undone", id),
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::Goodbye => "Exiting task manager.".to_string(),
        };
        write!(f, "{}", text)
    }
}
