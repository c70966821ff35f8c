#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DbConnected(String),         // file name
    DbConnectFailed(String, String), // file name, error
    SchemaReady,
    SchemaCreateFailed(String), // error

    // === TASK MESSAGES ===
    TaskAdded(String),             // task name
    TaskAddFailed(String),         // error
    TaskStatusChanged(i64, String), // id, new status
    TaskStatusChangeFailed(String), // error
    TaskDeleted(i64),              // id
    TaskDeleteFailed(String),      // error
    TaskNotFoundWithId(i64),
    TaskListFailed(String), // error
    NoActiveTasks,
    NoTasksToUpdate,
    NoTasksToDelete,
    ActiveTasksHeader,
    AllTasksHeader,

    // === VALIDATION MESSAGES ===
    EmptyNameOrDescription,
    InvalidTaskId,
    InvalidMenuChoice,
    MenuChoiceOutOfRange,

    // === MENU & PROMPTS ===
    MenuTitle,
    PromptMenuChoice,
    PromptTaskName,
    PromptTaskDescription,
    PromptTaskId,
    PromptNewStatus,
    ConfirmDeleteTask(i64), // id
    OperationCancelled,
    Goodbye,
}
