use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a terminal table.
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION", "STATUS", "CREATED"]);
        for task in tasks {
            table.add_row(row![task.id, task.name, task.description, task.status, task.created_on]);
        }
        table.printstd();
    }
}
