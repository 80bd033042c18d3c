//! Terminal rendering of task lists: one line per task, per-category groups, or a table.

use super::task::{CategoryGroup, Task};
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// One line with every field of the task.
    pub fn task_line(task: &Task) -> String {
        format!(
            "ID: {}, Title: {}, Description: {}, Category: {}, Due: {}, Priority: {}, Status: {}",
            task.id, task.title, task.description, task.category, task.due_date, task.priority, task.status
        )
    }

    /// Prints one line per task. Returns `false` after a "no tasks" notice
    /// when there is nothing to show.
    pub fn display(tasks: &[Task]) -> bool {
        if tasks.is_empty() {
            msg_info!(Message::TasksNotFound);
            return false;
        }
        for task in tasks {
            msg_print!(Self::task_line(task));
        }
        true
    }

    /// Prints a header per category followed by its tasks.
    pub fn display_grouped(groups: &[CategoryGroup]) -> bool {
        if groups.is_empty() {
            msg_info!(Message::NoTasksToDisplay);
            return false;
        }
        for group in groups {
            msg_print!(Message::CategoryHeader(group.category.clone()), true);
            Self::display(&group.tasks);
        }
        true
    }

    pub fn table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "CATEGORY", "DUE", "PRIORITY", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.description,
                task.category,
                task.due_date,
                task.priority,
                task.status
            ]);
        }

        table
    }

    /// Same contract as [`View::display`], rendered as a table.
    pub fn display_table(tasks: &[Task]) -> bool {
        if tasks.is_empty() {
            msg_info!(Message::TasksNotFound);
            return false;
        }
        Self::table(tasks).printstd();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::{Priority, Status};

    fn sample() -> Task {
        Task::new(1, "Задача 1", "Описание задачи 1", "Работа", "05.12.2024", Priority::Medium)
    }

    #[test]
    fn test_task_line_contains_all_fields() {
        assert_eq!(
            View::task_line(&sample()),
            "ID: 1, Title: Задача 1, Description: Описание задачи 1, Category: Работа, Due: 05.12.2024, Priority: Средний, Status: Не выполнена"
        );
    }

    #[test]
    fn test_task_line_shows_done_status() {
        let mut task = sample();
        task.status = Status::Done;
        assert!(View::task_line(&task).ends_with("Status: Выполнена"));
    }

    #[test]
    fn test_display_empty_returns_false() {
        assert!(!View::display(&[]));
        assert!(!View::display_table(&[]));
        assert!(!View::display_grouped(&[]));
    }

    #[test]
    fn test_display_non_empty_returns_true() {
        assert!(View::display(&[sample()]));
    }

    #[test]
    fn test_display_grouped_with_groups() {
        let groups = vec![CategoryGroup {
            category: "Работа".to_string(),
            tasks: vec![sample()],
        }];
        assert!(View::display_grouped(&groups));
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = View::table(&[sample(), sample()]);
        assert_eq!(table.len(), 3);
    }
}
