use std::collections::HashMap;

use taskman::LoadState;
use taskman::core::task::{Task, TaskId};

use crate::components::task_row::task_row;

pub fn task_list_view(
    tasks: &[Task],
    load_state: LoadState,
    optimistic: &HashMap<TaskId, bool>,
) -> String {
    if load_state == LoadState::Loading {
        return "Loading tasks...".to_string();
    }

    if tasks.is_empty() {
        return "No tasks available\n\
                You don't have any tasks yet. Type `new` to add your first task."
            .to_string();
    }

    let mut out = String::from("Task Manager");
    for task in tasks {
        let checked = optimistic.get(&task.id).copied().unwrap_or(task.completed);
        out.push('\n');
        out.push_str(&task_row(task, checked));
    }
    out
}
