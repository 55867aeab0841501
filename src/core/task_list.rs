use super::task::{Task, TaskId};

/// Ordered task collection with unique ids.
///
/// Order is the order the service listed tasks in, with newly created tasks
/// appended at the end. Nothing here re-sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. A repeated id keeps its first position
    /// and takes the value of its last occurrence.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks.clear();
        for task in tasks {
            self.append(task);
        }
    }

    /// Append a task, or replace it in place if the id is already present.
    pub fn append(&mut self, task: Task) {
        match self.position(task.id) {
            Some(idx) => self.tasks[idx] = task,
            None => self.tasks.push(task),
        }
    }

    /// Replace the entry with the same id. Returns false if there is none.
    pub fn replace(&mut self, task: Task) -> bool {
        match self.position(task.id) {
            Some(idx) => {
                self.tasks[idx] = task;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.position(id).map(|idx| self.tasks.remove(idx))
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}
