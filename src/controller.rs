//! The task list controller: owner of the in-memory task collection and the
//! only caller of the task service.
//!
//! Every operation awaits the service without holding the state lock, then
//! applies the outcome in one step. Concurrent operations are not queued or
//! deduplicated; the last response to arrive wins.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::api::TaskService;
use crate::core::notification::{Notification, Notifications};
use crate::core::task::{NewTask, Task, TaskId};
use crate::core::task_list::TaskList;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Default)]
struct State {
    tasks: TaskList,
    load: LoadState,
    notifications: Notifications,
}

pub struct TaskListController<S> {
    service: S,
    state: Mutex<State>,
}

impl<S: TaskService> TaskListController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Mutex::new(State::default()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the collection in display order.
    pub fn tasks(&self) -> Vec<Task> {
        self.state().tasks.as_slice().to_vec()
    }

    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.state().tasks.get(id).cloned()
    }

    pub fn load_state(&self) -> LoadState {
        self.state().load
    }

    pub fn is_loading(&self) -> bool {
        self.load_state() == LoadState::Loading
    }

    /// Drain pending notifications. A drained notification is dismissed.
    pub fn take_notifications(&self) -> Vec<Notification> {
        self.state().notifications.take()
    }

    fn notify(&self, notification: Notification) {
        self.state().notifications.push(notification);
    }

    /// Fetch the full list and replace local state with it.
    pub async fn load(&self) -> Result<()> {
        self.state().load = LoadState::Loading;

        match self.service.list().await {
            Ok(tasks) => {
                log::info!("Loaded {} tasks", tasks.len());
                let mut state = self.state();
                state.tasks.replace_all(tasks);
                state.load = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to fetch tasks: {}", e);
                let mut state = self.state();
                state.tasks.clear();
                state.load = LoadState::Failed;
                state
                    .notifications
                    .push(Notification::error("Unable to load tasks, please try again"));
                Err(e)
            }
        }
    }

    /// Validate and create a task, appending the stored version on success.
    pub async fn create(&self, candidate: NewTask) -> Result<Task> {
        if let Err(e) = candidate.validate() {
            log::warn!("Rejected new task: {}", e);
            self.notify(Notification::error("Please fill out all the fields"));
            return Err(e.into());
        }

        match self.service.create(&candidate).await {
            Ok(task) => {
                log::info!("Task created: {} ({})", task.id, task.title);
                let mut state = self.state();
                state.tasks.append(task.clone());
                state.notifications.push(Notification::info(
                    "Task added",
                    format!("\"{}\" has been added to the list", candidate.title),
                ));
                Ok(task)
            }
            Err(e) => {
                log::error!("Failed to create task: {}", e);
                self.notify(Notification::error(
                    "Unable to add new task, please try again",
                ));
                Err(e)
            }
        }
    }

    /// Set the completion flag; the service's returned task replaces the
    /// local entry. Ids not held locally still reach the service.
    pub async fn set_completed(&self, id: TaskId, completed: bool) -> Result<Task> {
        match self.service.update_status(id, completed).await {
            Ok(task) => {
                let label = if completed { "completed" } else { "pending" };
                log::info!("Task {} marked as {}", id, label);
                let mut state = self.state();
                // Stored under the requested id so ids stay unique.
                let mut replacement = task.clone();
                replacement.id = id;
                if !state.tasks.replace(replacement) {
                    log::debug!("Task {} not held locally, nothing to replace", id);
                }
                state.notifications.push(Notification::info(
                    "Task Updated",
                    format!("\"{}\" has been marked as {}", task.title, label),
                ));
                Ok(task)
            }
            Err(e) => {
                log::error!("Failed to update task {}: {}", id, e);
                self.notify(Notification::error(
                    "Unable to update the task, please try again",
                ));
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: TaskId) -> Result<()> {
        match self.service.delete(id).await {
            Ok(()) => {
                let mut state = self.state();
                if state.tasks.remove(id).is_some() {
                    log::info!("Task {} deleted", id);
                } else {
                    log::debug!("Task {} deleted remotely, not held locally", id);
                }
                state
                    .notifications
                    .push(Notification::info("Task Deleted", "Task has been deleted"));
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to delete task {}: {}", id, e);
                self.notify(Notification::error(
                    "Unable to delete the task, please try again",
                ));
                Err(e)
            }
        }
    }
}
