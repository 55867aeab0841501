//! Access to the remote task service.

pub mod rest;

use std::future::Future;

use crate::core::task::{NewTask, Task, TaskId};
use crate::error::Result;

pub use rest::RestTaskService;

/// The four calls the list controller depends on.
///
/// Any transport failure or non-success status is an error; callers do not
/// distinguish status codes.
pub trait TaskService: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Task>>> + Send;

    /// Returns the stored task, with its service-assigned id.
    fn create(&self, task: &NewTask) -> impl Future<Output = Result<Task>> + Send;

    /// Returns the service's representation of the task after the change.
    fn update_status(
        &self,
        id: TaskId,
        completed: bool,
    ) -> impl Future<Output = Result<Task>> + Send;

    fn delete(&self, id: TaskId) -> impl Future<Output = Result<()>> + Send;
}
