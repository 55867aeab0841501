pub mod notification;
pub mod task;
pub mod task_list;
