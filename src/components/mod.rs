pub mod task_row;
