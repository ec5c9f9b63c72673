//! Application services for the task context.

mod workflow;

pub use workflow::{CreateTaskRequest, TaskWorkflowService, UpdateTaskRequest};
