//! Domain model for tasks, their comments, and their attachments.

mod attachment;
mod comment;
mod ids;
mod task;

pub use attachment::{Attachment, FileMetadata};
pub use comment::Comment;
pub use ids::{AttachmentId, CommentId, TaskId};
pub use task::{NewTask, PersistedTaskData, Task, TaskPriority, TaskStatus, TaskUpdate};
