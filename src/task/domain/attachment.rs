//! File attachment metadata for tasks.

use super::{AttachmentId, TaskId};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Descriptive metadata for an attached file.
///
/// File content lives outside the tracker core; only the metadata needed
/// for listings and counts is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Original file name.
    pub file_name: String,
    /// Content type reported at upload time.
    pub file_type: String,
    /// Location of the stored file.
    pub file_url: String,
    /// Size in bytes, when known.
    pub file_size: Option<u64>,
}

/// A file attached to a task. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    id: AttachmentId,
    task_id: TaskId,
    uploaded_by: UserId,
    file: FileMetadata,
    created_at: DateTime<Utc>,
}

impl Attachment {
    /// Creates an attachment record for a task.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        uploaded_by: UserId,
        file: FileMetadata,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: AttachmentId::new(),
            task_id,
            uploaded_by,
            file,
            created_at: clock.utc(),
        }
    }

    /// Returns the attachment identifier.
    #[must_use]
    pub const fn id(&self) -> AttachmentId {
        self.id
    }

    /// Returns the task this attachment belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the uploading user.
    #[must_use]
    pub const fn uploaded_by(&self) -> UserId {
        self.uploaded_by
    }

    /// Returns the file metadata.
    #[must_use]
    pub const fn file(&self) -> &FileMetadata {
        &self.file
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
