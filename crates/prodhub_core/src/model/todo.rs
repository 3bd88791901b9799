//! Todo record.

use super::{
    require_id, require_owner, require_text, OwnedRecord, Record, RecordId, RecordValidationError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: RecordId,
    pub title: String,
    pub completed: bool,
    /// Assigned by the repository on create; never rewritten.
    pub created_at: DateTime<Utc>,
    pub user_id: RecordId,
}

/// Create input; id and `created_at` are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub user_id: RecordId,
}

impl NewTodo {
    /// New open todo for `user_id`.
    pub fn new(user_id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            user_id: user_id.into(),
        }
    }
}

impl Record for Todo {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(&self.id)?;
        require_owner(&self.id, &self.user_id)?;
        require_text(&self.id, "title", &self.title)
    }
}

impl OwnedRecord for Todo {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}
