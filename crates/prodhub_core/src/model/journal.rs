//! Journal entry record.

use super::{require_id, require_owner, OwnedRecord, Record, RecordId, RecordValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-text journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: RecordId,
    pub content: String,
    pub date: DateTime<Utc>,
    pub user_id: RecordId,
}

/// Create input; `date` is chosen by the caller, the id by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub content: String,
    pub date: DateTime<Utc>,
    pub user_id: RecordId,
}

impl NewJournalEntry {
    pub fn new(
        user_id: impl Into<RecordId>,
        date: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            date,
            user_id: user_id.into(),
        }
    }
}

impl Record for JournalEntry {
    fn id(&self) -> &str {
        &self.id
    }

    // Content may be empty at this layer; the journal service rejects blanks.
    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(&self.id)?;
        require_owner(&self.id, &self.user_id)
    }
}

impl OwnedRecord for JournalEntry {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}
