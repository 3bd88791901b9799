//! Gallery image record.
//!
//! `url` is an external reference; it is neither fetched nor validated.

use super::{
    require_id, require_owner, require_text, OwnedRecord, Record, RecordId, RecordValidationError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: RecordId,
    pub title: String,
    pub url: String,
    pub upload_date: DateTime<Utc>,
    pub user_id: RecordId,
}

/// Create input; id and `upload_date` are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGalleryImage {
    pub title: String,
    pub url: String,
    pub user_id: RecordId,
}

impl NewGalleryImage {
    pub fn new(
        user_id: impl Into<RecordId>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            user_id: user_id.into(),
        }
    }
}

impl Record for GalleryImage {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(&self.id)?;
        require_owner(&self.id, &self.user_id)?;
        require_text(&self.id, "title", &self.title)
    }
}

impl OwnedRecord for GalleryImage {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}
