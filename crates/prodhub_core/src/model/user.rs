//! User account record.
//!
//! Passwords are stored in clear text to stay compatible with the existing
//! stored layout. Nothing in this crate logs them.

use super::{new_record_id, require_id, require_text, Record, RecordId, RecordValidationError};
use serde::{Deserialize, Serialize};

/// Registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Signup input; the id is assigned on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub(crate) fn into_user(self) -> User {
        User {
            id: new_record_id(),
            username: self.username,
            email: self.email,
            password: self.password,
        }
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(&self.id)?;
        require_text(&self.id, "email", &self.email)
    }
}
