//! Typed records persisted by the store.
//!
//! # Responsibility
//! - Define one explicit struct per persisted entity shape.
//! - Validate records at the write boundary.
//!
//! # Invariants
//! - Every record is identified by a non-empty opaque string id.
//! - Owned records carry a non-empty `userId`; it is a filter tag only.
//! - Field names serialize as camelCase to match the stored JSON layout.

pub mod event;
pub mod gallery;
pub mod journal;
pub mod quote;
pub mod todo;
pub mod user;

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque record identifier. Generated ids are UUID v4 strings, but any
/// non-empty string read back from storage is accepted.
pub type RecordId = String;

/// Generates a fresh random record id.
///
/// No collision detection is performed.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// Validation failure for a record about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// `id` is empty or whitespace.
    EmptyId,
    /// `userId` is empty or whitespace.
    MissingOwner { id: RecordId },
    /// A required text field is blank.
    BlankField {
        id: RecordId,
        field: &'static str,
    },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "record id cannot be empty"),
            Self::MissingOwner { id } => write!(f, "record {id} has no owner"),
            Self::BlankField { id, field } => write!(f, "record {id} has blank `{field}`"),
        }
    }
}

impl Error for RecordValidationError {}

/// Common behavior of every persisted record.
pub trait Record {
    /// Stable record id.
    fn id(&self) -> &str;

    /// Checks write-boundary invariants.
    fn validate(&self) -> Result<(), RecordValidationError>;
}

/// Record tagged with an owning user.
pub trait OwnedRecord: Record {
    fn owner_id(&self) -> &str;
}

pub(crate) fn require_id(id: &str) -> Result<(), RecordValidationError> {
    if id.trim().is_empty() {
        return Err(RecordValidationError::EmptyId);
    }
    Ok(())
}

pub(crate) fn require_owner(id: &str, owner_id: &str) -> Result<(), RecordValidationError> {
    if owner_id.trim().is_empty() {
        return Err(RecordValidationError::MissingOwner { id: id.to_string() });
    }
    Ok(())
}

pub(crate) fn require_text(
    id: &str,
    field: &'static str,
    value: &str,
) -> Result<(), RecordValidationError> {
    if value.trim().is_empty() {
        return Err(RecordValidationError::BlankField {
            id: id.to_string(),
            field,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{new_record_id, require_owner, require_text, RecordValidationError};
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_non_empty_and_distinct() {
        let ids = (0..64).map(|_| new_record_id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 64);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn blank_values_are_rejected() {
        assert_eq!(
            require_owner("r1", "  "),
            Err(RecordValidationError::MissingOwner {
                id: "r1".to_string()
            })
        );
        assert!(matches!(
            require_text("r1", "title", "\t"),
            Err(RecordValidationError::BlankField { field: "title", .. })
        ));
    }
}
