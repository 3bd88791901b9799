//! Use-case services.
//!
//! # Responsibility
//! - Turn UI intents (toggle a todo, save the day's event, log in) into
//!   repository calls.
//! - Own presentation-independent rules the repositories do not enforce:
//!   blank-input rejection, owner scoping of edits, read-path ordering.
//!
//! # Invariants
//! - Services never bypass repository validation.
//! - Services stay storage-agnostic; they depend on repository traits.

use crate::model::RecordId;
use crate::repo::RepoError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod auth_service;
pub mod calendar_service;
pub mod gallery_service;
pub mod journal_service;
pub mod quote_service;
pub mod todo_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error for record-editing use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Caller input rejected before reaching storage.
    InvalidInput(&'static str),
    /// No record with this id is visible to the acting owner.
    NotFound(RecordId),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Repo(RepoError::Store(value))
    }
}

/// Trims `value`, rejecting it when nothing is left.
pub(crate) fn non_blank<'a>(value: &'a str, reason: &'static str) -> ServiceResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput(reason));
    }
    Ok(trimmed)
}
