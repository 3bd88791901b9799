//! Entity repositories over the key-value store.
//!
//! # Responsibility
//! - Expose per-entity list/create/update/delete contracts.
//! - Keep whole-collection JSON handling out of services.
//!
//! # Invariants
//! - Write paths call `Record::validate()` before touching storage.
//! - Every mutation is a whole-collection read-modify-write; interleaved
//!   writers lose updates.
//! - Update/delete of an unknown id is a no-op, reported through the return
//!   value and a debug log line rather than an error.
//! - Mutations rewrite the stored entries, so records that do not decode
//!   (lenient policy only) survive creates, updates and deletes of others.

use crate::model::{OwnedRecord, Record, RecordValidationError};
use crate::store::{KeyValueStore, StoreAdapter, StoreError};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub mod event_repo;
pub mod gallery_repo;
pub mod journal_repo;
pub mod todo_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(RecordValidationError),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One keyed collection of records with shared CRUD mechanics.
pub(crate) struct RecordCollection<'s, S: KeyValueStore + ?Sized, T> {
    adapter: StoreAdapter<'s, S>,
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<'s, S, T> RecordCollection<'s, S, T>
where
    S: KeyValueStore + ?Sized,
    T: Record + Clone + Serialize + DeserializeOwned,
{
    pub(crate) fn new(adapter: StoreAdapter<'s, S>, key: &'static str) -> Self {
        Self {
            adapter,
            key,
            _record: PhantomData,
        }
    }

    pub(crate) fn adapter(&self) -> StoreAdapter<'s, S> {
        self.adapter
    }

    pub(crate) fn all(&self) -> RepoResult<Vec<T>> {
        Ok(self.adapter.read_collection(self.key)?)
    }

    pub(crate) fn insert(&self, record: T) -> RepoResult<T> {
        record.validate()?;

        let mut entries = self.adapter.read_entries::<T>(self.key)?;
        entries.push(self.adapter.encode_entry(self.key, &record)?);
        self.adapter.write_collection(self.key, &entries)?;

        debug!(
            "event=record_create module=repo status=ok key={} id={}",
            self.key,
            record.id()
        );
        Ok(record)
    }

    /// Replaces the record with the same id. Returns `false` when absent.
    pub(crate) fn replace(&self, record: &T) -> RepoResult<bool> {
        record.validate()?;

        let mut entries = self.adapter.read_entries::<T>(self.key)?;
        let Some(slot) = entries
            .iter_mut()
            .find(|entry| entry_id(entry) == Some(record.id()))
        else {
            debug!(
                "event=record_update module=repo status=not_found key={} id={}",
                self.key,
                record.id()
            );
            return Ok(false);
        };
        *slot = self.adapter.encode_entry(self.key, record)?;
        self.adapter.write_collection(self.key, &entries)?;

        debug!(
            "event=record_update module=repo status=ok key={} id={}",
            self.key,
            record.id()
        );
        Ok(true)
    }

    /// Drops the record with `id`. Returns `false` (and skips the write) when
    /// absent.
    pub(crate) fn remove(&self, id: &str) -> RepoResult<bool> {
        let mut entries = self.adapter.read_entries::<T>(self.key)?;
        let before = entries.len();
        entries.retain(|entry| entry_id(entry) != Some(id));

        if entries.len() == before {
            debug!(
                "event=record_delete module=repo status=not_found key={} id={id}",
                self.key
            );
            return Ok(false);
        }
        self.adapter.write_collection(self.key, &entries)?;

        debug!(
            "event=record_delete module=repo status=ok key={} id={id}",
            self.key
        );
        Ok(true)
    }
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

impl<S, T> RecordCollection<'_, S, T>
where
    S: KeyValueStore + ?Sized,
    T: OwnedRecord + Clone + Serialize + DeserializeOwned,
{
    /// Full scan filtered on `userId`; storage order is preserved.
    pub(crate) fn list_by_owner(&self, owner_id: &str) -> RepoResult<Vec<T>> {
        let mut records = self.all()?;
        records.retain(|record| record.owner_id() == owner_id);
        Ok(records)
    }
}
