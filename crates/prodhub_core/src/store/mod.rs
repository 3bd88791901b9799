//! Key-value persistence boundary.
//!
//! # Responsibility
//! - Define the raw `get/set/remove` capability every backend provides.
//! - Layer typed JSON collections and scalar values on top of it.
//!
//! # Invariants
//! - Values are UTF-8 JSON text; one key holds one whole collection.
//! - A missing key reads as an empty collection / absent value.
//! - Malformed values are handled per [`ReadPolicy`], never by panicking.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod adapter;
pub mod keys;
mod memory;
mod sqlite;

pub use adapter::StoreAdapter;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by key-value backends and the JSON adapter.
#[derive(Debug)]
pub enum StoreError {
    /// Backend transport failure.
    Db(DbError),
    /// Stored value failed to decode and the read policy is strict.
    Malformed {
        key: String,
        source: serde_json::Error,
    },
    /// Value could not be encoded for writing.
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Malformed { key, source } => {
                write!(f, "malformed stored value under `{key}`: {source}")
            }
            Self::Encode { key, source } => {
                write!(f, "failed to encode value for `{key}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Malformed { source, .. } | Self::Encode { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// How the adapter treats stored values that fail to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Log a warning and read as empty. The next write replaces the value.
    #[default]
    Lenient,
    /// Surface `StoreError::Malformed` to the caller.
    Strict,
}

/// Raw string key-value capability.
///
/// Implementations are synchronous and single-threaded; callers perform
/// whole-value read-modify-write without locking.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
