//! Typed JSON adapter over a raw key-value store.
//!
//! # Responsibility
//! - Encode/decode whole collections and scalar values as JSON text.
//! - Apply the configured [`ReadPolicy`] to undecodable values.
//!
//! # Invariants
//! - Reads never mutate storage, including in lenient mode.
//! - A collection is decoded record by record. Under the lenient policy a
//!   record that does not fit the typed schema is skipped on typed reads, and
//!   entry-level writes carry it through unchanged.
//! - Log lines carry keys, sizes and positions only, never stored content.

use crate::store::{KeyValueStore, ReadPolicy, StoreError, StoreResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub struct StoreAdapter<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
    policy: ReadPolicy,
}

impl<S: KeyValueStore + ?Sized> Clone for StoreAdapter<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: KeyValueStore + ?Sized> Copy for StoreAdapter<'_, S> {}

impl<'s, S: KeyValueStore + ?Sized> StoreAdapter<'s, S> {
    /// Adapter with the default lenient read policy.
    pub fn new(store: &'s S) -> Self {
        Self::with_policy(store, ReadPolicy::default())
    }

    pub fn with_policy(store: &'s S, policy: ReadPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> ReadPolicy {
        self.policy
    }

    /// Underlying raw store.
    pub fn raw(&self) -> &'s S {
        self.store
    }

    /// Reads a whole collection; a missing key yields an empty vector.
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        let entries = self.read_value::<Vec<Value>>(key)?.unwrap_or_default();
        let mut items = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if let Some(item) = self.decode_entry(key, index, entry)? {
                items.push(item);
            }
        }
        Ok(items)
    }

    /// Reads a collection as raw JSON entries for a read-modify-write.
    ///
    /// Every entry is checked against `T`: under the strict policy a misfit
    /// is an error, under the lenient policy it is kept as-is so writing the
    /// entries back does not drop it.
    pub fn read_entries<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<Value>> {
        let entries = self.read_value::<Vec<Value>>(key)?.unwrap_or_default();
        for (index, entry) in entries.iter().enumerate() {
            self.decode_entry::<T>(key, index, entry)?;
        }
        Ok(entries)
    }

    /// Encodes one record as a collection entry.
    pub fn encode_entry<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<Value> {
        serde_json::to_value(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })
    }

    /// Replaces a whole collection.
    pub fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        self.write_value(key, items)?;
        debug!(
            "event=collection_write module=store status=ok key={key} count={}",
            items.len()
        );
        Ok(())
    }

    /// Reads one JSON value; `None` when the key is absent (or malformed
    /// under [`ReadPolicy::Lenient`]).
    pub fn read_value<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(source) => match self.policy {
                ReadPolicy::Lenient => {
                    warn!(
                        "event=store_read module=store status=malformed policy=lenient key={key} bytes={} line={} column={}",
                        raw.len(),
                        source.line(),
                        source.column()
                    );
                    Ok(None)
                }
                ReadPolicy::Strict => Err(StoreError::Malformed {
                    key: key.to_string(),
                    source,
                }),
            },
        }
    }

    pub fn write_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let encoded = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &encoded)
    }

    pub fn remove(&self, key: &str) -> StoreResult<()> {
        self.store.remove(key)
    }

    fn decode_entry<T: DeserializeOwned>(
        &self,
        key: &str,
        index: usize,
        entry: &Value,
    ) -> StoreResult<Option<T>> {
        match T::deserialize(entry) {
            Ok(item) => Ok(Some(item)),
            Err(source) => match self.policy {
                ReadPolicy::Lenient => {
                    warn!(
                        "event=store_read module=store status=malformed_entry policy=lenient key={key} index={index}"
                    );
                    Ok(None)
                }
                ReadPolicy::Strict => Err(StoreError::Malformed {
                    key: key.to_string(),
                    source,
                }),
            },
        }
    }
}
