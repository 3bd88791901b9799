//! Journal repository contract and key-value implementation.

use crate::model::journal::{JournalEntry, NewJournalEntry};
use crate::model::new_record_id;
use crate::repo::{RecordCollection, RepoResult};
use crate::store::{keys, KeyValueStore, StoreAdapter};

pub trait JournalRepository {
    /// Entries in storage order; callers sort.
    fn list_by_owner(&self, owner_id: &str) -> RepoResult<Vec<JournalEntry>>;
    fn create(&self, entry: &NewJournalEntry) -> RepoResult<JournalEntry>;
    fn update(&self, entry: &JournalEntry) -> RepoResult<JournalEntry>;
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

pub struct KvJournalRepository<'s, S: KeyValueStore + ?Sized> {
    records: RecordCollection<'s, S, JournalEntry>,
}

impl<'s, S: KeyValueStore + ?Sized> KvJournalRepository<'s, S> {
    pub fn new(adapter: StoreAdapter<'s, S>) -> Self {
        Self {
            records: RecordCollection::new(adapter, keys::JOURNAL),
        }
    }
}

impl<S: KeyValueStore + ?Sized> JournalRepository for KvJournalRepository<'_, S> {
    fn list_by_owner(&self, owner_id: &str) -> RepoResult<Vec<JournalEntry>> {
        self.records.list_by_owner(owner_id)
    }

    fn create(&self, entry: &NewJournalEntry) -> RepoResult<JournalEntry> {
        self.records.insert(JournalEntry {
            id: new_record_id(),
            content: entry.content.clone(),
            date: entry.date,
            user_id: entry.user_id.clone(),
        })
    }

    fn update(&self, entry: &JournalEntry) -> RepoResult<JournalEntry> {
        self.records.replace(entry)?;
        Ok(entry.clone())
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        self.records.remove(id)
    }
}
