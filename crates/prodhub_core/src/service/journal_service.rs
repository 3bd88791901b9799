//! Journal use-cases.

use crate::clock::Clock;
use crate::model::journal::{JournalEntry, NewJournalEntry};
use crate::repo::journal_repo::JournalRepository;
use crate::service::{non_blank, ServiceError, ServiceResult};

pub struct JournalService<'c, R: JournalRepository> {
    repo: R,
    clock: &'c dyn Clock,
}

impl<'c, R: JournalRepository> JournalService<'c, R> {
    pub fn new(repo: R, clock: &'c dyn Clock) -> Self {
        Self { repo, clock }
    }

    /// Owner's entries, newest first.
    pub fn entries(&self, owner_id: &str) -> ServiceResult<Vec<JournalEntry>> {
        let mut entries = self.repo.list_by_owner(owner_id)?;
        entries.sort_by(|left, right| right.date.cmp(&left.date));
        Ok(entries)
    }

    /// Writes a new entry dated now. Content is stored as typed.
    pub fn write(&self, owner_id: &str, content: &str) -> ServiceResult<JournalEntry> {
        non_blank(content, "journal entry cannot be blank")?;
        let entry = NewJournalEntry::new(owner_id, self.clock.now(), content);
        Ok(self.repo.create(&entry)?)
    }

    /// Replaces the content of one of the owner's entries; the date is kept.
    pub fn edit(&self, owner_id: &str, id: &str, content: &str) -> ServiceResult<JournalEntry> {
        non_blank(content, "journal entry cannot be blank")?;
        let mut entry = self
            .repo
            .list_by_owner(owner_id)?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
        entry.content = content.to_string();
        Ok(self.repo.update(&entry)?)
    }

    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.repo.delete(id)?)
    }
}
