//! Calendar event repository contract and key-value implementation.
//!
//! The one-event-per-day rule lives in `CalendarService`; this layer stores
//! whatever it is given.

use crate::model::event::{CalendarEvent, NewCalendarEvent};
use crate::model::new_record_id;
use crate::repo::{RecordCollection, RepoResult};
use crate::store::{keys, KeyValueStore, StoreAdapter};

pub trait EventRepository {
    fn list_by_owner(&self, owner_id: &str) -> RepoResult<Vec<CalendarEvent>>;
    fn create(&self, event: &NewCalendarEvent) -> RepoResult<CalendarEvent>;
    /// Replaces by id; returns the input unchanged whether or not it existed.
    fn update(&self, event: &CalendarEvent) -> RepoResult<CalendarEvent>;
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

pub struct KvEventRepository<'s, S: KeyValueStore + ?Sized> {
    records: RecordCollection<'s, S, CalendarEvent>,
}

impl<'s, S: KeyValueStore + ?Sized> KvEventRepository<'s, S> {
    pub fn new(adapter: StoreAdapter<'s, S>) -> Self {
        Self {
            records: RecordCollection::new(adapter, keys::EVENTS),
        }
    }
}

impl<S: KeyValueStore + ?Sized> EventRepository for KvEventRepository<'_, S> {
    fn list_by_owner(&self, owner_id: &str) -> RepoResult<Vec<CalendarEvent>> {
        self.records.list_by_owner(owner_id)
    }

    fn create(&self, event: &NewCalendarEvent) -> RepoResult<CalendarEvent> {
        self.records.insert(CalendarEvent {
            id: new_record_id(),
            title: event.title.clone(),
            date: event.date,
            user_id: event.user_id.clone(),
        })
    }

    fn update(&self, event: &CalendarEvent) -> RepoResult<CalendarEvent> {
        self.records.replace(event)?;
        Ok(event.clone())
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        self.records.remove(id)
    }
}
