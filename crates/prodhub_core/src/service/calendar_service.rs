//! Calendar use-cases.
//!
//! # Invariants
//! - At most one event per owner per day is created through this service:
//!   saving on a day that already has an event retitles it instead.
//! - Listings are sorted by date ascending; same-day events keep storage order.

use crate::model::event::{CalendarEvent, NewCalendarEvent};
use crate::repo::event_repo::EventRepository;
use crate::service::{non_blank, ServiceError, ServiceResult};
use chrono::{Datelike, NaiveDate};

pub struct CalendarService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> CalendarService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// First stored event for `owner_id` on `day`.
    pub fn event_on(&self, owner_id: &str, day: NaiveDate) -> ServiceResult<Option<CalendarEvent>> {
        Ok(self
            .repo
            .list_by_owner(owner_id)?
            .into_iter()
            .find(|event| event.date == day))
    }

    /// Creates the day's event, or retitles the existing one.
    pub fn save_for_day(
        &self,
        owner_id: &str,
        day: NaiveDate,
        title: &str,
    ) -> ServiceResult<CalendarEvent> {
        let title = non_blank(title, "event title cannot be blank")?;

        match self.event_on(owner_id, day)? {
            Some(mut existing) => {
                existing.title = title.to_string();
                Ok(self.repo.update(&existing)?)
            }
            None => Ok(self
                .repo
                .create(&NewCalendarEvent::new(owner_id, day, title))?),
        }
    }

    /// Owner's events within one calendar month.
    pub fn events_in_month(
        &self,
        owner_id: &str,
        year: i32,
        month: u32,
    ) -> ServiceResult<Vec<CalendarEvent>> {
        if !(1..=12).contains(&month) {
            return Err(ServiceError::InvalidInput("month must be within 1..=12"));
        }

        let mut events = self.repo.list_by_owner(owner_id)?;
        events.retain(|event| event.date.year() == year && event.date.month() == month);
        events.sort_by_key(|event| event.date);
        Ok(events)
    }

    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.repo.delete(id)?)
    }
}
