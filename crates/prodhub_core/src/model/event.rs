//! Calendar event record.
//!
//! # Invariants
//! - `date` is a calendar day; time of day is not modeled.
//! - Stored dates are written as `YYYY-MM-DD`. Full RFC 3339 timestamps are
//!   accepted on read and truncated to their day in the local time zone,
//!   since the browser build stored local midnight as a UTC instant.

use super::{
    require_id, require_owner, require_text, OwnedRecord, Record, RecordId, RecordValidationError,
};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One event pinned to a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: RecordId,
    pub title: String,
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
    pub user_id: RecordId,
}

/// Create input; the id is assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendarEvent {
    pub title: String,
    pub date: NaiveDate,
    pub user_id: RecordId,
}

impl NewCalendarEvent {
    pub fn new(user_id: impl Into<RecordId>, date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date,
            user_id: user_id.into(),
        }
    }
}

impl Record for CalendarEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(&self.id)?;
        require_owner(&self.id, &self.user_id)?;
        require_text(&self.id, "title", &self.title)
    }
}

impl OwnedRecord for CalendarEvent {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Parses `YYYY-MM-DD`, falling back to the local day of an RFC 3339
/// timestamp.
pub fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    parse_calendar_day_in(raw, &Local)
}

/// Like [`parse_calendar_day`], with timestamps resolved in `zone`.
pub fn parse_calendar_day_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|instant| instant.with_timezone(zone).date_naive())
    })
}

fn deserialize_calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_day(&raw).ok_or_else(|| D::Error::custom(format!("invalid calendar day `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::{parse_calendar_day, parse_calendar_day_in, CalendarEvent};
    use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};

    #[test]
    fn parses_plain_day_and_timestamp() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(parse_calendar_day("2024-05-01"), Some(day));
        assert_eq!(parse_calendar_day_in("2024-05-01T09:30:00.000Z", &Utc), Some(day));
        assert_eq!(parse_calendar_day("May 1st"), None);
    }

    #[test]
    fn timestamp_resolves_to_the_day_in_the_given_zone() {
        // Local midnight of May 1 at UTC+2, as the browser stored it.
        let stored = "2024-04-30T22:00:00.000Z";
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let west = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(
            parse_calendar_day_in(stored, &east),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert_eq!(
            parse_calendar_day_in(stored, &west),
            NaiveDate::from_ymd_opt(2024, 4, 30)
        );
        assert_eq!(
            parse_calendar_day_in("2024-05-01", &west),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn event_serializes_day_without_time() {
        let event = CalendarEvent {
            id: "e1".to_string(),
            title: "Dentist".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            user_id: "u1".to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["userId"], "u1");
    }

    #[test]
    fn event_reads_timestamp_dates_as_local_days() {
        let stamp = "2023-12-31T23:00:00.000Z";
        let raw = format!(r#"{{"id":"e1","title":"Trip","date":"{stamp}","userId":"u1"}}"#);
        let event: CalendarEvent = serde_json::from_str(&raw).unwrap();

        let expected = DateTime::parse_from_rfc3339(stamp)
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(event.date, expected);
    }
}
