use chrono::{Duration, NaiveDate, TimeZone, Utc};
use prodhub_core::{
    CalendarService, EventRepository, FixedClock, GalleryRepository, GalleryService,
    JournalRepository, JournalService, KvEventRepository, KvGalleryRepository,
    KvJournalRepository, MemoryStore, NewCalendarEvent, NewGalleryImage, NewJournalEntry,
    ServiceError, StoreAdapter,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn event_repository_crud() {
    let store = MemoryStore::new();
    let repo = KvEventRepository::new(StoreAdapter::new(&store));

    let mut event = repo
        .create(&NewCalendarEvent::new("u1", day(2024, 7, 4), "Picnic"))
        .unwrap();
    assert_eq!(repo.list_by_owner("u1").unwrap(), vec![event.clone()]);

    event.title = "Picnic at noon".to_string();
    repo.update(&event).unwrap();
    assert_eq!(repo.list_by_owner("u1").unwrap()[0].title, "Picnic at noon");

    assert!(!repo.delete("missing").unwrap());
    assert!(repo.delete(&event.id).unwrap());
    assert!(repo.list_by_owner("u1").unwrap().is_empty());
}

#[test]
fn repository_allows_two_events_on_one_day() {
    let store = MemoryStore::new();
    let repo = KvEventRepository::new(StoreAdapter::new(&store));

    repo.create(&NewCalendarEvent::new("u1", day(2024, 7, 4), "a"))
        .unwrap();
    repo.create(&NewCalendarEvent::new("u1", day(2024, 7, 4), "b"))
        .unwrap();
    assert_eq!(repo.list_by_owner("u1").unwrap().len(), 2);
}

#[test]
fn calendar_save_for_day_creates_then_retitles() {
    let store = MemoryStore::new();
    let service = CalendarService::new(KvEventRepository::new(StoreAdapter::new(&store)));
    let target = day(2024, 2, 29);

    assert!(service.event_on("u1", target).unwrap().is_none());

    let created = service.save_for_day("u1", target, "Leap party").unwrap();
    let updated = service.save_for_day("u1", target, " Leap brunch ").unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Leap brunch");
    let events = service.events_in_month("u1", 2024, 2).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(service.event_on("u1", target).unwrap(), Some(updated));

    // Same day for another owner is independent.
    service.save_for_day("u2", target, "Other").unwrap();
    assert_eq!(service.events_in_month("u1", 2024, 2).unwrap().len(), 1);
}

#[test]
fn calendar_month_listing_is_filtered_and_sorted() {
    let store = MemoryStore::new();
    let service = CalendarService::new(KvEventRepository::new(StoreAdapter::new(&store)));

    service.save_for_day("u1", day(2024, 3, 20), "late").unwrap();
    service.save_for_day("u1", day(2024, 3, 2), "early").unwrap();
    service.save_for_day("u1", day(2024, 4, 1), "next month").unwrap();
    service.save_for_day("u1", day(2023, 3, 5), "last year").unwrap();

    let titles = service
        .events_in_month("u1", 2024, 3)
        .unwrap()
        .into_iter()
        .map(|event| event.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["early", "late"]);

    assert!(matches!(
        service.events_in_month("u1", 2024, 13),
        Err(ServiceError::InvalidInput(_))
    ));
    assert!(matches!(
        service.save_for_day("u1", day(2024, 3, 3), "  "),
        Err(ServiceError::InvalidInput(_))
    ));
}

#[test]
fn journal_entries_are_listed_newest_first() {
    let store = MemoryStore::new();
    let repo = KvJournalRepository::new(StoreAdapter::new(&store));
    let base = Utc.with_ymd_and_hms(2024, 1, 10, 21, 0, 0).unwrap();

    for (offset, text) in [(0, "middle"), (2, "newest"), (-3, "oldest")] {
        repo.create(&NewJournalEntry::new(
            "u1",
            base + Duration::days(offset),
            text,
        ))
        .unwrap();
    }

    let clock = FixedClock::new(base);
    let service = JournalService::new(KvJournalRepository::new(StoreAdapter::new(&store)), &clock);
    let contents = service
        .entries("u1")
        .unwrap()
        .into_iter()
        .map(|entry| entry.content)
        .collect::<Vec<_>>();
    assert_eq!(contents, vec!["newest", "middle", "oldest"]);
}

#[test]
fn journal_write_edit_delete() {
    let store = MemoryStore::new();
    let now = Utc.with_ymd_and_hms(2024, 5, 5, 7, 45, 0).unwrap();
    let clock = FixedClock::new(now);
    let service = JournalService::new(KvJournalRepository::new(StoreAdapter::new(&store)), &clock);

    let entry = service.write("u1", "Slept well.\n").unwrap();
    assert_eq!(entry.date, now);
    assert_eq!(entry.content, "Slept well.\n");

    let edited = service.edit("u1", &entry.id, "Slept very well.").unwrap();
    assert_eq!(edited.date, now);
    assert_eq!(service.entries("u1").unwrap(), vec![edited]);

    assert!(matches!(
        service.write("u1", " \n "),
        Err(ServiceError::InvalidInput(_))
    ));
    assert!(matches!(
        service.edit("u2", &entry.id, "hijack"),
        Err(ServiceError::NotFound(_))
    ));

    assert!(service.delete(&entry.id).unwrap());
    assert!(service.entries("u1").unwrap().is_empty());
}

#[test]
fn gallery_images_are_stamped_and_listed_newest_first() {
    let store = MemoryStore::new();
    let morning = FixedClock::new(Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap());
    let evening = FixedClock::new(Utc.with_ymd_and_hms(2024, 8, 1, 19, 0, 0).unwrap());

    let first = KvGalleryRepository::new(StoreAdapter::new(&store), &morning)
        .create(&NewGalleryImage::new("u1", "Sunrise", "https://img.example/sunrise.jpg"))
        .unwrap();
    assert_eq!(first.upload_date, Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap());

    let service = GalleryService::new(KvGalleryRepository::new(StoreAdapter::new(&store), &evening));
    let second = service
        .add("u1", "Sunset", " https://img.example/sunset.jpg ")
        .unwrap();
    assert_eq!(second.url, "https://img.example/sunset.jpg");

    let titles = service
        .images("u1")
        .unwrap()
        .into_iter()
        .map(|image| image.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Sunset", "Sunrise"]);

    assert!(service.add("u1", "", "https://x").is_err());
    assert!(service.delete(&first.id).unwrap());
    assert!(!service.delete(&first.id).unwrap());
    assert_eq!(service.images("u1").unwrap(), vec![second]);
}
