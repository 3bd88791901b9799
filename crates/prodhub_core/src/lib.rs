//! Core data layer for the productivity hub.
//! Records, key-value persistence, repositories, session and use-case
//! services live here; frontends only render and dispatch.

pub mod clock;
pub mod config;
pub mod db;
pub mod hub;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, CoreConfig};
pub use hub::ProductivityHub;
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::event::{CalendarEvent, NewCalendarEvent};
pub use model::gallery::{GalleryImage, NewGalleryImage};
pub use model::journal::{JournalEntry, NewJournalEntry};
pub use model::quote::Quote;
pub use model::todo::{NewTodo, Todo};
pub use model::user::{NewUser, User};
pub use model::{new_record_id, OwnedRecord, Record, RecordId, RecordValidationError};
pub use repo::event_repo::{EventRepository, KvEventRepository};
pub use repo::gallery_repo::{GalleryRepository, KvGalleryRepository};
pub use repo::journal_repo::{JournalRepository, KvJournalRepository};
pub use repo::todo_repo::{KvTodoRepository, TodoRepository};
pub use repo::user_repo::{KvUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::auth_service::{AuthError, AuthService};
pub use service::calendar_service::CalendarService;
pub use service::gallery_service::GalleryService;
pub use service::journal_service::JournalService;
pub use service::quote_service::DailyQuoteService;
pub use service::todo_service::{TodoFilter, TodoService};
pub use service::{ServiceError, ServiceResult};
pub use session::Session;
pub use store::{
    KeyValueStore, MemoryStore, ReadPolicy, SqliteStore, StoreAdapter, StoreError, StoreResult,
};

/// Minimal health-check API for frontend wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
