//! Wiring of repositories and services over one store.
//!
//! # Responsibility
//! - Build every service against a single key-value store, read policy and
//!   clock so frontends do not repeat the plumbing.

use crate::clock::Clock;
use crate::repo::event_repo::KvEventRepository;
use crate::repo::gallery_repo::KvGalleryRepository;
use crate::repo::journal_repo::KvJournalRepository;
use crate::repo::todo_repo::KvTodoRepository;
use crate::repo::user_repo::KvUserRepository;
use crate::service::auth_service::AuthService;
use crate::service::calendar_service::CalendarService;
use crate::service::gallery_service::GalleryService;
use crate::service::journal_service::JournalService;
use crate::service::quote_service::DailyQuoteService;
use crate::service::todo_service::TodoService;
use crate::session::Session;
use crate::store::{KeyValueStore, ReadPolicy, StoreAdapter};

pub struct ProductivityHub<'s, S: KeyValueStore + ?Sized> {
    adapter: StoreAdapter<'s, S>,
    clock: &'s dyn Clock,
}

impl<'s, S: KeyValueStore + ?Sized> ProductivityHub<'s, S> {
    pub fn new(store: &'s S, policy: ReadPolicy, clock: &'s dyn Clock) -> Self {
        Self {
            adapter: StoreAdapter::with_policy(store, policy),
            clock,
        }
    }

    pub fn adapter(&self) -> StoreAdapter<'s, S> {
        self.adapter
    }

    pub fn session(&self) -> Session<'s, S> {
        Session::new(self.adapter)
    }

    pub fn users(&self) -> KvUserRepository<'s, S> {
        KvUserRepository::new(self.adapter)
    }

    pub fn auth(&self) -> AuthService<'s, KvUserRepository<'s, S>, S> {
        AuthService::new(self.users(), self.session())
    }

    pub fn todos(&self) -> TodoService<KvTodoRepository<'s, S>> {
        TodoService::new(KvTodoRepository::new(self.adapter, self.clock))
    }

    pub fn calendar(&self) -> CalendarService<KvEventRepository<'s, S>> {
        CalendarService::new(KvEventRepository::new(self.adapter))
    }

    pub fn journal(&self) -> JournalService<'s, KvJournalRepository<'s, S>> {
        JournalService::new(KvJournalRepository::new(self.adapter), self.clock)
    }

    pub fn gallery(&self) -> GalleryService<KvGalleryRepository<'s, S>> {
        GalleryService::new(KvGalleryRepository::new(self.adapter, self.clock))
    }

    pub fn quotes(&self) -> DailyQuoteService<'s, S> {
        DailyQuoteService::new(self.adapter, self.clock)
    }
}
