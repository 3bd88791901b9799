//! User repository contract and key-value implementation.
//!
//! # Invariants
//! - Users are append-only; there is no update or delete path.
//! - Duplicate emails are not detected.
//! - Emails and passwords never appear in log lines.

use crate::model::user::{NewUser, User};
use crate::repo::{RecordCollection, RepoResult};
use crate::session::Session;
use crate::store::{keys, KeyValueStore, StoreAdapter};
use log::info;

pub trait UserRepository {
    fn list(&self) -> RepoResult<Vec<User>>;
    fn create(&self, user: &NewUser) -> RepoResult<User>;
    /// First user whose email matches exactly.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;
    /// Exact match on both email and password. On success the session pointer
    /// is set to the returned user.
    fn authenticate(&self, email: &str, password: &str) -> RepoResult<Option<User>>;
}

pub struct KvUserRepository<'s, S: KeyValueStore + ?Sized> {
    records: RecordCollection<'s, S, User>,
}

impl<'s, S: KeyValueStore + ?Sized> KvUserRepository<'s, S> {
    pub fn new(adapter: StoreAdapter<'s, S>) -> Self {
        Self {
            records: RecordCollection::new(adapter, keys::USERS),
        }
    }

    fn session(&self) -> Session<'s, S> {
        Session::new(self.records.adapter())
    }
}

impl<S: KeyValueStore + ?Sized> UserRepository for KvUserRepository<'_, S> {
    fn list(&self) -> RepoResult<Vec<User>> {
        self.records.all()
    }

    fn create(&self, user: &NewUser) -> RepoResult<User> {
        self.records.insert(user.clone().into_user())
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .records
            .all()?
            .into_iter()
            .find(|user| user.email == email))
    }

    fn authenticate(&self, email: &str, password: &str) -> RepoResult<Option<User>> {
        let matched = self
            .records
            .all()?
            .into_iter()
            .find(|user| user.email == email && user.password == password);

        match matched {
            Some(user) => {
                self.session().set_current(Some(&user))?;
                info!(
                    "event=user_authenticate module=repo status=ok user_id={}",
                    user.id
                );
                Ok(Some(user))
            }
            None => {
                info!("event=user_authenticate module=repo status=rejected");
                Ok(None)
            }
        }
    }
}
