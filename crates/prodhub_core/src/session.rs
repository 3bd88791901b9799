//! Current-user pointer.
//!
//! # Responsibility
//! - Hold zero or one logged-in user in the shared key-value namespace.
//!
//! # Invariants
//! - Clearing the session removes the key rather than storing `null`.
//! - No expiry, no token: the pointer lives until `logout`.

use crate::model::user::User;
use crate::store::{keys, KeyValueStore, StoreAdapter, StoreResult};
use log::info;

pub struct Session<'s, S: KeyValueStore + ?Sized> {
    adapter: StoreAdapter<'s, S>,
}

impl<'s, S: KeyValueStore + ?Sized> Session<'s, S> {
    pub fn new(adapter: StoreAdapter<'s, S>) -> Self {
        Self { adapter }
    }

    /// Returns the logged-in user, if any.
    pub fn current_user(&self) -> StoreResult<Option<User>> {
        self.adapter.read_value(keys::CURRENT_USER)
    }

    pub fn is_authenticated(&self) -> StoreResult<bool> {
        Ok(self.current_user()?.is_some())
    }

    /// Points the session at `user`, or clears it for `None`.
    pub fn set_current(&self, user: Option<&User>) -> StoreResult<()> {
        match user {
            Some(user) => {
                self.adapter.write_value(keys::CURRENT_USER, user)?;
                info!("event=session_set module=session status=ok user_id={}", user.id);
            }
            None => {
                self.adapter.remove(keys::CURRENT_USER)?;
                info!("event=session_clear module=session status=ok");
            }
        }
        Ok(())
    }

    pub fn logout(&self) -> StoreResult<()> {
        self.set_current(None)
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::model::user::User;
    use crate::store::{keys, KeyValueStore, MemoryStore, StoreAdapter};

    fn user() -> User {
        User {
            id: "u1".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn set_then_logout_clears_key() {
        let store = MemoryStore::new();
        let session = Session::new(StoreAdapter::new(&store));
        assert!(!session.is_authenticated().unwrap());

        session.set_current(Some(&user())).unwrap();
        assert_eq!(session.current_user().unwrap(), Some(user()));

        session.logout().unwrap();
        assert!(session.current_user().unwrap().is_none());
        assert!(store.get(keys::CURRENT_USER).unwrap().is_none());
    }

    #[test]
    fn malformed_pointer_reads_as_logged_out_when_lenient() {
        let store = MemoryStore::new();
        store.set(keys::CURRENT_USER, "not-json").unwrap();
        let session = Session::new(StoreAdapter::new(&store));

        assert!(session.current_user().unwrap().is_none());
    }
}
