//! Signup/login/logout use-cases.
//!
//! # Invariants
//! - Login failure is one `InvalidCredentials` condition; unknown email and
//!   wrong password are indistinguishable to the caller.
//! - Signup does not check for an existing email.
//! - A successful signup or login leaves the session pointing at that user.
//! - Emails are trimmed on both signup and login; passwords are kept as typed.

use crate::model::user::{NewUser, User};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use crate::session::Session;
use crate::store::{KeyValueStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum AuthError {
    InvalidCredentials,
    /// A signup field was blank.
    MissingField(&'static str),
    Repo(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::MissingField(field) => write!(f, "`{field}` is required"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Repo(RepoError::Store(value))
    }
}

pub struct AuthService<'s, R: UserRepository, S: KeyValueStore + ?Sized> {
    users: R,
    session: Session<'s, S>,
}

impl<'s, R: UserRepository, S: KeyValueStore + ?Sized> AuthService<'s, R, S> {
    pub fn new(users: R, session: Session<'s, S>) -> Self {
        Self { users, session }
    }

    /// Registers a user and logs them in.
    pub fn signup(&self, username: &str, email: &str, password: &str) -> Result<User, AuthError> {
        for (field, value) in [
            ("username", username),
            ("email", email),
            ("password", password),
        ] {
            if value.trim().is_empty() {
                return Err(AuthError::MissingField(field));
            }
        }

        let user = self
            .users
            .create(&NewUser::new(username.trim(), email.trim(), password))?;
        self.session.set_current(Some(&user))?;
        info!("event=auth_signup module=service status=ok user_id={}", user.id);
        Ok(user)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.users
            .authenticate(email.trim(), password)?
            .ok_or(AuthError::InvalidCredentials)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        Ok(self.session.logout()?)
    }

    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.session.current_user()?)
    }
}
