//! Fixed storage keys shared by every backend.
//!
//! The `productivityHub_` prefix keeps values readable by the existing
//! browser build, which uses the same names.

pub const USERS: &str = "productivityHub_users";
pub const CURRENT_USER: &str = "productivityHub_currentUser";
pub const TODOS: &str = "productivityHub_todos";
pub const EVENTS: &str = "productivityHub_events";
pub const JOURNAL: &str = "productivityHub_journal";
pub const GALLERY: &str = "productivityHub_gallery";
pub const QUOTES: &str = "productivityHub_quotes";
pub const LAST_QUOTE_DATE: &str = "productivityHub_lastQuoteDate";
pub const CURRENT_QUOTE_INDEX: &str = "productivityHub_quotes_current";
