//! Runtime configuration.
//!
//! # Responsibility
//! - Collect store location, logging settings and read policy from the
//!   environment (`PRODHUB_*` variables).
//! - Open the configured key-value database.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set-but-invalid values are errors.
//! - No database path means a private in-memory database.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::logging::default_log_level;
use crate::store::ReadPolicy;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "PRODHUB_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "PRODHUB_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PRODHUB_LOG_DIR";
pub const ENV_STRICT_READS: &str = "PRODHUB_STRICT_READS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { name: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, value } => {
                write!(f, "invalid value `{value}` for {name}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Core runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file backing the key-value store; `None` means in-memory.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub read_policy: ReadPolicy,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            read_policy: ReadPolicy::default(),
        }
    }
}

impl CoreConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let strict_reads = read(ENV_STRICT_READS)
            .map(|value| parse_flag(ENV_STRICT_READS, &value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            db_path: read(ENV_DB_PATH).map(PathBuf::from),
            log_level: read(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
            read_policy: if strict_reads {
                ReadPolicy::Strict
            } else {
                ReadPolicy::Lenient
            },
        })
    }

    /// Opens the configured database with migrations applied.
    pub fn open_db(&self) -> DbResult<Connection> {
        match &self.db_path {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ENV_DB_PATH, ENV_LOG_LEVEL, ENV_STRICT_READS};
    use crate::store::ReadPolicy;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = CoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert!(config.db_path.is_none());
        assert_eq!(config.read_policy, ReadPolicy::Lenient);
    }

    #[test]
    fn values_are_trimmed_and_applied() {
        let config = CoreConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, " /tmp/hub.sqlite3 "),
            (ENV_LOG_LEVEL, "warn"),
            (ENV_STRICT_READS, "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/hub.sqlite3")));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.read_policy, ReadPolicy::Strict);
    }

    #[test]
    fn invalid_flag_is_rejected() {
        let err = CoreConfig::from_lookup(lookup(&[(ENV_STRICT_READS, "sometimes")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: ENV_STRICT_READS,
                value: "sometimes".to_string()
            }
        );
    }

    #[test]
    fn default_config_opens_in_memory_database() {
        let conn = CoreConfig::default().open_db().unwrap();
        let path: Option<String> = conn
            .query_row("PRAGMA database_list;", [], |row| row.get(2))
            .unwrap();
        assert!(path.unwrap_or_default().is_empty());
    }
}
