//! Repository pattern for database access.

use crate::db::date_utils::{now_string, parse_timestamp};
use crate::db::error::DbError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// A stored counter with its last modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterRecord {
    pub key: String,
    pub value: i64,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Repository for named integer counters.
pub trait CounterRepository {
    /// Counter value, zero when absent.
    fn get_counter(&self, key: &str) -> Result<i64>;
    fn get_counter_record(&self, key: &str) -> Result<Option<CounterRecord>>;
    /// Add `delta` and return the new value.
    fn add_to_counter(&self, key: &str, delta: i64) -> Result<i64>;
    fn reset_counter(&self, key: &str) -> Result<()>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute(
            super::schema::INIT_SCHEMA_VERSION,
            params![super::schema::SCHEMA_VERSION],
        )?;
        Ok(())
    }
}

impl CounterRepository for SqliteRepository {
    fn get_counter(&self, key: &str) -> Result<i64> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM counters WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.unwrap_or(0))
    }

    fn get_counter_record(&self, key: &str) -> Result<Option<CounterRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT value, updated_at FROM counters WHERE key = ?1",
                params![key],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?)),
            )
            .optional()?;

        let Some((value, updated_at)) = row else {
            return Ok(None);
        };
        let updated_at = updated_at.as_deref().map(parse_timestamp).transpose()?;

        Ok(Some(CounterRecord {
            key: key.to_string(),
            value,
            updated_at,
        }))
    }

    fn add_to_counter(&self, key: &str, delta: i64) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO counters (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = counters.value + excluded.value,
                updated_at = excluded.updated_at",
            params![key, delta, now_string()],
        )?;
        self.get_counter(key)
    }

    fn reset_counter(&self, key: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO counters (key, value, updated_at) VALUES (?1, 0, ?2)
             ON CONFLICT(key) DO UPDATE SET value = 0, updated_at = excluded.updated_at",
            params![key, now_string()],
        )?;
        Ok(())
    }
}
