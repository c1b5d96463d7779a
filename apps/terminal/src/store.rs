//! SQLite-backed score store.

use crate::db::{CounterRecord, CounterRepository, DbError, SqliteRepository};
use vocab_core::{ScoreStore, StoreError};

/// Score persisted as a named counter in the local database.
pub struct SqliteScoreStore {
    repository: SqliteRepository,
    key: String,
}

impl SqliteScoreStore {
    pub fn new(repository: SqliteRepository, key: impl Into<String>) -> Self {
        Self {
            repository,
            key: key.into(),
        }
    }

    pub fn record(&self) -> Result<Option<CounterRecord>, DbError> {
        self.repository.get_counter_record(&self.key)
    }

    pub fn reset(&mut self) -> Result<(), DbError> {
        self.repository.reset_counter(&self.key)
    }
}

impl ScoreStore for SqliteScoreStore {
    fn get(&self) -> Result<i64, StoreError> {
        self.repository.get_counter(&self.key).map_err(StoreError::new)
    }

    fn add(&mut self, delta: i64) -> Result<i64, StoreError> {
        self.repository
            .add_to_counter(&self.key, delta)
            .map_err(StoreError::new)
    }
}
