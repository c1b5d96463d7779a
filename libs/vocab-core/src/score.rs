//! Persistent score counter abstraction.

use crate::error::StoreError;

/// Storage for the learner's running score.
///
/// An absent score reads as zero. The session only ever adds to it; resetting
/// is left to whoever owns the store.
pub trait ScoreStore {
    /// Current score.
    fn get(&self) -> Result<i64, StoreError>;

    /// Add `delta` to the score and return the new value.
    fn add(&mut self, delta: i64) -> Result<i64, StoreError>;
}

/// Score store kept in memory, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    value: i64,
}

impl MemoryScoreStore {
    pub fn with_value(value: i64) -> Self {
        Self { value }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> Result<i64, StoreError> {
        Ok(self.value)
    }

    fn add(&mut self, delta: i64) -> Result<i64, StoreError> {
        self.value += delta;
        Ok(self.value)
    }
}
