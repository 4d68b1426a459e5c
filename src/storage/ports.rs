//! Storage ports consumed by the progression engine.

use serde_json::Value;
use thiserror::Error;

use super::database::DatabaseError;

/// Errors reported by storage ports.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Key-value record store.
///
/// Records are plain JSON values. A `put` must replace the whole record in
/// one write.
pub trait ProgressStore {
    /// Read the record stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replace the record stored under `key`.
    fn put(&mut self, key: &str, record: Value) -> Result<(), StoreError>;
}

/// Holder of the athlete's active tier level.
pub trait AthleteRecord {
    /// Tier the athlete is currently working on.
    fn current_tier_level(&self) -> Result<usize, StoreError>;

    /// Move the athlete to another tier.
    fn set_current_tier_level(&mut self, level: usize) -> Result<(), StoreError>;
}

impl<T: ProgressStore + ?Sized> ProgressStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, record: Value) -> Result<(), StoreError> {
        (**self).put(key, record)
    }
}

impl<T: AthleteRecord + ?Sized> AthleteRecord for &mut T {
    fn current_tier_level(&self) -> Result<usize, StoreError> {
        (**self).current_tier_level()
    }

    fn set_current_tier_level(&mut self, level: usize) -> Result<(), StoreError> {
        (**self).set_current_tier_level(level)
    }
}

impl<T: ProgressStore + ?Sized> ProgressStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, record: Value) -> Result<(), StoreError> {
        (**self).put(key, record)
    }
}

impl<T: AthleteRecord + ?Sized> AthleteRecord for Box<T> {
    fn current_tier_level(&self) -> Result<usize, StoreError> {
        (**self).current_tier_level()
    }

    fn set_current_tier_level(&mut self, level: usize) -> Result<(), StoreError> {
        (**self).set_current_tier_level(level)
    }
}
