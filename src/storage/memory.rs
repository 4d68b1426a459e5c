//! In-memory storage adapters.

use std::collections::HashMap;

use serde_json::Value;

use super::ports::{AthleteRecord, ProgressStore, StoreError};

/// Record store backed by a hash map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: HashMap<String, Value>,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `put` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Whether a record exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &str, record: Value) -> Result<(), StoreError> {
        self.records.insert(key.to_string(), record);
        self.writes += 1;
        Ok(())
    }
}

/// Athlete record held in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryAthlete {
    level: usize,
}

impl MemoryAthlete {
    /// Create an athlete on the given tier.
    pub fn at_level(level: usize) -> Self {
        Self { level }
    }
}

impl AthleteRecord for MemoryAthlete {
    fn current_tier_level(&self) -> Result<usize, StoreError> {
        Ok(self.level)
    }

    fn set_current_tier_level(&mut self, level: usize) -> Result<(), StoreError> {
        self.level = level;
        Ok(())
    }
}
