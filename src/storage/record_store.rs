//! SQLite-backed storage ports.
//!
//! Provides persistence for:
//! - Key-value records (the progression configuration)
//! - The athlete's current tier level

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::storage::database::DatabaseError;
use crate::storage::ports::{AthleteRecord, ProgressStore, StoreError};

/// Record store over the `records` table.
pub struct RecordStore<'a> {
    conn: &'a Connection,
}

impl<'a> RecordStore<'a> {
    /// Create a record store with the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Remove a record. Returns whether one existed.
    pub fn delete(&self, key: &str) -> Result<bool, DatabaseError> {
        let deleted = self
            .conn
            .execute("DELETE FROM records WHERE key = ?1", params![key])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(deleted > 0)
    }
}

impl ProgressStore for RecordStore<'_> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT value_json FROM records WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        match json {
            Some(json) => {
                let value = serde_json::from_str(&json)
                    .map_err(|e| DatabaseError::DeserializationError(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn put(&mut self, key: &str, record: Value) -> Result<(), StoreError> {
        let json = serde_json::to_string(&record)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO records (key, value_json, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value_json = excluded.value_json,
                    updated_at = excluded.updated_at",
                params![key, json, Utc::now().to_rfc3339()],
            )
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        tracing::debug!(key, "Record saved");
        Ok(())
    }
}

/// Athlete record over the single-row `athlete` table.
pub struct AthleteStore<'a> {
    conn: &'a Connection,
}

impl<'a> AthleteStore<'a> {
    /// Create an athlete store with the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl AthleteRecord for AthleteStore<'_> {
    fn current_tier_level(&self) -> Result<usize, StoreError> {
        let level: Option<i64> = self
            .conn
            .query_row(
                "SELECT current_tier_level FROM athlete WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        match level {
            Some(level) => usize::try_from(level).map_err(|_| {
                StoreError::ReadFailed(format!("Negative tier level in athlete record: {}", level))
            }),
            None => Ok(0),
        }
    }

    fn set_current_tier_level(&mut self, level: usize) -> Result<(), StoreError> {
        let level = i64::try_from(level)
            .map_err(|_| StoreError::WriteFailed(format!("Tier level too large: {}", level)))?;

        self.conn
            .execute(
                "INSERT INTO athlete (id, current_tier_level, updated_at) VALUES (1, ?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET
                    current_tier_level = excluded.current_tier_level,
                    updated_at = excluded.updated_at",
                params![level, Utc::now().to_rfc3339()],
            )
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}
