//! Database operations using rusqlite.

use crate::storage::schema::{CURRENT_VERSION, MIGRATIONS, SCHEMA_VERSION_TABLE};
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

/// SQLite database holding progression state and the workout log.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database file, creating parent directories as needed.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        Self::with_connection(conn)
    }

    /// Open a fresh in-memory database.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, DatabaseError> {
        let db = Self { conn };
        db.migrate_to(CURRENT_VERSION)?;
        Ok(db)
    }

    /// Apply every pending migration up to `target`.
    ///
    /// Each step runs in its own transaction together with its
    /// `schema_version` row, so a failed step leaves earlier ones in place.
    fn migrate_to(&self, target: i32) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        let current = self.schema_version()?;
        if current > CURRENT_VERSION {
            return Err(DatabaseError::MigrationFailed(format!(
                "Database schema version {} is newer than supported version {}",
                current, CURRENT_VERSION
            )));
        }

        for (version, sql) in MIGRATIONS
            .iter()
            .filter(|(version, _)| *version > current && *version <= target)
        {
            let tx = self
                .conn
                .unchecked_transaction()
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
            tx.execute_batch(sql)
                .map_err(|e| DatabaseError::MigrationFailed(format!("v{}: {}", version, e)))?;
            tx.execute(
                "INSERT INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
                params![version],
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
            tx.commit()
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!(version, "Applied schema migration");
        }

        Ok(())
    }

    /// Highest applied schema version, 0 for an empty database.
    pub fn schema_version(&self) -> Result<i32, DatabaseError> {
        let version: Option<i32> = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(version.unwrap_or(0))
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}
