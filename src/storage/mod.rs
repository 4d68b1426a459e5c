//! Storage module for database, ports and configuration.

pub mod config;
pub mod database;
pub mod memory;
pub mod ports;
pub mod record_store;
pub mod schema;

pub use config::{AppConfig, ConfigError, LoggingSettings, StorageSettings};
pub use database::{Database, DatabaseError};
pub use memory::{MemoryAthlete, MemoryStore};
pub use ports::{AthleteRecord, ProgressStore, StoreError};
pub use record_store::{AthleteStore, RecordStore};
