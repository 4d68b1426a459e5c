//! TierLadder - Tiered Fitness Milestone Progression
//!
//! Tracks an athlete through ordered tiers of milestones. Ordinary workouts
//! count toward cumulative milestones, benchmark workouts complete benchmark
//! milestones, and finishing every milestone of the active tier moves the
//! athlete to the next one. State is persisted through small storage ports
//! with a SQLite implementation.

pub mod progression;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use progression::engine::ProgressionEngine;
pub use progression::types::{BenchmarkEvent, ProgressionError, WorkoutEvent};
pub use storage::config::AppConfig;
pub use workouts::types::WorkoutRecord;
