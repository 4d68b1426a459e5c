//! Tiered milestone progression.
//!
//! Tracks an athlete through an ordered list of tiers, each made of
//! milestones that complete either by counting workouts or by finishing a
//! set of benchmark workouts.

pub mod catalog;
pub mod configuration;
pub mod engine;
pub mod milestone;
pub mod tier;
pub mod types;

// Re-exports for convenience
pub use configuration::{ConfigurationSnapshot, MilestoneSnapshot, TierConfiguration, TierSnapshot};
pub use engine::{ProgressionEngine, DEFAULT_RECORD_KEY};
pub use milestone::{BenchmarkWorkout, Milestone, MilestoneMode, MilestoneType, WorkoutRequirement};
pub use tier::{Tier, BENCHMARK_WEIGHT_PERCENT};
pub use types::{
    BenchmarkEvent, MilestoneOutcome, MilestoneSummary, ProgressReport, ProgressionError,
    TierAdvancement, TierProgressSummary, WorkoutEvent,
};
