//! Event, result and error types for the progression engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::milestone::{Milestone, MilestoneType};
use crate::storage::ports::StoreError;

/// An ordinary workout logged against a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEvent {
    /// Workout type key (e.g. "pushups")
    pub workout_type: String,
    /// Target milestone
    pub milestone_type: MilestoneType,
    /// Target tier level
    pub tier_level: usize,
}

impl WorkoutEvent {
    /// Create a workout event.
    pub fn new(workout_type: &str, milestone_type: MilestoneType, tier_level: usize) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            milestone_type,
            tier_level,
        }
    }
}

/// A finished benchmark workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkEvent {
    /// Target milestone
    pub milestone_type: MilestoneType,
    /// Target tier level
    pub tier_level: usize,
    /// Index into the milestone's benchmark list
    pub benchmark_index: usize,
}

impl BenchmarkEvent {
    /// Create a benchmark event.
    pub fn new(milestone_type: MilestoneType, tier_level: usize, benchmark_index: usize) -> Self {
        Self {
            milestone_type,
            tier_level,
            benchmark_index,
        }
    }
}

/// Milestone state after an accepted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneOutcome {
    /// Milestone display name
    pub milestone_name: String,
    /// Milestone type
    pub milestone_type: MilestoneType,
    /// Workouts counted, or benchmarks finished
    pub progress: u32,
    /// Workouts required, or benchmarks listed
    pub required: u32,
    /// Whether this event completed the milestone
    pub just_completed: bool,
}

/// Tier-level outcome reported alongside a milestone outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierAdvancement {
    /// The athlete moved to the next tier.
    LeveledUp {
        /// New tier level
        level: usize,
        /// New tier display name
        name: String,
    },
    /// The completed tier is the last one.
    MaxTierReached,
}

/// Result of an accepted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Milestone outcome
    pub milestone: MilestoneOutcome,
    /// Tier advancement, if the tier is complete
    pub advancement: Option<TierAdvancement>,
}

impl ProgressReport {
    /// Whether the athlete moved to a new tier.
    pub fn leveled_up(&self) -> bool {
        matches!(self.advancement, Some(TierAdvancement::LeveledUp { .. }))
    }
}

/// Display fields for one milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneSummary {
    /// Milestone type
    pub milestone_type: MilestoneType,
    /// Display name
    pub name: String,
    /// Workouts counted, or benchmarks finished
    pub progress: u32,
    /// Workouts required, or benchmarks listed
    pub required: u32,
    /// Progress percentage (0-100)
    pub progress_percent: f64,
    /// Whether the milestone is complete
    pub is_completed: bool,
    /// Whether progress is tracked through benchmarks
    pub uses_benchmarks: bool,
    /// Accepted workout types; empty means any type
    pub accepted_workout_types: Vec<String>,
    /// Benchmark names with their completion flag
    pub benchmarks: Vec<(String, bool)>,
}

impl From<&Milestone> for MilestoneSummary {
    fn from(milestone: &Milestone) -> Self {
        Self {
            milestone_type: milestone.milestone_type,
            name: milestone.name.clone(),
            progress: milestone.current_count(),
            required: milestone.target_count(),
            progress_percent: milestone.progress_percent(),
            is_completed: milestone.is_completed(),
            uses_benchmarks: milestone.uses_benchmarks(),
            accepted_workout_types: milestone
                .workout_requirements
                .iter()
                .map(|r| r.workout_type.clone())
                .collect(),
            benchmarks: milestone
                .benchmark_workouts()
                .iter()
                .enumerate()
                .map(|(i, b)| (b.name.clone(), milestone.is_benchmark_completed(i)))
                .collect(),
        }
    }
}

/// Read-only view of the athlete's current tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierProgressSummary {
    /// Tier level
    pub level: usize,
    /// Tier display name
    pub name: String,
    /// Number of tiers in the configuration
    pub total_tiers: usize,
    /// Weighted progress percentage (0-100)
    pub progress_percent: f64,
    /// Milestones already complete
    pub completed_milestones: usize,
    /// Milestones in the tier
    pub total_milestones: usize,
    /// Weighted workouts needed
    pub total_workouts_needed: u64,
    /// Weighted workouts completed
    pub total_workouts_completed: f64,
    /// Whether every milestone is complete
    pub is_completed: bool,
    /// Per-milestone detail in catalog order
    pub milestones: Vec<MilestoneSummary>,
}

/// Errors from the progression engine.
#[derive(Debug, Error)]
pub enum ProgressionError {
    /// Event references a tier that does not exist
    #[error("Invalid tier: {0}")]
    InvalidTier(usize),

    /// Event references a milestone that does not exist in the tier
    #[error("Invalid milestone: {milestone} in tier {tier}")]
    InvalidMilestone {
        tier: usize,
        milestone: MilestoneType,
    },

    /// Workout type does not count toward the milestone
    #[error("Workout type '{workout_type}' not accepted by {milestone} milestone")]
    WorkoutTypeNotAccepted {
        workout_type: String,
        milestone: MilestoneType,
    },

    /// Ordinary workout aimed at a benchmark-tracked milestone
    #[error("{0} milestone is completed through benchmarks, not workout counts")]
    NotCumulative(MilestoneType),

    /// Benchmark index out of range
    #[error("Invalid benchmark index {index} ({available} benchmarks available)")]
    InvalidBenchmarkIndex { index: usize, available: usize },

    /// Persisted record could not be read
    #[error("Corrupt progression record: {0}")]
    CorruptRecord(String),

    /// Storage port failure
    #[error("Persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

impl ProgressionError {
    /// Whether the event was rejected before any state changed.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Persistence(_) | Self::CorruptRecord(_))
    }
}
