//! Workout log types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::progression::{MilestoneType, WorkoutEvent};

/// An accepted workout, as kept in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique identifier
    pub id: Uuid,
    /// Workout type key (e.g. "pushups")
    pub workout_type: String,
    /// Repetitions performed
    pub reps: Option<u32>,
    /// Duration in minutes
    pub time_minutes: Option<u32>,
    /// Tier the workout counted toward
    pub tier_level: usize,
    /// Milestone the workout counted toward
    pub milestone_type: MilestoneType,
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
}

impl WorkoutRecord {
    /// Create a record completed now.
    pub fn new(workout_type: &str, tier_level: usize, milestone_type: MilestoneType) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_type: workout_type.to_string(),
            reps: None,
            time_minutes: None,
            tier_level,
            milestone_type,
            completed_at: Utc::now(),
        }
    }

    /// Set the repetition count.
    pub fn with_reps(mut self, reps: u32) -> Self {
        self.reps = Some(reps);
        self
    }

    /// Set the duration.
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.time_minutes = Some(minutes);
        self
    }

    /// The progression event this workout produces.
    pub fn to_event(&self) -> WorkoutEvent {
        WorkoutEvent::new(&self.workout_type, self.milestone_type, self.tier_level)
    }
}
