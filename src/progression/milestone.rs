//! Milestone definitions and per-milestone progress.
//!
//! A milestone is tracked in exactly one of two modes, fixed when it is built:
//! - Cumulative: count qualifying workouts toward `required_workouts`
//! - Benchmark: finish every entry of a small list of challenge workouts

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Difficulty tag of a milestone within its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneType {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl MilestoneType {
    /// All milestone types in catalog order.
    pub const ALL: [MilestoneType; 5] = [
        MilestoneType::Bronze,
        MilestoneType::Silver,
        MilestoneType::Gold,
        MilestoneType::Platinum,
        MilestoneType::Diamond,
    ];

    /// Get display name for the milestone type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
        }
    }
}

impl std::fmt::Display for MilestoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bronze => write!(f, "bronze"),
            Self::Silver => write!(f, "silver"),
            Self::Gold => write!(f, "gold"),
            Self::Platinum => write!(f, "platinum"),
            Self::Diamond => write!(f, "diamond"),
        }
    }
}

impl std::str::FromStr for MilestoneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bronze" => Ok(Self::Bronze),
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            "platinum" => Ok(Self::Platinum),
            "diamond" => Ok(Self::Diamond),
            _ => Err(format!("Unknown milestone type: {}", s)),
        }
    }
}

/// A workout that counts toward a cumulative milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRequirement {
    /// Workout type key (e.g. "pushups")
    pub workout_type: String,
    /// Repetitions per session, if the workout is rep-based
    pub reps: Option<u32>,
    /// Minutes per session, if the workout is time-based
    pub time_minutes: Option<u32>,
}

impl WorkoutRequirement {
    /// Rep-based requirement.
    pub fn reps(workout_type: &str, reps: u32) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            reps: Some(reps),
            time_minutes: None,
        }
    }

    /// Time-based requirement.
    pub fn timed(workout_type: &str, minutes: u32) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            reps: None,
            time_minutes: Some(minutes),
        }
    }
}

/// A named challenge workout that must be finished once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkWorkout {
    /// Display name
    pub name: String,
    /// What the athlete has to do
    pub description: String,
    /// Workout type key
    pub workout_type: String,
    /// Target repetitions
    pub reps: Option<u32>,
    /// Time cap in minutes
    pub time_minutes: Option<u32>,
}

impl BenchmarkWorkout {
    /// Create a benchmark definition.
    pub fn new(name: &str, description: &str, workout_type: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            workout_type: workout_type.to_string(),
            reps: None,
            time_minutes: None,
        }
    }

    /// Set the target repetitions.
    pub fn with_reps(mut self, reps: u32) -> Self {
        self.reps = Some(reps);
        self
    }

    /// Set the time cap.
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.time_minutes = Some(minutes);
        self
    }
}

/// Progress accounting mode of a milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MilestoneMode {
    /// Count qualifying workouts.
    Cumulative {
        /// Workouts counted so far, never above the requirement
        progress: u32,
    },
    /// Finish every listed benchmark.
    Benchmark {
        /// Benchmark definitions (never empty)
        benchmarks: Vec<BenchmarkWorkout>,
        /// Indices into `benchmarks` that have been finished
        completed: BTreeSet<usize>,
    },
}

/// One achievement goal inside a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Difficulty tag
    pub milestone_type: MilestoneType,
    /// Display name
    pub name: String,
    /// Target count in cumulative mode, nominal difficulty in benchmark mode
    pub required_workouts: u32,
    /// Accepted workout types; empty accepts any type
    pub workout_requirements: Vec<WorkoutRequirement>,
    mode: MilestoneMode,
}

impl Milestone {
    /// Create a cumulative-mode milestone.
    pub fn cumulative(
        milestone_type: MilestoneType,
        name: &str,
        required_workouts: u32,
        workout_requirements: Vec<WorkoutRequirement>,
    ) -> Self {
        Self {
            milestone_type,
            name: name.to_string(),
            required_workouts,
            workout_requirements,
            mode: MilestoneMode::Cumulative { progress: 0 },
        }
    }

    /// Create a benchmark-mode milestone.
    ///
    /// An empty benchmark list falls back to cumulative mode, since the mode
    /// is decided by whether any benchmarks exist.
    pub fn benchmark(
        milestone_type: MilestoneType,
        name: &str,
        required_workouts: u32,
        benchmarks: Vec<BenchmarkWorkout>,
    ) -> Self {
        Self::from_parts(milestone_type, name, required_workouts, Vec::new(), benchmarks)
    }

    /// Build a milestone from its catalog fields, choosing the mode structurally.
    pub fn from_parts(
        milestone_type: MilestoneType,
        name: &str,
        required_workouts: u32,
        workout_requirements: Vec<WorkoutRequirement>,
        benchmarks: Vec<BenchmarkWorkout>,
    ) -> Self {
        let mode = if benchmarks.is_empty() {
            MilestoneMode::Cumulative { progress: 0 }
        } else {
            MilestoneMode::Benchmark {
                benchmarks,
                completed: BTreeSet::new(),
            }
        };

        Self {
            milestone_type,
            name: name.to_string(),
            required_workouts,
            workout_requirements,
            mode,
        }
    }

    /// Accounting mode.
    pub fn mode(&self) -> &MilestoneMode {
        &self.mode
    }

    /// Whether this milestone is tracked by benchmarks.
    pub fn uses_benchmarks(&self) -> bool {
        matches!(self.mode, MilestoneMode::Benchmark { .. })
    }

    /// Cumulative progress (always 0 in benchmark mode).
    pub fn progress(&self) -> u32 {
        match &self.mode {
            MilestoneMode::Cumulative { progress } => *progress,
            MilestoneMode::Benchmark { .. } => 0,
        }
    }

    /// Benchmark definitions (empty in cumulative mode).
    pub fn benchmark_workouts(&self) -> &[BenchmarkWorkout] {
        match &self.mode {
            MilestoneMode::Benchmark { benchmarks, .. } => benchmarks,
            MilestoneMode::Cumulative { .. } => &[],
        }
    }

    /// Finished benchmark indices in ascending order.
    pub fn benchmarks_completed(&self) -> Vec<usize> {
        match &self.mode {
            MilestoneMode::Benchmark { completed, .. } => completed.iter().copied().collect(),
            MilestoneMode::Cumulative { .. } => Vec::new(),
        }
    }

    /// Whether the given benchmark index has been finished.
    pub fn is_benchmark_completed(&self, index: usize) -> bool {
        match &self.mode {
            MilestoneMode::Benchmark { completed, .. } => completed.contains(&index),
            MilestoneMode::Cumulative { .. } => false,
        }
    }

    /// Completion predicate.
    pub fn is_completed(&self) -> bool {
        match &self.mode {
            MilestoneMode::Cumulative { progress } => *progress >= self.required_workouts,
            MilestoneMode::Benchmark {
                benchmarks,
                completed,
            } => completed.len() >= benchmarks.len(),
        }
    }

    /// Whether a workout of this type counts toward the milestone.
    pub fn accepts_workout_type(&self, workout_type: &str) -> bool {
        self.workout_requirements.is_empty()
            || self
                .workout_requirements
                .iter()
                .any(|r| r.workout_type == workout_type)
    }

    /// Add workouts to a cumulative milestone, clamped at the requirement.
    ///
    /// Returns the completion state after the update. Benchmark milestones
    /// are left untouched.
    pub fn add_progress(&mut self, count: u32) -> bool {
        if let MilestoneMode::Cumulative { progress } = &mut self.mode {
            *progress = progress.saturating_add(count).min(self.required_workouts);
        } else {
            tracing::warn!(
                milestone = %self.milestone_type,
                "add_progress called on a benchmark milestone"
            );
        }
        self.is_completed()
    }

    /// Mark a benchmark as finished. Idempotent.
    ///
    /// Returns false when the index is out of range or the milestone is not
    /// benchmark-tracked; nothing changes in that case.
    pub fn complete_benchmark(&mut self, index: usize) -> bool {
        match &mut self.mode {
            MilestoneMode::Benchmark {
                benchmarks,
                completed,
            } if index < benchmarks.len() => {
                completed.insert(index);
                true
            }
            _ => false,
        }
    }

    /// Progress numerator for display: workouts counted or benchmarks finished.
    pub fn current_count(&self) -> u32 {
        match &self.mode {
            MilestoneMode::Cumulative { progress } => *progress,
            MilestoneMode::Benchmark { completed, .. } => completed.len() as u32,
        }
    }

    /// Progress denominator for display: workouts required or benchmarks listed.
    pub fn target_count(&self) -> u32 {
        match &self.mode {
            MilestoneMode::Cumulative { .. } => self.required_workouts,
            MilestoneMode::Benchmark { benchmarks, .. } => benchmarks.len() as u32,
        }
    }

    /// Fraction of benchmarks finished (0.0 in cumulative mode).
    pub fn benchmark_fraction(&self) -> f64 {
        match &self.mode {
            MilestoneMode::Benchmark {
                benchmarks,
                completed,
            } if !benchmarks.is_empty() => completed.len() as f64 / benchmarks.len() as f64,
            _ => 0.0,
        }
    }

    /// Progress percentage (0..=100).
    pub fn progress_percent(&self) -> f64 {
        let target = self.target_count();
        if target == 0 {
            return 0.0;
        }
        (100.0 * self.current_count() as f64 / target as f64).min(100.0)
    }

    /// Zero all progress.
    pub fn reset(&mut self) {
        match &mut self.mode {
            MilestoneMode::Cumulative { progress } => *progress = 0,
            MilestoneMode::Benchmark { completed, .. } => completed.clear(),
        }
    }

    /// Overwrite progress from persisted values, repairing anything out of range.
    ///
    /// Returns true if the stored values had to be adjusted.
    pub(crate) fn restore_progress(&mut self, progress: u32, completed_indices: &[usize]) -> bool {
        let required = self.required_workouts;
        match &mut self.mode {
            MilestoneMode::Cumulative { progress: current } => {
                *current = progress.min(required);
                progress > required || !completed_indices.is_empty()
            }
            MilestoneMode::Benchmark {
                benchmarks,
                completed,
            } => {
                let count = benchmarks.len();
                completed.clear();
                completed.extend(completed_indices.iter().copied().filter(|i| *i < count));
                completed.len() != completed_indices.len() || progress != 0
            }
        }
    }
}
