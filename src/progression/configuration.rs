//! The full tier configuration and its persisted snapshot form.
//!
//! The snapshot structs are plain owned data with no shared references, so a
//! snapshot can be handed to any storage layer as-is.

use serde::{Deserialize, Serialize};

use super::catalog;
use super::milestone::{BenchmarkWorkout, Milestone, MilestoneType, WorkoutRequirement};
use super::tier::Tier;
use super::types::ProgressionError;

/// Snapshot format version written into every record.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Persisted form of a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSnapshot {
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
    pub name: String,
    pub required_workouts: u32,
    #[serde(default)]
    pub workout_requirements: Vec<WorkoutRequirement>,
    #[serde(default)]
    pub benchmark_workouts: Vec<BenchmarkWorkout>,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub benchmarks_completed: Vec<usize>,
}

/// Persisted form of a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSnapshot {
    pub level: usize,
    pub name: String,
    pub milestones: Vec<MilestoneSnapshot>,
}

/// Persisted form of the whole configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    pub tiers: Vec<TierSnapshot>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl From<&Milestone> for MilestoneSnapshot {
    fn from(milestone: &Milestone) -> Self {
        Self {
            milestone_type: milestone.milestone_type,
            name: milestone.name.clone(),
            required_workouts: milestone.required_workouts,
            workout_requirements: milestone.workout_requirements.clone(),
            benchmark_workouts: milestone.benchmark_workouts().to_vec(),
            progress: milestone.progress(),
            benchmarks_completed: milestone.benchmarks_completed(),
        }
    }
}

impl MilestoneSnapshot {
    /// Rebuild the milestone, clamping values into their valid ranges.
    fn into_milestone(self) -> Milestone {
        let mut milestone = Milestone::from_parts(
            self.milestone_type,
            &self.name,
            self.required_workouts,
            self.workout_requirements,
            self.benchmark_workouts,
        );
        if milestone.restore_progress(self.progress, &self.benchmarks_completed) {
            tracing::warn!(
                milestone = %self.milestone_type,
                "Repaired out-of-range progress in snapshot"
            );
        }
        milestone
    }
}

/// Ordered list of tiers for one athlete profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierConfiguration {
    tiers: Vec<Tier>,
}

impl Default for TierConfiguration {
    fn default() -> Self {
        catalog::default_configuration()
    }
}

impl TierConfiguration {
    /// Create a configuration, checking that levels are contiguous from 0.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, ProgressionError> {
        for (position, tier) in tiers.iter().enumerate() {
            if tier.level != position {
                return Err(ProgressionError::CorruptRecord(format!(
                    "Tier '{}' has level {} at position {}",
                    tier.name, tier.level, position
                )));
            }
        }
        Ok(Self { tiers })
    }

    /// Wrap catalog tiers whose levels are already assigned by position.
    pub(crate) fn from_catalog(tiers: Vec<Tier>) -> Self {
        debug_assert!(tiers.iter().enumerate().all(|(i, t)| t.level == i));
        Self { tiers }
    }

    /// All tiers in level order.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Whether the configuration has no tiers.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Look up a tier by level.
    pub fn tier_by_level(&self, level: usize) -> Option<&Tier> {
        self.tiers.get(level)
    }

    /// Look up a tier by level for mutation.
    pub fn tier_by_level_mut(&mut self, level: usize) -> Option<&mut Tier> {
        self.tiers.get_mut(level)
    }

    /// Zero every milestone in every tier.
    pub fn reset_all(&mut self) {
        for tier in &mut self.tiers {
            tier.reset_progress();
        }
    }

    /// Build the plain snapshot of the current state.
    pub fn to_snapshot(&self) -> ConfigurationSnapshot {
        ConfigurationSnapshot {
            version: SNAPSHOT_VERSION,
            tiers: self
                .tiers
                .iter()
                .map(|tier| TierSnapshot {
                    level: tier.level,
                    name: tier.name.clone(),
                    milestones: tier.milestones.iter().map(MilestoneSnapshot::from).collect(),
                })
                .collect(),
        }
    }

    /// Rebuild a configuration entirely from a snapshot.
    pub fn from_snapshot(snapshot: ConfigurationSnapshot) -> Result<Self, ProgressionError> {
        let tiers = snapshot
            .tiers
            .into_iter()
            .map(|tier| {
                let milestones = tier
                    .milestones
                    .into_iter()
                    .map(MilestoneSnapshot::into_milestone)
                    .collect();
                Tier::new(tier.level, &tier.name, milestones)
            })
            .collect();
        Self::new(tiers)
    }

    /// Serialize to a JSON record for the persistence port.
    pub fn to_record(&self) -> Result<serde_json::Value, ProgressionError> {
        serde_json::to_value(self.to_snapshot())
            .map_err(|e| ProgressionError::CorruptRecord(e.to_string()))
    }

    /// Parse a JSON record into a snapshot.
    pub fn snapshot_from_record(
        record: serde_json::Value,
    ) -> Result<ConfigurationSnapshot, ProgressionError> {
        serde_json::from_value(record).map_err(|e| ProgressionError::CorruptRecord(e.to_string()))
    }

    /// Rebuild a configuration entirely from a JSON record.
    pub fn from_record(record: serde_json::Value) -> Result<Self, ProgressionError> {
        Self::from_snapshot(Self::snapshot_from_record(record)?)
    }

    /// Copy the mutable fields of a snapshot onto this configuration's shape.
    ///
    /// Tiers and milestones are matched by level and type. Entries that do not
    /// exist in this configuration are skipped; entries missing from the
    /// snapshot keep their current (normally zeroed) state.
    pub fn restore_onto(&mut self, snapshot: &ConfigurationSnapshot) {
        for saved_tier in &snapshot.tiers {
            let Some(tier) = self.tiers.get_mut(saved_tier.level) else {
                tracing::warn!(level = saved_tier.level, "Skipping unknown tier in snapshot");
                continue;
            };

            for saved in &saved_tier.milestones {
                let Some(milestone) = tier.find_milestone_mut(saved.milestone_type) else {
                    tracing::warn!(
                        level = saved_tier.level,
                        milestone = %saved.milestone_type,
                        "Skipping unknown milestone in snapshot"
                    );
                    continue;
                };

                if milestone.restore_progress(saved.progress, &saved.benchmarks_completed) {
                    tracing::warn!(
                        level = saved_tier.level,
                        milestone = %saved.milestone_type,
                        "Repaired out-of-range progress in snapshot"
                    );
                }
            }
        }
    }
}
