//! Progression engine.
//!
//! Applies workout and benchmark events to the tier configuration, detects
//! milestone and tier completion, moves the athlete to the next tier and
//! persists the whole configuration after every change.
//!
//! Calls are expected one at a time: each event is fully applied and saved
//! before the next one is accepted.

use crate::storage::ports::{AthleteRecord, ProgressStore};

use super::catalog;
use super::configuration::TierConfiguration;
use super::milestone::{Milestone, MilestoneType};
use super::types::{
    BenchmarkEvent, MilestoneOutcome, MilestoneSummary, ProgressReport, ProgressionError,
    TierAdvancement, TierProgressSummary, WorkoutEvent,
};

/// Default key under which the configuration record is stored.
pub const DEFAULT_RECORD_KEY: &str = "tierConfiguration";

/// Progression state machine bound to its storage ports.
pub struct ProgressionEngine<S, A> {
    store: S,
    athlete: A,
    record_key: String,
    config: TierConfiguration,
}

impl<S: ProgressStore, A: AthleteRecord> ProgressionEngine<S, A> {
    /// Load the configuration stored under `record_key`.
    ///
    /// When no record exists a fresh catalog is created and saved. Stored
    /// progress is laid over the catalog; anything out of range is repaired.
    pub fn load(store: S, athlete: A, record_key: &str) -> Result<Self, ProgressionError> {
        let existing = store.get(record_key)?;

        let mut engine = Self {
            store,
            athlete,
            record_key: record_key.to_string(),
            config: catalog::default_configuration(),
        };

        match existing {
            Some(record) => {
                let snapshot = TierConfiguration::snapshot_from_record(record)?;
                engine.config.restore_onto(&snapshot);
                tracing::info!(key = record_key, "Progression state restored");
            }
            None => {
                tracing::info!(key = record_key, "No saved progression, starting fresh");
                engine.save()?;
            }
        }

        Ok(engine)
    }

    /// Build an engine around an explicit configuration without touching storage.
    pub fn with_configuration(
        store: S,
        athlete: A,
        record_key: &str,
        config: TierConfiguration,
    ) -> Self {
        Self {
            store,
            athlete,
            record_key: record_key.to_string(),
            config,
        }
    }

    /// Current tier configuration.
    pub fn configuration(&self) -> &TierConfiguration {
        &self.config
    }

    /// Record store port.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Athlete record port.
    pub fn athlete(&self) -> &A {
        &self.athlete
    }

    /// Release the ports.
    pub fn into_parts(self) -> (S, A, TierConfiguration) {
        (self.store, self.athlete, self.config)
    }

    /// Tier the athlete is working on.
    pub fn current_tier_level(&self) -> Result<usize, ProgressionError> {
        Ok(self.athlete.current_tier_level()?)
    }

    /// Persist the whole configuration.
    pub fn save(&mut self) -> Result<(), ProgressionError> {
        let record = self.config.to_record()?;
        self.store.put(&self.record_key, record)?;
        Ok(())
    }

    /// Count one ordinary workout toward a cumulative milestone.
    pub fn log_workout(&mut self, event: &WorkoutEvent) -> Result<ProgressReport, ProgressionError> {
        tracing::debug!(
            tier = event.tier_level,
            milestone = %event.milestone_type,
            workout_type = %event.workout_type,
            "Workout event received"
        );

        let milestone = self.resolve(event.tier_level, event.milestone_type)?;
        if milestone.uses_benchmarks() {
            return Err(ProgressionError::NotCumulative(event.milestone_type));
        }
        if !milestone.accepts_workout_type(&event.workout_type) {
            return Err(ProgressionError::WorkoutTypeNotAccepted {
                workout_type: event.workout_type.clone(),
                milestone: event.milestone_type,
            });
        }

        self.apply(event.tier_level, event.milestone_type, |m| {
            m.add_progress(1);
        })
    }

    /// Mark one benchmark of a benchmark milestone as finished.
    pub fn complete_benchmark(
        &mut self,
        event: &BenchmarkEvent,
    ) -> Result<ProgressReport, ProgressionError> {
        tracing::debug!(
            tier = event.tier_level,
            milestone = %event.milestone_type,
            index = event.benchmark_index,
            "Benchmark event received"
        );

        let milestone = self.resolve(event.tier_level, event.milestone_type)?;
        let available = milestone.benchmark_workouts().len();
        if event.benchmark_index >= available {
            return Err(ProgressionError::InvalidBenchmarkIndex {
                index: event.benchmark_index,
                available,
            });
        }

        let index = event.benchmark_index;
        self.apply(event.tier_level, event.milestone_type, |m| {
            m.complete_benchmark(index);
        })
    }

    /// Summary of the athlete's current tier.
    pub fn tier_progress_summary(&self) -> Result<TierProgressSummary, ProgressionError> {
        let level = self.current_tier_level()?;
        let tier = self
            .config
            .tier_by_level(level)
            .ok_or(ProgressionError::InvalidTier(level))?;

        Ok(TierProgressSummary {
            level: tier.level,
            name: tier.name.clone(),
            total_tiers: self.config.len(),
            progress_percent: tier.progress_percent(),
            completed_milestones: tier.completed_milestones(),
            total_milestones: tier.milestones.len(),
            total_workouts_needed: tier.total_workouts_needed(),
            total_workouts_completed: tier.total_workouts_completed(),
            is_completed: tier.is_completed(),
            milestones: tier.milestones.iter().map(MilestoneSummary::from).collect(),
        })
    }

    /// Current tier's milestones, incomplete ones first.
    pub fn available_milestones(&self) -> Result<Vec<MilestoneSummary>, ProgressionError> {
        let level = self.current_tier_level()?;
        let tier = self
            .config
            .tier_by_level(level)
            .ok_or(ProgressionError::InvalidTier(level))?;

        let mut milestones: Vec<MilestoneSummary> =
            tier.milestones.iter().map(MilestoneSummary::from).collect();
        milestones.sort_by_key(|m| m.is_completed);
        Ok(milestones)
    }

    /// Replace everything with a fresh catalog and put the athlete back on tier 0.
    pub fn reset_all_progress(&mut self) -> Result<(), ProgressionError> {
        self.config = catalog::default_configuration();
        self.athlete.set_current_tier_level(0)?;
        self.save()?;
        tracing::info!("All progression reset");
        Ok(())
    }

    fn resolve(
        &self,
        tier_level: usize,
        milestone_type: MilestoneType,
    ) -> Result<&Milestone, ProgressionError> {
        let tier = self
            .config
            .tier_by_level(tier_level)
            .ok_or(ProgressionError::InvalidTier(tier_level))?;
        tier.find_milestone(milestone_type)
            .ok_or(ProgressionError::InvalidMilestone {
                tier: tier_level,
                milestone: milestone_type,
            })
    }

    /// Mutate one milestone, persist, then run the tier-advancement check.
    ///
    /// Callers validate the event first; once the closure runs the change is
    /// always saved.
    fn apply<F>(
        &mut self,
        tier_level: usize,
        milestone_type: MilestoneType,
        update: F,
    ) -> Result<ProgressReport, ProgressionError>
    where
        F: FnOnce(&mut Milestone),
    {
        let milestone = self
            .config
            .tier_by_level_mut(tier_level)
            .and_then(|tier| tier.find_milestone_mut(milestone_type))
            .ok_or(ProgressionError::InvalidMilestone {
                tier: tier_level,
                milestone: milestone_type,
            })?;

        let was_completed = milestone.is_completed();
        update(milestone);
        let is_completed = milestone.is_completed();

        let outcome = MilestoneOutcome {
            milestone_name: milestone.name.clone(),
            milestone_type,
            progress: milestone.current_count(),
            required: milestone.target_count(),
            just_completed: !was_completed && is_completed,
        };

        self.save()?;

        if outcome.just_completed {
            tracing::info!(
                tier = tier_level,
                milestone = %milestone_type,
                name = %outcome.milestone_name,
                "Milestone completed"
            );
        }

        let advancement = self.check_advancement(tier_level)?;

        Ok(ProgressReport {
            milestone: outcome,
            advancement,
        })
    }

    /// Move the athlete past a completed tier.
    ///
    /// Only the athlete's active tier can trigger advancement, so events
    /// against earlier tiers never reset later ones.
    fn check_advancement(
        &mut self,
        tier_level: usize,
    ) -> Result<Option<TierAdvancement>, ProgressionError> {
        let completed = self
            .config
            .tier_by_level(tier_level)
            .is_some_and(|tier| tier.is_completed());
        if !completed {
            return Ok(None);
        }

        let current = self.athlete.current_tier_level()?;
        if current != tier_level {
            tracing::debug!(
                tier = tier_level,
                current,
                "Completed tier is not the active tier, no advancement"
            );
            return Ok(None);
        }

        let next_level = tier_level + 1;
        let Some(next) = self.config.tier_by_level_mut(next_level) else {
            tracing::info!(tier = tier_level, "Final tier complete");
            return Ok(Some(TierAdvancement::MaxTierReached));
        };

        next.reset_progress();
        let name = next.name.clone();

        self.athlete.set_current_tier_level(next_level)?;
        self.save()?;

        tracing::info!(level = next_level, name = %name, "Leveled up");
        Ok(Some(TierAdvancement::LeveledUp {
            level: next_level,
            name,
        }))
    }
}
