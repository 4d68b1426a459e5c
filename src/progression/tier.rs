//! Tiers: one progression level made of several milestones.

use super::milestone::{Milestone, MilestoneType};

/// Share of a benchmark milestone's nominal requirement that counts toward
/// tier-level progress, in percent.
pub const BENCHMARK_WEIGHT_PERCENT: u32 = 15;

/// One progression level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    /// 0-based level, equal to the tier's position in the configuration
    pub level: usize,
    /// Display name
    pub name: String,
    /// Milestones in catalog order
    pub milestones: Vec<Milestone>,
}

impl Tier {
    /// Create a tier.
    pub fn new(level: usize, name: &str, milestones: Vec<Milestone>) -> Self {
        Self {
            level,
            name: name.to_string(),
            milestones,
        }
    }

    /// Find a milestone by its type.
    pub fn find_milestone(&self, milestone_type: MilestoneType) -> Option<&Milestone> {
        self.milestones
            .iter()
            .find(|m| m.milestone_type == milestone_type)
    }

    /// Find a milestone by its type for mutation.
    pub fn find_milestone_mut(&mut self, milestone_type: MilestoneType) -> Option<&mut Milestone> {
        self.milestones
            .iter_mut()
            .find(|m| m.milestone_type == milestone_type)
    }

    /// Number of milestones whose completion predicate holds.
    pub fn completed_milestones(&self) -> usize {
        self.milestones.iter().filter(|m| m.is_completed()).count()
    }

    /// A tier is complete when every milestone is, regardless of the weighted percentage.
    pub fn is_completed(&self) -> bool {
        self.milestones.iter().all(Milestone::is_completed)
    }

    /// Weighted "workouts needed" contribution of a single milestone.
    ///
    /// Benchmark milestones count for `ceil(required * 15%)`.
    pub fn weighted_requirement(milestone: &Milestone) -> u64 {
        let required = u64::from(milestone.required_workouts);
        if milestone.uses_benchmarks() {
            (required * u64::from(BENCHMARK_WEIGHT_PERCENT)).div_ceil(100)
        } else {
            required
        }
    }

    /// Sum of weighted requirements across all milestones.
    pub fn total_workouts_needed(&self) -> u64 {
        self.milestones.iter().map(Self::weighted_requirement).sum()
    }

    /// Sum of weighted completed contributions across all milestones.
    pub fn total_workouts_completed(&self) -> f64 {
        self.milestones
            .iter()
            .map(|m| {
                if m.uses_benchmarks() {
                    Self::weighted_requirement(m) as f64 * m.benchmark_fraction()
                } else {
                    m.progress() as f64
                }
            })
            .sum()
    }

    /// Blended progress percentage (0..=100).
    pub fn progress_percent(&self) -> f64 {
        let needed = self.total_workouts_needed();
        if needed == 0 {
            return 0.0;
        }
        (100.0 * self.total_workouts_completed() / needed as f64).min(100.0)
    }

    /// Zero every milestone.
    pub fn reset_progress(&mut self) {
        for milestone in &mut self.milestones {
            milestone.reset();
        }
    }

    /// Structurally identical copy with all progress zeroed.
    pub fn fresh_copy(&self) -> Self {
        let mut tier = self.clone();
        tier.reset_progress();
        tier
    }
}
