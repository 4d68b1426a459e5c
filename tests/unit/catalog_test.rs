//! Unit tests for the default tier catalog.

use tierladder::progression::catalog::{default_configuration, default_tiers};
use tierladder::progression::MilestoneType;

#[test]
fn test_levels_match_positions() {
    for (i, tier) in default_tiers().iter().enumerate() {
        assert_eq!(tier.level, i, "tier '{}' out of position", tier.name);
    }
}

#[test]
fn test_every_tier_has_one_of_each_milestone() {
    for tier in default_tiers() {
        let types: Vec<_> = tier.milestones.iter().map(|m| m.milestone_type).collect();
        assert_eq!(types, MilestoneType::ALL.to_vec(), "tier '{}'", tier.name);
    }
}

#[test]
fn test_benchmark_milestones_are_platinum_and_diamond() {
    for tier in default_tiers() {
        for milestone in &tier.milestones {
            let expects_benchmarks = matches!(
                milestone.milestone_type,
                MilestoneType::Platinum | MilestoneType::Diamond
            );
            assert_eq!(
                milestone.uses_benchmarks(),
                expects_benchmarks,
                "{} in '{}'",
                milestone.milestone_type,
                tier.name
            );
        }
    }
}

#[test]
fn test_catalog_starts_zeroed() {
    let config = default_configuration();
    assert_eq!(config.len(), 5);
    for tier in config.tiers() {
        assert_eq!(tier.completed_milestones(), 0);
        assert_eq!(tier.total_workouts_completed(), 0.0);
        assert!(!tier.is_completed());
    }
}

#[test]
fn test_foundation_tier_content() {
    let config = default_configuration();
    let foundation = config.tier_by_level(0).unwrap();
    assert_eq!(foundation.name, "Foundation");

    let bronze = foundation.find_milestone(MilestoneType::Bronze).unwrap();
    assert_eq!(bronze.required_workouts, 5);
    assert!(bronze.accepts_workout_type("squats"));
    assert!(!bronze.accepts_workout_type("plank"));

    let silver = foundation.find_milestone(MilestoneType::Silver).unwrap();
    assert!(silver.accepts_workout_type("anything-at-all"));

    let platinum = foundation.find_milestone(MilestoneType::Platinum).unwrap();
    assert_eq!(platinum.benchmark_workouts().len(), 3);
}
