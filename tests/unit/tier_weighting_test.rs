//! Unit tests for blended tier progress.

use tierladder::progression::{
    BenchmarkWorkout, Milestone, MilestoneType, Tier, WorkoutRequirement, BENCHMARK_WEIGHT_PERCENT,
};

fn bench(milestone_type: MilestoneType, required: u32, count: usize) -> Milestone {
    let list = (0..count)
        .map(|i| BenchmarkWorkout::new(&format!("B{}", i), "Benchmark", "running").with_minutes(30))
        .collect();
    Milestone::benchmark(milestone_type, "Bench", required, list)
}

#[test]
fn test_benchmark_weight_constant() {
    assert_eq!(BENCHMARK_WEIGHT_PERCENT, 15);
}

#[test]
fn test_mixed_tier_percentage() {
    let mut cumulative = Milestone::cumulative(
        MilestoneType::Bronze,
        "Runs",
        10,
        vec![WorkoutRequirement::timed("running", 20)],
    );
    cumulative.add_progress(5);
    let mut benchmark = bench(MilestoneType::Platinum, 20, 4);
    benchmark.complete_benchmark(0);
    benchmark.complete_benchmark(3);

    let tier = Tier::new(0, "Mixed", vec![cumulative, benchmark]);

    assert_eq!(tier.total_workouts_needed(), 13);
    assert!((tier.total_workouts_completed() - 6.5).abs() < 1e-9);
    assert!((tier.progress_percent() - 50.0).abs() < 1e-9);
}

#[test]
fn test_benchmark_only_tier() {
    let mut platinum = bench(MilestoneType::Platinum, 40, 2);
    platinum.complete_benchmark(0);
    let tier = Tier::new(0, "Tests", vec![platinum, bench(MilestoneType::Diamond, 60, 3)]);

    // ceil(6.0) + ceil(9.0)
    assert_eq!(tier.total_workouts_needed(), 15);
    assert!((tier.total_workouts_completed() - 3.0).abs() < 1e-9);
    assert!((tier.progress_percent() - 20.0).abs() < 1e-9);
}

#[test]
fn test_completion_is_per_milestone_not_percentage() {
    let mut small = bench(MilestoneType::Platinum, 1, 1);
    small.complete_benchmark(0);
    let mut cumulative = Milestone::cumulative(MilestoneType::Bronze, "Most", 100, Vec::new());
    cumulative.add_progress(99);

    let tier = Tier::new(0, "Almost", vec![cumulative, small]);
    assert!(tier.progress_percent() > 99.0);
    assert!(!tier.is_completed());
    assert_eq!(tier.completed_milestones(), 1);
}

#[test]
fn test_empty_tier() {
    let tier = Tier::new(3, "Empty", Vec::new());
    assert_eq!(tier.progress_percent(), 0.0);
    assert!(tier.is_completed());
}

#[test]
fn test_fresh_copy_keeps_structure() {
    let mut milestone = Milestone::cumulative(MilestoneType::Silver, "Any", 4, Vec::new());
    milestone.add_progress(4);
    let tier = Tier::new(1, "Momentum", vec![milestone, bench(MilestoneType::Diamond, 30, 2)]);

    let copy = tier.fresh_copy();
    assert_eq!(copy.name, tier.name);
    assert_eq!(copy.milestones.len(), 2);
    assert_eq!(copy.completed_milestones(), 0);
    assert_eq!(tier.completed_milestones(), 1);
}
