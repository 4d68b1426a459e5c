//! Unit tests for milestone accounting.

use tierladder::progression::{
    BenchmarkWorkout, Milestone, MilestoneMode, MilestoneType, WorkoutRequirement,
};

fn benchmark_list(count: usize) -> Vec<BenchmarkWorkout> {
    (0..count)
        .map(|i| BenchmarkWorkout::new(&format!("Test {}", i), "Max effort", "burpees").with_reps(30))
        .collect()
}

#[test]
fn test_progress_never_exceeds_required() {
    let mut milestone = Milestone::cumulative(
        MilestoneType::Gold,
        "Core Work",
        3,
        vec![WorkoutRequirement::timed("plank", 2)],
    );

    assert!(!milestone.add_progress(2));
    assert!(milestone.add_progress(5));
    assert_eq!(milestone.progress(), 3);

    // already complete, still clamped
    milestone.add_progress(1);
    assert_eq!(milestone.progress(), 3);
    assert!(milestone.is_completed());
}

#[test]
fn test_zero_requirement_is_immediately_complete() {
    let milestone = Milestone::cumulative(MilestoneType::Bronze, "Free", 0, Vec::new());
    assert!(milestone.is_completed());
    assert_eq!(milestone.progress_percent(), 0.0);
}

#[test]
fn test_workout_type_matching_is_exact() {
    let milestone = Milestone::cumulative(
        MilestoneType::Bronze,
        "Legs",
        5,
        vec![WorkoutRequirement::reps("squats", 15)],
    );
    assert!(milestone.accepts_workout_type("squats"));
    assert!(!milestone.accepts_workout_type("Squats"));
    assert!(!milestone.accepts_workout_type("squat"));
}

#[test]
fn test_benchmark_completion_is_a_set() {
    let mut milestone = Milestone::benchmark(MilestoneType::Diamond, "Master", 30, benchmark_list(2));

    assert!(milestone.complete_benchmark(1));
    assert!(milestone.complete_benchmark(1));
    assert!(!milestone.complete_benchmark(5));
    assert_eq!(milestone.benchmarks_completed(), vec![1]);
    assert!(!milestone.is_completed());

    milestone.complete_benchmark(0);
    assert!(milestone.is_completed());
    assert_eq!(milestone.progress_percent(), 100.0);
}

#[test]
fn test_benchmark_progress_ignores_workout_counts() {
    let mut milestone = Milestone::benchmark(MilestoneType::Platinum, "Test", 20, benchmark_list(3));

    milestone.add_progress(20);

    assert_eq!(milestone.progress(), 0);
    assert_eq!(milestone.current_count(), 0);
    assert_eq!(milestone.target_count(), 3);
    assert!(!milestone.is_completed());
}

#[test]
fn test_mode_follows_benchmark_list() {
    let with = Milestone::from_parts(MilestoneType::Platinum, "A", 20, Vec::new(), benchmark_list(1));
    let without = Milestone::from_parts(MilestoneType::Platinum, "B", 20, Vec::new(), Vec::new());

    assert!(matches!(with.mode(), MilestoneMode::Benchmark { .. }));
    assert!(matches!(without.mode(), MilestoneMode::Cumulative { progress: 0 }));
}

#[test]
fn test_reset_clears_both_modes() {
    let mut cumulative = Milestone::cumulative(MilestoneType::Silver, "Any", 4, Vec::new());
    cumulative.add_progress(4);
    cumulative.reset();
    assert_eq!(cumulative.progress(), 0);

    let mut benchmark = Milestone::benchmark(MilestoneType::Diamond, "Bench", 30, benchmark_list(2));
    benchmark.complete_benchmark(0);
    benchmark.reset();
    assert!(benchmark.benchmarks_completed().is_empty());
}
