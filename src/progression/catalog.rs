//! Default tier and milestone definitions.

use super::configuration::TierConfiguration;
use super::milestone::{BenchmarkWorkout, Milestone, MilestoneType, WorkoutRequirement};
use super::tier::Tier;

/// Build a fresh configuration from the default catalog.
pub fn default_configuration() -> TierConfiguration {
    TierConfiguration::from_catalog(default_tiers())
}

/// All tier definitions with zeroed progress.
pub fn default_tiers() -> Vec<Tier> {
    vec![
        foundation_tier(),
        momentum_tier(),
        strength_tier(),
        endurance_tier(),
        elite_tier(),
    ]
}

fn foundation_tier() -> Tier {
    Tier::new(
        0,
        "Foundation",
        vec![
            Milestone::cumulative(
                MilestoneType::Bronze,
                "First Steps",
                5,
                vec![
                    WorkoutRequirement::reps("pushups", 10),
                    WorkoutRequirement::reps("squats", 15),
                    WorkoutRequirement::timed("walking", 20),
                ],
            ),
            Milestone::cumulative(MilestoneType::Silver, "Building the Habit", 10, Vec::new()),
            Milestone::cumulative(
                MilestoneType::Gold,
                "Core Commitment",
                15,
                vec![
                    WorkoutRequirement::timed("plank", 2),
                    WorkoutRequirement::reps("situps", 20),
                ],
            ),
            Milestone::benchmark(
                MilestoneType::Platinum,
                "Foundation Test",
                20,
                vec![
                    BenchmarkWorkout::new(
                        "Push-Up Test",
                        "Complete 20 push-ups without resting",
                        "pushups",
                    )
                    .with_reps(20),
                    BenchmarkWorkout::new("Plank Hold", "Hold a front plank for 2 minutes", "plank")
                        .with_minutes(2),
                    BenchmarkWorkout::new("Mile Walk", "Walk one mile in under 20 minutes", "walking")
                        .with_minutes(20),
                ],
            ),
            Milestone::benchmark(
                MilestoneType::Diamond,
                "Foundation Master",
                30,
                vec![
                    BenchmarkWorkout::new(
                        "Bodyweight Circuit",
                        "Three rounds of 10 push-ups, 15 squats and 20 sit-ups",
                        "circuit",
                    )
                    .with_minutes(15),
                    BenchmarkWorkout::new("5K Walk", "Walk 5 kilometers without stopping", "walking")
                        .with_minutes(60),
                ],
            ),
        ],
    )
}

fn momentum_tier() -> Tier {
    Tier::new(
        1,
        "Momentum",
        vec![
            Milestone::cumulative(
                MilestoneType::Bronze,
                "Keep Moving",
                10,
                vec![
                    WorkoutRequirement::reps("pushups", 20),
                    WorkoutRequirement::reps("lunges", 20),
                    WorkoutRequirement::timed("jogging", 15),
                ],
            ),
            Milestone::cumulative(
                MilestoneType::Silver,
                "Cardio Builder",
                15,
                vec![
                    WorkoutRequirement::timed("jogging", 20),
                    WorkoutRequirement::timed("cycling", 30),
                    WorkoutRequirement::timed("jump_rope", 10),
                ],
            ),
            Milestone::cumulative(MilestoneType::Gold, "Consistency Streak", 20, Vec::new()),
            Milestone::benchmark(
                MilestoneType::Platinum,
                "Momentum Test",
                30,
                vec![
                    BenchmarkWorkout::new("Push-Up Ladder", "40 push-ups in 5 minutes", "pushups")
                        .with_reps(40)
                        .with_minutes(5),
                    BenchmarkWorkout::new("Mile Jog", "Jog one mile without walking", "jogging")
                        .with_minutes(12),
                    BenchmarkWorkout::new("Lunge Set", "50 alternating lunges", "lunges")
                        .with_reps(50),
                ],
            ),
            Milestone::benchmark(
                MilestoneType::Diamond,
                "Momentum Master",
                40,
                vec![
                    BenchmarkWorkout::new("5K Run", "Run 5 kilometers", "jogging").with_minutes(35),
                    BenchmarkWorkout::new(
                        "Jump Rope Marathon",
                        "Jump rope for 10 minutes straight",
                        "jump_rope",
                    )
                    .with_minutes(10),
                ],
            ),
        ],
    )
}

fn strength_tier() -> Tier {
    Tier::new(
        2,
        "Strength",
        vec![
            Milestone::cumulative(
                MilestoneType::Bronze,
                "Iron Start",
                15,
                vec![
                    WorkoutRequirement::reps("pullups", 5),
                    WorkoutRequirement::reps("dips", 10),
                    WorkoutRequirement::reps("squats", 40),
                ],
            ),
            Milestone::cumulative(
                MilestoneType::Silver,
                "Power Sessions",
                20,
                vec![
                    WorkoutRequirement::reps("deadlifts", 10),
                    WorkoutRequirement::reps("burpees", 20),
                ],
            ),
            Milestone::cumulative(
                MilestoneType::Gold,
                "Strength Block",
                25,
                vec![
                    WorkoutRequirement::reps("pullups", 8),
                    WorkoutRequirement::reps("pushups", 40),
                    WorkoutRequirement::reps("deadlifts", 10),
                ],
            ),
            Milestone::benchmark(
                MilestoneType::Platinum,
                "Strength Test",
                40,
                vec![
                    BenchmarkWorkout::new("Pull-Up Max", "10 strict pull-ups", "pullups")
                        .with_reps(10),
                    BenchmarkWorkout::new("Burpee Blitz", "50 burpees in 5 minutes", "burpees")
                        .with_reps(50)
                        .with_minutes(5),
                    BenchmarkWorkout::new("Dip Set", "25 parallel bar dips", "dips").with_reps(25),
                ],
            ),
            Milestone::benchmark(
                MilestoneType::Diamond,
                "Strength Master",
                50,
                vec![
                    BenchmarkWorkout::new(
                        "Century Push-Ups",
                        "100 push-ups in under 10 minutes",
                        "pushups",
                    )
                    .with_reps(100)
                    .with_minutes(10),
                    BenchmarkWorkout::new(
                        "Bodyweight Deadlift",
                        "Deadlift your bodyweight for 10 reps",
                        "deadlifts",
                    )
                    .with_reps(10),
                ],
            ),
        ],
    )
}

fn endurance_tier() -> Tier {
    Tier::new(
        3,
        "Endurance",
        vec![
            Milestone::cumulative(
                MilestoneType::Bronze,
                "Long Haul",
                20,
                vec![
                    WorkoutRequirement::timed("running", 30),
                    WorkoutRequirement::timed("cycling", 45),
                    WorkoutRequirement::timed("swimming", 30),
                ],
            ),
            Milestone::cumulative(MilestoneType::Silver, "Any Mile Counts", 25, Vec::new()),
            Milestone::cumulative(
                MilestoneType::Gold,
                "Aerobic Engine",
                30,
                vec![
                    WorkoutRequirement::timed("running", 45),
                    WorkoutRequirement::timed("rowing", 30),
                ],
            ),
            Milestone::benchmark(
                MilestoneType::Platinum,
                "Endurance Test",
                50,
                vec![
                    BenchmarkWorkout::new("10K Run", "Run 10 kilometers", "running")
                        .with_minutes(70),
                    BenchmarkWorkout::new("Swim Mile", "Swim 1600 meters", "swimming")
                        .with_minutes(50),
                    BenchmarkWorkout::new("Row 5K", "Row 5000 meters", "rowing").with_minutes(25),
                ],
            ),
            Milestone::benchmark(
                MilestoneType::Diamond,
                "Endurance Master",
                60,
                vec![
                    BenchmarkWorkout::new("Half Marathon", "Run 21.1 kilometers", "running")
                        .with_minutes(150),
                    BenchmarkWorkout::new("Century Ride", "Cycle 100 kilometers", "cycling")
                        .with_minutes(300),
                ],
            ),
        ],
    )
}

fn elite_tier() -> Tier {
    Tier::new(
        4,
        "Elite",
        vec![
            Milestone::cumulative(
                MilestoneType::Bronze,
                "Elite Conditioning",
                25,
                vec![
                    WorkoutRequirement::reps("burpees", 50),
                    WorkoutRequirement::reps("pullups", 15),
                    WorkoutRequirement::timed("running", 45),
                ],
            ),
            Milestone::cumulative(
                MilestoneType::Silver,
                "Hybrid Training",
                30,
                vec![
                    WorkoutRequirement::timed("circuit", 40),
                    WorkoutRequirement::timed("swimming", 45),
                ],
            ),
            Milestone::cumulative(MilestoneType::Gold, "Relentless", 40, Vec::new()),
            Milestone::benchmark(
                MilestoneType::Platinum,
                "Elite Test",
                60,
                vec![
                    BenchmarkWorkout::new("Murph", "1 mile run, 100 pull-ups, 200 push-ups, 300 squats, 1 mile run", "circuit")
                        .with_minutes(60),
                    BenchmarkWorkout::new("Pull-Up Century", "100 pull-ups in one session", "pullups")
                        .with_reps(100),
                    BenchmarkWorkout::new("Sub-45 10K", "Run 10 kilometers in under 45 minutes", "running")
                        .with_minutes(45),
                ],
            ),
            Milestone::benchmark(
                MilestoneType::Diamond,
                "Legend",
                80,
                vec![
                    BenchmarkWorkout::new("Marathon", "Run 42.2 kilometers", "running")
                        .with_minutes(300),
                    BenchmarkWorkout::new(
                        "Thousand Rep Day",
                        "1000 bodyweight reps in one session",
                        "circuit",
                    )
                    .with_reps(1000),
                ],
            ),
        ],
    )
}
