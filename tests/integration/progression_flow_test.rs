//! Integration tests for progression through tiers.

use tierladder::progression::{
    BenchmarkEvent, MilestoneType, ProgressionEngine, ProgressionError, TierAdvancement,
    TierConfiguration, WorkoutEvent, DEFAULT_RECORD_KEY,
};
use tierladder::storage::{MemoryAthlete, MemoryStore, ProgressStore, StoreError};

use crate::support::{accepted_type, complete_tier, FlakyStore};

fn fresh_engine() -> ProgressionEngine<MemoryStore, MemoryAthlete> {
    ProgressionEngine::load(MemoryStore::new(), MemoryAthlete::default(), DEFAULT_RECORD_KEY)
        .expect("engine loads")
}

#[test]
fn test_finishing_a_tier_levels_up() {
    let mut engine = fresh_engine();

    let report = complete_tier(&mut engine, 0);

    assert!(report.milestone.just_completed);
    assert!(report.leveled_up());
    assert_eq!(
        report.advancement,
        Some(TierAdvancement::LeveledUp {
            level: 1,
            name: "Momentum".to_string(),
        })
    );
    assert_eq!(engine.current_tier_level().unwrap(), 1);

    let summary = engine.tier_progress_summary().unwrap();
    assert_eq!(summary.level, 1);
    assert_eq!(summary.completed_milestones, 0);
    assert_eq!(summary.progress_percent, 0.0);
}

#[test]
fn test_level_up_is_persisted() {
    let mut engine = fresh_engine();
    complete_tier(&mut engine, 0);

    let (store, athlete, config) = engine.into_parts();
    let record = store.get(DEFAULT_RECORD_KEY).unwrap().unwrap();
    let saved = TierConfiguration::from_record(record).unwrap();
    assert_eq!(saved, config);
    assert!(saved.tier_by_level(0).unwrap().is_completed());

    let reloaded = ProgressionEngine::load(store, athlete, DEFAULT_RECORD_KEY).unwrap();
    assert_eq!(reloaded.current_tier_level().unwrap(), 1);
    assert_eq!(reloaded.configuration(), &config);
}

#[test]
fn test_earlier_tier_cannot_reset_later_tier() {
    let mut engine = fresh_engine();
    complete_tier(&mut engine, 0);

    let momentum_bronze = WorkoutEvent::new("pushups", MilestoneType::Bronze, 1);
    engine.log_workout(&momentum_bronze).unwrap();
    engine.log_workout(&momentum_bronze).unwrap();

    // tier 0 is already complete; further events must not re-trigger advancement
    let extra = engine
        .log_workout(&WorkoutEvent::new("squats", MilestoneType::Bronze, 0))
        .unwrap();
    assert!(extra.advancement.is_none());
    assert!(!extra.milestone.just_completed);

    let summary = engine.tier_progress_summary().unwrap();
    assert_eq!(summary.level, 1);
    let bronze = summary
        .milestones
        .iter()
        .find(|m| m.milestone_type == MilestoneType::Bronze)
        .unwrap();
    assert_eq!(bronze.progress, 2);
    assert_eq!(engine.current_tier_level().unwrap(), 1);
}

#[test]
fn test_final_tier_reports_max() {
    let mut engine = fresh_engine();
    let last = engine.configuration().len() - 1;
    for level in 0..last {
        assert!(complete_tier(&mut engine, level).leveled_up());
    }

    let report = complete_tier(&mut engine, last);

    assert_eq!(report.advancement, Some(TierAdvancement::MaxTierReached));
    assert_eq!(engine.current_tier_level().unwrap(), last);
    assert!(engine.tier_progress_summary().unwrap().is_completed);
}

#[test]
fn test_benchmark_finishing_tier_levels_up() {
    let mut engine = fresh_engine();
    let tier = engine.configuration().tier_by_level(0).unwrap().clone();

    // everything except the diamond benchmarks
    for milestone in &tier.milestones {
        match milestone.milestone_type {
            MilestoneType::Diamond => continue,
            MilestoneType::Platinum => {
                for i in 0..milestone.benchmark_workouts().len() {
                    engine
                        .complete_benchmark(&BenchmarkEvent::new(MilestoneType::Platinum, 0, i))
                        .unwrap();
                }
            }
            _ => {
                let types: Vec<String> = milestone
                    .workout_requirements
                    .iter()
                    .map(|r| r.workout_type.clone())
                    .collect();
                let workout_type = accepted_type(&types);
                for _ in 0..milestone.required_workouts {
                    engine
                        .log_workout(&WorkoutEvent::new(&workout_type, milestone.milestone_type, 0))
                        .unwrap();
                }
            }
        }
    }

    let diamond_count = tier
        .find_milestone(MilestoneType::Diamond)
        .unwrap()
        .benchmark_workouts()
        .len();
    for i in 0..diamond_count - 1 {
        let report = engine
            .complete_benchmark(&BenchmarkEvent::new(MilestoneType::Diamond, 0, i))
            .unwrap();
        assert!(report.advancement.is_none());
    }

    // repeating a finished benchmark changes nothing
    let repeat = engine
        .complete_benchmark(&BenchmarkEvent::new(MilestoneType::Diamond, 0, 0))
        .unwrap();
    assert!(repeat.advancement.is_none());
    assert!(!repeat.milestone.just_completed);
    assert_eq!(repeat.milestone.progress, (diamond_count - 1) as u32);

    let report = engine
        .complete_benchmark(&BenchmarkEvent::new(MilestoneType::Diamond, 0, diamond_count - 1))
        .unwrap();
    assert!(report.milestone.just_completed);
    assert!(report.leveled_up());
    assert_eq!(engine.current_tier_level().unwrap(), 1);
}

#[test]
fn test_reset_all_progress() {
    let mut engine = fresh_engine();
    complete_tier(&mut engine, 0);
    engine
        .log_workout(&WorkoutEvent::new("pushups", MilestoneType::Bronze, 1))
        .unwrap();

    engine.reset_all_progress().unwrap();

    assert_eq!(engine.current_tier_level().unwrap(), 0);
    assert_eq!(engine.configuration(), &TierConfiguration::default());
    let record = engine.store().get(DEFAULT_RECORD_KEY).unwrap().unwrap();
    assert_eq!(
        TierConfiguration::from_record(record).unwrap(),
        TierConfiguration::default()
    );
}

#[test]
fn test_storage_failure_propagates() {
    let engine =
        ProgressionEngine::load(FlakyStore::default(), MemoryAthlete::default(), DEFAULT_RECORD_KEY)
            .unwrap();
    let (mut store, athlete, config) = engine.into_parts();
    let saved_before = store.record.clone();
    assert!(saved_before.is_some());

    store.fail_writes = true;
    let mut engine =
        ProgressionEngine::with_configuration(store, athlete, DEFAULT_RECORD_KEY, config);

    let err = engine
        .log_workout(&WorkoutEvent::new("pushups", MilestoneType::Bronze, 0))
        .unwrap_err();

    assert!(matches!(
        &err,
        ProgressionError::Persistence(StoreError::Unavailable(msg)) if msg == "disk full"
    ));
    assert!(!err.is_rejection());
    assert_eq!(engine.store().record, saved_before);
}

#[test]
fn test_corrupt_record_fails_load() {
    let store = FlakyStore {
        record: Some(serde_json::json!({ "tiers": 7 })),
        fail_writes: false,
    };

    let result = ProgressionEngine::load(store, MemoryAthlete::default(), DEFAULT_RECORD_KEY);
    assert!(matches!(result, Err(ProgressionError::CorruptRecord(_))));
}
