//! Unit tests for the persisted configuration record.

use serde_json::json;
use tierladder::progression::{MilestoneType, TierConfiguration};

fn played() -> TierConfiguration {
    let mut config = TierConfiguration::default();
    let tier = config.tier_by_level_mut(1).unwrap();
    tier.find_milestone_mut(MilestoneType::Silver)
        .unwrap()
        .add_progress(4);
    tier.find_milestone_mut(MilestoneType::Diamond)
        .unwrap()
        .complete_benchmark(0);
    config
}

#[test]
fn test_record_layout() {
    let record = played().to_record().unwrap();

    assert_eq!(record["version"], json!(1));
    let silver = &record["tiers"][1]["milestones"][1];
    assert_eq!(silver["type"], json!("silver"));
    assert_eq!(silver["progress"], json!(4));

    let diamond = &record["tiers"][1]["milestones"][4];
    assert_eq!(diamond["type"], json!("diamond"));
    assert_eq!(diamond["benchmarks_completed"], json!([0]));
}

#[test]
fn test_record_rebuilds_identical_configuration() {
    let config = played();
    let rebuilt = TierConfiguration::from_record(config.to_record().unwrap()).unwrap();
    assert_eq!(rebuilt, config);
}

#[test]
fn test_restore_onto_repairs_bad_values() {
    let mut record = played().to_record().unwrap();
    record["tiers"][1]["milestones"][1]["progress"] = json!(10_000);
    record["tiers"][1]["milestones"][4]["benchmarks_completed"] = json!([0, 99]);

    let snapshot = TierConfiguration::snapshot_from_record(record).unwrap();
    let mut config = TierConfiguration::default();
    config.restore_onto(&snapshot);

    let tier = config.tier_by_level(1).unwrap();
    let silver = tier.find_milestone(MilestoneType::Silver).unwrap();
    assert_eq!(silver.progress(), silver.required_workouts);

    let diamond = tier.find_milestone(MilestoneType::Diamond).unwrap();
    assert_eq!(diamond.benchmarks_completed(), vec![0]);
}

#[test]
fn test_restore_onto_skips_unknown_entries() {
    let record = json!({
        "tiers": [
            {
                "level": 0,
                "name": "Foundation",
                "milestones": [
                    { "type": "bronze", "name": "First Steps", "required_workouts": 5, "progress": 2 }
                ]
            },
            { "level": 42, "name": "Ghost", "milestones": [] }
        ]
    });

    let snapshot = TierConfiguration::snapshot_from_record(record).unwrap();
    let mut config = TierConfiguration::default();
    config.restore_onto(&snapshot);

    let bronze = config
        .tier_by_level(0)
        .unwrap()
        .find_milestone(MilestoneType::Bronze)
        .unwrap();
    assert_eq!(bronze.progress(), 2);
    assert_eq!(config.len(), 5);
}

#[test]
fn test_malformed_record_is_corrupt() {
    let result = TierConfiguration::snapshot_from_record(json!({ "tiers": "nope" }));
    assert!(matches!(
        result,
        Err(tierladder::ProgressionError::CorruptRecord(_))
    ));
}

#[test]
fn test_record_with_max_requirements_keeps_weighting_sane() {
    let mut record = TierConfiguration::default().to_record().unwrap();
    record["tiers"][0]["milestones"][0]["required_workouts"] = json!(u32::MAX);
    record["tiers"][0]["milestones"][1]["required_workouts"] = json!(u32::MAX);
    record["tiers"][0]["milestones"][3]["required_workouts"] = json!(u32::MAX);

    let config = TierConfiguration::from_record(record).unwrap();
    let tier = config.tier_by_level(0).unwrap();

    assert!(tier.total_workouts_needed() > u64::from(u32::MAX) * 2);
    assert_eq!(tier.progress_percent(), 0.0);
}
