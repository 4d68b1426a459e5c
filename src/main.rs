//! TierLadder - Tiered Fitness Milestone Progression
//!
//! Command-line entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tierladder::progression::{
    BenchmarkEvent, MilestoneSummary, MilestoneType, ProgressReport, ProgressionEngine,
    TierAdvancement,
};
use tierladder::storage::{config, AthleteStore, Database, RecordStore};
use tierladder::workouts::{WorkoutHistory, WorkoutRecord};

#[derive(Parser)]
#[command(
    name = "tierladder",
    version,
    about = "Tiered fitness milestone progression",
    long_about = "Log workouts and benchmarks against tiered milestones and track progress toward the next tier."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file override
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Log an ordinary workout toward a cumulative milestone
    Log {
        /// Tier level
        #[arg(long)]
        tier: usize,

        /// Milestone (bronze, silver, gold, platinum, diamond)
        #[arg(long)]
        milestone: MilestoneType,

        /// Workout type key, e.g. "pushups"
        #[arg(long)]
        workout_type: String,

        /// Repetitions performed
        #[arg(long)]
        reps: Option<u32>,

        /// Duration in minutes
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Mark a benchmark workout as finished
    Benchmark {
        /// Tier level
        #[arg(long)]
        tier: usize,

        /// Milestone (bronze, silver, gold, platinum, diamond)
        #[arg(long)]
        milestone: MilestoneType,

        /// Benchmark index within the milestone
        #[arg(long)]
        index: usize,
    },

    /// Show progress on the current tier
    Summary,

    /// List the current tier's milestones, incomplete first
    Milestones,

    /// Show recently logged workouts
    History {
        /// Maximum number of workouts to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Discard all progress and return to the first tier
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&app_config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting TierLadder v{}", env!("CARGO_PKG_VERSION"));

    let db_path = app_config.database_path();
    let db = Database::open(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let mut engine = ProgressionEngine::load(
        RecordStore::new(db.connection()),
        AthleteStore::new(db.connection()),
        &app_config.storage.record_key,
    )
    .context("Failed to load progression state")?;

    match cli.command {
        Command::Log {
            tier,
            milestone,
            workout_type,
            reps,
            minutes,
        } => {
            let mut record = WorkoutRecord::new(&workout_type, tier, milestone);
            if let Some(reps) = reps {
                record = record.with_reps(reps);
            }
            if let Some(minutes) = minutes {
                record = record.with_minutes(minutes);
            }

            let report = engine.log_workout(&record.to_event())?;
            WorkoutHistory::new(db.connection())
                .record(&record)
                .context("Failed to record workout history")?;
            print_report(&report);
        }
        Command::Benchmark {
            tier,
            milestone,
            index,
        } => {
            let report = engine.complete_benchmark(&BenchmarkEvent::new(milestone, tier, index))?;
            print_report(&report);
        }
        Command::Summary => {
            let summary = engine.tier_progress_summary()?;
            println!(
                "Tier {} of {}: {} ({:.1}%)",
                summary.level + 1,
                summary.total_tiers,
                summary.name,
                summary.progress_percent
            );
            println!(
                "Milestones {}/{}, workouts {:.1}/{}",
                summary.completed_milestones,
                summary.total_milestones,
                summary.total_workouts_completed,
                summary.total_workouts_needed
            );
            for milestone in &summary.milestones {
                print_milestone(milestone);
            }
        }
        Command::Milestones => {
            for milestone in engine.available_milestones()? {
                print_milestone(&milestone);
            }
        }
        Command::History { limit } => {
            let workouts = WorkoutHistory::new(db.connection()).recent(limit)?;
            if workouts.is_empty() {
                println!("No workouts logged yet");
            }
            for workout in workouts {
                let mut line = format!(
                    "{}  {:<12} tier {} {}",
                    workout.completed_at.format("%Y-%m-%d %H:%M"),
                    workout.workout_type,
                    workout.tier_level,
                    workout.milestone_type
                );
                if let Some(reps) = workout.reps {
                    line.push_str(&format!("  {} reps", reps));
                }
                if let Some(minutes) = workout.time_minutes {
                    line.push_str(&format!("  {} min", minutes));
                }
                println!("{}", line);
            }
        }
        Command::Reset => {
            engine.reset_all_progress()?;
            println!("All progress reset");
        }
    }

    Ok(())
}

fn print_report(report: &ProgressReport) {
    let m = &report.milestone;
    println!("{}: {}/{}", m.milestone_name, m.progress, m.required);
    if m.just_completed {
        println!("Milestone complete: {}", m.milestone_name);
    }
    match &report.advancement {
        Some(TierAdvancement::LeveledUp { level, name }) => {
            println!("Level up! Now on tier {}: {}", level + 1, name);
        }
        Some(TierAdvancement::MaxTierReached) => {
            println!("Final tier complete");
        }
        None => {}
    }
}

fn print_milestone(milestone: &MilestoneSummary) {
    let mark = if milestone.is_completed { "x" } else { " " };
    println!(
        "[{}] {:<8} {:<24} {}/{} ({:.0}%)",
        mark,
        milestone.milestone_type.display_name(),
        milestone.name,
        milestone.progress,
        milestone.required,
        milestone.progress_percent
    );
    if milestone.accepted_workout_types.is_empty() && !milestone.uses_benchmarks {
        println!("      accepts any workout type");
    } else if !milestone.accepted_workout_types.is_empty() {
        println!("      accepts: {}", milestone.accepted_workout_types.join(", "));
    }
    for (i, (name, done)) in milestone.benchmarks.iter().enumerate() {
        println!("      {} {}. {}", if *done { "x" } else { "-" }, i, name);
    }
}
