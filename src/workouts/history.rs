//! Workout log persistence.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::progression::MilestoneType;
use crate::storage::database::DatabaseError;
use crate::workouts::types::WorkoutRecord;

/// Append-only log of accepted workouts.
pub struct WorkoutHistory<'a> {
    conn: &'a Connection,
}

impl<'a> WorkoutHistory<'a> {
    /// Create a workout history with the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Append a workout.
    pub fn record(&self, workout: &WorkoutRecord) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO workout_log (id, workout_type, reps, time_minutes, tier_level,
                                          milestone_type, completed_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    workout.id.to_string(),
                    workout.workout_type,
                    workout.reps,
                    workout.time_minutes,
                    workout.tier_level as i64,
                    workout.milestone_type.to_string(),
                    workout.completed_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(())
    }

    /// Most recent workouts, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<WorkoutRecord>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, workout_type, reps, time_minutes, tier_level, milestone_type, completed_at
                 FROM workout_log ORDER BY completed_at DESC LIMIT ?1",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(WorkoutRow {
                    id: row.get(0)?,
                    workout_type: row.get(1)?,
                    reps: row.get(2)?,
                    time_minutes: row.get(3)?,
                    tier_level: row.get(4)?,
                    milestone_type: row.get(5)?,
                    completed_at: row.get(6)?,
                })
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut workouts = Vec::new();
        for row in rows {
            let r = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            workouts.push(row_to_record(r)?);
        }

        Ok(workouts)
    }

    /// Number of logged workouts.
    pub fn count(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM workout_log", [], |row| row.get(0))
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(count.max(0) as usize)
    }
}

fn row_to_record(r: WorkoutRow) -> Result<WorkoutRecord, DatabaseError> {
    Ok(WorkoutRecord {
        id: Uuid::parse_str(&r.id).map_err(|e| DatabaseError::DeserializationError(e.to_string()))?,
        workout_type: r.workout_type,
        reps: r.reps,
        time_minutes: r.time_minutes,
        tier_level: usize::try_from(r.tier_level)
            .map_err(|e| DatabaseError::DeserializationError(e.to_string()))?,
        milestone_type: r
            .milestone_type
            .parse::<MilestoneType>()
            .map_err(DatabaseError::DeserializationError)?,
        completed_at: DateTime::parse_from_rfc3339(&r.completed_at)
            .map_err(|e| DatabaseError::DeserializationError(e.to_string()))?
            .with_timezone(&Utc),
    })
}

/// Helper struct for row data.
struct WorkoutRow {
    id: String,
    workout_type: String,
    reps: Option<u32>,
    time_minutes: Option<u32>,
    tier_level: i64,
    milestone_type: String,
    completed_at: String,
}
