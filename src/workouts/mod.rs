//! Workout log: accepted workouts and their history.

pub mod history;
pub mod types;

pub use history::WorkoutHistory;
pub use types::WorkoutRecord;
