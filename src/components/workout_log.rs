use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use std::sync::RwLock;

use crate::domain::workouts::Workout;

/// Snapshot of the log as served by `GET /api/workouts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub total_workouts: usize,
    pub workouts: Vec<Workout>,
}

/// Unbounded, process-lifetime list of workouts in insertion order.
#[derive(Debug, Default)]
pub struct WorkoutLog {
    entries: RwLock<Vec<Workout>>,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a workout, returning how many are logged afterwards.
    pub fn record(&self, workout: Workout) -> Result<usize> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow!("workout log lock is poisoned"))?;
        entries.push(workout);
        Ok(entries.len())
    }

    pub fn summary(&self) -> Result<WorkoutSummary> {
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow!("workout log lock is poisoned"))?;

        Ok(WorkoutSummary {
            total_workouts: entries.len(),
            workouts: entries.clone(),
        })
    }
}
