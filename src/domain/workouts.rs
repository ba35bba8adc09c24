use serde::{Deserialize, Serialize};

/// Why a workout was refused. The `Display` text is what the client sees.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutRejection {
    #[error("Please enter both workout and duration.")]
    MissingField,
    #[error("Duration must be a number.")]
    DurationNotANumber,
    #[error("Duration must be a positive number.")]
    DurationNotPositive,
}

/// A logged workout, serialized as `{"workout": "...", "duration": N}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub workout: String,
    pub duration: i64,
}

/// Duration in minutes, always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutDuration(i64);

impl WorkoutDuration {
    pub fn minutes(&self) -> i64 {
        self.0
    }
}

impl TryFrom<&str> for WorkoutDuration {
    type Error = WorkoutRejection;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let minutes: i64 = raw
            .trim()
            .parse()
            .map_err(|_| WorkoutRejection::DurationNotANumber)?;

        if minutes <= 0 {
            return Err(WorkoutRejection::DurationNotPositive);
        }

        Ok(Self(minutes))
    }
}

impl Workout {
    /// Validate the two raw inputs of the add-workout form.
    ///
    /// Checks run in a fixed order: both present, duration numeric, duration positive.
    pub fn parse(workout: &str, duration: &str) -> Result<Self, WorkoutRejection> {
        if workout.is_empty() || duration.is_empty() {
            return Err(WorkoutRejection::MissingField);
        }

        let duration = WorkoutDuration::try_from(duration)?;

        Ok(Self {
            workout: workout.to_string(),
            duration: duration.minutes(),
        })
    }

    pub fn added_message(&self) -> String {
        format!("'{}' added successfully!", self.workout)
    }
}
