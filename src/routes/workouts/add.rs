use actix_web::{web, HttpResponse};
use anyhow::Context;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::components::workout_log::WorkoutLog;
use crate::domain::workouts::Workout;

use super::{WorkoutReply, WorkoutsError};

/// Raw add-workout body. Fields are kept loose so `"30"` and `30` both count as a duration.
///
/// An absent field is `None`, an explicit `null` is `Some(Value::Null)`.
#[derive(Debug, Deserialize)]
pub struct AddWorkoutPayload {
    #[serde(default, deserialize_with = "present")]
    pub workout: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub duration: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// `null`, `false`, zero and empty strings, arrays or objects.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

impl AddWorkoutPayload {
    /// Blank values read as empty, anything else as its text.
    fn workout_text(&self) -> String {
        match &self.workout {
            None => String::new(),
            Some(value) if is_blank(value) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(true)) => "True".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Only an absent field is empty; `null` renders as non-numeric text.
    fn duration_text(&self) -> String {
        match &self.duration {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[tracing::instrument(name = "Add workout", skip(workout_log, payload))]
pub async fn add_workout(
    workout_log: web::Data<WorkoutLog>,
    payload: web::Json<AddWorkoutPayload>,
) -> Result<HttpResponse, WorkoutsError> {
    let payload = payload.into_inner();
    let workout = payload.workout_text();
    let duration = payload.duration_text();

    let workout = Workout::parse(&workout, &duration)
        .inspect_err(|e| tracing::info!("Workout rejected: {e}"))?;
    let message = workout.added_message();

    tracing::info!(target: "Adding workout", ?workout);

    let total = workout_log
        .record(workout)
        .context("Failed to record workout")
        .inspect_err(|e| tracing::error!("{e:?}"))?;

    tracing::info!(total, "Workout recorded");

    Ok(HttpResponse::Created().json(WorkoutReply::success(message)))
}
