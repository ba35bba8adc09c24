use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::components::workout_log::WorkoutLog;

use super::WorkoutsError;

#[tracing::instrument(name = "Get all workouts", skip(workout_log))]
pub async fn get_workouts(
    workout_log: web::Data<WorkoutLog>,
) -> Result<HttpResponse, WorkoutsError> {
    let summary = workout_log
        .summary()
        .context("Failed to read workout log")
        .inspect_err(|e| tracing::error!("{e:?}"))?;

    tracing::info!(total = summary.total_workouts, "Listing workouts");

    Ok(HttpResponse::Ok().json(summary))
}
