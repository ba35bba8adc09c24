use actix_web::{web, HttpResponse};

use crate::startup::engine::AppVersion;

/// Liveness and readiness probe. Answers as long as the server is accepting requests.
#[tracing::instrument(name = "Health Check", skip(version))]
pub async fn health_check(version: web::Data<AppVersion>) -> HttpResponse {
    tracing::info!("Health check request confirmed");
    HttpResponse::Ok().json(serde_json::json!({
        "status": "UP",
        "version": version.0,
    }))
}
