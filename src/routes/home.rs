use actix_web::{web, HttpResponse};

use crate::startup::engine::AppVersion;

#[tracing::instrument(name = "Home", skip(version))]
pub async fn home(version: web::Data<AppVersion>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(welcome_message(&version.0))
}

pub fn welcome_message(version: &str) -> String {
    format!("Welcome to ACEest Fitness & Gym! Application Version: {version}")
}
