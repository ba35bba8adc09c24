mod add;
mod fetch;

pub use add::*;
pub use fetch::*;

use actix_web::error::JsonPayloadError;
use actix_web::{http, HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::domain::workouts::WorkoutRejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Error,
}

/// Body of every add-workout answer, `{"status": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutReply {
    pub status: ReplyStatus,
    pub message: String,
}

impl WorkoutReply {
    pub fn success(message: String) -> Self {
        Self {
            status: ReplyStatus::Success,
            message,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: ReplyStatus::Error,
            message,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum WorkoutsError {
    #[error(transparent)]
    Rejected(#[from] WorkoutRejection),
    #[error("Request body must be a JSON object.")]
    MalformedPayload,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for WorkoutsError {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::UnexpectedError(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::UnexpectedError(_) => "Internal server error.".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(WorkoutReply::error(message))
    }
}

/// Turns extractor failures (bad JSON, wrong content type, oversized body)
/// into the same error envelope the handlers use.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected workout payload: {err}");
    WorkoutsError::MalformedPayload.into()
}
